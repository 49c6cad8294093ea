//! The JSON DFA encoding described in the specification's external
//! interfaces section: `{states, alphabet, initial, accept, transitions}`,
//! with `transitions` entries shaped `{start, end, input}`.

use crate::error::Error;
use autoregex::dfa::{build_dfa, Dfa};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DfaJson {
    states: usize,
    alphabet: Vec<String>,
    initial: usize,
    accept: Vec<usize>,
    transitions: Vec<TransitionJson>,
}

#[derive(Debug, Deserialize)]
struct TransitionJson {
    start: usize,
    end: usize,
    input: String,
}

impl DfaJson {
    /// Parses the JSON encoding and builds a validated [Dfa] from it.
    pub fn parse(json: &str) -> Result<Dfa, Error> {
        let raw: DfaJson = serde_json::from_str(json)?;
        raw.into_dfa()
    }

    fn into_dfa(self) -> Result<Dfa, Error> {
        let alphabet = self
            .alphabet
            .into_iter()
            .map(single_char)
            .collect::<Result<Vec<char>, _>>()?;

        let transitions = self
            .transitions
            .into_iter()
            .map(|t| Ok((t.start, single_char(t.input)?, t.end)))
            .collect::<Result<Vec<(usize, char, usize)>, Error>>()?;

        Ok(build_dfa(self.states, alphabet, self.initial, self.accept, transitions)?)
    }
}

fn single_char(s: String) -> Result<char, Error> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::NonSingleCharacterSymbol(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_spec_encoding() {
        let json = r#"{
            "states": 2,
            "alphabet": ["a", "b"],
            "initial": 1,
            "accept": [2],
            "transitions": [
                {"start": 1, "input": "a", "end": 2},
                {"start": 1, "input": "b", "end": 2},
                {"start": 2, "input": "a", "end": 2},
                {"start": 2, "input": "b", "end": 2}
            ]
        }"#;
        let dfa = DfaJson::parse(json).unwrap();
        assert_eq!(dfa.is_accepted("ab"), Ok(true));
    }

    #[test]
    fn rejects_multi_character_symbol() {
        let json = r#"{
            "states": 1, "alphabet": ["ab"], "initial": 1, "accept": [1], "transitions": []
        }"#;
        assert!(matches!(
            DfaJson::parse(json),
            Err(Error::NonSingleCharacterSymbol(_))
        ));
    }
}
