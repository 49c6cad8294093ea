//! # DFA transition-table text format
//!
//! An optional, human-writable convenience layered over
//! [build_dfa](crate::dfa::build_dfa) — not a replacement for it, since the
//! programmatic entry point remains the one described for external
//! collaborators. States are numbered `1..=N` in declaration order; the
//! row label is a free-form name used only to cross-reference transitions
//! within the table, and is discarded once the table is resolved.
//!
//! The file is UTF-8 text consisting of:
//! - one header line: whitespace-separated single-character alphabet symbols
//! - one line per state, in this order: `->` or `→` to mark the initial
//!   state (exactly one state must have it), `*` to mark an accepting
//!   state, the state's row label, then one target-state label per
//!   alphabet symbol (in header order)
//!
//! Blank lines and `#`-comments are ignored.
//!
//! ```text
//!        a  b
//!     →* s0 s1 s0
//!        s1 s1 s1
//! ```
//! accepts the language `a*`.

mod fa;

use crate::dfa::parse::DfaBuildError;
use crate::dfa::{build_dfa, Dfa};
use fa::ParsedDfa;
use nom::combinator::all_consuming;
use nom::Finish;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DfaTableError {
    #[error("could not parse DFA table: {0}")]
    Syntax(String),
    #[error("alphabet symbol '{0}' is not a single character")]
    NonSingleCharacterSymbol(String),
    #[error("state '{0}' defined multiple times")]
    DuplicateStateDefinition(String),
    #[error("state '{0}' does not exist (in a transition from state '{1}')")]
    TransitionDoesNotExist(String, String),
    #[error("state '{0}' has {1} transitions, expected {2}")]
    WrongNumberOfTransitions(String, usize, usize),
    #[error("there is no initial state")]
    MissingInitialState,
    #[error("there are two (or more) initial states")]
    MultipleInitialStates,
    #[error(transparent)]
    Build(#[from] DfaBuildError),
}

/// Parses the table format documented on [the module](self) into a
/// validated [Dfa].
pub fn parse_dfa_table(input: &str) -> Result<Dfa, DfaTableError> {
    let parsed = all_consuming(fa::full_dfa)(input)
        .finish()
        .map(|(_, dfa)| dfa)
        .map_err(|e| DfaTableError::Syntax(e.to_string()))?;
    resolve(parsed)
}

fn resolve(parsed: ParsedDfa) -> Result<Dfa, DfaTableError> {
    use DfaTableError::*;

    let alphabet = parsed
        .head
        .iter()
        .map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(NonSingleCharacterSymbol(token.to_string())),
            }
        })
        .collect::<Result<Vec<char>, _>>()?;

    let mut name_to_state = HashMap::new();
    for (idx, state) in parsed.states.iter().enumerate() {
        if name_to_state.insert(state.name, idx + 1).is_some() {
            return Err(DuplicateStateDefinition(state.name.to_string()));
        }
    }

    let mut initial = None;
    let mut accept = Vec::new();
    let mut transitions = Vec::new();

    for (idx, state) in parsed.states.iter().enumerate() {
        let this_state = idx + 1;

        if state.transitions.len() != alphabet.len() {
            return Err(WrongNumberOfTransitions(
                state.name.to_string(),
                state.transitions.len(),
                alphabet.len(),
            ));
        }

        for (&symbol, target_name) in alphabet.iter().zip(state.transitions.iter()) {
            let &target = name_to_state.get(target_name).ok_or_else(|| {
                TransitionDoesNotExist(state.name.to_string(), target_name.to_string())
            })?;
            transitions.push((this_state, symbol, target));
        }

        if state.initial {
            if initial.is_some() {
                return Err(MultipleInitialStates);
            }
            initial = Some(this_state);
        }

        if state.accepting {
            accept.push(this_state);
        }
    }

    let initial = initial.ok_or(MissingInitialState)?;

    build_dfa(parsed.states.len(), alphabet, initial, accept, transitions).map_err(Build)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_star() {
        let dfa = parse_dfa_table("a\n-> * s0 s0\n").unwrap();
        assert_eq!(dfa.is_accepted(""), Ok(true));
        assert_eq!(dfa.is_accepted("aaa"), Ok(true));
    }

    #[test]
    fn reports_missing_initial_state() {
        assert_eq!(parse_dfa_table("a\n* s0 s0\n"), Err(DfaTableError::MissingInitialState));
    }

    #[test]
    fn reports_unknown_transition_target() {
        assert_eq!(
            parse_dfa_table("a\n-> * s0 s1\n"),
            Err(DfaTableError::TransitionDoesNotExist("s0".to_string(), "s1".to_string()))
        );
    }
}
