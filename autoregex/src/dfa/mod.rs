//! # Validated DFA representation
//!
//! [Dfa] is a deterministic finite automaton over a finite, single-character
//! alphabet: a validated, complete, 1-indexed transition table matching the
//! `{1,…,N}` state numbering used throughout this crate (and, not
//! coincidentally, the dynamic program in [crate::synth] that consumes it —
//! indexing both the same way avoids an off-by-one translation layer at
//! every DP access).

pub mod eval;
pub mod parse;

use parse::{DfaBuildError, InputError};
use std::fmt;

pub use eval::DfaEvaluator;

/// A validated, complete DFA over states `1..=state_count` and a
/// single-character alphabet.
///
/// `delta` is stored dense: `delta[state - 1][symbol_index]` is the
/// (1-based) target state. Completeness is an invariant enforced at
/// construction — every `(state, symbol)` pair has an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    state_count: usize,
    alphabet: Vec<char>,
    initial: usize,
    accept: Vec<usize>,
    delta: Vec<Vec<usize>>,
}

impl Dfa {
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn initial(&self) -> usize {
        self.initial
    }

    /// Accepting states, in the order they were supplied to [build_dfa].
    pub fn accept(&self) -> &[usize] {
        &self.accept
    }

    pub fn is_accepting(&self, state: usize) -> bool {
        self.accept.contains(&state)
    }

    fn symbol_index(&self, symbol: char) -> Option<usize> {
        self.alphabet.iter().position(|&c| c == symbol)
    }

    pub fn delta(&self, state: usize, symbol: char) -> Option<usize> {
        let idx = self.symbol_index(symbol)?;
        self.delta.get(state - 1)?.get(idx).copied()
    }

    /// The ordered set of symbols `a` such that `delta(s1, a) == s2`,
    /// following alphabet order. Empty when there is no such edge.
    pub fn edge_labels(&self, s1: usize, s2: usize) -> Vec<char> {
        let Some(row) = self.delta.get(s1 - 1) else {
            return Vec::new();
        };
        self.alphabet
            .iter()
            .zip(row.iter())
            .filter(|(_, &target)| target == s2)
            .map(|(&symbol, _)| symbol)
            .collect()
    }

    /// Runs `word` through the automaton from the initial state, returning
    /// whether the final state is accepting.
    ///
    /// Two fast paths avoid walking `delta` entirely: an empty `accept` set
    /// accepts only the empty word (a literal carry-over of the original
    /// prototype's behavior, not standard DFA semantics — see DESIGN.md's
    /// Open Questions), and an `accept` set covering every state accepts
    /// every word (of symbols drawn from the alphabet). Both fast paths
    /// still validate every character of `word` against the alphabet first:
    /// the out-of-alphabet check is a precondition of `is_accepted` as a
    /// whole, not something either shortcut gets to skip.
    pub fn is_accepted(&self, word: &str) -> Result<bool, InputError> {
        if self.accept.is_empty() {
            self.validate_word(word)?;
            return Ok(word.is_empty());
        }
        if self.accept.len() == self.state_count {
            self.validate_word(word)?;
            return Ok(true);
        }

        let mut evaluator = DfaEvaluator::from(self);
        for c in word.chars() {
            evaluator.step(c)?;
        }
        Ok(evaluator.is_accepting())
    }

    /// Checks every character of `word` against the alphabet without
    /// walking `delta`, for fast paths that decide acceptance structurally.
    fn validate_word(&self, word: &str) -> Result<(), InputError> {
        word.chars().try_for_each(|c| {
            if self.symbol_index(c).is_some() {
                Ok(())
            } else {
                Err(InputError(c))
            }
        })
    }
}

impl fmt::Display for Dfa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "states: 1..={}", self.state_count)?;
        writeln!(
            f,
            "alphabet: {}",
            self.alphabet.iter().collect::<String>()
        )?;
        writeln!(f, "initial: {}", self.initial)?;
        writeln!(
            f,
            "accept: {{{}}}",
            self.accept
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        for state in 1..=self.state_count {
            for &symbol in &self.alphabet {
                let target = self.delta(state, symbol).expect("delta is total");
                writeln!(f, "  delta({state}, {symbol}) = {target}")?;
            }
        }
        Ok(())
    }
}

/// Validates `state_count`/`alphabet`/`initial`/`accept`/`transitions` and
/// builds the complete transition table, or reports the first violated
/// condition as a [DfaBuildError].
///
/// `transitions` is an ordered sequence of `(start, input, end)` records,
/// matching the specification's `{start, input, end}` shape.
pub fn build_dfa(
    state_count: usize,
    alphabet: Vec<char>,
    initial: usize,
    accept: Vec<usize>,
    transitions: Vec<(usize, char, usize)>,
) -> Result<Dfa, DfaBuildError> {
    if state_count == 0 {
        return Err(DfaBuildError::ShapeError);
    }

    for (idx, &symbol) in alphabet.iter().enumerate() {
        if alphabet[..idx].contains(&symbol) {
            return Err(DfaBuildError::DuplicateAlphabetSymbol(symbol));
        }
    }

    let in_range = |s: usize| s >= 1 && s <= state_count;

    if !in_range(initial) {
        return Err(DfaBuildError::RangeError(initial, state_count));
    }

    for (idx, &state) in accept.iter().enumerate() {
        if !in_range(state) {
            return Err(DfaBuildError::RangeError(state, state_count));
        }
        if accept[..idx].contains(&state) {
            return Err(DfaBuildError::DuplicateAcceptingState(state));
        }
    }

    for &(start, symbol, end) in &transitions {
        if !in_range(start) {
            return Err(DfaBuildError::RangeError(start, state_count));
        }
        if !in_range(end) {
            return Err(DfaBuildError::RangeError(end, state_count));
        }
        if !alphabet.contains(&symbol) {
            return Err(DfaBuildError::SymbolError(start, symbol));
        }
    }

    let mut delta: Vec<Vec<Option<usize>>> = vec![vec![None; alphabet.len()]; state_count];
    for (start, symbol, end) in transitions {
        let symbol_idx = alphabet.iter().position(|&c| c == symbol).unwrap();
        delta[start - 1][symbol_idx] = Some(end);
    }

    for state in 1..=state_count {
        for (symbol_idx, &symbol) in alphabet.iter().enumerate() {
            if delta[state - 1][symbol_idx].is_none() {
                return Err(DfaBuildError::IncompleteDeltaError(state, symbol));
            }
        }
    }

    let delta = delta
        .into_iter()
        .map(|row| row.into_iter().map(|t| t.unwrap()).collect())
        .collect();

    Ok(Dfa {
        state_count,
        alphabet,
        initial,
        accept,
        delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_states() {
        assert_eq!(build_dfa(0, vec!['a'], 1, vec![1], vec![]), Err(DfaBuildError::ShapeError));
    }

    #[test]
    fn rejects_duplicate_alphabet_symbol() {
        assert_eq!(
            build_dfa(1, vec!['a', 'a'], 1, vec![1], vec![(1, 'a', 1)]),
            Err(DfaBuildError::DuplicateAlphabetSymbol('a'))
        );
    }

    #[test]
    fn rejects_out_of_range_initial() {
        assert_eq!(
            build_dfa(1, vec!['a'], 2, vec![1], vec![(1, 'a', 1)]),
            Err(DfaBuildError::RangeError(2, 1))
        );
    }

    #[test]
    fn rejects_duplicate_accept() {
        assert_eq!(
            build_dfa(1, vec!['a'], 1, vec![1, 1], vec![(1, 'a', 1)]),
            Err(DfaBuildError::DuplicateAcceptingState(1))
        );
    }

    #[test]
    fn rejects_unknown_transition_symbol() {
        assert_eq!(
            build_dfa(1, vec!['a'], 1, vec![1], vec![(1, 'b', 1)]),
            Err(DfaBuildError::SymbolError(1, 'b'))
        );
    }

    #[test]
    fn rejects_incomplete_delta() {
        assert_eq!(
            build_dfa(2, vec!['a'], 1, vec![1], vec![(1, 'a', 1)]),
            Err(DfaBuildError::IncompleteDeltaError(2, 'a'))
        );
    }

    #[test]
    fn edge_labels_collects_all_matching_symbols() {
        let dfa = build_dfa(1, vec!['a', 'b'], 1, vec![1], vec![(1, 'a', 1), (1, 'b', 1)]).unwrap();
        assert_eq!(dfa.edge_labels(1, 1), vec!['a', 'b']);
    }

    #[test]
    fn is_accepted_fast_paths() {
        let empty_accept = build_dfa(1, vec!['a'], 1, vec![], vec![(1, 'a', 1)]).unwrap();
        assert_eq!(empty_accept.is_accepted(""), Ok(true));
        assert_eq!(empty_accept.is_accepted("a"), Ok(false));

        let all_accept = build_dfa(1, vec!['a'], 1, vec![1], vec![(1, 'a', 1)]).unwrap();
        assert_eq!(all_accept.is_accepted("aaaa"), Ok(true));
    }

    #[test]
    fn is_accepted_rejects_unknown_symbol() {
        let dfa = build_dfa(2, vec!['a'], 1, vec![2], vec![(1, 'a', 2), (2, 'a', 2)]).unwrap();
        assert_eq!(dfa.is_accepted("c"), Err(InputError('c')));
    }

    #[test]
    fn is_accepted_fast_paths_still_validate_the_alphabet() {
        let empty_accept = build_dfa(1, vec!['a'], 1, vec![], vec![(1, 'a', 1)]).unwrap();
        assert_eq!(empty_accept.is_accepted("z"), Err(InputError('z')));

        let all_accept = build_dfa(1, vec!['a'], 1, vec![1], vec![(1, 'a', 1)]).unwrap();
        assert_eq!(all_accept.is_accepted("z"), Err(InputError('z')));
    }
}
