//! Step-wise DFA evaluation, used by [Dfa::is_accepted](crate::dfa::Dfa::is_accepted)
//! and available directly for callers that want to walk a word one symbol
//! at a time (e.g. an interactive front-end highlighting the current state).

use crate::dfa::Dfa;
use crate::dfa::parse::InputError;

/// Walks a [Dfa] one symbol at a time from its initial state.
#[derive(Debug, Clone)]
pub struct DfaEvaluator<'a> {
    dfa: &'a Dfa,
    current_state: usize,
}

impl<'a> DfaEvaluator<'a> {
    pub fn current_state(&self) -> usize {
        self.current_state
    }

    pub fn is_accepting(&self) -> bool {
        self.dfa.is_accepting(self.current_state)
    }

    /// Advances by one symbol, failing if `symbol` is outside the alphabet.
    pub fn step(&mut self, symbol: char) -> Result<usize, InputError> {
        match self.dfa.delta(self.current_state, symbol) {
            Some(next) => {
                self.current_state = next;
                Ok(next)
            }
            None => Err(InputError(symbol)),
        }
    }

    pub fn step_all(&mut self, word: &str) -> Result<usize, InputError> {
        for c in word.chars() {
            self.step(c)?;
        }
        Ok(self.current_state)
    }
}

impl<'a> From<&'a Dfa> for DfaEvaluator<'a> {
    fn from(dfa: &'a Dfa) -> Self {
        DfaEvaluator {
            dfa,
            current_state: dfa.initial(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dfa::build_dfa;

    #[test]
    fn steps_through_states() {
        let dfa = build_dfa(2, vec!['a'], 1, vec![2], vec![(1, 'a', 2), (2, 'a', 2)]).unwrap();
        let mut evaluator = DfaEvaluator::from(&dfa);
        assert!(!evaluator.is_accepting());
        evaluator.step('a').unwrap();
        assert!(evaluator.is_accepting());
    }

    #[test]
    fn step_rejects_unknown_symbol() {
        let dfa = build_dfa(1, vec!['a'], 1, vec![1], vec![(1, 'a', 1)]).unwrap();
        let mut evaluator = DfaEvaluator::from(&dfa);
        assert_eq!(evaluator.step('b'), Err(InputError('b')));
    }
}
