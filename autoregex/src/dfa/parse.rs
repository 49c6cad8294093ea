use thiserror::Error;

/// Failure conditions for [build_dfa](crate::dfa::build_dfa), one variant
/// per distinct condition in the specification's error-handling design.
/// Validation is all-or-nothing: the first condition violated aborts
/// construction and the rest are left unchecked.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DfaBuildError {
    #[error("state count must be a positive integer")]
    ShapeError,
    #[error("{0} is out of range for a DFA with {1} states (expected 1..={1})")]
    RangeError(usize, usize),
    #[error("'{0}' appears twice in the alphabet")]
    DuplicateAlphabetSymbol(char),
    #[error("state {0} is listed as accepting more than once")]
    DuplicateAcceptingState(usize),
    #[error("transition from state {0} uses symbol '{1}', which is not in the alphabet")]
    SymbolError(usize, char),
    #[error("no transition defined for state {0} on symbol '{1}'")]
    IncompleteDeltaError(usize, char),
}

/// Failure returned by [Dfa::is_accepted](crate::dfa::Dfa::is_accepted)
/// when the input word contains a symbol outside the DFA's alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{0}' is not in the alphabet")]
pub struct InputError(pub char);
