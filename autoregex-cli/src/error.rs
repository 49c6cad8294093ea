use autoregex::dfa::parse::{DfaBuildError, InputError};
use autoregex::stepview::LabelParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {0}: {1}")]
    File(PathBuf, io::Error),
    #[error("could not parse DFA JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("alphabet symbol '{0}' is not a single character")]
    NonSingleCharacterSymbol(String),
    #[error(transparent)]
    Build(#[from] DfaBuildError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Label(#[from] LabelParseError),
}
