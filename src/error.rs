use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("UNKNOWN_LANGUAGE: '{0}' is not one of c++, java, swift, rust, assembler.")]
    UnknownLanguage(String),

    #[error("USAGE: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
