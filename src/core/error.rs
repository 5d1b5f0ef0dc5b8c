use std::io;

#[derive(thiserror::Error, Debug)]
pub enum TideError {
    #[error("config error: {0}")]
    Config(String),
    #[error("db error: {0}")]
    Db(String),
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl TideError {
    pub fn missing(field: &str) -> Self {
        TideError::Validation(format!("missing required field: {}", field))
    }
}

impl From<rusqlite::Error> for TideError {
    fn from(err: rusqlite::Error) -> Self {
        TideError::Db(err.to_string())
    }
}

impl From<serde_json::Error> for TideError {
    fn from(err: serde_json::Error) -> Self {
        TideError::Serialization(err.to_string())
    }
}
