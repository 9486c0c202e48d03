use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("transport error: {0}")]
    Transport(#[from] Box<reqwest::Error>),

    #[error("indexer returned error {code}: {message}")]
    ResponseError { code: i64, message: String },

    #[error("failed to decode {field}: {message}")]
    DecodeError { field: String, message: String },

    #[error("indexer response is missing a result")]
    MissingResult,

    #[error("proof response misaligned: requested {requested} hashes, got {returned} root indices")]
    ProofMisaligned { requested: usize, returned: usize },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl IndexerError {
    pub fn decode_error(field: &str, error: impl std::fmt::Display) -> Self {
        IndexerError::DecodeError {
            field: field.to_string(),
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for IndexerError {
    fn from(err: reqwest::Error) -> Self {
        IndexerError::Transport(Box::new(err))
    }
}
