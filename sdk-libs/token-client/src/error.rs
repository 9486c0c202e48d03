use thiserror::Error;
use veil_client::{indexer::IndexerError, rpc::RpcError};

pub type Result<T> = std::result::Result<T, TokenClientError>;

#[derive(Error, Debug)]
pub enum TokenClientError {
    /// A caller broke the programming contract (malformed record, mixed
    /// mints, missing proof). Not recoverable at runtime.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: u64, required: u64 },

    /// The state-tree root advanced between reading the accounts and
    /// generating the proof. Restart from note selection with a fresh view.
    #[error("stale validity proof: proof root seq {proof_root_seq}, account root seq {account_root_seq}")]
    StaleProof {
        proof_root_seq: u64,
        account_root_seq: u64,
    },

    #[error("rpc failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("indexer failure: {0}")]
    Indexer(#[from] IndexerError),

    /// A stage failed after earlier stages succeeded. No partial transaction
    /// is returned; the name identifies the failed stage.
    #[error("composition aborted at {stage}: {source}")]
    CompositionAborted {
        stage: &'static str,
        #[source]
        source: Box<TokenClientError>,
    },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl TokenClientError {
    pub fn aborted(stage: &'static str, source: TokenClientError) -> Self {
        TokenClientError::CompositionAborted {
            stage,
            source: Box::new(source),
        }
    }
}
