use std::io;

use solana_client::client_error::ClientError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("ClientError: {0}")]
    ClientError(#[from] Box<ClientError>),

    #[error("IoError: {0}")]
    IoError(#[from] Box<io::Error>),

    #[error("Error: `{0}`")]
    CustomError(String),
}

impl From<ClientError> for RpcError {
    fn from(err: ClientError) -> Self {
        RpcError::ClientError(Box::new(err))
    }
}

impl From<io::Error> for RpcError {
    fn from(err: io::Error) -> Self {
        RpcError::IoError(Box::new(err))
    }
}
