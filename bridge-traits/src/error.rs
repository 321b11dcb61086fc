use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Collaborator not available: {0}")]
    NotAvailable(String),

    #[error("Search request failed: {0}")]
    SearchFailed(String),

    #[error("Collaborator operation failed: {0}")]
    OperationFailed(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
