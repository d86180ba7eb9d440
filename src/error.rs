#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Edit rejected: {0}")]
    EditRejected(String),

    #[error("Invalid script: {0}")]
    InvalidScript(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
