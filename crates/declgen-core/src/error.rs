use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid compiler version '{version}': {reason}")]
    InvalidCompilerVersion { version: String, reason: String },

    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
