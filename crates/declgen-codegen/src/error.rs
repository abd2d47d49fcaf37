use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Invalid type reference '{type_name}': {reason}")]
    InvalidReference { type_name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
