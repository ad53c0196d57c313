use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error("Document root is not an object: {path}")]
    NotAnObject { path: String },
}

pub type Result<T> = std::result::Result<T, JsonError>;
