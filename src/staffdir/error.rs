use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Employee not found: {0}")]
    NotFound(String),

    #[error("Employee id already exists: {0}")]
    DuplicateId(String),

    #[error("Employee {0} must not be empty")]
    EmptyField(&'static str),

    #[error("Already editing employee {0}; save or cancel first")]
    EditInProgress(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
