use thiserror::Error;

/// A field value that violates its format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("First name cannot be empty.")]
    EmptyFirstName,

    #[error("Invalid phone number.")]
    InvalidPhone(String),

    #[error("Invalid email address.")]
    InvalidEmail(String),
}

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ContactsError>;
