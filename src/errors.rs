use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InputValidation(String),

    #[error("Stored user record failed validation: {0}")]
    RecordValidation(String),

    #[error("Failed to access the user store: {0}")]
    Store(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// True for failures caused by bad caller input, as opposed to the store or deployment.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, UserError::InputValidation(_))
    }

    #[must_use]
    pub fn is_store(&self) -> bool {
        matches!(self, UserError::Store(_))
    }
}

impl From<validator::ValidationErrors> for UserError {
    fn from(errors: validator::ValidationErrors) -> Self {
        UserError::InputValidation(errors.to_string())
    }
}
