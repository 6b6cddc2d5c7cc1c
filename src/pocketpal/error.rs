use thiserror::Error;

#[derive(Error, Debug)]
pub enum PocketError {
    /// Malformed phone, birthday, email, tag or name.
    #[error("{0}")]
    Validation(String),

    /// The phone, email, contact or note title is already present.
    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    /// Wrong number of arguments for a command; carries the usage string.
    #[error("Wrong args for command. Example: {0}")]
    ArgumentCount(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl PocketError {
    pub fn validation(message: impl Into<String>) -> Self {
        PocketError::Validation(message.into())
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        PocketError::Duplicate(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        PocketError::NotFound(message.into())
    }

    /// True for the input problems that end the current command but never the session.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            PocketError::Validation(_)
                | PocketError::Duplicate(_)
                | PocketError::NotFound(_)
                | PocketError::ArgumentCount(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PocketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_count_carries_usage() {
        let err = PocketError::ArgumentCount("add [name] [phone]".into());
        assert_eq!(
            err.to_string(),
            "Wrong args for command. Example: add [name] [phone]"
        );
    }

    #[test]
    fn user_errors_are_distinguished_from_storage_failures() {
        assert!(PocketError::not_found("x").is_user_error());
        assert!(PocketError::duplicate("x").is_user_error());
        assert!(PocketError::validation("x").is_user_error());
        assert!(!PocketError::Store("disk".into()).is_user_error());
        let io = std::io::Error::other("boom");
        assert!(!PocketError::from(io).is_user_error());
    }
}
