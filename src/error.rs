use std::io;
use thiserror::Error;

/// Errors raised while creating or storing a user.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("Invalid email format.")]
    InvalidEmail { email: String },

    #[error("Username '{username}' is already taken.")]
    DuplicateUsername { username: String },

    #[error("failed to store user: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl UserError {
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername {
            username: username.into(),
        }
    }
}

/// Errors raised while loading the demo configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_email_message_is_fixed() {
        let err = UserError::invalid_email("not-an-email");
        assert_eq!(err.to_string(), "Invalid email format.");
        match err {
            UserError::InvalidEmail { email } => assert_eq!(email, "not-an-email"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_username_names_the_user() {
        let err = UserError::duplicate_username("alice");
        assert_eq!(err.to_string(), "Username 'alice' is already taken.");
    }

    #[test]
    fn test_storage_error_converts_with_question_mark() {
        fn fails() -> Result<(), UserError> {
            Err::<(), _>(rusqlite::Error::InvalidQuery)?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, UserError::Storage(_)));
        assert!(err.to_string().starts_with("failed to store user"));
    }

    #[test]
    fn test_parse_error_display() {
        let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err = ConfigError::from(toml_err);
        assert!(err.to_string().contains("failed to parse config"));
    }
}
