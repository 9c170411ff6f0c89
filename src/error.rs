use thiserror::Error;

/// Main error type for the CSS compiler library
#[derive(Error, Debug)]
pub enum CompilerError {
    #[error("Stylesheet generation error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Instance not found: {id}")]
    InstanceNotFound { id: String },

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Errors raised while serializing a stylesheet to text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Generator '{generator}' failed: {reason}")]
    Failed { generator: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path} ({reason})")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using CompilerError
pub type Result<T> = std::result::Result<T, CompilerError>;

impl CompilerError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InstanceNotFound { id } => {
                format!("No styles were collected for instance '{}'.", id)
            }
            Self::Generator(GeneratorError::Failed { generator, reason }) => {
                format!("Could not render the stylesheet with '{}': {}", generator, reason)
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_converts() {
        let err: CompilerError = GeneratorError::Failed {
            generator: "css".to_string(),
            reason: "out of ink".to_string(),
        }
        .into();

        assert!(matches!(err, CompilerError::Generator(_)));
        assert!(err.to_string().contains("out of ink"));
    }

    #[test]
    fn test_user_message_names_instance() {
        let err = CompilerError::InstanceNotFound {
            id: "footer".to_string(),
        };

        assert!(err.user_message().contains("footer"));
        assert_eq!(err.to_string(), "Instance not found: footer");
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        let err = CompilerError::generic("boom");
        assert_eq!(err.user_message(), "Generic error: boom");
    }
}
