use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl KeyError {
    pub(crate) fn unknown_key_type(key_type: &str, valid: &[&str]) -> Self {
        Self::InvalidArgument {
            message: format!(
                "Unknown key type '{}'; expected one of: {}",
                key_type,
                valid.join(", ")
            ),
        }
    }

    pub(crate) fn invalid_hex(value: &str, err: hex::FromHexError) -> Self {
        Self::InvalidArgument {
            message: format!("Could not parse '{}' as hex: {}", value, err),
        }
    }

    pub(crate) fn invalid_length(what: &str, expected: usize, actual: usize) -> Self {
        Self::InvalidArgument {
            message: format!(
                "Expected {} to be {} bytes, got {}",
                what, expected, actual
            ),
        }
    }

    pub(crate) fn malformed_local(value: &str) -> Self {
        Self::InvalidArgument {
            message: format!(
                "Expected a local key formatted as {{seed}}:{{rest}}, got '{}'",
                value
            ),
        }
    }
}
