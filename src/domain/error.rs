use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured error as reported by the provider, or synthesized for
/// transport failures. Handed unchanged to the error display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub code: i64,
    #[serde(default)]
    pub error_type: String,
    #[serde(default)]
    pub error_message: String,
}

impl ErrorDescriptor {
    pub fn new(code: i64, error_type: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            code,
            error_type: error_type.into(),
            error_message: error_message.into(),
        }
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.error_type, self.error_message)
    }
}
