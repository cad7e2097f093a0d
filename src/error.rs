//! Errors raised while binding or running page behaviors

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorError {
    // ==========================================================================
    // Browser Errors
    // ==========================================================================
    WindowUnavailable,
    DocumentUnavailable,
    Dom(String),

    // ==========================================================================
    // Markup Errors
    // ==========================================================================
    MissingAttribute { attribute: String },
    TargetNotFound { selector: String },
    NothingToCopy,
    InvalidAction { action: String },

    // ==========================================================================
    // Clipboard Errors
    // ==========================================================================
    ClipboardWrite(String),

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    Config(String),
}

impl fmt::Display for BehaviorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowUnavailable => write!(f, "No window"),
            Self::DocumentUnavailable => write!(f, "No document"),
            Self::Dom(msg) => write!(f, "DOM error: {}", msg),

            Self::MissingAttribute { attribute } => {
                write!(f, "Element has no {} attribute", attribute)
            }
            Self::TargetNotFound { selector } => {
                write!(f, "No element matches clipboard target {}", selector)
            }
            Self::NothingToCopy => write!(f, "Trigger has neither clipboard text nor target"),
            Self::InvalidAction { action } => {
                write!(f, "Invalid clipboard action \"{}\", use either \"copy\" or \"cut\"", action)
            }

            Self::ClipboardWrite(msg) => write!(f, "Failed to write to clipboard: {}", msg),

            Self::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for BehaviorError {}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_json::Error> for BehaviorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for page behavior operations
pub type BehaviorResult<T> = Result<T, BehaviorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_action_message_names_both_actions() {
        let err = BehaviorError::InvalidAction { action: "move".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("\"move\""));
        assert!(msg.contains("\"copy\""));
        assert!(msg.contains("\"cut\""));
    }

    #[test]
    fn test_json_error_becomes_config_error() {
        let err: BehaviorError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, BehaviorError::Config(_)));
    }
}
