use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The outcome of evaluating a calculator form.
///
/// `Incomplete` means a required field is absent or fails a domain guard;
/// the shell renders an empty result region, not an error. `Ready` carries
/// the formatted result string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
#[ts(export)]
pub enum Evaluation {
    Incomplete,
    Ready(String),
}

impl Evaluation {
    pub fn is_ready(&self) -> bool {
        matches!(self, Evaluation::Ready(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Evaluation::Ready(message) => Some(message),
            Evaluation::Incomplete => None,
        }
    }

    /// `Ready` if a message was produced, `Incomplete` otherwise.
    pub fn from_option(message: Option<String>) -> Self {
        match message {
            Some(message) => Evaluation::Ready(message),
            None => Evaluation::Incomplete,
        }
    }
}

impl From<Option<String>> for Evaluation {
    fn from(message: Option<String>) -> Self {
        Evaluation::from_option(message)
    }
}
