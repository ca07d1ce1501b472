/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    /// Confirms a completed action.
    Success,
    /// Reports a failure.
    Error,
}

/// A message the user must acknowledge before continuing.
#[derive(Debug, Clone)]
pub struct Alert {
    /// Severity, which picks the border color.
    pub level: AlertLevel,
    /// Popup title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl Alert {
    /// Creates alert.
    #[must_use]
    pub fn new(level: AlertLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Creates an alert titled "Error".
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Error, "Error", message)
    }

    /// Creates an alert titled "Success".
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertLevel::Success, "Success", message)
    }
}
