//! Status and confirmation message types for operation feedback.

use std::fmt;

/// How an [`OperationStatus`] is introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Success,
    /// Shown as the bare message
    Info,
    Failure,
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub level: StatusLevel,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Success,
        }
    }

    /// Create a status that is neither success nor failure, such as a
    /// refused early completion.
    pub fn info(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Info,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            level: StatusLevel::Failure,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            StatusLevel::Success => writeln!(f, "Success: {}", self.message),
            StatusLevel::Info => writeln!(f, "{}", self.message),
            StatusLevel::Failure => writeln!(f, "Error: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Garden created".to_string());
        assert!(format!("{success}").starts_with("Success:"));

        let info = OperationStatus::info("Not due yet".to_string());
        assert_eq!(format!("{info}"), "Not due yet\n");

        let failure = OperationStatus::failure("Database unavailable".to_string());
        assert!(format!("{failure}").starts_with("Error:"));
    }
}
