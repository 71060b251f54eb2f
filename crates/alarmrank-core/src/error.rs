use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad command line values or a refused overwrite.
    Usage,
    /// Alarm input that cannot be located, read or decoded.
    Input,
    /// Scoring configuration that cannot be read or fails validation.
    Config,
    /// An alarm names a severity outside the recognized set.
    UnknownSeverity,
    Internal,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Usage => 2,
            ErrorKind::Input => 3,
            ErrorKind::Config => 4,
            ErrorKind::UnknownSeverity => 5,
            ErrorKind::Internal => 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, message)
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn unknown_severity(value: &str, alarm_id: &str) -> Self {
        Self::new(
            ErrorKind::UnknownSeverity,
            format!("alarm '{alarm_id}' has unknown severity '{value}'"),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_and_non_zero() {
        let kinds = [
            ErrorKind::Usage,
            ErrorKind::Input,
            ErrorKind::Config,
            ErrorKind::UnknownSeverity,
            ErrorKind::Internal,
        ];
        let mut codes: Vec<i32> = kinds.iter().map(|k| k.exit_code()).collect();
        assert!(codes.iter().all(|c| *c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn unknown_severity_names_alarm_and_value() {
        let err = AppError::unknown_severity("Unknown", "ALM-7");
        assert_eq!(err.kind(), ErrorKind::UnknownSeverity);
        assert!(err.message().contains("ALM-7"));
        assert!(err.message().contains("'Unknown'"));
    }
}
