use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the full corpus was synced (skipped errata are not a failure)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (aggregate fetch/parse error, persistence error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Fatal errors that abort a sync run.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Per-errata fetch failures are NOT represented here - they are
/// absorbed at the year-assembly boundary (see [`FetchError`]).
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to parse OVAL document\nDetails: {details}\n\n💡 Hint: Please verify that the OVAL endpoint serves a well-formed oval_definitions document")]
    MalformedDocument { details: String },

    #[error("Failed to persist errata collection for year {year}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory exists and you have write permissions")]
    Persistence { year: String, details: String },
}

/// Recoverable per-errata fetch failures.
///
/// One of these never aborts a year's assembly: the ref-ID is skipped,
/// the reason is reported through the `SyncObserver` port and recorded
/// in the run report, and assembly continues with the next ref-ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network request failed: {details}")]
    Transport { details: String },

    #[error("unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    #[error("malformed errata record: {details}")]
    MalformedRecord { details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_malformed_document_display() {
        let error = SyncError::MalformedDocument {
            details: "unexpected end of input".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse OVAL document"));
        assert!(display.contains("unexpected end of input"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_persistence_error_display() {
        let error = SyncError::Persistence {
            year: "2023".to_string(),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("year 2023"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_fetch_error_display() {
        let transport = FetchError::Transport {
            details: "connection refused".to_string(),
        };
        assert_eq!(
            format!("{}", transport),
            "network request failed: connection refused"
        );

        let status = FetchError::UnexpectedStatus { status: 404 };
        assert_eq!(format!("{}", status), "unexpected status code: 404");

        let malformed = FetchError::MalformedRecord {
            details: "expected value at line 1".to_string(),
        };
        assert_eq!(
            format!("{}", malformed),
            "malformed errata record: expected value at line 1"
        );
    }

    #[test]
    fn test_fetch_error_equality() {
        assert_eq!(
            FetchError::UnexpectedStatus { status: 404 },
            FetchError::UnexpectedStatus { status: 404 }
        );
        assert_ne!(
            FetchError::UnexpectedStatus { status: 404 },
            FetchError::UnexpectedStatus { status: 500 }
        );
    }
}
