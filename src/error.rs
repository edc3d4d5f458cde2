//! Error types and handling for benchpost
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for benchpost operations
#[derive(Error, Diagnostic, Debug)]
pub enum BenchpostError {
    // Table errors
    #[error("Required column '{column}' not found in {path}")]
    #[diagnostic(
        code(benchpost::table::missing_column),
        help("Result tables need the 'BUF SIZE B' and 'ROUTINE IMPLEMENTATION' key columns; check that the file is an unmodified harness result table")
    )]
    MissingColumn { column: String, path: String },

    #[error("Failed to parse table {path}: {reason}")]
    #[diagnostic(code(benchpost::table::parse_failed))]
    TableParseFailed { path: String, reason: String },

    #[error("Table {path} has no header line")]
    #[diagnostic(
        code(benchpost::table::empty),
        help("The first non-separator line must name the columns")
    )]
    EmptyTable { path: String },

    #[error("Unparseable buffer size '{value}' in column '{column}'")]
    #[diagnostic(
        code(benchpost::table::bad_buf_size),
        help("'BUF SIZE B' values must be whole byte counts")
    )]
    InvalidBufSize { column: String, value: String },

    // Chart errors
    #[error("No data rows to plot in {path}")]
    #[diagnostic(code(benchpost::chart::no_data))]
    NoPlotData { path: String },

    #[error("Chart rendering failed: {reason}")]
    #[diagnostic(code(benchpost::chart::render_failed))]
    ChartRenderFailed { reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(benchpost::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(benchpost::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(benchpost::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(benchpost::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BenchpostError {
    fn from(err: std::io::Error) -> Self {
        BenchpostError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for BenchpostError {
    fn from(err: csv::Error) -> Self {
        BenchpostError::TableParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BenchpostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BenchpostError::MissingColumn {
            column: "BUF SIZE B".to_string(),
            path: "results/memcpy.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Required column 'BUF SIZE B' not found in results/memcpy.txt"
        );
    }

    #[test]
    fn test_file_not_found_error() {
        let err = BenchpostError::FileNotFound {
            path: "/path/to/results.txt".to_string(),
        };
        assert!(err.to_string().contains("File not found"));
        assert!(err.to_string().contains("/path/to/results.txt"));
    }

    #[test]
    fn test_invalid_buf_size_error() {
        let err = BenchpostError::InvalidBufSize {
            column: "BUF SIZE B".to_string(),
            value: "8.0 KiB".to_string(),
        };
        assert!(err.to_string().contains("Unparseable buffer size"));
        assert!(err.to_string().contains("8.0 KiB"));
    }

    #[test]
    fn test_file_write_failed_error() {
        let err = BenchpostError::FileWriteFailed {
            path: "/path/to/merged.txt".to_string(),
            reason: "disk full".to_string(),
        };
        assert!(err.to_string().contains("Failed to write file"));
        assert!(err.to_string().contains("/path/to/merged.txt"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: BenchpostError = io_err.into();
        assert!(matches!(err, BenchpostError::IoError { .. }));
    }
}
