//! Error types for the panel cutting calculator.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for calculator failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed job or config file (-3)
    InvalidFile = -3,
    /// Input rejected by validation (E100)
    InvalidInput = 100,
    /// No good pieces to spread the cost over (E200)
    ZeroYield = 200,
    /// Cutting waste consumes the whole sheet (E201)
    TotalWaste = 201,
    /// A derived cost figure overflowed (E202)
    NonFiniteCost = 202,
    /// Grid too large to draw (E203)
    GridTooLarge = 203,
    /// Inventory store cannot be read back (E300)
    InventoryCorrupt = 300,
    /// Generic I/O failure (E301)
    Io = 301,
}

/// Main error type for the calculator.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Malformed file {path}: {source}")]
    InvalidFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for '{field}': expected {expected}, got {value}")]
    InvalidValue {
        field: String,
        expected: String,
        value: f64,
    },

    #[error("Job validation failed: {}", messages.join("; "))]
    ValidationFailed { messages: Vec<String> },

    #[error("No good pieces produced ({total_pieces} cut, {discard_percent}% discarded): cost per piece is undefined")]
    ZeroYield {
        total_pieces: u64,
        discard_percent: f64,
    },

    #[error("Cutting waste of {waste_percent}% leaves no usable material")]
    TotalWaste { waste_percent: f64 },

    #[error("Cost figure '{field}' is not a finite number ({value})")]
    NonFiniteCost { field: String, value: f64 },

    #[error("Grid of {pieces} piece(s) is too large to draw (limit {limit})")]
    GridTooLarge { pieces: u64, limit: u64 },

    #[error("Failed to write {path}: {source}")]
    OutputFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Inventory store {path} is corrupt: {source}")]
    InventoryCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CalcError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CalcError::EmptyFile { .. } => ErrorCode::EmptyFile,
            CalcError::InvalidFile { .. } => ErrorCode::InvalidFile,
            CalcError::InvalidValue { .. } => ErrorCode::InvalidInput,
            CalcError::ValidationFailed { .. } => ErrorCode::InvalidInput,
            CalcError::ZeroYield { .. } => ErrorCode::ZeroYield,
            CalcError::TotalWaste { .. } => ErrorCode::TotalWaste,
            CalcError::NonFiniteCost { .. } => ErrorCode::NonFiniteCost,
            CalcError::GridTooLarge { .. } => ErrorCode::GridTooLarge,
            CalcError::OutputFailed { .. } => ErrorCode::Io,
            CalcError::InventoryCorrupt { .. } => ErrorCode::InventoryCorrupt,
            CalcError::Serialize(_) => ErrorCode::Io,
            CalcError::Io(_) => ErrorCode::Io,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CalcError::ZeroYield {
            total_pieces: 0,
            discard_percent: 0.0,
        };
        assert_eq!(err.code(), ErrorCode::ZeroYield);
        assert_eq!(err.code_value(), 200);

        let err = CalcError::FileNotFound {
            path: PathBuf::from("job.json"),
        };
        assert_eq!(err.code_value(), -1);
    }

    #[test]
    fn test_validation_message_joins() {
        let err = CalcError::ValidationFailed {
            messages: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(err.to_string(), "Job validation failed: first; second");
    }
}
