//! Error types for grid construction, parsing and evolution

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while building, loading or evolving a grid
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Cannot open grid file: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read grid file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read {field} from line {line}: found \"{found}\"")]
    MalformedHeader {
        field: &'static str,
        line: usize,
        found: String,
    },

    #[error("Unexpected end of input in row {row}, column {col}")]
    UnexpectedEndOfInput { row: usize, col: usize },

    #[error("Unexpected character in grid cell ({row}, {col}): {found:?}")]
    InvalidCellCharacter { row: usize, col: usize, found: char },

    #[error("Expected new line after row {row}, but found {}", describe_terminator(.found))]
    MissingRowTerminator { row: usize, found: Option<char> },

    #[error("Row {row} has length {found}, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Coordinates ({row}, {col}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("Grid dimension mismatch: source {source_width}x{source_height}, destination {destination_width}x{destination_height}")]
    DimensionMismatch {
        source_width: usize,
        source_height: usize,
        destination_width: usize,
        destination_height: usize,
    },
}

fn describe_terminator(found: &Option<char>) -> String {
    match found {
        Some(ch) => format!("{:?}", ch),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_messages() {
        let eof = GridError::MissingRowTerminator { row: 1, found: None };
        assert_eq!(eof.to_string(), "Expected new line after row 1, but found end of input");

        let ch = GridError::MissingRowTerminator { row: 0, found: Some('#') };
        assert_eq!(ch.to_string(), "Expected new line after row 0, but found '#'");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = GridError::Io {
            path: PathBuf::from("grid.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("grid.txt"));
    }
}
