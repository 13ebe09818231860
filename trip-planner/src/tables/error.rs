//! Table I/O error types.

/// Errors reading or writing delimited tables.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record parsed as CSV but holds invalid values
    #[error("record {record}: {message}")]
    Row { record: usize, message: String },

    #[error("output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl TableError {
    pub(crate) fn row(record: usize, err: impl std::fmt::Display) -> Self {
        TableError::Row {
            record,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::row(3, "invalid payout: -1 (must be finite and non-negative)");
        assert_eq!(
            err.to_string(),
            "record 3: invalid payout: -1 (must be finite and non-negative)"
        );

        let err = TableError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
