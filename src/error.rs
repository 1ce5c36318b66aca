use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlmanacError {
    /// A seed or rule line did not have the expected integer shape.
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// A matched value whose destination leaves the i64 domain.
    #[error("mapping {value} onto destination start {destination_start} overflows the 64-bit value range")]
    Overflow { value: i64, destination_start: i64 },

    /// No seeds were found, so there is no minimum.
    #[error("almanac contains no seeds")]
    EmptyInput,

    /// The streamed result disagreed with the reference oracle.
    #[error("verification failed: streamed {streamed}, reference {reference}")]
    VerificationMismatch { streamed: i64, reference: i64 },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlmanacError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        AlmanacError::Parse {
            line,
            reason: reason.into(),
        }
    }
}
