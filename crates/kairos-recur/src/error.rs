use kairos_core::error::CoreError;
use thiserror::Error;

/// Error during recurrence expansion.
#[derive(Error, Debug)]
pub enum ExpansionError {
    /// A seed `date` or rule `endDate` is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid {field} {value:?}: {source}")]
    InvalidDateInput {
        field: &'static str,
        value: String,
        #[source]
        source: CoreError,
    },

    /// Expansion exceeded maximum limit.
    #[error("Expansion exceeded maximum limit of {0} occurrences")]
    TooManyOccurrences(usize),
}

pub type ExpansionResult<T> = std::result::Result<T, ExpansionError>;
