use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced while parsing input or solving for a maximum subarray.
#[derive(Debug, Error)]
pub enum Error {
    /// The maximum subarray of an empty sequence is undefined.
    #[error("empty array has no maximum subarray")]
    EmptyInput,

    /// A subarray was built with `end < start`.
    #[error("end < start: start: {start}, end: {end}")]
    InvalidRange { start: usize, end: usize },

    /// A subarray was extended to an index that is not past its current end.
    #[error("must extend subarray beyond current end. end: {end}, j: {index}")]
    InvalidExtension { end: usize, index: usize },

    /// A running sum left the `i64` range.
    #[error("sum overflowed i64")]
    Overflow,

    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A token that is not a base-10 signed integer.
    #[error("invalid integer {token:?}: {source}")]
    Parse {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
