//! Result and Error types for natools-gen

/// Type alias for `Result<T, gen::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `natools-gen` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    JSONError(#[from] serde_json::Error),

    /// Malformed decay-chain pattern string
    #[error("failed to parse chain pattern from \"{0}\"")]
    Pattern(String),

    /// Unrecognised status flag name
    #[error("failed to infer status flag from \"{0}\"")]
    FailedToInferStatusFlag(String),

    /// Columnar arrays of differing lengths
    #[error("inconsistent length of column \"{column}\" (expected {expected:?}, found {found:?})")]
    UnequalColumnLengths {
        /// Name of the offending column
        column: &'static str,
        /// Length of the reference `pt` column
        expected: usize,
        /// Length found
        found: usize,
    },

    /// Requested particle index not in the record
    #[error("particle index {index} outside record of length {length}")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Number of particles in the record
        length: usize,
    },
}
