//! Result and Error types for natools-tag

/// Type alias for `Result<T, tag::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `natools-tag` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No large-radius jet passed the candidate mass requirement
    #[error("no candidate fat jet above {minimum_mass:?} GeV")]
    NoCandidateFatJet {
        /// Mass requirement applied
        minimum_mass: f64,
    },

    /// Too few small-radius jets survived hemisphere selection
    #[error("not enough candidate jets (expected {minimum:?}, found {found:?})")]
    BelowMinimumJets {
        /// Number of surviving candidates
        found: usize,
        /// Number required
        minimum: usize,
    },

    /// Every candidate pair was rejected
    #[error("no jet pair passed hemisphere selection")]
    NoPassingPairs,
}
