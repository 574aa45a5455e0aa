//! Jet/gen matching built on the decay tree
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod hemisphere;
mod merged;

// Inline anything important for a nice public API
#[doc(inline)]
pub use merged::{collect_quarks, collect_ws, merged_prong_count, MergedCategory};

#[doc(inline)]
pub use hemisphere::{hemispherize, FAT_JET_MASS_MIN, PAIR_DELTA_R_MAX};

#[doc(inline)]
pub use error::{Error, Result};
