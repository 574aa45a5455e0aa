//! Gen-particle decay trees and chain matching
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod flags;
mod particle;
mod pattern;
mod record;
mod tree;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use flags::{pdg_name, StatusFlag, StatusFlags};

#[doc(inline)]
pub use particle::{GenParticle, VectorComparison, DELTA_R_MATCH, MASS_MATCH_TOLERANCE};

#[doc(inline)]
pub use pattern::{ChainPattern, PdgMatcher};

#[doc(inline)]
pub use record::{GenParticles, ParticleCursor};

#[doc(inline)]
pub use tree::GenParticleTree;

#[doc(inline)]
pub use writer::{write_ascii_pretty, write_json};

#[doc(inline)]
pub use error::{Error, Result};
