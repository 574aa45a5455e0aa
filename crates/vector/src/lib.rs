//! Lorentz-vector kinematics for collider analysis
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod fourvec;

// Inline anything important for a nice public API
#[doc(inline)]
pub use fourvec::FourVector;
