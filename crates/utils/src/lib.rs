//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, consistent scientific formatting is useful for anything
//! that prints kinematic values.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod value_ext;

// Flatten
pub use value_ext::ValueExt;
