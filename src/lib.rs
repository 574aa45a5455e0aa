//! `natools` is a semi-modular toolkit of fast and reliable libraries for
//! generator-level HEP analysis
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use natools_utils as utils;

#[doc(inline)]
pub use natools_vector as vector;

#[cfg(feature = "gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "gen")))]
#[doc(inline)]
pub use natools_gen as gen;

#[cfg(feature = "tag")]
#[cfg_attr(docsrs, doc(cfg(feature = "tag")))]
#[doc(inline)]
pub use natools_tag as tag;
