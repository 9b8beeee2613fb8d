//! # hdrfmt testkit
//!
//! Test utilities for hdrfmt.
//!
//! This crate provides:
//! - Fixtures for building options, header maps and serializers
//! - Property-based test generators using proptest
//! - Render test vectors shared with other implementations
//!
//! ## Usage
//!
//! ```rust
//! use hdrfmt_testkit::prelude::*;
//!
//! let out = render_with(&[("headers", "a")], &[("a", "1")]);
//! assert_eq!(out, "{a=1}");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use vectors::*;
