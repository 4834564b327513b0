//! Core support for mcubes-rs.
//!
//! This crate provides the fundamental types used throughout mcubes-rs:
//! - [`Report`] and [`McError`] for multi-line diagnostics
//! - [`EnumLabel`] for label <-> enum conversion
//! - [`VertexBitset`] and table-index decomposition helpers
//! - [`UnionFind`] for connected-component computations

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod bits;
pub mod enums;
pub mod error;
pub mod union_find;

pub use bits::{decompose_index, int_power, VertexBitset, MAX_ISO_VERTICES, MAX_POLY_VERTICES};
pub use enums::EnumLabel;
pub use error::{McError, Report, Result};
pub use union_find::UnionFind;
