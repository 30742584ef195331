//! Typed-value encoder.
//!
//! Pure functions that map untyped JSON documents into [`TypedValue`](crate::domain::TypedValue)
//! trees. No I/O happens here; every failure is an [`EncodeError`](crate::error::EncodeError)
//! naming the offending field path.
//!
//! - scalars and the omission law (`scalar`)
//! - composite shapes and flat lists (`structure`)
//! - field paths for diagnostics (`path`)

pub mod path;
pub mod scalar;
pub mod structure;

pub use path::*;
pub use scalar::*;
pub use structure::*;
