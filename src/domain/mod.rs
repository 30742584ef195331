//! Domain types used throughout the generator.
//!
//! This module defines:
//!
//! - the store's tagged value model (`TypedValue`, `Entity`, `ArrayValue`)
//! - run configuration (`GenerateConfig`) and run bookkeeping (`RunState`, `RunReport`)

pub mod types;
pub mod value;

pub use types::*;
pub use value::*;
