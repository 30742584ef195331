//! Reporting utilities: formatted terminal output for finished runs.

pub mod format;

pub use format::*;
