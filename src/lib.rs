//! `datastore-gen` library crate.
//!
//! The binary (`dsgen`) is a thin wrapper around this library so that:
//!
//! - the encoder and the pipeline are testable without spawning processes
//! - the destination can be swapped (filesystem in the binary, memory in tests)
//! - code stays easy to navigate as more document types are added

pub mod app;
pub mod cli;
pub mod domain;
pub mod encode;
pub mod error;
pub mod io;
pub mod records;
pub mod report;
