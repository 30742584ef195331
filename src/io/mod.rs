//! Input/output helpers.
//!
//! - JSON ingest + structural validation (`ingest`)
//! - the destination collaborator (`destination`)
//! - serialization of artifacts, manifest and standalone documents (`export`)

pub mod destination;
pub mod export;
pub mod ingest;

pub use destination::*;
pub use export::*;
pub use ingest::*;
