//! Per-document converters built on the encoder.
//!
//! - journey detail records and steps (`journey`), written in batches
//! - journeys landing configuration (`config`)
//! - theme palettes (`theme`)
//! - tenant tutorial (`tenant`)

pub mod config;
pub mod journey;
pub mod tenant;
pub mod theme;

pub use config::*;
pub use journey::*;
pub use tenant::*;
pub use theme::*;
