//! Run configuration and run bookkeeping.
//!
//! These are derived from CLI flags (plus environment and defaults) and handed to
//! the pipeline by value, so a run never reads process-wide state.

use std::fmt;
use std::path::PathBuf;

/// Default manifest file name inside the output directory.
pub const DEFAULT_MANIFEST_NAME: &str = "journeysList.json";

/// Extension appended to a record identifier to form its artifact file name.
pub const ARTIFACT_EXTENSION: &str = "json";

/// Configuration of a batch (journeys) generation run.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Primary collection: a JSON array of journey records.
    pub primary_path: PathBuf,
    /// Reference table: a JSON object mapping journey id to its steps.
    pub reference_path: PathBuf,
    /// Directory that receives one artifact per record plus the manifest.
    pub out_dir: PathBuf,
    pub manifest_name: String,
    /// Content options, shared with the single-document converters.
    pub encode: EncodeOptions,
}

/// Configuration of a single-document conversion (config, themes, tenant).
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub encode: EncodeOptions,
}

/// Knobs that influence encoded content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Generation timestamp (epoch millis) stamped into `date` / `added`.
    ///
    /// `None` leaves the property out, which keeps repeated runs byte-identical.
    pub generated_at: Option<i64>,
}

/// Lifecycle of one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Loaded,
    Purged,
    Writing,
    Finalized,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunState::Idle => "idle",
            RunState::Loaded => "loaded",
            RunState::Purged => "purged",
            RunState::Writing => "writing",
            RunState::Finalized => "finalized",
            RunState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of a finalized batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Identifiers written, in primary-collection order.
    pub ids: Vec<String>,
    /// Number of stale files removed by the purge.
    pub purged: usize,
    pub manifest_name: String,
}

/// File name of the artifact written for `id`.
pub fn artifact_file_name(id: &str) -> String {
    format!("{id}.{ARTIFACT_EXTENSION}")
}
