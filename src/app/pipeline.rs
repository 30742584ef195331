//! Batch generation of journey artifacts.
//!
//! One run walks `Idle -> Loaded -> Purged -> Writing -> Finalized`, or ends in
//! `Failed` on the first fatal error:
//!
//! 1) load + validate the primary collection and the reference table
//! 2) join and encode every record (pure, parallel)
//! 3) purge the destination; every deletion has finished before step 4 starts
//! 4) write one artifact per record (parallel)
//! 5) write the manifest, only if every artifact write succeeded
//!
//! Records are encoded before the purge, so a malformed record or a missing
//! reference aborts the run with the previous artifacts untouched.

use rayon::prelude::*;
use serde_json::Value;

use crate::domain::{EncodeOptions, Entity, GenerateConfig, RunReport, RunState, artifact_file_name};
use crate::error::{DestinationOp, GenerateError};
use crate::io::{Destination, JourneyInputs, ReferenceTable, load_inputs, manifest_value, to_pretty_bytes};
use crate::records::encode_journey;

/// One encoded record, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: String,
    pub entity: Entity,
}

impl Artifact {
    pub fn file_name(&self) -> String {
        artifact_file_name(&self.id)
    }
}

/// Load inputs from `config` and run a full generation into `destination`.
pub fn run_generation<D>(config: &GenerateConfig, destination: &D) -> Result<RunReport, GenerateError>
where
    D: Destination + ?Sized,
{
    let inputs = load_inputs(config).inspect_err(|err| {
        tracing::error!(state = %RunState::Idle, error = %err, "generation failed");
    })?;
    GenerationRun::new(destination, &config.manifest_name, config.encode).execute(&inputs)
}

/// State of a single run against one destination.
pub struct GenerationRun<'a, D: Destination + ?Sized> {
    destination: &'a D,
    manifest_name: &'a str,
    options: EncodeOptions,
    state: RunState,
}

impl<'a, D: Destination + ?Sized> GenerationRun<'a, D> {
    pub fn new(destination: &'a D, manifest_name: &'a str, options: EncodeOptions) -> Self {
        Self {
            destination,
            manifest_name,
            options,
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run every stage on already-loaded inputs.
    pub fn execute(&mut self, inputs: &JourneyInputs) -> Result<RunReport, GenerateError> {
        self.advance(RunState::Loaded);
        let result = self.execute_loaded(inputs);
        if let Err(err) = &result {
            tracing::error!(state = %self.state, error = %err, "generation failed");
            self.state = RunState::Failed;
        }
        result
    }

    fn execute_loaded(&mut self, inputs: &JourneyInputs) -> Result<RunReport, GenerateError> {
        let artifacts = encode_all(inputs, &self.options)?;

        let purged = purge(self.destination)?;
        self.advance(RunState::Purged);

        self.advance(RunState::Writing);
        write_artifacts(self.destination, &artifacts)?;
        finalize(self.destination, self.manifest_name, &inputs.ids)?;
        self.advance(RunState::Finalized);

        Ok(RunReport {
            ids: inputs.ids.clone(),
            purged,
            manifest_name: self.manifest_name.to_string(),
        })
    }

    fn advance(&mut self, next: RunState) {
        tracing::info!(from = %self.state, to = %next, destination = %self.destination.describe(), "run state");
        self.state = next;
    }
}

/// Look up the steps of `id`; a missing entry is fatal, never an empty list.
pub fn join<'t>(table: &'t ReferenceTable, id: &str) -> Result<&'t [Value], GenerateError> {
    table
        .get(id)
        .ok_or_else(|| GenerateError::MissingReference { id: id.to_string() })
}

/// Join and encode one record.
pub fn encode_record(
    record: &Value,
    id: &str,
    table: &ReferenceTable,
    options: &EncodeOptions,
) -> Result<Artifact, GenerateError> {
    let steps = join(table, id)?;
    let entity = encode_journey(record, steps, options).map_err(|e| GenerateError::malformed(id, e))?;
    Ok(Artifact {
        id: id.to_string(),
        entity,
    })
}

/// Encode every record in parallel, keeping primary-collection order.
pub fn encode_all(inputs: &JourneyInputs, options: &EncodeOptions) -> Result<Vec<Artifact>, GenerateError> {
    inputs
        .records
        .par_iter()
        .zip(inputs.ids.par_iter())
        .map(|(record, id)| encode_record(record, id, &inputs.steps, options))
        .collect()
}

/// Delete every file in the destination and return how many were removed.
///
/// The parallel collect joins every deletion before returning; a re-list then
/// confirms nothing is left, so no write can overlap a pending delete.
pub fn purge<D: Destination + ?Sized>(destination: &D) -> Result<usize, GenerateError> {
    let names = destination
        .list()
        .map_err(|e| GenerateError::destination(DestinationOp::List, destination.describe(), e))?;

    names
        .par_iter()
        .map(|name| {
            destination
                .delete(name)
                .map_err(|e| GenerateError::destination(DestinationOp::Delete, name.as_str(), e))
        })
        .collect::<Result<Vec<()>, _>>()?;

    let remaining = destination
        .list()
        .map_err(|e| GenerateError::destination(DestinationOp::List, destination.describe(), e))?;
    if !remaining.is_empty() {
        return Err(GenerateError::PurgeIncomplete {
            remaining: remaining.len(),
        });
    }

    tracing::info!(purged = names.len(), "destination purged");
    Ok(names.len())
}

/// Persist every artifact. Stops scheduling new writes after the first failure.
pub fn write_artifacts<D: Destination + ?Sized>(destination: &D, artifacts: &[Artifact]) -> Result<(), GenerateError> {
    artifacts
        .par_iter()
        .map(|artifact| -> Result<(), GenerateError> {
            let name = artifact.file_name();
            let write = to_pretty_bytes(&artifact.entity).and_then(|bytes| destination.write(&name, &bytes));
            write.map_err(|e| GenerateError::destination(DestinationOp::Write, name.as_str(), e))?;
            tracing::debug!(id = %artifact.id, file = %name, "artifact written");
            Ok(())
        })
        .collect::<Result<Vec<()>, _>>()?;
    Ok(())
}

/// Write the manifest listing `ids` in order.
pub fn finalize<D: Destination + ?Sized>(destination: &D, manifest_name: &str, ids: &[String]) -> Result<(), GenerateError> {
    to_pretty_bytes(&manifest_value(ids))
        .and_then(|bytes| destination.write(manifest_name, &bytes))
        .map_err(|e| GenerateError::destination(DestinationOp::Write, manifest_name, e))?;
    tracing::info!(entries = ids.len(), manifest = manifest_name, "manifest written");
    Ok(())
}
