//! Command-line parsing for the datastore generator.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the encoding/pipeline code. Every path can also come from a
//! `DSGEN_*` environment variable (a `.env` file is loaded first).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::DEFAULT_MANIFEST_NAME;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "dsgen",
    version,
    about = "Convert journey, theme and tenant configuration into datastore entity files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Regenerate one artifact per journey plus the journeys manifest.
    ///
    /// The output directory is purged first, so removed journeys disappear.
    Journeys(JourneysArgs),
    /// Convert the journeys landing configuration.
    JourneysConfig(DocumentArgs),
    /// Convert the theme palettes.
    Themes(DocumentArgs),
    /// Convert the tenant tutorial.
    Tenant(DocumentArgs),
}

#[derive(Debug, Args, Clone)]
pub struct JourneysArgs {
    /// Primary collection: JSON array of journeys.
    #[arg(long, env = "DSGEN_JOURNEYS", default_value = "journeys.json")]
    pub journeys: PathBuf,

    /// Reference table: JSON object mapping journey id to its steps.
    #[arg(long, env = "DSGEN_STEPS", default_value = "journey-steps.json")]
    pub steps: PathBuf,

    /// Output directory (purged on every run).
    #[arg(long, env = "DSGEN_OUT_DIR", default_value = "datastore")]
    pub out_dir: PathBuf,

    /// Manifest file name inside the output directory.
    #[arg(long, default_value = DEFAULT_MANIFEST_NAME)]
    pub manifest: String,

    #[command(flatten)]
    pub stamp: StampArgs,
}

/// Options for single-document conversions.
#[derive(Debug, Args, Clone)]
pub struct DocumentArgs {
    /// Input JSON document (else `DSGEN_<KIND>_INPUT`, else a per-subcommand default).
    #[arg(long, value_name = "JSON")]
    pub input: Option<PathBuf>,

    /// Output file (else `DSGEN_<KIND>_OUTPUT`, else a default under `datastore/`).
    #[arg(long, value_name = "JSON")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub stamp: StampArgs,
}

/// Generation timestamp. Without one, `date`/`added` are omitted and runs are reproducible.
#[derive(Debug, Args, Clone, Default)]
pub struct StampArgs {
    /// Stamp this epoch-millis timestamp into generated entities.
    #[arg(long, value_name = "MILLIS", env = "DSGEN_DATE", conflicts_with = "stamp_now")]
    pub date: Option<i64>,

    /// Stamp the current time into generated entities.
    #[arg(long)]
    pub stamp_now: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journeys_defaults_match_legacy_layout() {
        let cli = Cli::try_parse_from(["dsgen", "journeys", "--steps", "steps-prod.json"]).unwrap();
        let Command::Journeys(args) = cli.command else {
            panic!("expected journeys subcommand");
        };
        assert_eq!(args.steps, PathBuf::from("steps-prod.json"));
        assert_eq!(args.manifest, DEFAULT_MANIFEST_NAME);
        assert!(!args.stamp.stamp_now);
    }

    #[test]
    fn date_and_stamp_now_conflict() {
        let parsed = Cli::try_parse_from(["dsgen", "themes", "--date", "5", "--stamp-now"]);
        assert!(parsed.is_err());
    }
}
