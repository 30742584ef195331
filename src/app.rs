//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - runs the batch pipeline or a single-document conversion
//! - prints a short summary

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::documents::DocumentKind;
use crate::cli::{Command, DocumentArgs, JourneysArgs, StampArgs};
use crate::domain::{DocumentConfig, EncodeOptions, GenerateConfig};
use crate::error::AppError;
use crate::io::FsDestination;

pub mod documents;
pub mod pipeline;

/// Entry point for the `dsgen` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Journeys(args) => handle_journeys(&args),
        Command::JourneysConfig(args) => handle_document(DocumentKind::JourneysConfig, &args),
        Command::Themes(args) => handle_document(DocumentKind::Themes, &args),
        Command::Tenant(args) => handle_document(DocumentKind::Tenant, &args),
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_journeys(args: &JourneysArgs) -> Result<(), AppError> {
    let config = generate_config_from_args(args);
    let destination = FsDestination::new(&config.out_dir);
    let report = pipeline::run_generation(&config, &destination)?;
    println!("{}", crate::report::format_run_summary(&report, &destination));
    Ok(())
}

fn handle_document(kind: DocumentKind, args: &DocumentArgs) -> Result<(), AppError> {
    let config = document_config_from_args(kind, args);
    let written = documents::convert_document(kind, &config)?;
    println!("wrote {}", written.display());
    Ok(())
}

pub fn generate_config_from_args(args: &JourneysArgs) -> GenerateConfig {
    GenerateConfig {
        primary_path: args.journeys.clone(),
        reference_path: args.steps.clone(),
        out_dir: args.out_dir.clone(),
        manifest_name: args.manifest.clone(),
        encode: encode_options_from_args(&args.stamp),
    }
}

pub fn document_config_from_args(kind: DocumentKind, args: &DocumentArgs) -> DocumentConfig {
    document_config_with_env(kind, args, |name| std::env::var_os(name).map(PathBuf::from))
}

/// Paths resolve as flag, then the kind's `DSGEN_*` variable, then the kind default.
fn document_config_with_env(
    kind: DocumentKind,
    args: &DocumentArgs,
    env: impl Fn(&str) -> Option<PathBuf>,
) -> DocumentConfig {
    let (input_var, output_var) = kind.env_vars();
    let resolve = |flag: &Option<PathBuf>, var: &str, default: &str| {
        flag.clone()
            .or_else(|| env(var).filter(|p| !p.as_os_str().is_empty()))
            .unwrap_or_else(|| default.into())
    };
    DocumentConfig {
        input_path: resolve(&args.input, input_var, kind.default_input()),
        output_path: resolve(&args.output, output_var, kind.default_output()),
        encode: encode_options_from_args(&args.stamp),
    }
}

fn encode_options_from_args(stamp: &StampArgs) -> EncodeOptions {
    let generated_at = if stamp.stamp_now {
        Some(chrono::Utc::now().timestamp_millis())
    } else {
        stamp.date
    };
    EncodeOptions { generated_at }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_paths_fall_back_to_kind_defaults() {
        let args = DocumentArgs {
            input: None,
            output: Some(PathBuf::from("out/tutorial.json")),
            stamp: StampArgs::default(),
        };
        let config = document_config_from_args(DocumentKind::Tenant, &args);
        assert_eq!(config.input_path, PathBuf::from("tenant.json"));
        assert_eq!(config.output_path, PathBuf::from("out/tutorial.json"));
        assert_eq!(config.encode.generated_at, None);
    }

    #[test]
    fn document_paths_read_kind_specific_env_before_defaults() {
        let args = DocumentArgs {
            input: None,
            output: Some(PathBuf::from("flag/themes.json")),
            stamp: StampArgs::default(),
        };
        let env = |name: &str| match name {
            "DSGEN_THEMES_INPUT" => Some(PathBuf::from("env/themeList.json")),
            "DSGEN_THEMES_OUTPUT" => Some(PathBuf::from("env/themes.json")),
            _ => None,
        };

        let themes = document_config_with_env(DocumentKind::Themes, &args, env);
        assert_eq!(themes.input_path, PathBuf::from("env/themeList.json"));
        assert_eq!(themes.output_path, PathBuf::from("flag/themes.json"));

        let tenant = document_config_with_env(DocumentKind::Tenant, &args, env);
        assert_eq!(tenant.input_path, PathBuf::from("tenant.json"));
    }

    #[test]
    fn stamp_now_sets_a_timestamp() {
        let stamp = StampArgs {
            date: None,
            stamp_now: true,
        };
        assert!(encode_options_from_args(&stamp).generated_at.is_some());

        let fixed = StampArgs {
            date: Some(42),
            stamp_now: false,
        };
        assert_eq!(encode_options_from_args(&fixed).generated_at, Some(42));
    }
}
