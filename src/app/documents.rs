//! Single-document conversions: journeys config, themes, tenant tutorial.
//!
//! Each reads one JSON document, encodes it, and writes one file. Nothing is
//! purged; the output file is simply replaced.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::domain::{DocumentConfig, EncodeOptions, Entity, TypedValue};
use crate::error::GenerateError;
use crate::io::{load_document, write_document};
use crate::records::{encode_journeys_config, encode_tenant, encode_themes};

/// Which standalone document to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    JourneysConfig,
    Themes,
    Tenant,
}

impl DocumentKind {
    pub fn default_input(self) -> &'static str {
        match self {
            DocumentKind::JourneysConfig => "journeysConfig.json",
            DocumentKind::Themes => "themeList.json",
            DocumentKind::Tenant => "tenant.json",
        }
    }

    pub fn default_output(self) -> &'static str {
        match self {
            DocumentKind::JourneysConfig => "datastore/journeysConfigDatastore.json",
            DocumentKind::Themes => "datastore/themes.json",
            DocumentKind::Tenant => "datastore/tutorial.json",
        }
    }

    /// Environment variables read when `--input` / `--output` are not given.
    pub fn env_vars(self) -> (&'static str, &'static str) {
        match self {
            DocumentKind::JourneysConfig => ("DSGEN_JOURNEYS_CONFIG_INPUT", "DSGEN_JOURNEYS_CONFIG_OUTPUT"),
            DocumentKind::Themes => ("DSGEN_THEMES_INPUT", "DSGEN_THEMES_OUTPUT"),
            DocumentKind::Tenant => ("DSGEN_TENANT_INPUT", "DSGEN_TENANT_OUTPUT"),
        }
    }

    /// Label used in error messages in place of a record id.
    fn label(self) -> &'static str {
        match self {
            DocumentKind::JourneysConfig => "journeys-config",
            DocumentKind::Themes => "themes",
            DocumentKind::Tenant => "tenant",
        }
    }
}

/// Convert one document and return the written path.
pub fn convert_document<'c>(kind: DocumentKind, config: &'c DocumentConfig) -> Result<&'c Path, GenerateError> {
    let doc = load_document(&config.input_path)?;
    let encoded = encode_document(kind, &doc, &config.encode)?;
    write_document(&config.output_path, &encoded)?;
    tracing::info!(kind = kind.label(), output = %config.output_path.display(), "document written");
    Ok(&config.output_path)
}

/// Encoded output of a standalone document, in the shape it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EncodedDocument {
    /// Written as `{"properties": ...}`.
    Properties(Entity),
    /// Written as a full tagged value.
    Tagged(TypedValue),
}

pub fn encode_document(
    kind: DocumentKind,
    doc: &Value,
    options: &EncodeOptions,
) -> Result<EncodedDocument, GenerateError> {
    let encoded = match kind {
        DocumentKind::JourneysConfig => encode_journeys_config(doc).map(EncodedDocument::Properties),
        DocumentKind::Themes => encode_themes(doc).map(EncodedDocument::Properties),
        DocumentKind::Tenant => encode_tenant(doc, options).map(EncodedDocument::Tagged),
    };
    encoded.map_err(|e| GenerateError::malformed(kind.label(), e))
}
