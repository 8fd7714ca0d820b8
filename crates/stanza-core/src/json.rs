//! JSON configuration and export.
//!
//! Alternate group tables and platform metadata can be loaded from JSON,
//! and schemas exported for tooling outside the process. The `*_json`
//! functions take and return strings, wrapping results in a
//! `{ "success", "data", "error" }` envelope.

use serde::{Deserialize, Serialize};

use crate::catalogs::cask_schema;
use crate::dispatch::{synthesize_dispatch_names, DispatchNameSet};
use crate::error::SchemaError;
use crate::schema::StanzaSchema;
use crate::types::StanzaId;

// ---------------------------------------------------------------------------
// Configuration types (deserialized from JSON input)
// ---------------------------------------------------------------------------

/// A group table as authored in configuration.
///
/// Exported schemas also carry an `order` key; it is derived, so it is
/// ignored on load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaConfig {
    pub groups: Vec<Vec<String>>,
}

/// Platform metadata: OS release symbols in dispatch order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub versions: Vec<String>,
}

impl TryFrom<SchemaConfig> for StanzaSchema {
    type Error = SchemaError;

    fn try_from(config: SchemaConfig) -> Result<Self, Self::Error> {
        StanzaSchema::from_groups(
            config
                .groups
                .into_iter()
                .map(|group| group.into_iter().map(StanzaId::new)),
        )
    }
}

impl From<PlatformConfig> for DispatchNameSet {
    fn from(config: PlatformConfig) -> Self {
        synthesize_dispatch_names(config.versions)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
}

/// Load and build a schema from a JSON group table.
pub fn schema_from_json(json: &str) -> Result<StanzaSchema, JsonError> {
    let config: SchemaConfig = serde_json::from_str(json)?;
    Ok(StanzaSchema::try_from(config)?)
}

/// Load platform metadata and derive its dispatch names.
pub fn dispatch_names_from_json(json: &str) -> Result<DispatchNameSet, JsonError> {
    let config: PlatformConfig = serde_json::from_str(json)?;
    Ok(config.into())
}

// ---------------------------------------------------------------------------
// Result envelope (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct JsonResult<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

const SERIALIZATION_FAILURE: &str =
    r#"{"success":false,"error":"JSON serialization error"}"#;

fn envelope<T: Serialize, E: std::fmt::Display>(result: Result<T, E>) -> String {
    let output = match result {
        Ok(data) => serde_json::to_string(&JsonResult {
            success: true,
            data: Some(data),
            error: None,
        }),
        Err(e) => serde_json::to_string(&JsonResult::<()> {
            success: false,
            data: None,
            error: Some(e.to_string()),
        }),
    };
    output.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize JSON result");
        SERIALIZATION_FAILURE.to_string()
    })
}

// ---------------------------------------------------------------------------
// String-in, string-out API
// ---------------------------------------------------------------------------

/// Serialize a built schema as `{ "groups": [...], "order": [...] }`.
pub fn schema_to_json(schema: &StanzaSchema) -> String {
    envelope(Ok::<_, JsonError>(schema))
}

/// The built-in cask schema.
pub fn cask_schema_json() -> String {
    schema_to_json(cask_schema())
}

/// Validate a JSON group table and echo the built schema back.
///
/// Input: `{ "groups": [["version", "sha256"], ["url"]] }`
pub fn build_schema_json(groups_json: &str) -> String {
    envelope(schema_from_json(groups_json))
}

/// Derive dispatch names from JSON platform metadata.
///
/// Input: `{ "versions": ["sonoma", "ventura"] }`
pub fn dispatch_names_json(platform_json: &str) -> String {
    envelope(dispatch_names_from_json(platform_json))
}
