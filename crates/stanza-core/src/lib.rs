//! Canonical stanza order for cask definitions.
//!
//! A [`StanzaSchema`] partitions the cask DSL keywords into ordered groups
//! and answers ordering queries for validators. [`synthesize_dispatch_names`]
//! derives the `on_<option>` block names a cask may use.

pub mod catalogs;
pub mod dispatch;
pub mod error;
pub mod json;
pub mod schema;
pub mod types;

pub use catalogs::{cask_schema, on_system_methods, CASK_STANZA_GROUPS, MACOS_VERSIONS};
pub use dispatch::{dispatch_name, synthesize_dispatch_names, DispatchNameSet};
pub use error::SchemaError;
pub use json::{
    build_schema_json, cask_schema_json, dispatch_names_json, schema_from_json, JsonError,
};
pub use schema::{build_schema, StanzaSchema};
pub use types::*;
