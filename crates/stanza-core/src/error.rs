//! Error types for stanza schema construction.

use crate::types::StanzaId;

/// A malformed group table. Raised only while building a schema; queries
/// against a built schema never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The same stanza is listed twice, in one group or across groups.
    #[error("duplicate stanza `{0}` in group table")]
    DuplicateStanza(StanzaId),

    /// The group table, or one of its groups, has no stanzas.
    #[error("empty stanza group in group table")]
    EmptyGroup,
}
