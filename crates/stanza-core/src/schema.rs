use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::cmp::Ordering;

use crate::error::SchemaError;
use crate::types::*;

/// Where a stanza sits: the index of its group, and its index in the
/// flattened canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    rank: usize,
    position: usize,
}

/// Canonical stanza order: the authored groups plus the indices derived
/// from them. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StanzaSchema {
    groups: Vec<StanzaGroup>,
    order: Vec<StanzaId>,
    #[serde(skip)]
    slots: HashMap<StanzaId, Slot>,
}

/// Build a schema from an ordered group table.
///
/// The table is checked in full before anything is derived: every group
/// must be non-empty and every stanza must appear exactly once.
pub fn build_schema<I>(groups: I) -> Result<StanzaSchema, SchemaError>
where
    I: IntoIterator<Item = StanzaGroup>,
{
    let groups: Vec<StanzaGroup> = groups.into_iter().collect();

    // Pass 1: validate the authored table.
    if groups.is_empty() {
        return Err(SchemaError::EmptyGroup);
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for group in &groups {
        if group.is_empty() {
            return Err(SchemaError::EmptyGroup);
        }
        for id in group {
            if !seen.insert(id.as_str()) {
                return Err(SchemaError::DuplicateStanza(id.clone()));
            }
        }
    }
    let stanza_count = seen.len();

    // Pass 2: derive the reverse index and the flattened order.
    let mut slots = HashMap::with_capacity(stanza_count);
    let mut order = Vec::with_capacity(stanza_count);
    for (rank, group) in groups.iter().enumerate() {
        for id in group {
            slots.insert(
                id.clone(),
                Slot {
                    rank,
                    position: order.len(),
                },
            );
            order.push(id.clone());
        }
    }

    tracing::debug!(
        groups = groups.len(),
        stanzas = order.len(),
        "built stanza schema"
    );

    Ok(StanzaSchema {
        groups,
        order,
        slots,
    })
}

impl StanzaSchema {
    /// Build from a literal table of stanza names.
    pub fn from_groups<G, S>(groups: G) -> Result<Self, SchemaError>
    where
        G: IntoIterator,
        G::Item: IntoIterator<Item = S>,
        S: Into<StanzaId>,
    {
        build_schema(
            groups
                .into_iter()
                .map(|group| group.into_iter().collect::<StanzaGroup>()),
        )
    }

    /// Groups in canonical order.
    pub fn groups(&self) -> &[StanzaGroup] {
        &self.groups
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of distinct stanzas.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false for a built schema.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// The group `id` was declared in, or `None` for an unknown stanza.
    pub fn group_of(&self, id: &str) -> Option<&StanzaGroup> {
        self.slots.get(id).map(|slot| &self.groups[slot.rank])
    }

    /// Index of the group containing `id`. Stanzas sharing a group share a
    /// rank.
    pub fn rank_of(&self, id: &str) -> Option<usize> {
        self.slots.get(id).map(|slot| slot.rank)
    }

    /// Index of `id` in [`canonical_order`](Self::canonical_order).
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slots.get(id).map(|slot| slot.position)
    }

    /// Compare where `a` and `b` belong in a cask.
    pub fn is_ordered_before(&self, a: &str, b: &str) -> StanzaOrdering {
        match (self.rank_of(a), self.rank_of(b)) {
            (Some(rank_a), Some(rank_b)) => match rank_a.cmp(&rank_b) {
                Ordering::Less => StanzaOrdering::Before,
                Ordering::Greater => StanzaOrdering::After,
                Ordering::Equal => StanzaOrdering::SameGroup,
            },
            _ => StanzaOrdering::Unknown,
        }
    }

    /// Every stanza, groups concatenated in declared order.
    pub fn canonical_order(&self) -> &[StanzaId] {
        &self.order
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
