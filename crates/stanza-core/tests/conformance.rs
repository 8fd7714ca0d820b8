use pretty_assertions::assert_eq;
use stanza_core::{
    build_schema, cask_schema, synthesize_dispatch_names, SchemaError, StanzaGroup, StanzaId,
    StanzaOrdering, StanzaSchema, CASK_STANZA_GROUPS,
};
use std::collections::HashSet;

fn names(schema: &StanzaSchema) -> Vec<&str> {
    schema.canonical_order().iter().map(StanzaId::as_str).collect()
}

// ---------------------------------------------------------------------------
// Partition
// ---------------------------------------------------------------------------

#[test]
fn every_stanza_maps_to_its_declared_group() {
    let schema = cask_schema();
    for (rank, group) in schema.groups().iter().enumerate() {
        for id in group {
            let owner = schema.group_of(id.as_str()).expect("declared stanza");
            assert!(std::ptr::eq(owner, group), "{id} mapped to wrong group");
            assert_eq!(schema.rank_of(id.as_str()), Some(rank));
        }
    }
}

#[test]
fn canonical_order_lists_each_stanza_once() {
    let schema = cask_schema();
    let order = names(schema);
    let unique: HashSet<&str> = order.iter().copied().collect();
    assert_eq!(unique.len(), order.len());

    let flattened: Vec<&str> = CASK_STANZA_GROUPS.iter().flat_map(|g| g.iter().copied()).collect();
    assert_eq!(order, flattened);
}

#[test]
fn positions_index_canonical_order() {
    let schema = cask_schema();
    for (i, id) in schema.canonical_order().iter().enumerate() {
        assert_eq!(schema.position_of(id.as_str()), Some(i));
    }
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[test]
fn earlier_groups_precede_later_groups() {
    let schema = cask_schema();
    let groups = schema.groups();
    for (i, earlier) in groups.iter().enumerate() {
        for later in &groups[i + 1..] {
            for a in earlier {
                for b in later {
                    assert_eq!(
                        schema.is_ordered_before(a.as_str(), b.as_str()),
                        StanzaOrdering::Before
                    );
                    assert_eq!(
                        schema.is_ordered_before(b.as_str(), a.as_str()),
                        StanzaOrdering::After
                    );
                }
            }
        }
    }
}

#[test]
fn same_group_is_symmetric() {
    let schema = cask_schema();
    for group in schema.groups() {
        for a in group {
            for b in group {
                assert_eq!(
                    schema.is_ordered_before(a.as_str(), b.as_str()),
                    StanzaOrdering::SameGroup
                );
            }
        }
    }
}

#[test]
fn cask_ordering_samples() {
    let schema = cask_schema();
    assert_eq!(schema.is_ordered_before("version", "url"), StanzaOrdering::Before);
    assert_eq!(schema.is_ordered_before("zap", "uninstall"), StanzaOrdering::After);
    assert_eq!(schema.is_ordered_before("app", "binary"), StanzaOrdering::SameGroup);
    assert_eq!(
        schema.is_ordered_before("depends_on", "caveats"),
        StanzaOrdering::Before
    );
    assert_eq!(schema.rank_of("arch"), Some(0));
    assert_eq!(schema.rank_of("caveats"), Some(13));
}

#[test]
fn unknown_stanzas() {
    let schema = cask_schema();
    for unknown in ["licence", "Version", "on_arm", ""] {
        assert!(schema.group_of(unknown).is_none());
        assert_eq!(schema.rank_of(unknown), None);
        assert_eq!(schema.is_ordered_before(unknown, "url"), StanzaOrdering::Unknown);
        assert_eq!(schema.is_ordered_before("url", unknown), StanzaOrdering::Unknown);
    }
}

#[test]
fn repeated_queries_agree() {
    let schema = cask_schema();
    let first = (
        schema.rank_of("livecheck"),
        schema.is_ordered_before("livecheck", "app"),
        names(schema),
    );
    for _ in 0..3 {
        assert_eq!(
            first,
            (
                schema.rank_of("livecheck"),
                schema.is_ordered_before("livecheck", "app"),
                names(schema),
            )
        );
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_small_table() {
    let schema =
        StanzaSchema::from_groups([vec!["version", "sha256"], vec!["url", "homepage"]]).unwrap();
    assert_eq!(schema.rank_of("sha256"), Some(0));
    assert_eq!(schema.rank_of("url"), Some(1));
    assert_eq!(schema.is_ordered_before("version", "url"), StanzaOrdering::Before);
    assert_eq!(
        schema.is_ordered_before("sha256", "version"),
        StanzaOrdering::SameGroup
    );
    assert_eq!(names(&schema), vec!["version", "sha256", "url", "homepage"]);
}

#[test]
fn duplicate_stanza_fails_construction() {
    let groups = vec![
        StanzaGroup::new(vec![StanzaId::new("version")]),
        StanzaGroup::new(vec![StanzaId::new("version"), StanzaId::new("sha256")]),
    ];
    assert_eq!(
        build_schema(groups),
        Err(SchemaError::DuplicateStanza(StanzaId::new("version")))
    );
}

#[test]
fn empty_group_fails_construction() {
    let groups = vec![StanzaGroup::new(vec![StanzaId::new("a")]), StanzaGroup::default()];
    assert_eq!(build_schema(groups), Err(SchemaError::EmptyGroup));
}

#[test]
fn error_messages() {
    assert_eq!(
        SchemaError::DuplicateStanza(StanzaId::new("url")).to_string(),
        "duplicate stanza `url` in group table"
    );
    assert_eq!(
        SchemaError::EmptyGroup.to_string(),
        "empty stanza group in group table"
    );
}

// ---------------------------------------------------------------------------
// Dispatch names
// ---------------------------------------------------------------------------

#[test]
fn dispatch_names_preserve_order() {
    let set = synthesize_dispatch_names(["ventura", "monterey"]);
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec!["on_arm", "on_intel", "on_ventura", "on_monterey"]
    );
}

#[test]
fn dispatch_names_are_not_stanzas() {
    let schema = cask_schema();
    for name in stanza_core::on_system_methods().iter() {
        assert!(!schema.contains(name), "{name} collides with a stanza");
    }
}
