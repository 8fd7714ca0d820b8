use std::sync::LazyLock;

use crate::dispatch::{synthesize_dispatch_names, DispatchNameSet};
use crate::schema::StanzaSchema;

/// Canonical cask stanza groups, in the order they must appear in a cask.
pub const CASK_STANZA_GROUPS: &[&[&str]] = &[
    &["arch", "on_arch_conditional"],
    &["version", "sha256"],
    &["language"],
    &["url", "appcast", "name", "desc", "homepage"],
    &["livecheck"],
    &["auto_updates", "conflicts_with", "depends_on", "container"],
    // Artifacts
    &[
        "suite",
        "app",
        "pkg",
        "installer",
        "binary",
        "manpage",
        "colorpicker",
        "dictionary",
        "font",
        "input_method",
        "internet_plugin",
        "keyboard_layout",
        "prefpane",
        "qlplugin",
        "mdimporter",
        "screen_saver",
        "service",
        "audio_unit_plugin",
        "vst_plugin",
        "vst3_plugin",
        "artifact",
        "stage_only",
    ],
    &["preflight"],
    &["postflight"],
    &["uninstall_preflight"],
    &["uninstall_postflight"],
    &["uninstall"],
    &["zap"],
    &["caveats"],
];

/// Supported macOS releases, newest first: (symbol, release number).
pub const MACOS_VERSIONS: &[(&str, &str)] = &[
    ("tahoe", "26"),
    ("sequoia", "15"),
    ("sonoma", "14"),
    ("ventura", "13"),
    ("monterey", "12"),
    ("big_sur", "11"),
    ("catalina", "10.15"),
    ("mojave", "10.14"),
    ("high_sierra", "10.13"),
    ("sierra", "10.12"),
    ("el_capitan", "10.11"),
];

static CASK_SCHEMA: LazyLock<StanzaSchema> = LazyLock::new(|| {
    StanzaSchema::from_groups(CASK_STANZA_GROUPS.iter().map(|group| group.iter().copied()))
        .unwrap_or_else(|e| panic!("built-in cask stanza table is malformed: {e}"))
});

static ON_SYSTEM_METHODS: LazyLock<DispatchNameSet> =
    LazyLock::new(|| synthesize_dispatch_names(macos_version_symbols()));

/// The built-in cask schema, built on first use.
pub fn cask_schema() -> &'static StanzaSchema {
    &CASK_SCHEMA
}

/// `on_arm`, `on_intel` and one `on_<release>` per entry of
/// [`MACOS_VERSIONS`].
pub fn on_system_methods() -> &'static DispatchNameSet {
    &ON_SYSTEM_METHODS
}

pub fn macos_version_symbols() -> impl Iterator<Item = &'static str> {
    MACOS_VERSIONS.iter().map(|&(symbol, _)| symbol)
}

/// Release number for a macOS symbol, e.g. `"10.15"` for `catalina`.
pub fn macos_release(symbol: &str) -> Option<&'static str> {
    MACOS_VERSIONS
        .iter()
        .find(|&&(s, _)| s == symbol)
        .map(|&(_, release)| release)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cask_schema_builds() {
        let schema = cask_schema();
        assert_eq!(schema.group_count(), CASK_STANZA_GROUPS.len());
        let total: usize = CASK_STANZA_GROUPS.iter().map(|g| g.len()).sum();
        assert_eq!(schema.len(), total);
    }

    #[test]
    fn cask_schema_is_shared() {
        assert!(std::ptr::eq(cask_schema(), cask_schema()));
    }

    #[test]
    fn on_system_methods_cover_every_release() {
        let methods = on_system_methods();
        assert_eq!(methods.len(), MACOS_VERSIONS.len() + 2);
        assert_eq!(methods.names()[0], "on_arm");
        assert_eq!(methods.names()[1], "on_intel");
        assert_eq!(methods.names()[2], "on_tahoe");
        assert!(methods.contains("on_el_capitan"));
    }

    #[test]
    fn release_lookup() {
        assert_eq!(macos_release("catalina"), Some("10.15"));
        assert_eq!(macos_release("sonoma"), Some("14"));
        assert_eq!(macos_release("leopard"), None);
    }
}
