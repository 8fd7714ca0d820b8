//! `on_<option>` method names for architecture and OS-release dispatch.
//!
//! A cask may branch on the machine it is installed on with blocks such as
//! `on_arm`, `on_intel` or `on_sonoma`. The legal block names are derived
//! from the two architecture tags followed by every OS release symbol the
//! platform metadata knows about.

use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::types::{Arch, SystemOption};

const DISPATCH_PREFIX: &str = "on_";

/// Format the dispatch method name for one option tag.
pub fn dispatch_name(tag: &str) -> String {
    format!("{DISPATCH_PREFIX}{tag}")
}

/// The full option sequence: architectures first, then `platform_versions`
/// in the order given.
pub fn system_options<I, T>(platform_versions: I) -> Vec<SystemOption>
where
    I: IntoIterator<Item = T>,
    T: Into<Cow<'static, str>>,
{
    Arch::ALL
        .into_iter()
        .map(SystemOption::Arch)
        .chain(platform_versions.into_iter().map(SystemOption::os_version))
        .collect()
}

/// Derive the dispatch names for `[arm, intel, ...platform_versions]`.
///
/// One name per option, order preserved. Repeated version tags yield
/// repeated names.
pub fn synthesize_dispatch_names<I, T>(platform_versions: I) -> DispatchNameSet
where
    I: IntoIterator<Item = T>,
    T: Into<Cow<'static, str>>,
{
    DispatchNameSet::from_options(system_options(platform_versions))
}

/// Ordered dispatch method names with a reverse lookup to their options.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchNameSet {
    names: Vec<String>,
    options: Vec<SystemOption>,
    lookup: HashMap<String, usize>,
}

impl DispatchNameSet {
    pub fn from_options(options: Vec<SystemOption>) -> Self {
        let names: Vec<String> = options.iter().map(SystemOption::dispatch_name).collect();

        let mut lookup = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if lookup.contains_key(name) {
                tracing::warn!(name = %name, "duplicate on_system dispatch name");
                continue;
            }
            lookup.insert(name.clone(), i);
        }

        tracing::debug!(options = options.len(), "synthesized on_system dispatch names");

        Self {
            names,
            options,
            lookup,
        }
    }

    /// Names in option order, duplicates included.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn options(&self) -> &[SystemOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false: the architecture names are unconditional.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// The option a dispatch name was derived from. For repeated names this
    /// is the first occurrence.
    pub fn option_for(&self, name: &str) -> Option<&SystemOption> {
        self.lookup.get(name).map(|&i| &self.options[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Serialize for DispatchNameSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.names)
    }
}
