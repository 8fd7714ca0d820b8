use serde::{Deserialize, Serialize, Serializer};
use std::borrow::{Borrow, Cow};
use std::fmt;

// ---------------------------------------------------------------------------
// Stanza identifiers
// ---------------------------------------------------------------------------

/// A cask DSL keyword such as `url` or `depends_on`.
///
/// Case-sensitive, compared by value. Built-in identifiers borrow their
/// text from the static catalogs; identifiers loaded from configuration
/// own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StanzaId(Cow<'static, str>);

impl StanzaId {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StanzaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StanzaId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StanzaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for StanzaId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for StanzaId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// ---------------------------------------------------------------------------
// Stanza groups
// ---------------------------------------------------------------------------

/// Stanzas that share one slot in the canonical order.
///
/// Members may appear in any relative order inside a cask; the group as a
/// whole is ordered against the other groups. A group is only checked for
/// emptiness and duplicates when it is handed to
/// [`build_schema`](crate::build_schema).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StanzaGroup(Vec<StanzaId>);

impl StanzaGroup {
    pub fn new(members: Vec<StanzaId>) -> Self {
        Self(members)
    }

    pub fn members(&self) -> &[StanzaId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|member| member.as_str() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StanzaId> {
        self.0.iter()
    }
}

impl<T: Into<StanzaId>> FromIterator<T> for StanzaGroup {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl From<Vec<StanzaId>> for StanzaGroup {
    fn from(members: Vec<StanzaId>) -> Self {
        Self(members)
    }
}

impl<'a> IntoIterator for &'a StanzaGroup {
    type Item = &'a StanzaId;
    type IntoIter = std::slice::Iter<'a, StanzaId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Ordering verdicts
// ---------------------------------------------------------------------------

/// Relative position of two stanzas in the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StanzaOrdering {
    /// The first stanza's group comes earlier.
    Before,
    /// The first stanza's group comes later.
    After,
    /// Both stanzas share a group; any relative order is legal.
    SameGroup,
    /// At least one of the stanzas is not part of the schema.
    Unknown,
}

// ---------------------------------------------------------------------------
// on_system options
// ---------------------------------------------------------------------------

/// CPU architecture tags accepted by `on_arm` / `on_intel` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Arm,
    Intel,
}

impl Arch {
    /// Architectures in dispatch order.
    pub const ALL: [Arch; 2] = [Arch::Arm, Arch::Intel];

    pub fn as_str(self) -> &'static str {
        match self {
            Arch::Arm => "arm",
            Arch::Intel => "intel",
        }
    }
}

/// A key an `on_<option>` block can be dispatched on: either an
/// architecture or an OS release symbol from the platform metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SystemOption {
    Arch(Arch),
    OsVersion(Cow<'static, str>),
}

impl SystemOption {
    pub fn os_version(tag: impl Into<Cow<'static, str>>) -> Self {
        SystemOption::OsVersion(tag.into())
    }

    pub fn tag(&self) -> &str {
        match self {
            SystemOption::Arch(arch) => arch.as_str(),
            SystemOption::OsVersion(tag) => tag,
        }
    }

    pub fn dispatch_name(&self) -> String {
        crate::dispatch::dispatch_name(self.tag())
    }
}

impl fmt::Display for SystemOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for SystemOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}
