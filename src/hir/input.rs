//! Input types: the parsed interface metadata the generator runs over.
//!
//! The snapshot is produced by an upstream header parser. Nothing here
//! validates it; the analyzer only reads it.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::base::ClassName;

/// Ordered map hashed with Fx, used for every keyed collection in the input.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// A reference from an interface to one of its base interfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ParentRef {
    /// Name of the base interface as written in the declaration
    pub decl_name: ClassName,
}

impl ParentRef {
    /// Create a parent reference.
    pub fn new(decl_name: impl Into<ClassName>) -> Self {
        Self {
            decl_name: decl_name.into(),
        }
    }
}

/// One declared interface, struct, enum or other record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceDecl {
    /// Declared name
    pub name: ClassName,
    /// How it was declared: `class`, `struct`, `enum`, ...
    #[cfg_attr(feature = "interchange", serde(rename = "declaration_method"))]
    pub declaration_kind: SmolStr,
    /// Base interfaces in declaration order
    #[cfg_attr(feature = "interchange", serde(default, rename = "inherits"))]
    pub parents: Vec<ParentRef>,
}

impl InterfaceDecl {
    /// Create a `class` declaration with no parents.
    pub fn class(name: impl Into<ClassName>) -> Self {
        Self::new(name, "class")
    }

    /// Create a declaration of the given kind with no parents.
    pub fn new(name: impl Into<ClassName>, declaration_kind: impl AsRef<str>) -> Self {
        Self {
            name: name.into(),
            declaration_kind: SmolStr::new(declaration_kind),
            parents: Vec::new(),
        }
    }

    /// Add a base interface.
    pub fn with_parent(mut self, parent: impl Into<ClassName>) -> Self {
        self.parents.push(ParentRef::new(parent));
        self
    }
}

/// The declarations sourced from one header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(deny_unknown_fields))]
pub struct HeaderGroup {
    /// Declaration key → declaration, in header order
    classes: FxIndexMap<SmolStr, InterfaceDecl>,
}

impl HeaderGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration keyed by its own name.
    pub fn insert(&mut self, decl: InterfaceDecl) {
        let key = SmolStr::new(decl.name.as_str());
        self.insert_keyed(key, decl);
    }

    /// Add a declaration under an explicit key.
    ///
    /// Re-inserting a key replaces the declaration but keeps its position.
    pub fn insert_keyed(&mut self, key: impl Into<SmolStr>, decl: InterfaceDecl) {
        self.classes.insert(key.into(), decl);
    }

    /// Builder form of [`HeaderGroup::insert`].
    pub fn with(mut self, decl: InterfaceDecl) -> Self {
        self.insert(decl);
        self
    }

    /// Look up a declaration by key.
    pub fn get(&self, key: &str) -> Option<&InterfaceDecl> {
        self.classes.get(key)
    }

    /// Iterate over declarations in header order.
    pub fn declarations(&self) -> impl Iterator<Item = &InterfaceDecl> + '_ {
        self.classes.values()
    }

    /// Get the number of declarations.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the group is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The complete metadata for one generator run.
///
/// Groups are kept in insertion order, which is the order headers are
/// included and the order leaf declarations are emitted in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(transparent))]
pub struct ApiSnapshot {
    /// Header name → declarations
    groups: FxIndexMap<SmolStr, HeaderGroup>,
}

impl ApiSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header group.
    ///
    /// Adding a header that already exists replaces its content in place.
    pub fn insert(&mut self, header: impl Into<SmolStr>, group: HeaderGroup) {
        self.groups.insert(header.into(), group);
    }

    /// Builder form of [`ApiSnapshot::insert`].
    pub fn with(mut self, header: impl Into<SmolStr>, group: HeaderGroup) -> Self {
        self.insert(header, group);
        self
    }

    /// Get the group for a header.
    pub fn group(&self, header: &str) -> Option<&HeaderGroup> {
        self.groups.get(header)
    }

    /// Iterate over all groups in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderGroup)> + '_ {
        self.groups.iter().map(|(name, group)| (name.as_str(), group))
    }

    /// Iterate over header names in order.
    pub fn headers(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(|name| name.as_str())
    }

    /// Iterate over every declaration of every group, in order.
    pub fn declarations(&self) -> impl Iterator<Item = &InterfaceDecl> + '_ {
        self.groups.values().flat_map(HeaderGroup::declarations)
    }

    /// Get the number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if the snapshot has no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
