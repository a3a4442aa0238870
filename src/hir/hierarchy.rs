//! Hierarchy analysis — finding the final interfaces of the class graph.
//!
//! One scan over the snapshot collects two ordered sets:
//!
//! - `all_names`: every declared `class`, minus the root interface
//! - `parent_names`: every name some class inherits from
//!
//! The final (leaf) interfaces are `all_names \ parent_names`. They are a
//! view computed from the two sets on demand and never cached on the
//! declarations themselves.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use crate::base::ClassName;
use super::input::ApiSnapshot;

/// The interface every COM interface ultimately derives from.
pub const ROOT_INTERFACE: &str = "IUnknown";

/// Declaration kind of the records the analyzer considers.
pub const CLASS_KIND: &str = "class";

/// Ordered set hashed with Fx.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

// ============================================================================
// OPTIONS
// ============================================================================

/// What the analyzer treats as a class and which name it excludes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct AnalyzerOptions {
    /// Name that never enters either set
    pub root_interface: ClassName,
    /// Declaration kind that marks an interface
    pub class_kind: String,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            root_interface: ClassName::new(ROOT_INTERFACE),
            class_kind: CLASS_KIND.to_string(),
        }
    }
}

impl AnalyzerOptions {
    /// Set the excluded root interface.
    pub fn with_root_interface(mut self, name: impl Into<ClassName>) -> Self {
        self.root_interface = name.into();
        self
    }

    /// Set the declaration kind treated as an interface.
    pub fn with_class_kind(mut self, kind: impl Into<String>) -> Self {
        self.class_kind = kind.into();
        self
    }
}

// ============================================================================
// CLASS NAME SET
// ============================================================================

/// Names of all declared classes and of all classes used as a base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassNameSet {
    all_names: FxIndexSet<ClassName>,
    parent_names: FxIndexSet<ClassName>,
}

impl ClassNameSet {
    /// Create an empty set pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declared class name.
    pub fn add_class(&mut self, name: ClassName) {
        self.all_names.insert(name);
    }

    /// Record a name used as a base class.
    pub fn add_parent(&mut self, name: ClassName) {
        self.parent_names.insert(name);
    }

    /// All declared class names in first-seen order.
    pub fn all_names(&self) -> &FxIndexSet<ClassName> {
        &self.all_names
    }

    /// All base class names in first-seen order.
    pub fn parent_names(&self) -> &FxIndexSet<ClassName> {
        &self.parent_names
    }

    /// Check whether a declared class is never used as a base.
    pub fn is_final(&self, name: &str) -> bool {
        self.all_names.contains(name) && !self.parent_names.contains(name)
    }

    /// The final classes, in `all_names` order.
    pub fn leaves(&self) -> Vec<ClassName> {
        leaves(&self.all_names, &self.parent_names)
    }
}

/// Every name of `all_names` absent from `parent_names`, in `all_names` order.
pub fn leaves(
    all_names: &FxIndexSet<ClassName>,
    parent_names: &FxIndexSet<ClassName>,
) -> Vec<ClassName> {
    all_names
        .iter()
        .filter(|name| !parent_names.contains(name.as_str()))
        .cloned()
        .collect()
}

// ============================================================================
// ANALYSIS
// ============================================================================

/// Scan every header group of the snapshot and collect the class name sets.
///
/// Declarations of any kind other than [`AnalyzerOptions::class_kind`], and
/// the root interface itself, are skipped entirely.
pub fn analyze(snapshot: &ApiSnapshot, options: &AnalyzerOptions) -> ClassNameSet {
    let mut names = ClassNameSet::new();

    for (header, group) in snapshot.iter() {
        for decl in group.declarations() {
            if decl.declaration_kind != options.class_kind.as_str() {
                trace!(header, name = %decl.name, kind = %decl.declaration_kind, "skipping non-class declaration");
                continue;
            }
            if decl.name == options.root_interface {
                trace!(header, name = %decl.name, "skipping root interface");
                continue;
            }

            names.add_class(decl.name.clone());
            for parent in &decl.parents {
                names.add_parent(parent.decl_name.clone());
            }
        }
    }

    debug!(
        groups = snapshot.len(),
        classes = names.all_names.len(),
        parents = names.parent_names.len(),
        "analyzed class hierarchy"
    );

    names
}
