//! Semantic model of the interface metadata.
//!
//! ```text
//! input       → ApiSnapshot / HeaderGroup / InterfaceDecl
//!   ↓
//! hierarchy   → ClassNameSet, final (leaf) interfaces
//!   ↓
//! family      → ClassFamily per leaf
//! ```

mod diagnostics;
mod family;
mod hierarchy;
mod input;

pub use diagnostics::{codes, FamilyError};
pub use family::{resolve_family, ClassFamily};
pub use hierarchy::{
    analyze, leaves, AnalyzerOptions, ClassNameSet, FxIndexSet, CLASS_KIND, ROOT_INTERFACE,
};
pub use input::{ApiSnapshot, FxIndexMap, HeaderGroup, InterfaceDecl, ParentRef};
