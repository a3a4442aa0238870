//! # wrapper-creators
//!
//! Generates the declarations of the wrapper-creator functions used by a
//! COM/DX12 API capture layer: one `Wrap<Interface>` factory per final
//! interface family, plus the catch-all `WrapObject`.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project → Generator driver, configuration, snapshot loading
//!   ↓
//! emit    → Factory declarations and the header writer
//!   ↓
//! hir     → Interface metadata, hierarchy analysis, version families
//!   ↓
//! base    → Primitives (ClassName, Indent)
//! ```
//!
//! ## Usage
//!
//! ```
//! use wrapgen::{ApiSnapshot, HeaderGroup, InterfaceDecl, WrapperCreatorsGenerator};
//!
//! let snapshot = ApiSnapshot::new().with(
//!     "dxgi.h",
//!     HeaderGroup::new()
//!         .with(InterfaceDecl::class("IDXGIFactory").with_parent("IUnknown"))
//!         .with(InterfaceDecl::class("IDXGIFactory1").with_parent("IDXGIFactory")),
//! );
//!
//! let decls = WrapperCreatorsGenerator::default().declarations(&snapshot).unwrap();
//! assert_eq!(decls[1].to_string(), "void WrapIDXGIFactory(REFIID riid, IDXGIFactory** object);");
//! ```

/// Foundation types: ClassName, Indent
pub mod base;

/// Interface metadata and hierarchy analysis
pub mod hir;

/// Declaration emission and header layout
pub mod emit;

/// Generator driver and configuration
pub mod project;

pub use base::{ClassName, Indent};
pub use emit::{emit, EmitOptions, FactoryDeclaration, HeaderWriter};
pub use hir::{
    analyze, resolve_family, AnalyzerOptions, ApiSnapshot, ClassFamily, ClassNameSet,
    FamilyError, HeaderGroup, InterfaceDecl, ParentRef, ROOT_INTERFACE,
};
pub use project::{GenerateError, GeneratorConfig, WrapperCreatorsGenerator};
