//! Factory declarations — one per final interface, plus the catch-all.

use std::fmt;

use smol_str::{format_smolstr, SmolStr};
use tracing::debug;

use crate::base::ClassName;
use crate::hir::{resolve_family, ClassFamily, FamilyError};
use super::options::EmitOptions;

/// Object parameter type of the catch-all factory.
const CATCH_ALL_OBJECT_TYPE: &str = "void**";

/// A generated `void Wrap...(REFIID riid, T** object);` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactoryDeclaration {
    /// Factory function name
    name: SmolStr,
    /// Type of the `riid` parameter
    reference_type: SmolStr,
    /// Type of the `object` parameter
    object_type: SmolStr,
    /// The family this factory wraps; `None` for the catch-all
    family: Option<ClassFamily>,
}

impl FactoryDeclaration {
    /// The family-independent `WrapObject` declaration.
    pub fn catch_all(options: &EmitOptions) -> Self {
        Self {
            name: SmolStr::new(&options.catch_all_name),
            reference_type: SmolStr::new(&options.reference_type),
            object_type: SmolStr::new_static(CATCH_ALL_OBJECT_TYPE),
            family: None,
        }
    }

    /// The factory for a version family, named and typed after its first member.
    pub fn for_family(family: ClassFamily, options: &EmitOptions) -> Self {
        let first = family.first();
        Self {
            name: format_smolstr!("{}{}", options.factory_prefix, first),
            reference_type: SmolStr::new(&options.reference_type),
            object_type: format_smolstr!("{first}**"),
            family: Some(family),
        }
    }

    /// Factory function name, e.g. `WrapIDXGIFactory`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Object parameter type, e.g. `IDXGIFactory**`.
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The wrapped family, or `None` for the catch-all.
    pub fn family(&self) -> Option<&ClassFamily> {
        self.family.as_ref()
    }

    /// Check whether this is the catch-all declaration.
    pub fn is_catch_all(&self) -> bool {
        self.family.is_none()
    }
}

impl fmt::Display for FactoryDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "void {}({} riid, {} object);",
            self.name, self.reference_type, self.object_type
        )
    }
}

/// Build the declaration list: the catch-all first, then one factory per
/// leaf in leaf order.
///
/// Stops at the first leaf whose family cannot be resolved.
pub fn emit(
    leaves: &[ClassName],
    options: &EmitOptions,
) -> Result<Vec<FactoryDeclaration>, FamilyError> {
    let mut decls = Vec::with_capacity(leaves.len() + 1);
    decls.push(FactoryDeclaration::catch_all(options));

    for leaf in leaves {
        let family = resolve_family(leaf)?;
        let decl = FactoryDeclaration::for_family(family, options);
        debug!(leaf = %leaf, factory = decl.name(), "emitting wrapper factory");
        decls.push(decl);
    }

    Ok(decls)
}
