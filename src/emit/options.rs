//! Emission options.

use crate::base::DEFAULT_INDENT_SIZE;

/// Prefix of every per-family factory name.
pub const FACTORY_PREFIX: &str = "Wrap";

/// Name of the factory used when the interface type is not statically known.
pub const CATCH_ALL_NAME: &str = "WrapObject";

/// Type of the interface-id parameter.
pub const REFERENCE_TYPE: &str = "REFIID";

/// Controls the names and layout of the generated header.
///
/// The defaults reproduce the capture layer's `dx12_wrapper_creators.h`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct EmitOptions {
    /// Prepended to a family's base name to form the factory name
    pub factory_prefix: String,
    /// Name of the family-independent factory
    pub catch_all_name: String,
    /// Type of the `riid` parameter
    pub reference_type: String,
    /// Project header included before the API headers
    pub utility_include: String,
    /// Namespaces opened around the declarations, outermost first
    pub namespaces: Vec<String>,
    /// Prefix of the `*_BEGIN_NAMESPACE` / `*_END_NAMESPACE` macros
    pub namespace_macro: String,
    /// Spaces per indentation level
    pub indent_size: usize,
    /// Indent declarations one level inside the namespaces
    pub indent_namespace_body: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            factory_prefix: FACTORY_PREFIX.to_string(),
            catch_all_name: CATCH_ALL_NAME.to_string(),
            reference_type: REFERENCE_TYPE.to_string(),
            utility_include: "util/defines.h".to_string(),
            namespaces: vec!["gfxrecon".to_string(), "encode".to_string()],
            namespace_macro: "GFXRECON".to_string(),
            indent_size: DEFAULT_INDENT_SIZE,
            indent_namespace_body: false,
        }
    }
}

impl EmitOptions {
    /// Set the factory name prefix.
    pub fn with_factory_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.factory_prefix = prefix.into();
        self
    }

    /// Set the catch-all factory name.
    pub fn with_catch_all_name(mut self, name: impl Into<String>) -> Self {
        self.catch_all_name = name.into();
        self
    }

    /// Set the interface-id parameter type.
    pub fn with_reference_type(mut self, ty: impl Into<String>) -> Self {
        self.reference_type = ty.into();
        self
    }

    /// Set the namespaces opened around the declarations.
    pub fn with_namespaces<I, S>(mut self, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.namespaces = namespaces.into_iter().map(Into::into).collect();
        self
    }

    /// Set the indentation step.
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    /// Indent declarations inside the namespaces.
    pub fn with_indented_namespace_body(mut self, indent: bool) -> Self {
        self.indent_namespace_body = indent;
        self
    }
}
