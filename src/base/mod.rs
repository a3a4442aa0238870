//! Foundation types for the generator.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ClassName`] - Interface names
//! - [`Indent`] - Indentation of emitted code
//!
//! This module has NO dependencies on other crate modules.

mod indent;
mod name;

pub use indent::{Indent, DEFAULT_INDENT_SIZE};
pub use name::ClassName;

// Re-export for callers building their own name sets
pub use smol_str;
