//! Code emission — turning final interfaces into C++ declarations.
//!
//! [`emit`] builds the ordered declaration list; [`HeaderWriter`] places it
//! between the include block and the namespace macros.

mod declaration;
mod header;
mod options;

pub use declaration::{emit, FactoryDeclaration};
pub use header::HeaderWriter;
pub use options::{EmitOptions, CATCH_ALL_NAME, FACTORY_PREFIX, REFERENCE_TYPE};
