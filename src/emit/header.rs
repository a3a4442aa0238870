//! Header writer — wraps the declaration list in includes and namespaces.

use std::io::{self, Write};

use crate::base::Indent;
use super::declaration::FactoryDeclaration;
use super::options::EmitOptions;

/// Writes the wrapper-creators header to an output sink.
///
/// Layout, top to bottom: the utility include, one `#include <...>` per API
/// header, the namespace openers, the catch-all and per-family declarations
/// each followed by a blank line, then the namespace closers.
pub struct HeaderWriter<'a, W: Write> {
    out: W,
    options: &'a EmitOptions,
    indent: Indent,
}

impl<'a, W: Write> HeaderWriter<'a, W> {
    /// Create a writer with zero indentation.
    pub fn new(out: W, options: &'a EmitOptions) -> Self {
        Self {
            out,
            options,
            indent: Indent::new(options.indent_size),
        }
    }

    /// Write the include block.
    pub fn write_includes<'h>(&mut self, headers: impl IntoIterator<Item = &'h str>) -> io::Result<()> {
        writeln!(self.out, "#include \"{}\"", self.options.utility_include)?;
        writeln!(self.out)?;
        for header in headers {
            writeln!(self.out, "#include <{header}>")?;
        }
        writeln!(self.out)
    }

    /// Open every configured namespace, outermost first.
    pub fn begin_namespaces(&mut self) -> io::Result<()> {
        for ns in &self.options.namespaces {
            writeln!(self.out, "{}_BEGIN_NAMESPACE({ns})", self.options.namespace_macro)?;
        }
        if self.options.indent_namespace_body {
            self.indent = self.indent.increment();
        }
        Ok(())
    }

    /// Close every configured namespace, innermost first.
    pub fn end_namespaces(&mut self) -> io::Result<()> {
        if self.options.indent_namespace_body {
            self.indent = self.indent.decrement();
        }
        for ns in self.options.namespaces.iter().rev() {
            writeln!(self.out, "{}_END_NAMESPACE({ns})", self.options.namespace_macro)?;
        }
        Ok(())
    }

    /// Write the declarations at the current indentation.
    ///
    /// The block opens with a blank line and every declaration is followed
    /// by one.
    pub fn write_declarations(&mut self, decls: &[FactoryDeclaration]) -> io::Result<()> {
        writeln!(self.out)?;
        for decl in decls {
            writeln!(self.out, "{}{decl}", self.indent)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Write a complete header.
    pub fn write_all<'h>(
        &mut self,
        headers: impl IntoIterator<Item = &'h str>,
        decls: &[FactoryDeclaration],
    ) -> io::Result<()> {
        self.write_includes(headers)?;
        self.begin_namespaces()?;
        self.write_declarations(decls)?;
        self.end_namespaces()?;
        self.out.flush()
    }

    /// Recover the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}
