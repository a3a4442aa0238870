//! The generator driver — one snapshot in, one header out.

use std::io::{self, Write};

use tracing::info;

use crate::emit::{emit, FactoryDeclaration, HeaderWriter};
use crate::hir::{analyze, ApiSnapshot, FamilyError};
use super::config::GeneratorConfig;
use super::GenerateError;

/// Generates the wrapper-creators header for one API snapshot.
///
/// Every run starts from fresh name sets, so the same snapshot always
/// produces byte-identical output.
#[derive(Clone, Debug, Default)]
pub struct WrapperCreatorsGenerator {
    config: GeneratorConfig,
}

impl WrapperCreatorsGenerator {
    /// Create a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Analyze the snapshot and build the ordered declaration list.
    pub fn declarations(&self, snapshot: &ApiSnapshot) -> Result<Vec<FactoryDeclaration>, FamilyError> {
        let names = analyze(snapshot, &self.config.analyzer);
        let leaves = names.leaves();
        info!(
            classes = names.all_names().len(),
            leaves = leaves.len(),
            "resolved final interfaces"
        );
        emit(&leaves, &self.config.emit)
    }

    /// Write the complete header for the snapshot.
    ///
    /// All declarations are resolved before the first byte is written, so a
    /// family error leaves `out` untouched.
    pub fn generate<W: Write>(&self, snapshot: &ApiSnapshot, out: W) -> Result<(), GenerateError> {
        let decls = self.declarations(snapshot)?;
        let mut writer = HeaderWriter::new(out, &self.config.emit);
        writer.write_all(snapshot.headers(), &decls)?;
        Ok(())
    }

    /// Render the complete header into a string.
    pub fn generate_to_string(&self, snapshot: &ApiSnapshot) -> Result<String, GenerateError> {
        let mut buf = Vec::new();
        self.generate(snapshot, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| GenerateError::Output(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
