//! Generator configuration.

use crate::emit::EmitOptions;
use crate::hir::AnalyzerOptions;

/// Everything that can be tuned about one generator run.
///
/// `GeneratorConfig::default()` reproduces the DX12 capture layer's header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct GeneratorConfig {
    /// Hierarchy analysis settings
    pub analyzer: AnalyzerOptions,
    /// Naming and layout of the emitted header
    pub emit: EmitOptions,
}

impl GeneratorConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the analyzer settings.
    pub fn with_analyzer(mut self, analyzer: AnalyzerOptions) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Replace the emission settings.
    pub fn with_emit(mut self, emit: EmitOptions) -> Self {
        self.emit = emit;
        self
    }
}
