//! Driving a complete generator run.

mod config;
mod generator;
#[cfg(feature = "interchange")]
mod loader;

use std::io;
#[cfg(feature = "interchange")]
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::hir::{codes, FamilyError};

pub use config::GeneratorConfig;
pub use generator::WrapperCreatorsGenerator;
#[cfg(feature = "interchange")]
pub use loader::{load_config, load_snapshot, parse_snapshot, InputFormat};

/// Errors from a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A final interface name could not be resolved to a family.
    #[error(transparent)]
    Family(#[from] FamilyError),

    /// The output sink rejected a write.
    #[error("[E0201] failed to write generated header: {0}")]
    Output(#[from] io::Error),

    /// An input file could not be read or decoded.
    #[cfg(feature = "interchange")]
    #[error("[E0301] failed to load `{}`: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl GenerateError {
    #[cfg(feature = "interchange")]
    fn load(path: &Path, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        GenerateError::Load {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// The stable diagnostic code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::Family(err) => err.code(),
            GenerateError::Output(_) => codes::OUTPUT_FAILED,
            #[cfg(feature = "interchange")]
            GenerateError::Load { .. } => codes::LOAD_FAILED,
        }
    }
}
