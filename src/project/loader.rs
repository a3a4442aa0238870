//! Loading snapshots and configuration from JSON or YAML files.
//!
//! The upstream header parser dumps its result in the same shape the
//! generator consumes: a map of header name to `{ "classes": { ... } }`,
//! each class carrying `name`, `declaration_method` and `inherits`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::hir::ApiSnapshot;
use super::config::GeneratorConfig;
use super::GenerateError;

/// Serialization format of an input file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }
}

/// Load an API snapshot from a `.json`, `.yaml` or `.yml` file.
pub fn load_snapshot(path: impl Into<PathBuf>) -> Result<ApiSnapshot, GenerateError> {
    let path = path.into();
    let snapshot: ApiSnapshot = load_file(&path)?;
    debug!(path = %path.display(), groups = snapshot.len(), "loaded API snapshot");
    Ok(snapshot)
}

/// Load a generator configuration. Missing fields take their defaults.
pub fn load_config(path: impl Into<PathBuf>) -> Result<GeneratorConfig, GenerateError> {
    let path = path.into();
    load_file(&path)
}

/// Parse a snapshot from text in the given format.
pub fn parse_snapshot(text: &str, format: InputFormat) -> Result<ApiSnapshot, GenerateError> {
    parse(text, format, Path::new("<memory>"))
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T, GenerateError> {
    let text = std::fs::read_to_string(path).map_err(|e| GenerateError::load(path, e))?;
    parse(&text, InputFormat::from_path(path), path)
}

fn parse<T: DeserializeOwned>(text: &str, format: InputFormat, path: &Path) -> Result<T, GenerateError> {
    match format {
        InputFormat::Json => serde_json::from_str(text).map_err(|e| GenerateError::load(path, e)),
        InputFormat::Yaml => serde_yaml::from_str(text).map_err(|e| GenerateError::load(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hir::HeaderGroup;

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.yml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("a")), InputFormat::Json);
    }

    #[test]
    fn test_parse_json_snapshot() {
        let text = r#"{
            "d3d12.h": {
                "classes": {
                    "ID3D12Object": { "name": "ID3D12Object", "declaration_method": "class",
                                      "inherits": [{ "decl_name": "IUnknown" }] },
                    "D3D12_BOX": { "name": "D3D12_BOX", "declaration_method": "struct" }
                }
            }
        }"#;
        let snapshot = parse_snapshot(text, InputFormat::Json).unwrap();
        let group = snapshot.group("d3d12.h").unwrap();

        assert_eq!(group.len(), 2);
        assert_eq!(group.get("ID3D12Object").unwrap().parents[0].decl_name, "IUnknown");
        assert!(group.get("D3D12_BOX").unwrap().parents.is_empty());
    }

    #[test]
    fn test_wrapped_header_dict_is_rejected() {
        let text = r#"{
            "header_dict": {
                "d3d12.h": { "classes": {
                    "ID3D12Fence": { "name": "ID3D12Fence", "declaration_method": "class" }
                } }
            }
        }"#;
        let err = parse_snapshot(text, InputFormat::Json).unwrap_err();

        assert_eq!(err.code(), crate::hir::codes::LOAD_FAILED);
    }

    #[test]
    fn test_group_without_classes_is_rejected() {
        let err = parse_snapshot(r#"{ "d3d12.h": {} }"#, InputFormat::Json).unwrap_err();

        assert_eq!(err.code(), crate::hir::codes::LOAD_FAILED);
    }

    #[test]
    fn test_extra_class_fields_are_ignored() {
        let text = r#"{ "d3d12.h": { "classes": {
            "ID3D12Fence": { "name": "ID3D12Fence", "declaration_method": "class",
                             "methods": { "GetCompletedValue": {} }, "line_number": 42 }
        } } }"#;
        let snapshot = parse_snapshot(text, InputFormat::Json).unwrap();

        assert_eq!(snapshot.group("d3d12.h").map(HeaderGroup::len), Some(1));
    }

    #[test]
    fn test_parse_error_has_code() {
        let err = parse_snapshot("{ not json", InputFormat::Json).unwrap_err();

        assert_eq!(err.code(), crate::hir::codes::LOAD_FAILED);
        assert!(err.to_string().contains("<memory>"));
    }
}
