//! Reading visit records and shop configuration from disk.

use anyhow::{Context, Result};
use glazing_core::{ShopConfig, VisitRecord};
use std::path::{Path, PathBuf};

/// Read a visit record from a JSON file.
pub fn read_visit(path: &Path) -> Result<VisitRecord> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if content.trim().is_empty() {
        anyhow::bail!("Empty file: {}", path.display());
    }

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid visit record in {}", path.display()))
}

/// Load the shop configuration, falling back to the built-in tolerances.
pub fn load_config(path: Option<&Path>) -> Result<ShopConfig> {
    let Some(path) = path else {
        return Ok(ShopConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    ShopConfig::from_json(&content)
        .with_context(|| format!("Invalid shop configuration in {}", path.display()))
}

/// Project file written next to the input ("visit.json" -> "visit.project.json").
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("project.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VISIT: &str = r#"{
        "serviceType": "Espelho",
        "environment": "Lavabo",
        "width": 0.6,
        "height": 0.9,
        "glassType": "prata",
        "glassThickness": 4,
        "profileColor": "sem perfil",
        "client": {"name": "Rita"}
    }"#;

    fn temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_visit() {
        let file = temp_file(VISIT);
        let visit = read_visit(file.path()).unwrap();
        assert_eq!(visit.environment, "Lavabo");
        assert_eq!(visit.glass_thickness, 4);
    }

    #[test]
    fn test_read_visit_empty_file() {
        let file = temp_file("  \n");
        let err = read_visit(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Empty file"));
    }

    #[test]
    fn test_read_visit_missing_file() {
        let err = read_visit(Path::new("/nonexistent/visit.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), ShopConfig::default());
    }

    #[test]
    fn test_load_config_override() {
        let file = temp_file(r#"{"leaf_overlap": 0.04}"#);
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.leaf_overlap, 0.04);
        assert_eq!(config.module_cap, 1.5);
    }

    #[test]
    fn test_load_config_rejects_bad_values() {
        let file = temp_file(r#"{"pivot_door_ratio": 2.0}"#);
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("visits/suite.json")),
            PathBuf::from("visits/suite.project.json")
        );
        assert_eq!(
            default_output_path(Path::new("suite")),
            PathBuf::from("suite.project.json")
        );
    }
}
