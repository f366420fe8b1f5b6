//! Serialization of route listings and writing of report output.

use crate::error::{Error, Result};
use crate::listing::RouteListing;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a route listing to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(listing: &RouteListing) -> Result<String> {
    debug!("Serializing route listing to YAML");
    Ok(serde_yaml::to_string(listing)?)
}

/// Serializes a route listing to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(listing: &RouteListing) -> Result<String> {
    debug!("Serializing route listing to JSON");
    Ok(serde_json::to_string_pretty(listing)?)
}

/// Writes string content to a file, creating parent directories as needed.
///
/// Existing files are overwritten.
///
/// # Errors
///
/// Returns an error if a parent directory cannot be created or the file cannot be written.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content).map_err(|source| Error::WriteError {
        file: path.to_path_buf(),
        source,
    })?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{ListedContainer, ListedMethod};
    use crate::model::Verb;
    use tempfile::TempDir;

    fn create_test_listing() -> RouteListing {
        RouteListing {
            containers: vec![ListedContainer {
                name: "UserResource".to_string(),
                path: "/users".to_string(),
                methods: vec![
                    ListedMethod {
                        name: "create".to_string(),
                        path: "/users".to_string(),
                        verb: Verb::Post,
                        doc: None,
                    },
                    ListedMethod {
                        name: "ping".to_string(),
                        path: "/users/ping".to_string(),
                        verb: Verb::Unknown,
                        doc: Some("health check".to_string()),
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_serialize_json() {
        let json = serialize_json(&create_test_listing()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let container = &parsed["containers"][0];
        assert_eq!(container["name"], "UserResource");
        assert_eq!(container["path"], "/users");
        assert_eq!(container["methods"][0]["verb"], "POST");
        assert!(container["methods"][0]["doc"].is_null());
        assert_eq!(container["methods"][1]["verb"], "UNKNOWN");
        assert_eq!(container["methods"][1]["doc"], "health check");

        assert!(json.lines().count() > 5, "JSON should be pretty-printed");
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&create_test_listing()).unwrap();

        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        let methods = &parsed["containers"][0]["methods"];
        assert_eq!(methods[0]["name"].as_str(), Some("create"));
        assert_eq!(methods[0]["verb"].as_str(), Some("POST"));
        assert!(methods[0]["doc"].is_null());
        assert_eq!(methods[1]["doc"].as_str(), Some("health check"));
    }

    #[test]
    fn test_serialize_empty_listing() {
        let listing = RouteListing { containers: vec![] };

        let json = serialize_json(&listing).unwrap();

        assert_eq!(json, "{\n  \"containers\": []\n}");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("docs").join("routes.txt");

        write_to_file("report", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "report");
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("routes.txt");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_write_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let result = write_to_file("report", temp_dir.path());

        assert!(matches!(result, Err(Error::WriteError { .. })));
    }
}
