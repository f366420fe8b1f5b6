use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Collects the Rust source files that make up one processing pass.
///
/// The walk is recursive and sorted by file name at each directory level, so two walks of
/// an unchanged tree yield the same file order. `target` and hidden directories (those
/// starting with `.`) are not entered.
///
/// # Example
///
/// ```no_run
/// use restdoc_from_source::walker::SourceWalker;
/// use std::path::PathBuf;
///
/// let walker = SourceWalker::new(PathBuf::from("./my-service"));
/// let result = walker.walk().unwrap();
/// println!("Found {} Rust files", result.rust_files.len());
/// ```
pub struct SourceWalker {
    root_path: PathBuf,
}

/// Files discovered by a [`SourceWalker`].
pub struct WalkResult {
    /// Paths to all discovered `.rs` files, in walk order
    pub rust_files: Vec<PathBuf>,
    /// Entries that could not be accessed
    pub warnings: Vec<String>,
}

impl SourceWalker {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Walks the tree and collects all `.rs` files.
    ///
    /// Inaccessible entries are recorded as warnings and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the root path cannot be read as a directory.
    pub fn walk(&self) -> Result<WalkResult> {
        std::fs::read_dir(&self.root_path)
            .with_context(|| format!("Failed to read directory: {}", self.root_path.display()))?;

        let mut rust_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                if e.path() == self.root_path {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                !file_name.starts_with('.') && file_name != "target"
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs") {
                        debug!("Found source file: {}", path.display());
                        rust_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(WalkResult {
            rust_files,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn file_names(result: &WalkResult) -> Vec<String> {
        result
            .rust_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn test_walk_collects_rust_files_only() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("resources.rs"), "pub struct A;").unwrap();
        fs::write(root.join("lib.rs"), "pub mod resources;").unwrap();
        fs::write(root.join("README.md"), "# Service").unwrap();
        fs::write(root.join("Cargo.toml"), "[package]").unwrap();

        let result = SourceWalker::new(root.to_path_buf()).walk().unwrap();

        assert_eq!(file_names(&result), vec!["lib.rs", "resources.rs"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_walk_is_sorted_and_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("src/api")).unwrap();
        fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
        fs::write(root.join("src/api/users.rs"), "").unwrap();
        fs::write(root.join("src/api/orders.rs"), "").unwrap();

        let result = SourceWalker::new(root.to_path_buf()).walk().unwrap();

        assert_eq!(file_names(&result), vec!["orders.rs", "users.rs", "main.rs"]);
    }

    #[test]
    fn test_walk_skips_target_and_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("target")).unwrap();
        fs::write(root.join("target/build.rs"), "fn main() {}").unwrap();
        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git/hook.rs"), "").unwrap();
        fs::write(root.join("main.rs"), "fn main() {}").unwrap();

        let result = SourceWalker::new(root.to_path_buf()).walk().unwrap();

        assert_eq!(file_names(&result), vec!["main.rs"]);
    }

    #[test]
    fn test_walk_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = SourceWalker::new(temp_dir.path().to_path_buf()).walk().unwrap();

        assert!(result.rust_files.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_walk_missing_root() {
        let result = SourceWalker::new(PathBuf::from("/nonexistent/service")).walk();

        assert!(result.is_err());
        assert!(result
            .err()
            .unwrap()
            .to_string()
            .contains("Failed to read directory"));
    }
}
