use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Parses Rust source files into `syn` syntax trees.
///
/// # Example
///
/// ```no_run
/// use restdoc_from_source::parser::AstParser;
/// use std::path::Path;
///
/// let parsed = AstParser::parse_file(Path::new("src/resources.rs")).unwrap();
/// println!("Parsed {} items", parsed.syntax_tree.items.len());
/// ```
pub struct AstParser;

/// A successfully parsed Rust file.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// The parsed syntax tree
    pub syntax_tree: syn::File,
}

impl AstParser {
    /// Reads and parses a single Rust source file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file contains invalid Rust syntax
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Self::parse_source(path, &content)
    }

    /// Parses source text that is already in memory, labelling it with `path`.
    pub fn parse_source(path: &Path, content: &str) -> Result<ParsedFile> {
        let syntax_tree = syn::parse_file(content)
            .with_context(|| format!("Failed to parse Rust syntax in file: {}", path.display()))?;

        Ok(ParsedFile {
            path: path.to_path_buf(),
            syntax_tree,
        })
    }

    /// Parses multiple files, continuing past failures.
    ///
    /// Returns one result per input path, in input order. Failures are logged as warnings
    /// so a pass can still report the resources of every file that did parse.
    pub fn parse_files(paths: &[PathBuf]) -> Vec<Result<ParsedFile>> {
        debug!("Parsing {} files", paths.len());

        let results: Vec<Result<ParsedFile>> = paths
            .iter()
            .map(|path| {
                Self::parse_file(path).inspect_err(|e| {
                    warn!("Failed to parse {}: {:#}", path.display(), e);
                })
            })
            .collect();

        let success_count = results.iter().filter(|r| r.is_ok()).count();
        debug!(
            "Parsing complete: {} succeeded, {} failed",
            success_count,
            results.len() - success_count
        );

        results
    }
}
