//! One processing pass over a set of source files.

use crate::collector::DeclarationCollector;
use crate::model::{Declaration, MarkerKind};
use crate::parser::ParsedFile;
use std::path::PathBuf;

/// The declarations of one source file.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    /// Path to the source file
    pub path: PathBuf,
    /// Top-level declarations, in source order
    pub declarations: Vec<Declaration>,
}

/// All declarations visible in one pass, answering marker queries.
#[derive(Debug, Clone, Default)]
pub struct Round {
    units: Vec<CompilationUnit>,
}

impl Round {
    pub fn new(units: Vec<CompilationUnit>) -> Self {
        Self { units }
    }

    /// Builds a round from parsed files, keeping their order.
    pub fn from_parsed(parsed_files: &[ParsedFile]) -> Self {
        let units = parsed_files
            .iter()
            .map(|parsed| CompilationUnit {
                path: parsed.path.clone(),
                declarations: DeclarationCollector::collect(&parsed.syntax_tree),
            })
            .collect();

        Self { units }
    }

    pub fn units(&self) -> &[CompilationUnit] {
        &self.units
    }

    /// Returns every declaration carrying a marker of `kind`, at any nesting depth.
    ///
    /// Order is depth-first pre-order across units, then items, then members.
    pub fn annotated_with(&self, kind: MarkerKind) -> Vec<&Declaration> {
        let mut found = Vec::new();
        for unit in &self.units {
            for declaration in &unit.declarations {
                Self::walk(declaration, kind, &mut found);
            }
        }
        found
    }

    fn walk<'a>(declaration: &'a Declaration, kind: MarkerKind, found: &mut Vec<&'a Declaration>) {
        if declaration.has_marker(kind) {
            found.push(declaration);
        }
        for member in &declaration.members {
            Self::walk(member, kind, found);
        }
    }
}
