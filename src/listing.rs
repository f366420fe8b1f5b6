//! Structured form of a round's report, for the JSON and YAML outputs.

use crate::model::{MarkerKind, Verb};
use crate::report::ReportFormatter;
use crate::round::Round;
use crate::scanner::DeclarationScanner;
use crate::sink::CollectingSink;
use serde::Serialize;

/// Every resource container of a round, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteListing {
    pub containers: Vec<ListedContainer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedContainer {
    pub name: String,
    pub path: String,
    pub methods: Vec<ListedMethod>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListedMethod {
    pub name: String,
    pub path: String,
    pub verb: Verb,
    /// `None` serializes as `null`, matching the text report's placeholder
    pub doc: Option<String>,
}

impl RouteListing {
    /// Scans `round` the same way the text report does and keeps the results.
    pub fn collect(round: &Round) -> Self {
        // Header notes are not part of the listing.
        let mut sink = CollectingSink::new();
        let scanned = DeclarationScanner::scan(round.annotated_with(MarkerKind::Path), &mut sink);

        let containers = scanned
            .into_iter()
            .map(|(container, methods)| ListedContainer {
                name: container.name().to_string(),
                path: container.path.to_string(),
                methods: methods
                    .iter()
                    .map(|method| ListedMethod {
                        name: method.name().to_string(),
                        path: method.path.to_string(),
                        verb: ReportFormatter::resolve_verb(method.declaration),
                        doc: method.doc().map(str::to_string),
                    })
                    .collect(),
            })
            .collect();

        Self { containers }
    }

    /// Total number of resource methods across all containers
    pub fn method_count(&self) -> usize {
        self.containers.iter().map(|c| c.methods.len()).sum()
    }
}
