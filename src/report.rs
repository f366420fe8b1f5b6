//! Verb resolution and report line formatting.
//!
//! A report block for one container reads:
//!
//! ```text
//! Found resource container UserResource /users
//! 	create /users POST
//! 		Comment [null]
//! ```
//!
//! Methods without documentation show the literal `null` placeholder inside the brackets;
//! methods with an empty doc comment show nothing between them.

use crate::model::{Declaration, ResourceContainer, ResourceMethod, Verb};
use crate::scanner::DeclarationScanner;
use crate::sink::MessageSink;

/// Placeholder shown in place of absent documentation.
pub const ABSENT_DOC: &str = "null";

/// Formats resource containers and methods into report lines.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Resolves the HTTP verb of a method from its markers.
    ///
    /// Markers are checked in the fixed order POST, GET, DELETE, PUT and the first one
    /// present wins, whatever order the attributes were written in. Returns
    /// [`Verb::Unknown`] when none is present.
    // NOTE: several verb markers on one method are not reported as a conflict; the lower
    // priority ones are dropped.
    pub fn resolve_verb(method: &Declaration) -> Verb {
        Verb::PRIORITY
            .iter()
            .find(|(kind, _)| method.has_marker(*kind))
            .map(|(_, verb)| *verb)
            .unwrap_or(Verb::Unknown)
    }

    /// `\t<name> <path> <VERB>`
    pub fn method_line(method: &ResourceMethod<'_>) -> String {
        format!(
            "\t{} {} {}",
            method.name(),
            method.path,
            Self::resolve_verb(method.declaration)
        )
    }

    /// `\t\tComment [<doc>]`
    pub fn doc_line(method: &ResourceMethod<'_>) -> String {
        format!("\t\tComment [{}]", method.doc().unwrap_or(ABSENT_DOC))
    }

    /// Lines for the methods of one container: a method line then a doc line for each.
    pub fn method_lines(methods: &[ResourceMethod<'_>]) -> Vec<String> {
        methods
            .iter()
            .flat_map(|method| [Self::method_line(method), Self::doc_line(method)])
            .collect()
    }

    /// The complete block for one container, header first.
    pub fn format(container: &ResourceContainer<'_>, methods: &[ResourceMethod<'_>]) -> Vec<String> {
        let mut lines = Vec::with_capacity(1 + methods.len() * 2);
        lines.push(DeclarationScanner::header_line(container));
        lines.extend(Self::method_lines(methods));
        lines
    }

    /// Emits the method lines of one container to `sink`, one note per line.
    ///
    /// The container's header is not repeated here; the scanner has already emitted it.
    pub fn emit(methods: &[ResourceMethod<'_>], sink: &mut dyn MessageSink) {
        for line in Self::method_lines(methods) {
            sink.note(&line);
        }
    }
}
