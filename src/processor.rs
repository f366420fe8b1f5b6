//! Processors invoked once per round by the host.

use crate::model::MarkerKind;
use crate::report::ReportFormatter;
use crate::round::Round;
use crate::scanner::DeclarationScanner;
use crate::sink::MessageSink;
use log::debug;

/// A handler registered for one marker kind.
pub trait Processor {
    /// The marker kind this processor is invoked for.
    fn supported_marker(&self) -> MarkerKind;

    /// Processes one round, reporting through `sink`.
    ///
    /// Returns `true` if the processor claims the marker for this round, keeping other
    /// processors from handling it.
    fn process(&mut self, round: &Round, sink: &mut dyn MessageSink) -> bool;
}

/// Reports every resource container and resource method of a round.
///
/// Each container's header is emitted when the container is found, immediately followed
/// by its method and doc lines, before the next container is looked at.
#[derive(Debug, Default)]
pub struct RestDocumentationProcessor;

impl RestDocumentationProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Processor for RestDocumentationProcessor {
    fn supported_marker(&self) -> MarkerKind {
        MarkerKind::Path
    }

    fn process(&mut self, round: &Round, sink: &mut dyn MessageSink) -> bool {
        let candidates = round.annotated_with(self.supported_marker());
        debug!("Processing {} path-marked declarations", candidates.len());

        for declaration in candidates {
            if let Some((_, methods)) = DeclarationScanner::scan_container(declaration, sink) {
                ReportFormatter::emit(&methods, sink);
            }
        }

        false
    }
}
