//! Message sinks the processor reports through.
//!
//! A sink is one-way: messages go in, nothing comes back. Implementations decide where the
//! text ends up (a writer, the logger, or memory).

use log::{info, warn};
use std::io::Write;

/// Severity of an emitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Informational output
    Note,
    /// Something was skipped but processing continued
    Warning,
}

/// One-directional message channel.
pub trait MessageSink {
    /// Emits a message of the given kind.
    fn print_message(&mut self, kind: MessageKind, message: &str);

    /// Emits an informational message.
    fn note(&mut self, message: &str) {
        self.print_message(MessageKind::Note, message);
    }
}

/// Writes each message as a line to an `io::Write`.
///
/// Warnings are prefixed with `warning: `. Write failures are logged and dropped.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(mut self) -> W {
        if let Err(e) = self.writer.flush() {
            warn!("Failed to flush output: {}", e);
        }
        self.writer
    }
}

impl<W: Write> MessageSink for WriterSink<W> {
    fn print_message(&mut self, kind: MessageKind, message: &str) {
        let result = match kind {
            MessageKind::Note => writeln!(self.writer, "{}", message),
            MessageKind::Warning => writeln!(self.writer, "warning: {}", message),
        };
        if let Err(e) = result {
            warn!("Failed to write message: {}", e);
        }
    }
}

/// Routes messages to the `log` facade.
pub struct LogSink;

impl MessageSink for LogSink {
    fn print_message(&mut self, kind: MessageKind, message: &str) {
        match kind {
            MessageKind::Note => info!("{}", message),
            MessageKind::Warning => warn!("{}", message),
        }
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub messages: Vec<(MessageKind, String)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text of every note, in emission order
    pub fn notes(&self) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|(kind, _)| *kind == MessageKind::Note)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl MessageSink for CollectingSink {
    fn print_message(&mut self, kind: MessageKind, message: &str) {
        self.messages.push((kind, message.to_string()));
    }
}
