//! Declaration metadata model.
//!
//! These are plain, read-only records describing the items of a source tree: what kind of
//! item it is, its simple name, the markers (attributes) attached to it, its documentation
//! text and the members it encloses. The scanner and formatter only ever read them, which
//! keeps the core independent of `syn` and testable from hand-built values.

use serde::Serialize;
use std::fmt;

/// Structural kind of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// An item that groups other declarations (inline `mod`, `impl` block, `trait`)
    Container,
    /// A function-like item (free `fn`, associated `fn`, trait `fn`)
    Method,
    /// Anything else (struct, enum, const, use, ...)
    Other,
}

/// The kind of a marker, without its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Routing path marker
    Path,
    /// HTTP GET marker
    Get,
    /// HTTP POST marker
    Post,
    /// HTTP PUT marker
    Put,
    /// HTTP DELETE marker
    Delete,
    /// Any attribute this tool does not recognize
    Other,
}

/// A tag attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// `#[path("/users")]` carrying the route path
    Path(String),
    Get,
    Post,
    Put,
    Delete,
    /// Unrecognized attribute, kept by name for diagnostics
    Other(String),
}

impl Marker {
    /// Returns the kind of this marker.
    pub fn kind(&self) -> MarkerKind {
        match self {
            Marker::Path(_) => MarkerKind::Path,
            Marker::Get => MarkerKind::Get,
            Marker::Post => MarkerKind::Post,
            Marker::Put => MarkerKind::Put,
            Marker::Delete => MarkerKind::Delete,
            Marker::Other(_) => MarkerKind::Other,
        }
    }
}

/// A single declaration and the members it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Structural kind
    pub kind: DeclarationKind,
    /// Simple (unqualified) name
    pub name: String,
    /// Attached markers, in source order
    pub markers: Vec<Marker>,
    /// Documentation text, `None` when no doc comment is attached
    pub doc: Option<String>,
    /// Directly enclosed declarations, in source order
    pub members: Vec<Declaration>,
}

impl Declaration {
    /// Create a declaration with no markers, documentation or members
    pub fn new(kind: DeclarationKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            markers: Vec::new(),
            doc: None,
            members: Vec::new(),
        }
    }

    /// Attach a marker
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Attach documentation text
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an enclosed member
    pub fn with_member(mut self, member: Declaration) -> Self {
        self.members.push(member);
        self
    }

    /// Returns true if any attached marker has the given kind.
    pub fn has_marker(&self, kind: MarkerKind) -> bool {
        self.markers.iter().any(|m| m.kind() == kind)
    }

    /// Returns the value of the first path marker, if one is attached.
    pub fn path(&self) -> Option<&str> {
        self.markers.iter().find_map(|m| match m {
            Marker::Path(value) => Some(value.as_str()),
            _ => None,
        })
    }
}

/// HTTP verb resolved for a resource method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    Post,
    Get,
    Delete,
    Put,
    /// No verb marker was attached
    Unknown,
}

impl Verb {
    /// Verbs in resolution priority order, paired with the marker that selects them.
    pub const PRIORITY: [(MarkerKind, Verb); 4] = [
        (MarkerKind::Post, Verb::Post),
        (MarkerKind::Get, Verb::Get),
        (MarkerKind::Delete, Verb::Delete),
        (MarkerKind::Put, Verb::Put),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Post => "POST",
            Verb::Get => "GET",
            Verb::Delete => "DELETE",
            Verb::Put => "PUT",
            Verb::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A container declaration carrying a path marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceContainer<'a> {
    pub declaration: &'a Declaration,
    pub path: &'a str,
}

impl<'a> ResourceContainer<'a> {
    /// Returns the container's simple name.
    pub fn name(&self) -> &'a str {
        &self.declaration.name
    }
}

impl fmt::Display for ResourceContainer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.path)
    }
}

/// A method declaration, owned by a resource container, carrying a path marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMethod<'a> {
    pub declaration: &'a Declaration,
    pub path: &'a str,
}

impl<'a> ResourceMethod<'a> {
    /// Returns the method's simple name.
    pub fn name(&self) -> &'a str {
        &self.declaration.name
    }

    /// Returns the method's documentation text, if any.
    pub fn doc(&self) -> Option<&'a str> {
        self.declaration.doc.as_deref()
    }
}
