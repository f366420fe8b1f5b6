//! Discovery of resource containers and the resource methods they own.

use crate::model::{Declaration, DeclarationKind, ResourceContainer, ResourceMethod};
use crate::sink::MessageSink;
use log::debug;

/// A resource container together with the resource methods it owns.
pub type ScannedContainer<'a> = (ResourceContainer<'a>, Vec<ResourceMethod<'a>>);

/// Finds resource containers and their resource methods among declarations.
///
/// A declaration is a resource container when it is container-like and carries a path
/// marker. A direct member of a container is a resource method when it is method-like and
/// carries a path marker. Verb markers play no part in the filtering; a method without one
/// is still reported, with an unknown verb.
///
/// Scanning never fails: declarations that do not qualify are skipped silently.
pub struct DeclarationScanner;

impl DeclarationScanner {
    /// Scans `declarations` and returns every resource container with its methods.
    ///
    /// A header note is emitted to `sink` for each container as it is found.
    pub fn scan<'a, I>(declarations: I, sink: &mut dyn MessageSink) -> Vec<ScannedContainer<'a>>
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        declarations
            .into_iter()
            .filter_map(|declaration| Self::scan_container(declaration, sink))
            .collect()
    }

    /// Scans a single declaration.
    ///
    /// Returns `None` when it is not a resource container. Otherwise emits the container's
    /// header note and returns it with its resource methods in member order.
    pub fn scan_container<'a>(
        declaration: &'a Declaration,
        sink: &mut dyn MessageSink,
    ) -> Option<ScannedContainer<'a>> {
        if declaration.kind != DeclarationKind::Container {
            return None;
        }
        let path = declaration.path()?;

        let container = ResourceContainer { declaration, path };
        sink.note(&Self::header_line(&container));

        let methods = Self::resource_methods(declaration);
        debug!(
            "Container '{}' has {} resource methods out of {} members",
            container.name(),
            methods.len(),
            declaration.members.len()
        );

        Some((container, methods))
    }

    /// Returns the direct members of `container` that are resource methods.
    pub fn resource_methods(container: &Declaration) -> Vec<ResourceMethod<'_>> {
        container
            .members
            .iter()
            .filter(|member| member.kind == DeclarationKind::Method)
            .filter_map(|member| {
                member.path().map(|path| ResourceMethod {
                    declaration: member,
                    path,
                })
            })
            .collect()
    }

    /// The note emitted when a container is found.
    pub fn header_line(container: &ResourceContainer<'_>) -> String {
        format!("Found resource container {}", container)
    }
}
