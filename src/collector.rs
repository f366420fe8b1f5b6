//! Builds [`Declaration`] trees from `syn` syntax trees.
//!
//! Container-like items are inline `mod` blocks, `impl` blocks and `trait` definitions.
//! Method-like items are `fn` items at any level. Items that carry a name but are neither
//! become [`DeclarationKind::Other`]; nameless items (`use`, macro invocations, ...) are
//! left out.
//!
//! Markers are read from outer attributes by their last path segment, case-insensitively:
//! `path` (list form with a single string literal), `get`, `post`, `put` and `delete`.
//! `#[path = "..."]` is rustc's module file attribute and is kept as an unrecognized marker.

use crate::model::{Declaration, DeclarationKind, Marker};
use log::debug;
use syn::{Attribute, Expr, ExprLit, ImplItem, Item, Lit, LitStr, Meta, TraitItem, Type};

/// Converts syntax trees into declaration metadata.
pub struct DeclarationCollector;

impl DeclarationCollector {
    /// Collects the top-level declarations of a parsed file, in source order.
    pub fn collect(file: &syn::File) -> Vec<Declaration> {
        Self::collect_items(&file.items)
    }

    fn collect_items(items: &[Item]) -> Vec<Declaration> {
        items.iter().filter_map(Self::collect_item).collect()
    }

    fn collect_item(item: &Item) -> Option<Declaration> {
        let declaration = match item {
            Item::Mod(item_mod) => match &item_mod.content {
                Some((_, items)) => Self::declaration(
                    DeclarationKind::Container,
                    item_mod.ident.to_string(),
                    &item_mod.attrs,
                    Self::collect_items(items),
                ),
                None => Self::declaration(
                    DeclarationKind::Other,
                    item_mod.ident.to_string(),
                    &item_mod.attrs,
                    Vec::new(),
                ),
            },
            Item::Impl(item_impl) => {
                let members = item_impl
                    .items
                    .iter()
                    .filter_map(Self::collect_impl_item)
                    .collect();
                Self::declaration(
                    DeclarationKind::Container,
                    Self::type_name(&item_impl.self_ty),
                    &item_impl.attrs,
                    members,
                )
            }
            Item::Trait(item_trait) => {
                let members = item_trait
                    .items
                    .iter()
                    .filter_map(Self::collect_trait_item)
                    .collect();
                Self::declaration(
                    DeclarationKind::Container,
                    item_trait.ident.to_string(),
                    &item_trait.attrs,
                    members,
                )
            }
            Item::Fn(item_fn) => Self::declaration(
                DeclarationKind::Method,
                item_fn.sig.ident.to_string(),
                &item_fn.attrs,
                Vec::new(),
            ),
            Item::Struct(s) => Self::other(s.ident.to_string(), &s.attrs),
            Item::Enum(e) => Self::other(e.ident.to_string(), &e.attrs),
            Item::Union(u) => Self::other(u.ident.to_string(), &u.attrs),
            Item::Const(c) => Self::other(c.ident.to_string(), &c.attrs),
            Item::Static(s) => Self::other(s.ident.to_string(), &s.attrs),
            Item::Type(t) => Self::other(t.ident.to_string(), &t.attrs),
            _ => return None,
        };

        debug!(
            "Collected {:?} declaration '{}' with {} markers",
            declaration.kind,
            declaration.name,
            declaration.markers.len()
        );

        Some(declaration)
    }

    fn collect_impl_item(item: &ImplItem) -> Option<Declaration> {
        match item {
            ImplItem::Fn(f) => Some(Self::declaration(
                DeclarationKind::Method,
                f.sig.ident.to_string(),
                &f.attrs,
                Vec::new(),
            )),
            ImplItem::Const(c) => Some(Self::other(c.ident.to_string(), &c.attrs)),
            ImplItem::Type(t) => Some(Self::other(t.ident.to_string(), &t.attrs)),
            _ => None,
        }
    }

    fn collect_trait_item(item: &TraitItem) -> Option<Declaration> {
        match item {
            TraitItem::Fn(f) => Some(Self::declaration(
                DeclarationKind::Method,
                f.sig.ident.to_string(),
                &f.attrs,
                Vec::new(),
            )),
            TraitItem::Const(c) => Some(Self::other(c.ident.to_string(), &c.attrs)),
            TraitItem::Type(t) => Some(Self::other(t.ident.to_string(), &t.attrs)),
            _ => None,
        }
    }

    fn other(name: String, attrs: &[Attribute]) -> Declaration {
        Self::declaration(DeclarationKind::Other, name, attrs, Vec::new())
    }

    fn declaration(
        kind: DeclarationKind,
        name: String,
        attrs: &[Attribute],
        members: Vec<Declaration>,
    ) -> Declaration {
        Declaration {
            kind,
            name,
            markers: attrs.iter().filter_map(Self::parse_marker).collect(),
            doc: Self::doc_text(attrs),
            members,
        }
    }

    /// Simple name of an `impl` block's self type (`impl<T> Repo<T>` -> `Repo`)
    fn type_name(ty: &Type) -> String {
        match ty {
            Type::Path(type_path) => type_path
                .path
                .segments
                .last()
                .map(|segment| segment.ident.to_string())
                .unwrap_or_default(),
            Type::Reference(reference) => Self::type_name(&reference.elem),
            Type::Paren(paren) => Self::type_name(&paren.elem),
            Type::Group(group) => Self::type_name(&group.elem),
            _ => "impl".to_string(),
        }
    }

    /// Maps an attribute to a marker. Doc attributes are not markers.
    fn parse_marker(attr: &Attribute) -> Option<Marker> {
        if attr.path().is_ident("doc") {
            return None;
        }

        let name = attr.path().segments.last()?.ident.to_string();

        let marker = match name.to_lowercase().as_str() {
            "path" => match attr.parse_args::<LitStr>() {
                Ok(lit) => Marker::Path(lit.value()),
                Err(_) => {
                    debug!("Ignoring path attribute without a single string literal");
                    Marker::Other(name)
                }
            },
            "get" => Marker::Get,
            "post" => Marker::Post,
            "put" => Marker::Put,
            "delete" => Marker::Delete,
            _ => Marker::Other(name),
        };

        Some(marker)
    }

    /// Joins `#[doc]` attributes into one text.
    ///
    /// A `///` line loses the one leading space rustdoc inserts after the slashes. A block
    /// comment (`/** .. */`) is split into lines, each losing its indentation and leading
    /// `*` run; its blank first and last lines are dropped. Trailing whitespace is trimmed
    /// everywhere.
    fn doc_text(attrs: &[Attribute]) -> Option<String> {
        let values: Vec<String> = attrs
            .iter()
            .filter(|attr| attr.path().is_ident("doc"))
            .filter_map(|attr| match &attr.meta {
                Meta::NameValue(meta) => match &meta.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(lit_str),
                        ..
                    }) => Some(lit_str.value()),
                    _ => None,
                },
                _ => None,
            })
            .collect();

        if values.is_empty() {
            return None;
        }

        let lines: Vec<String> = values.iter().flat_map(|value| Self::doc_lines(value)).collect();
        Some(lines.join("\n"))
    }

    fn doc_lines(value: &str) -> Vec<String> {
        if !value.contains('\n') {
            let line = value.strip_prefix(' ').unwrap_or(value);
            return vec![line.trim_end().to_string()];
        }

        let mut lines: Vec<String> = value
            .split('\n')
            .map(|line| {
                let line = line.trim_start().trim_start_matches('*');
                let line = line.strip_prefix(' ').unwrap_or(line);
                line.trim_end().to_string()
            })
            .collect();

        if lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if lines.first().is_some_and(|line| line.is_empty()) {
            lines.remove(0);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(code: &str) -> Vec<Declaration> {
        let file = syn::parse_file(code).expect("Failed to parse test code");
        DeclarationCollector::collect(&file)
    }

    #[test]
    fn test_impl_block_is_container() {
        let declarations = collect(
            r#"
            #[path("/users")]
            impl UserResource {
                #[path("/users")]
                #[post]
                pub fn create(&self) {}

                fn helper(&self) {}
            }
        "#,
        );

        assert_eq!(declarations.len(), 1);
        let container = &declarations[0];
        assert_eq!(container.kind, DeclarationKind::Container);
        assert_eq!(container.name, "UserResource");
        assert_eq!(container.markers, vec![Marker::Path("/users".to_string())]);
        assert_eq!(container.members.len(), 2);
        assert_eq!(container.members[0].name, "create");
        assert_eq!(container.members[0].kind, DeclarationKind::Method);
        assert_eq!(
            container.members[0].markers,
            vec![Marker::Path("/users".to_string()), Marker::Post]
        );
        assert!(container.members[1].markers.is_empty());
    }

    #[test]
    fn test_trait_and_module_are_containers() {
        let declarations = collect(
            r#"
            #[path("/orders")]
            pub trait OrderApi {
                #[GET]
                #[Path("/orders")]
                fn list(&self);
                const LIMIT: usize;
            }

            #[path("/health")]
            mod health {
                #[path("/ping")]
                pub fn ping() {}
            }
        "#,
        );

        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].kind, DeclarationKind::Container);
        assert_eq!(declarations[0].name, "OrderApi");
        assert_eq!(
            declarations[0].members[0].markers,
            vec![Marker::Get, Marker::Path("/orders".to_string())]
        );
        assert_eq!(declarations[0].members[1].kind, DeclarationKind::Other);

        assert_eq!(declarations[1].kind, DeclarationKind::Container);
        assert_eq!(declarations[1].name, "health");
        assert_eq!(declarations[1].members[0].name, "ping");
        assert_eq!(declarations[1].members[0].kind, DeclarationKind::Method);
    }

    #[test]
    fn test_struct_and_external_module_are_other() {
        let declarations = collect(
            r#"
            use std::fmt;

            #[path("/users")]
            pub struct UserResource;

            #[path = "routes/users.rs"]
            mod users;
        "#,
        );

        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].kind, DeclarationKind::Other);
        assert_eq!(declarations[0].path(), Some("/users"));
        assert_eq!(declarations[1].kind, DeclarationKind::Other);
        assert_eq!(declarations[1].markers, vec![Marker::Other("path".to_string())]);
    }

    #[test]
    fn test_qualified_and_malformed_markers() {
        let declarations = collect(
            r#"
            #[rest::path("/a")]
            #[path(42)]
            #[actix_web::delete("/a/{id}")]
            #[derive(Debug)]
            fn remove() {}
        "#,
        );

        assert_eq!(
            declarations[0].markers,
            vec![
                Marker::Path("/a".to_string()),
                Marker::Other("path".to_string()),
                Marker::Delete,
                Marker::Other("derive".to_string()),
            ]
        );
    }

    #[test]
    fn test_impl_self_type_name() {
        let declarations = collect(
            r#"
            #[path("/items")]
            impl<T> crate::api::Repository<T> {}

            #[path("/refs")]
            impl Handler for &Registry {}
        "#,
        );

        assert_eq!(declarations[0].name, "Repository");
        assert_eq!(declarations[1].name, "Registry");
    }

    #[test]
    fn test_doc_text() {
        let declarations = collect(
            r#"
            /// health check
            fn ping() {}

            /// Lists users.
            ///
            ///   Paginated.
            fn list() {}

            ///
            fn empty() {}

            fn undocumented() {}
        "#,
        );

        assert_eq!(declarations[0].doc.as_deref(), Some("health check"));
        assert_eq!(declarations[1].doc.as_deref(), Some("Lists users.\n\n  Paginated."));
        assert_eq!(declarations[2].doc.as_deref(), Some(""));
        assert_eq!(declarations[3].doc, None);
        assert!(declarations[0].markers.is_empty());
    }

    #[test]
    fn test_block_doc_text() {
        let declarations = collect(
            r#"
            /**
             * Lists users.
             *
             * Paginated.
             */
            fn list() {}

            /** health check */
            fn ping() {}

            /**
                Plain block.
            */
            fn plain() {}

            /// Line comment.
            /** Block comment. */
            fn mixed() {}
        "#,
        );

        assert_eq!(declarations[0].doc.as_deref(), Some("Lists users.\n\nPaginated."));
        assert_eq!(declarations[1].doc.as_deref(), Some("health check"));
        assert_eq!(declarations[2].doc.as_deref(), Some("Plain block."));
        assert_eq!(declarations[3].doc.as_deref(), Some("Line comment.\nBlock comment."));
    }
}
