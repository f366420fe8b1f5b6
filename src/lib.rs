//! REST documentation from source - list the REST resources declared in Rust code.
//!
//! Resources are declared with attributes. A container (inline `mod`, `impl` block or
//! `trait`) carrying `#[path("..")]` is a resource container; each of its `fn` members
//! carrying `#[path("..")]` is a resource method, whose HTTP verb comes from `#[get]`,
//! `#[post]`, `#[put]` or `#[delete]`. The attributes are only read, never expanded, so
//! any crate that defines them (or none at all) works.
//!
//! # Architecture
//!
//! 1. [`walker`] - Collects the `.rs` files of a project directory
//! 2. [`parser`] - Parses them with `syn`
//! 3. [`collector`] - Turns syntax trees into plain [`model::Declaration`] records
//! 4. [`round`] - Holds the declarations of one pass and answers marker queries
//! 5. [`scanner`] - Finds resource containers and resource methods
//! 6. [`report`] - Resolves verbs and formats report lines
//! 7. [`processor`] - Drives scanner and formatter once per round, into a [`sink`]
//! 8. [`listing`] and [`serializer`] - Structured JSON/YAML output
//!
//! # Example Usage
//!
//! ```no_run
//! use restdoc_from_source::{
//!     parser::AstParser,
//!     processor::{Processor, RestDocumentationProcessor},
//!     round::Round,
//!     sink::WriterSink,
//!     walker::SourceWalker,
//! };
//! use std::path::PathBuf;
//!
//! let walk = SourceWalker::new(PathBuf::from("./my-service")).walk().unwrap();
//! let parsed: Vec<_> = AstParser::parse_files(&walk.rust_files)
//!     .into_iter()
//!     .filter_map(Result::ok)
//!     .collect();
//!
//! let round = Round::from_parsed(&parsed);
//! let mut sink = WriterSink::new(std::io::stdout());
//! RestDocumentationProcessor::new().process(&round, &mut sink);
//! ```

pub mod cli;
pub mod collector;
pub mod error;
pub mod listing;
pub mod model;
pub mod parser;
pub mod processor;
pub mod report;
pub mod round;
pub mod scanner;
pub mod serializer;
pub mod sink;
pub mod walker;
