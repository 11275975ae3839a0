// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod compiler;
pub mod config;
pub mod descriptor;
mod error;
pub mod graph;
pub mod icon;
pub mod store;

use git_version::git_version;

pub use compiler::Compiler;
pub use config::{CompilerConfig, Profile, SortPolicy};
pub use descriptor::{PropertyDescriptor, TypeDescriptor};
pub use error::Error;
pub use graph::TypeGraph;
pub use oxrdfio::RdfFormat;
pub use store::TripleStore;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// Compiles a vocabulary document into a type graph.
///
/// # Errors
///
/// If the document is not valid in the given serialization `format`.
/// No partial graph is returned in that case.
pub fn compile(
    document: &str,
    format: RdfFormat,
    config: &CompilerConfig,
) -> Result<TypeGraph, Error> {
    let store = TripleStore::parse(document.as_bytes(), format)?;
    Ok(Compiler::new(config, &store).compile())
}

/// Compiles an RDF/Turtle vocabulary document into a type graph.
///
/// # Errors
///
/// If the document is not valid RDF/Turtle.
pub fn compile_turtle(document: &str, config: &CompilerConfig) -> Result<TypeGraph, Error> {
    compile(document, RdfFormat::Turtle, config)
}
