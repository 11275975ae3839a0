// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

// Only used by the binary
use clap as _;
use cli_utils as _;
use const_format as _;
use rpg_schema_iri as _;

pub mod config;
mod error;
pub mod render;
pub mod search;

use std::io::Write;
use std::path::Path;

use git_version::git_version;
use rpg_schema_base::util;
use rpg_schema_compiler::{CompilerConfig, RdfFormat, TypeDescriptor, TypeGraph};

use config::{Config, View};
pub use error::ExplorerError;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

/// Guesses the RDF serialization of a vocabulary document
/// from its file extension, falling back to RDF/Turtle.
#[must_use]
pub fn format_of(ontology: &Path) -> RdfFormat {
    util::extract_file_ext(ontology)
        .and_then(RdfFormat::from_extension)
        .unwrap_or(RdfFormat::Turtle)
}

/// Owns a compiled vocabulary and shows it in various ways.
#[derive(Debug, Clone)]
pub struct Explorer {
    graph: TypeGraph,
}

impl Explorer {
    #[must_use]
    pub const fn new(graph: TypeGraph) -> Self {
        Self { graph }
    }

    /// Reads and compiles a vocabulary document.
    ///
    /// # Errors
    ///
    /// - the document can not be read
    /// - the document is not valid RDF
    pub fn load(ontology: &Path, config: &CompilerConfig) -> Result<Self, ExplorerError> {
        let document = util::read_document(ontology)?;
        let format = format_of(ontology);
        tracing::debug!(
            "Compiling vocabulary '{}' as {} ...",
            ontology.display(),
            format.name()
        );
        let graph = rpg_schema_compiler::compile(&document, format, config)?;
        if graph.has_sub_class_cycle() {
            tracing::warn!("The vocabulary contains a sub-class cycle; affected types have no root");
        }
        Ok(Self::new(graph))
    }

    #[must_use]
    pub const fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&TypeDescriptor> {
        search::filter(&self.graph, query)
    }

    /// # Errors
    ///
    /// If there is no type with this ID.
    pub fn lookup(&self, id: &str) -> Result<&TypeDescriptor, ExplorerError> {
        self.graph
            .get(id)
            .ok_or_else(|| ExplorerError::UnknownType(id.to_owned()))
    }

    /// Writes the requested view of the vocabulary to `out`.
    ///
    /// # Errors
    ///
    /// - writing to `out` fails
    /// - the view requests a type that does not exist
    pub fn show<W: Write>(&self, view: &View, out: &mut W) -> Result<(), ExplorerError> {
        match view {
            View::List { query } => {
                let query = query.as_deref().unwrap_or_default();
                let found = self.search(query);
                tracing::debug!("{} of {} types match", found.len(), self.graph.len());
                if found.is_empty() {
                    writeln!(out, r#"No schema types found matching "{query}""#)?;
                }
                for (idx, typ) in found.into_iter().enumerate() {
                    if idx > 0 {
                        writeln!(out)?;
                    }
                    render::card(typ, out)?;
                }
            }
            View::Detail { id } => render::detail(&self.graph, self.lookup(id)?, out)?,
            View::Tree => render::tree(&self.graph, out)?,
            View::Json => render::json(&self.graph, out)?,
        }
        Ok(())
    }
}

/// Compiles the configured vocabulary
/// and writes the configured view of it to `out`.
///
/// # Errors
///
/// See [`Explorer::load`] and [`Explorer::show`].
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<(), ExplorerError> {
    Explorer::load(&config.ontology, &config.compiler)?.show(&config.view, out)
}
