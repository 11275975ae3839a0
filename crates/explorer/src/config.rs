// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use rpg_schema_compiler::CompilerConfig;

/// What to show of the compiled vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// One card per type,
    /// optionally only those matching a search query
    List { query: Option<String> },
    /// Everything about a single type, by ID
    Detail { id: String },
    /// The types indented by inheritance
    Tree,
    /// All types as a JSON array
    Json,
}

impl Default for View {
    fn default() -> Self {
        Self::List { query: None }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    /**
     * The vocabulary document to compile.
     * Its serialization is guessed from the file extension,
     * falling back to RDF/Turtle.
     */
    pub ontology: PathBuf,
    /**
     * How to compile the vocabulary.
     */
    pub compiler: CompilerConfig,
    /**
     * What to print to stdout.
     */
    pub view: View,
}
