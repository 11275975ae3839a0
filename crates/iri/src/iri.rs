// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use oxiri::{Iri as OxIri, IriParseError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Iri = OxIri<String>;

#[derive(Error, Debug)]
pub enum NamespaceError {
    #[error("Not a valid namespace IRI: {0}")]
    InvalidIri(#[from] IriParseError),
    #[error("Namespace IRI '{0}' does not end with a common delimiter ('/' or '#')")]
    MissingDelimiter(String),
}

/// The namespace a vocabulary defines its own terms in.
/// Only terms within it become part of the compiled type graph;
/// everything else counts as borrowed from other vocabularies.
///
/// # Examples (Turtle format):
///
/// ```turtle
/// @prefix rpg:      <http://www.rpg-schema.org/1.0/> .
/// @prefix xsd:      <http://www.w3.org/2001/XMLSchema#> .
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Namespace {
    /// The short form, e.g. `rpg` or `xsd`.
    pub prefix: String,
    /// The extended/full form,
    /// e.g. `http://www.rpg-schema.org/1.0/`.
    iri: Iri,
}

impl Namespace {
    /// Creates a new instance of `Namespace`.
    ///
    /// # Errors
    ///
    /// - the given `iri` is not a valid, absolute IRI
    /// - the given `iri` does not end in `/` or `#`
    pub fn new<P: Into<String>, I: Into<String>>(prefix: P, iri: I) -> Result<Self, NamespaceError> {
        let iri = Iri::parse(iri.into())?;
        if !(iri.as_str().ends_with('#') || iri.as_str().ends_with('/')) {
            return Err(NamespaceError::MissingDelimiter(iri.into_inner()));
        }
        Ok(Self {
            prefix: prefix.into(),
            iri,
        })
    }

    #[must_use]
    pub fn iri(&self) -> &str {
        self.iri.as_str()
    }

    /// Returns the `@base` of the IRI.
    /// This is simply the IRI without the trailing delimiter.
    ///
    /// # Examples
    ///
    /// - `http://www.w3.org/2001/XMLSchema#` -> \
    ///   `http://www.w3.org/2001/XMLSchema`
    /// - `http://www.rpg-schema.org/1.0/` -> \
    ///   `http://www.rpg-schema.org/1.0`
    #[must_use]
    pub fn base(&self) -> &str {
        let iri_str = self.iri.as_str();
        iri_str
            .strip_suffix(['#', '/'])
            .unwrap_or(iri_str)
    }

    /// Whether `uri` names a term within this namespace.
    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        uri.starts_with(self.iri.as_str())
    }

    /// The full IRI of the term `local` in this namespace.
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        format!("{}{local}", self.iri.as_str())
    }
}
