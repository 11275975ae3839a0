// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! A small, typed, in-memory triple store,
//! filled by the `oxrdfio` parser
//! and queried by (subject, predicate, object) patterns.

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
    io::Read,
};

use oxrdf::{vocab::rdf, NamedNodeRef, Subject as RdfSubject, Term};
use oxrdfio::{RdfFormat, RdfParser};

use crate::Error;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Subject {
    Iri(String),
    BlankNode(String),
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Object {
    Iri(String),
    BlankNode(String),
    Literal(String),
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Triple {
    pub subject: Subject,
    pub predicate: String,
    pub object: Object,
}

impl Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(id) => write!(f, "_:{id}"),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::BlankNode(id) => write!(f, "_:{id}"),
            Self::Literal(lit_str) => write!(f, r#""{lit_str}""#),
        }
    }
}

impl Object {
    /// The lexical value, whatever kind of node this is.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Iri(value) | Self::BlankNode(value) | Self::Literal(value) => value,
        }
    }

    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        if let Self::Iri(iri) = self {
            Some(iri)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        if let Self::Literal(lit) = self {
            Some(lit)
        } else {
            None
        }
    }

    /// Converts to the subject this object would be
    /// when following it, if it is a node at all.
    #[must_use]
    pub fn to_subject(&self) -> Option<Subject> {
        match self {
            Self::Iri(iri) => Some(Subject::Iri(iri.clone())),
            Self::BlankNode(id) => Some(Subject::BlankNode(id.clone())),
            Self::Literal(_) => None,
        }
    }
}

impl Subject {
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        if let Self::Iri(iri) = self {
            Some(iri)
        } else {
            None
        }
    }
}

/// Triples in document order,
/// indexed by subject and by predicate.
#[derive(Debug, Clone, Default)]
pub struct TripleStore {
    triples: Vec<Triple>,
    by_subject: HashMap<Subject, Vec<usize>>,
    by_predicate: HashMap<String, Vec<usize>>,
}

impl TripleStore {
    /// Parses an RDF document into a new store.
    /// Quads that are exact duplicates of earlier ones are dropped,
    /// the graph name is not kept.
    ///
    /// # Errors
    ///
    /// - the input could not be read
    /// - the input is not valid in the given serialization `format`
    pub fn parse<R>(input: R, format: RdfFormat) -> Result<Self, Error>
    where
        R: Read,
    {
        let mut store = Self::default();
        let mut seen_quads = HashSet::new();

        for quad_res in RdfParser::from_format(format).for_reader(input) {
            let quad = quad_res.map_err(|err| Error::from_parse_error(err, format))?;
            if !seen_quads.insert(quad.clone()) {
                continue;
            }
            let subject = match quad.subject {
                RdfSubject::NamedNode(nn) => Subject::Iri(nn.into_string()),
                RdfSubject::BlankNode(bn) => Subject::BlankNode(bn.as_str().to_owned()),
                RdfSubject::Triple(tr) => {
                    tracing::warn!("Triple subjects are not supported -> ignored! {:?}", tr);
                    continue;
                }
            };
            let object = match quad.object {
                Term::NamedNode(nn) => Object::Iri(nn.into_string()),
                Term::BlankNode(bn) => Object::BlankNode(bn.as_str().to_owned()),
                Term::Literal(lit) => Object::Literal(lit.value().to_owned()),
                Term::Triple(tr) => {
                    tracing::warn!("Triple objects are not supported -> ignored! {:?}", tr);
                    continue;
                }
            };
            store.insert(Triple {
                subject,
                predicate: quad.predicate.into_string(),
                object,
            });
        }
        tracing::debug!("Parsed {} triples", store.len());

        Ok(store)
    }

    /// Parses an RDF/Turtle document into a new store.
    ///
    /// # Errors
    ///
    /// If the input is not valid RDF/Turtle.
    pub fn from_turtle(document: &str) -> Result<Self, Error> {
        Self::parse(document.as_bytes(), RdfFormat::Turtle)
    }

    /// Appends a triple, regardless of whether it is already present.
    pub fn insert(&mut self, triple: Triple) {
        let idx = self.triples.len();
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(idx);
        self.by_predicate
            .entry(triple.predicate.clone())
            .or_default()
            .push(idx);
        self.triples.push(triple);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    fn indexed<'a>(&'a self, idxs: Option<&'a Vec<usize>>) -> impl Iterator<Item = &'a Triple> + 'a {
        idxs.into_iter()
            .flatten()
            .filter_map(|idx| self.triples.get(*idx))
    }

    /// All triples matching the pattern, in document order;
    /// `None` matches anything.
    pub fn triples<'a>(
        &'a self,
        subject: Option<&'a Subject>,
        predicate: Option<&'a str>,
        object: Option<&'a Object>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        let candidates: Box<dyn Iterator<Item = &'a Triple> + 'a> = if let Some(subj) = subject {
            Box::new(self.indexed(self.by_subject.get(subj)))
        } else if let Some(pred) = predicate {
            Box::new(self.indexed(self.by_predicate.get(pred)))
        } else {
            Box::new(self.triples.iter())
        };
        candidates.filter(move |triple| {
            subject.map_or(true, |subj| &triple.subject == subj)
                && predicate.map_or(true, |pred| triple.predicate == pred)
                && object.map_or(true, |obj| &triple.object == obj)
        })
    }

    /// The objects of all `(subject, predicate, ?)` triples, in document order.
    pub fn objects<'a, 'q>(
        &'a self,
        subject: &'q Subject,
        predicate: NamedNodeRef<'q>,
    ) -> impl Iterator<Item = &'a Object> + 'q
    where
        'a: 'q,
    {
        self.indexed(self.by_subject.get(subject))
            .filter(move |triple| triple.predicate == predicate.as_str())
            .map(|triple| &triple.object)
    }

    #[must_use]
    pub fn first_object(&self, subject: &Subject, predicate: NamedNodeRef<'_>) -> Option<&Object> {
        self.objects(subject, predicate).next()
    }

    /// The subjects of all `(?, rdf:type, class)` triples, in document order.
    pub fn subjects_of_type<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Subject> + 'a {
        self.triples(None, Some(rdf::TYPE.as_str()), None)
            .filter(move |triple| triple.object.as_iri() == Some(class))
            .map(|triple| &triple.subject)
    }

    /// The members of an RDF collection (`rdf:first`/`rdf:rest` list),
    /// starting at `head`.
    /// A malformed list ends at the first node that is not a proper list cell,
    /// a cyclic one when a cell repeats.
    #[must_use]
    pub fn list_items(&self, head: &Subject) -> Vec<&Object> {
        let mut items = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(head.clone());
        while let Some(cell) = current.take() {
            if cell == Subject::Iri(rdf::NIL.as_str().to_owned()) || !visited.insert(cell.clone()) {
                break;
            }
            let Some(first) = self.first_object(&cell, rdf::FIRST) else {
                break;
            };
            items.push(first);
            current = self
                .first_object(&cell, rdf::REST)
                .and_then(Object::to_subject);
        }
        items
    }
}
