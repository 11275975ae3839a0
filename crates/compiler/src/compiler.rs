// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{cmp::Ordering, collections::HashMap};

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use oxrdf::{vocab::rdfs, NamedNodeRef};
use rpg_schema_iri::{friendly_type_name, local_name};
use rpg_schema_vocab::owl;

use crate::{
    config::{CompilerConfig, IconSource, PropertyKind, RequiredSource, SortPolicy},
    descriptor::{PropertyDescriptor, TypeDescriptor},
    graph::TypeGraph,
    icon::assign_icon,
    store::{Object, Subject, TripleStore},
};

/// Compiles the classes and properties found in a [`TripleStore`]
/// into a [`TypeGraph`].
///
/// The passes run strictly one after the other:
/// class discovery, sub-type derivation, property binding,
/// cleanup and sorting.
pub struct Compiler<'a> {
    config: &'a CompilerConfig,
    store: &'a TripleStore,
}

impl<'a> Compiler<'a> {
    #[must_use]
    pub const fn new(config: &'a CompilerConfig, store: &'a TripleStore) -> Self {
        Self { config, store }
    }

    #[must_use]
    pub fn compile(&self) -> TypeGraph {
        let (mut types, index) = self.discover_classes();
        derive_sub_types(&mut types, &index);
        self.bind_properties(&mut types, &index);
        remove_empty_sub_types(&mut types);
        sort_types(&mut types, &self.config.sort);
        tracing::info!(
            "Compiled {} types from {} triples",
            types.len(),
            self.store.len()
        );
        TypeGraph::new(types)
    }

    /// First label, or `fallback` if there is none or it is blank.
    fn name(&self, subj: &Subject, fallback: &str) -> String {
        self.store
            .first_object(subj, rdfs::LABEL)
            .filter(|label| !label.value().trim().is_empty())
            .map_or_else(|| fallback.to_owned(), |label| label.value().to_owned())
    }

    /// First comment, trimmed, or empty.
    fn description(&self, subj: &Subject) -> String {
        self.store
            .first_object(subj, rdfs::COMMENT)
            .map_or_else(String::new, |comment| comment.value().trim().to_owned())
    }

    /// The IRIs an `rdfs:domain` or `rdfs:range` object stands for:
    /// the object itself, or the members of an `owl:unionOf` list.
    fn member_iris(&self, obj: &'a Object) -> Vec<&'a str> {
        match obj {
            Object::Iri(iri) => vec![iri.as_str()],
            Object::BlankNode(_) => obj
                .to_subject()
                .and_then(|bnode| self.store.first_object(&bnode, owl::UNION_OF))
                .and_then(Object::to_subject)
                .map(|list| {
                    self.store
                        .list_items(&list)
                        .into_iter()
                        .filter_map(Object::as_iri)
                        .collect()
                })
                .unwrap_or_default(),
            Object::Literal(lit) => {
                tracing::debug!("Ignoring literal '{lit}' where a class was expected");
                vec![]
            }
        }
    }

    fn icon(&self, subj: &Subject, id: &str) -> String {
        let asserted = match self.config.icons {
            IconSource::Table => None,
            IconSource::Asserted => self
                .store
                .first_object(subj, self.config.icon_predicate().as_ref())
                .and_then(Object::as_literal)
                .map(str::trim)
                .filter(|icon| !icon.is_empty()),
        };
        asserted.unwrap_or_else(|| assign_icon(id)).to_owned()
    }

    fn required(&self, subj: &Subject) -> Option<bool> {
        match self.config.required {
            RequiredSource::Unsupported => None,
            RequiredSource::Asserted => self
                .store
                .first_object(subj, self.config.required_predicate().as_ref())
                .and_then(Object::as_literal)
                .filter(|flag| matches!(flag.trim(), "true" | "1"))
                .map(|_| true),
        }
    }

    /// The first super-class within our namespace, if any.
    fn parent(&self, subj: &Subject) -> Option<String> {
        self.store
            .objects(subj, rdfs::SUB_CLASS_OF)
            .filter_map(Object::as_iri)
            .find(|iri| self.config.namespace.contains(iri))
            .map(|iri| local_name(iri).to_owned())
    }

    /// Pass 1
    fn discover_classes(&self) -> (Vec<TypeDescriptor>, HashMap<String, usize>) {
        let mut types = Vec::new();
        let mut index = HashMap::new();

        for subj in self.store.subjects_of_type(self.config.class_type().as_str()) {
            let Some(class_iri) = subj.as_iri() else {
                tracing::debug!("Ignoring anonymous class {subj}");
                continue;
            };
            if !self.config.namespace.contains(class_iri) {
                continue;
            }
            let id = local_name(class_iri).to_owned();
            if index.contains_key(&id) {
                tracing::debug!("Class '{id}' is declared more then once; keeping the first");
                continue;
            }

            let typ = TypeDescriptor {
                name: self.name(subj, &id),
                description: self.description(subj),
                parent: self.parent(subj),
                properties: vec![],
                sub_types: None,
                icon: self.icon(subj, &id),
                id,
            };
            index.insert(typ.id.clone(), types.len());
            types.push(typ);
        }

        (types, index)
    }

    fn property(&self, subj: &Subject, prop_iri: &str, kind: PropertyKind) -> PropertyDescriptor {
        let mut expected_type: Vec<String> = self
            .store
            .objects(subj, rdfs::RANGE)
            .flat_map(|range| self.member_iris(range))
            .map(friendly_type_name)
            .collect();
        if expected_type.is_empty() {
            expected_type.push(kind.default_expected_type().to_owned());
        }

        PropertyDescriptor {
            name: self.name(subj, local_name(prop_iri)),
            expected_type,
            description: self.description(subj),
            required: self.required(subj),
        }
    }

    fn bind_property_kind(
        &self,
        prop_type: NamedNodeRef<'static>,
        kind: PropertyKind,
        types: &mut [TypeDescriptor],
        index: &HashMap<String, usize>,
    ) {
        for subj in self.store.subjects_of_type(prop_type.as_str()) {
            let Some(prop_iri) = subj.as_iri() else {
                continue;
            };
            if !self.config.namespace.contains(prop_iri) {
                continue;
            }
            let property = self.property(subj, prop_iri, kind);

            for domain in self
                .store
                .objects(subj, rdfs::DOMAIN)
                .flat_map(|domain| self.member_iris(domain))
            {
                if !self.config.namespace.contains(domain) {
                    continue;
                }
                let domain_id = local_name(domain);
                if let Some(typ) = index.get(domain_id).and_then(|idx| types.get_mut(*idx)) {
                    typ.properties.push(property.clone());
                } else {
                    tracing::debug!(
                        "Domain '{domain_id}' of property '{}' is not a known class",
                        property.name
                    );
                }
            }
        }
    }

    /// Pass 3
    fn bind_properties(&self, types: &mut [TypeDescriptor], index: &HashMap<String, usize>) {
        for (prop_type, kind) in self.config.property_types() {
            self.bind_property_kind(*prop_type, *kind, types, index);
        }
    }
}

/// Pass 2;
/// requires all classes to be known already,
/// as a sub-class may be declared before its parent.
/// Parents that are not a known class are dropped.
fn derive_sub_types(types: &mut [TypeDescriptor], index: &HashMap<String, usize>) {
    let mut links = Vec::new();
    for (child_idx, typ) in types.iter_mut().enumerate() {
        let Some(parent) = typ.parent.as_ref() else {
            continue;
        };
        if let Some(parent_idx) = index.get(parent) {
            links.push((*parent_idx, child_idx));
        } else if let Some(dropped) = typ.parent.take() {
            tracing::debug!(
                "Parent '{dropped}' of class '{}' is not a known class -> dropped",
                typ.id
            );
        }
    }
    for (parent_idx, child_idx) in links {
        let Some(child_id) = types.get(child_idx).map(|child| child.id.clone()) else {
            continue;
        };
        if let Some(parent) = types.get_mut(parent_idx) {
            parent.sub_types.get_or_insert_with(Vec::new).push(child_id);
        }
    }
}

/// Pass 4a
fn remove_empty_sub_types(types: &mut [TypeDescriptor]) {
    for typ in types {
        if typ.sub_types.as_ref().is_some_and(Vec::is_empty) {
            typ.sub_types = None;
        }
    }
}

/// Compares names like a human reader would expect,
/// using the Unicode collation rules for English:
/// accents and case only break ties, lower-case before upper-case.
pub(crate) struct NameCollator(Option<Collator>);

impl NameCollator {
    pub(crate) fn new() -> Self {
        match Collator::try_new(&locale!("en").into(), CollatorOptions::new()) {
            Ok(collator) => Self(Some(collator)),
            Err(err) => {
                tracing::warn!("Collation data unavailable, sorting names by code point: {err}");
                Self(None)
            }
        }
    }

    pub(crate) fn compare(&self, a: &str, b: &str) -> Ordering {
        self.0.as_ref().map_or_else(
            || {
                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| b.cmp(a))
            },
            |collator| collator.compare(a, b),
        )
    }
}

/// Pass 4b
fn sort_types(types: &mut [TypeDescriptor], policy: &SortPolicy) {
    let rank = |typ: &TypeDescriptor| -> u8 {
        match policy {
            SortPolicy::RootsFirst => u8::from(!typ.is_root()),
            SortPolicy::Anchored { root } => {
                if typ.is_root() && &typ.id == root {
                    0
                } else if typ.parent.as_ref() == Some(root) {
                    1
                } else {
                    2
                }
            }
        }
    };
    let collator = NameCollator::new();
    types.sort_by(|a, b| {
        rank(a)
            .cmp(&rank(b))
            .then_with(|| collator.compare(&a.name, &b.name))
    });
}
