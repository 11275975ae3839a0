// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::str::FromStr;

use once_cell::sync::Lazy;
use oxrdf::{
    vocab::{rdf, rdfs},
    NamedNode, NamedNodeRef,
};
use rpg_schema_iri::Namespace;
use rpg_schema_vocab::{owl, rpg};

use crate::Error;

pub static DEFAULT_NAMESPACE: Lazy<Namespace> = Lazy::new(|| {
    Namespace::new(rpg::NS_PREFERRED_PREFIX, rpg::NS_BASE)
        .expect("The built-in RPG-Schema namespace is a valid IRI")
});

/// The name of the root class the [`SortPolicy::Anchored`] policy
/// puts first by default.
pub const DEFAULT_ANCHOR: &str = "Thing";

/// Which dialect the vocabulary is written in,
/// and thus, which `rdf:type`s mark classes and properties.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Profile {
    /// `owl:Class`, `owl:ObjectProperty` and `owl:DatatypeProperty`
    #[default]
    Owl,
    /// `rdfs:Class` and `rdf:Property`
    Rdfs,
}

/// Whether a property is expected to point to other resources
/// or to literal values.
/// This decides the default expected type of properties without a range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Object,
    Datatype,
}

impl PropertyKind {
    #[must_use]
    pub const fn default_expected_type(self) -> &'static str {
        match self {
            Self::Object => "Thing",
            Self::Datatype => "Text",
        }
    }
}

const OWL_PROPERTY_TYPES: &[(NamedNodeRef<'static>, PropertyKind)] = &[
    (owl::OBJECT_PROPERTY, PropertyKind::Object),
    (owl::DATATYPE_PROPERTY, PropertyKind::Datatype),
];
const RDFS_PROPERTY_TYPES: &[(NamedNodeRef<'static>, PropertyKind)] =
    &[(rdf::PROPERTY, PropertyKind::Datatype)];

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IconSource {
    /// Only the built-in table, by class ID
    #[default]
    Table,
    /// The `icon` annotation of the vocabulary,
    /// falling back to the built-in table
    Asserted,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RequiredSource {
    /// Properties are never marked as required
    #[default]
    Unsupported,
    /// The boolean `required` annotation of the vocabulary
    Asserted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortPolicy {
    /// Root classes before sub-classes,
    /// each group sorted by name
    #[default]
    RootsFirst,
    /// The `root` class first, then its direct sub-classes,
    /// then all the rest, each group sorted by name
    Anchored { root: String },
}

impl SortPolicy {
    #[must_use]
    pub fn anchored_at_default() -> Self {
        Self::Anchored {
            root: DEFAULT_ANCHOR.to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown vocabulary profile '{0}'; choose one of: owl, rdfs")]
pub struct UnknownProfile(String);

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owl" => Ok(Self::Owl),
            "rdfs" => Ok(Self::Rdfs),
            _ => Err(UnknownProfile(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilerConfig {
    /**
     * The vocabularies own namespace.
     * Classes and properties outside of it are ignored,
     * and so are references to them.
     */
    pub namespace: Namespace,
    /**
     * Which `rdf:type`s identify classes and properties.
     */
    pub profile: Profile,
    /**
     * Where the display glyphs of classes come from.
     */
    pub icons: IconSource,
    /**
     * Where the `required` flag of properties comes from.
     */
    pub required: RequiredSource,
    /**
     * How to order the compiled types.
     */
    pub sort: SortPolicy,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::owl(DEFAULT_NAMESPACE.clone())
    }
}

impl CompilerConfig {
    /// For OWL vocabularies like the current RPG-Schema.org:
    /// icons from the built-in table, no `required` flags,
    /// roots first.
    #[must_use]
    pub fn owl(namespace: Namespace) -> Self {
        Self {
            namespace,
            profile: Profile::Owl,
            icons: IconSource::Table,
            required: RequiredSource::Unsupported,
            sort: SortPolicy::RootsFirst,
        }
    }

    /// For plain RDFS vocabularies like early versions of RPG-Schema.org:
    /// icons and `required` flags as annotated in the vocabulary,
    /// anchored at `Thing`.
    #[must_use]
    pub fn rdfs(namespace: Namespace) -> Self {
        Self {
            namespace,
            profile: Profile::Rdfs,
            icons: IconSource::Asserted,
            required: RequiredSource::Asserted,
            sort: SortPolicy::anchored_at_default(),
        }
    }

    #[must_use]
    pub fn for_profile(profile: Profile, namespace: Namespace) -> Self {
        match profile {
            Profile::Owl => Self::owl(namespace),
            Profile::Rdfs => Self::rdfs(namespace),
        }
    }

    /// Like [`Self::for_profile`],
    /// with the namespace given as a plain IRI.
    ///
    /// # Errors
    ///
    /// If `iri` is not an absolute IRI ending in `/` or `#`.
    pub fn for_namespace_iri(profile: Profile, iri: &str) -> Result<Self, Error> {
        let namespace = Namespace::new(DEFAULT_NAMESPACE.prefix.clone(), iri)?;
        Ok(Self::for_profile(profile, namespace))
    }

    /// The `rdf:type` marking classes.
    #[must_use]
    pub const fn class_type(&self) -> NamedNodeRef<'static> {
        match self.profile {
            Profile::Owl => owl::CLASS,
            Profile::Rdfs => rdfs::CLASS,
        }
    }

    /// The `rdf:type`s marking properties, in the order they get compiled.
    #[must_use]
    pub const fn property_types(&self) -> &'static [(NamedNodeRef<'static>, PropertyKind)] {
        match self.profile {
            Profile::Owl => OWL_PROPERTY_TYPES,
            Profile::Rdfs => RDFS_PROPERTY_TYPES,
        }
    }

    /// The annotation property marking properties as required.
    #[must_use]
    pub fn required_predicate(&self) -> NamedNode {
        NamedNode::new_unchecked(self.namespace.term(rpg::REQUIRED_LOCAL_NAME))
    }

    /// The annotation property assigning an icon to a class.
    #[must_use]
    pub fn icon_predicate(&self) -> NamedNode {
        NamedNode::new_unchecked(self.namespace.term(rpg::ICON_LOCAL_NAME))
    }
}
