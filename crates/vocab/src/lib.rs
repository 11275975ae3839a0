// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provides ready to use [`NamedNodeRef`](oxrdf::NamedNodeRef)s
//! for the vocabularies the ontology compiler reads.

pub mod owl;
pub mod rpg;

use git_version::git_version;

// This tests rust code in the README with doc-tests.
// Though, It will not appear in the generated documentation.
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

pub const VERSION: &str = git_version!(cargo_prefix = "", fallback = "unknown");

#[macro_export]
macro_rules! named_node {
    ($const:ident, $base:expr, $node:literal, $doc:literal) => {
        #[doc=$doc]
        pub const $const: oxrdf::NamedNodeRef<'_> =
            oxrdf::NamedNodeRef::new_unchecked(const_format::concatcp!($base, $node));
    };
}

/// Namespace base IRIs of W3C vocabularies,
/// which `oxrdf::vocab` only offers as individual terms.
pub mod basics {
    pub const NS_BASE_XSD: &str = "http://www.w3.org/2001/XMLSchema#";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basics_match_oxrdf_terms() {
        assert!(oxrdf::vocab::xsd::STRING
            .as_str()
            .starts_with(basics::NS_BASE_XSD));
    }

    #[test]
    fn owl_terms() {
        assert_eq!(
            owl::OBJECT_PROPERTY.as_str(),
            "http://www.w3.org/2002/07/owl#ObjectProperty"
        );
        assert_eq!(
            owl::DATATYPE_PROPERTY.as_str(),
            "http://www.w3.org/2002/07/owl#DatatypeProperty"
        );
        assert_eq!(
            owl::UNION_OF.as_str(),
            "http://www.w3.org/2002/07/owl#unionOf"
        );
    }

    #[test]
    fn rpg_terms() {
        assert_eq!(rpg::THING.as_str(), "http://www.rpg-schema.org/1.0/Thing");
        assert_eq!(rpg::REQUIRED_LOCAL_NAME, "required");
        assert_eq!(rpg::ICON_LOCAL_NAME, "icon");
    }
}
