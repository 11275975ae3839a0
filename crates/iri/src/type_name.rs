// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use rpg_schema_vocab::basics::NS_BASE_XSD;

/// Returns the trailing segment of `uri`,
/// after its last `#` or `/` (whichever comes later).
/// If there is neither, the whole input is returned.
///
/// # Examples
///
/// - `http://www.rpg-schema.org/1.0/Character` -> \
///   `Character`
/// - `http://www.w3.org/2001/XMLSchema#string` -> \
///   `string`
/// - `Character` -> \
///   `Character`
#[must_use]
pub fn local_name(uri: &str) -> &str {
    uri.rsplit_once(['#', '/'])
        .map_or(uri, |(_, local)| local)
}

fn xsd_friendly_name(xsd_local: &str) -> Option<&'static str> {
    Some(match xsd_local {
        "string" => "Text",
        "integer" => "Integer",
        "decimal" => "Number",
        "boolean" => "Boolean",
        "date" => "Date",
        "dateTime" => "DateTime",
        "positiveInteger" => "Positive Integer",
        "nonNegativeInteger" => "Non-negative Integer",
        _ => return None,
    })
}

/// Converts a type IRI (as found as the object of `rdfs:range`)
/// into the name shown to humans.
/// XSD scalar types get a friendly name where one is known,
/// everything else is reduced to its [`local_name`].
#[must_use]
pub fn friendly_type_name(uri: &str) -> String {
    let local = local_name(uri);
    if uri.starts_with(NS_BASE_XSD) {
        if let Some(friendly) = xsd_friendly_name(local) {
            return friendly.to_owned();
        }
    }
    local.to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_name_takes_later_delimiter() {
        assert_eq!(local_name("http://www.rpg-schema.org/1.0/Character"), "Character");
        assert_eq!(local_name("http://www.w3.org/2001/XMLSchema#string"), "string");
        assert_eq!(local_name("http://example.org/a#b/c"), "c");
        assert_eq!(local_name("http://example.org/a/b#c"), "c");
        assert_eq!(local_name("Character"), "Character");
        assert_eq!(local_name("http://example.org/"), "");
    }

    #[test]
    fn xsd_table() {
        for (xsd, friendly) in [
            ("string", "Text"),
            ("integer", "Integer"),
            ("decimal", "Number"),
            ("boolean", "Boolean"),
            ("date", "Date"),
            ("dateTime", "DateTime"),
            ("positiveInteger", "Positive Integer"),
            ("nonNegativeInteger", "Non-negative Integer"),
        ] {
            assert_eq!(friendly_type_name(&format!("{NS_BASE_XSD}{xsd}")), friendly);
        }
    }

    #[test]
    fn unmapped_passes_through() {
        assert_eq!(
            friendly_type_name("http://www.w3.org/2001/XMLSchema#anyURI"),
            "anyURI"
        );
        assert_eq!(
            friendly_type_name("http://www.w3.org/2000/01/rdf-schema#Literal"),
            "Literal"
        );
        assert_eq!(
            friendly_type_name("http://www.rpg-schema.org/1.0/Spell"),
            "Spell"
        );
        // local names that collide with the XSD table, outside of XSD
        assert_eq!(friendly_type_name("https://schema.org/string"), "string");
    }

    #[test]
    fn deterministic() {
        let uri = "http://www.w3.org/2001/XMLSchema#dateTime";
        assert_eq!(friendly_type_name(uri), friendly_type_name(uri));
    }

    #[test]
    fn idempotent() {
        let xsd_uris = [
            "string",
            "integer",
            "decimal",
            "boolean",
            "date",
            "dateTime",
            "positiveInteger",
            "nonNegativeInteger",
            "anyURI",
        ]
        .map(|xsd| format!("{NS_BASE_XSD}{xsd}"));
        let other_uris = [
            "http://www.rpg-schema.org/1.0/Spell",
            "http://www.w3.org/2000/01/rdf-schema#Literal",
            "Character",
        ]
        .map(ToOwned::to_owned);
        for uri in xsd_uris.iter().chain(&other_uris) {
            let friendly = friendly_type_name(uri);
            assert_eq!(friendly_type_name(&friendly), friendly, "for <{uri}>");
        }
    }
}
