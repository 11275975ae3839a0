// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [RPG-Schema.org](
//! http://www.rpg-schema.org/1.0/)
//! vocabulary.
//!
//! The base IRI here is only the default;
//! it changed between versions of the vocabulary,
//! so the compiler takes the namespace as configuration.

use crate::named_node;

pub const NS_BASE: &str = "http://www.rpg-schema.org/1.0/";
pub const NS_PREFERRED_PREFIX: &str = "rpg";

/// Local name of the annotation marking a property as required,
/// relative to whatever namespace the vocabulary uses.
pub const REQUIRED_LOCAL_NAME: &str = "required";
/// Local name of the annotation assigning a display glyph to a class.
pub const ICON_LOCAL_NAME: &str = "icon";

named_node!(
    THING,
    NS_BASE,
    "Thing",
    "The most generic type of item in the RPG ontology."
);
named_node!(
    REQUIRED,
    NS_BASE,
    "required",
    "Whether a property has to be present on every instance of its domain."
);
named_node!(ICON, NS_BASE, "icon", "A short glyph to display for a class.");
