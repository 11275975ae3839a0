// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use rpg_schema_compiler::TypeDescriptor;

/// Whether `typ` matches the search `query`:
/// a case-insensitive sub-string of its name or description.
/// The empty query matches everything.
#[must_use]
pub fn matches(typ: &TypeDescriptor, query: &str) -> bool {
    let query = query.to_lowercase();
    typ.name.to_lowercase().contains(&query) || typ.description.to_lowercase().contains(&query)
}

/// The types matching `query`, in their original order.
pub fn filter<'a, I>(types: I, query: &str) -> Vec<&'a TypeDescriptor>
where
    I: IntoIterator<Item = &'a TypeDescriptor>,
{
    types
        .into_iter()
        .filter(|typ| matches(typ, query))
        .collect()
}
