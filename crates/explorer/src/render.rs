// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Plain text renditions of compiled types,
//! written to any [`Write`] sink.

use std::io::{self, Write};

use rpg_schema_compiler::{PropertyDescriptor, TypeDescriptor, TypeGraph};
use serde_json::{Map, Value};

pub const JSON_LD_CONTEXT: &str = "https://rpg-schema.org";
pub const BREADCRUMB_SEPARATOR: &str = " › ";
const REQUIRED_MARKER: &str = " (required)";
const INDENT: &str = "  ";

/// How many properties make it into [`example_json_ld`].
const EXAMPLE_PROPERTIES: usize = 3;

/// A short summary of `typ`, as shown in search results.
///
/// # Errors
///
/// If writing to `out` fails.
pub fn card<W: Write>(typ: &TypeDescriptor, out: &mut W) -> io::Result<()> {
    write!(out, "{} {}", typ.icon, typ.name)?;
    if let Some(parent) = &typ.parent {
        write!(out, " (extends {parent})")?;
    }
    writeln!(out)?;
    if !typ.description.is_empty() {
        writeln!(out, "{INDENT}{}", typ.description)?;
    }
    write!(out, "{INDENT}{} properties", typ.properties.len())?;
    if !typ.sub_types().is_empty() {
        write!(out, " · {} subtypes", typ.sub_types().len())?;
    }
    writeln!(out)
}

/// The names along the inheritance chain of `typ`,
/// root first.
#[must_use]
pub fn breadcrumb(graph: &TypeGraph, typ: &TypeDescriptor) -> String {
    graph
        .hierarchy(&typ.id)
        .iter()
        .map(|ancestor| ancestor.name.as_str())
        .collect::<Vec<_>>()
        .join(BREADCRUMB_SEPARATOR)
}

/// A sample record of `typ` in JSON-LD,
/// filled with the first few of its properties.
#[must_use]
pub fn example_json_ld(typ: &TypeDescriptor) -> Value {
    let mut record = Map::new();
    record.insert("@context".to_owned(), Value::from(JSON_LD_CONTEXT));
    record.insert("@type".to_owned(), Value::from(typ.name.as_str()));
    record.insert(
        "name".to_owned(),
        Value::from(format!("Example {}", typ.name)),
    );
    for prop in typ.properties.iter().take(EXAMPLE_PROPERTIES) {
        record.insert(prop.name.clone(), Value::from("..."));
    }
    Value::Object(record)
}

fn property_label(prop: &PropertyDescriptor) -> String {
    if prop.is_required() {
        format!("{}{REQUIRED_MARKER}", prop.name)
    } else {
        prop.name.clone()
    }
}

fn properties<W: Write>(typ: &TypeDescriptor, out: &mut W) -> io::Result<()> {
    if typ.properties.is_empty() {
        return writeln!(out, "{INDENT}(none)");
    }
    let rows: Vec<_> = typ
        .properties
        .iter()
        .map(|prop| {
            (
                property_label(prop),
                prop.expected_type.join(", "),
                prop.description.as_str(),
            )
        })
        .collect();
    let name_width = rows
        .iter()
        .map(|(name, _, _)| name.chars().count())
        .max()
        .unwrap_or_default();
    let type_width = rows
        .iter()
        .map(|(_, types, _)| types.chars().count())
        .max()
        .unwrap_or_default();
    for (name, types, description) in rows {
        let line = format!("{INDENT}{name:<name_width$}  {types:<type_width$}  {description}");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Everything there is to know about `typ`:
/// its inheritance chain, properties, sub-types
/// and an example record.
///
/// # Errors
///
/// If writing to `out` fails.
pub fn detail<W: Write>(graph: &TypeGraph, typ: &TypeDescriptor, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", typ.icon, typ.name)?;
    writeln!(out, "{}", breadcrumb(graph, typ))?;
    if !typ.description.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", typ.description)?;
    }

    writeln!(out)?;
    writeln!(out, "Properties")?;
    properties(typ, out)?;

    if !typ.sub_types().is_empty() {
        writeln!(out)?;
        writeln!(out, "More Specific Types")?;
        for sub_type in graph.sub_types_of(&typ.id) {
            writeln!(out, "{INDENT}{} {}", sub_type.icon, sub_type.id)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Example (JSON-LD)")?;
    serde_json::to_writer_pretty(&mut *out, &example_json_ld(typ))?;
    writeln!(out)
}

/// All types reachable from a root,
/// indented by their depth in the inheritance tree.
///
/// # Errors
///
/// If writing to `out` fails.
pub fn tree<W: Write>(graph: &TypeGraph, out: &mut W) -> io::Result<()> {
    for (depth, typ) in graph.inheritance_forest().depth_first() {
        writeln!(out, "{}{} {}", INDENT.repeat(depth), typ.icon, typ.name)?;
    }
    Ok(())
}

/// All types of the graph, in order, as a pretty JSON array.
///
/// # Errors
///
/// If writing to `out` fails.
pub fn json<W: Write>(graph: &TypeGraph, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, graph.types())?;
    writeln!(out)
}
