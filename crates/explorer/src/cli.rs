// SPDX-FileCopyrightText: 2021 - 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;
use std::str::FromStr;

use clap::{command, value_parser, Arg, ArgAction, ArgGroup, Command, ValueHint};
use const_format::formatcp;
use rpg_schema_compiler::config::{DEFAULT_ANCHOR, DEFAULT_NAMESPACE};
use rpg_schema_compiler::{CompilerConfig, Profile, SortPolicy};
use rpg_schema_iri::{Namespace, NamespaceError};

use crate::config::{Config, View};

pub const A_S_VERSION: char = 'V';
pub const A_L_VERSION: &str = "version";
pub const A_S_QUIET: char = 'q';
pub const A_L_QUIET: &str = "quiet";
pub const A_S_VERBOSE: char = 'v';
pub const A_L_VERBOSE: &str = "verbose";
pub const A_S_PROFILE: char = 'P';
pub const A_L_PROFILE: &str = "profile";
pub const A_S_NAMESPACE: char = 'n';
pub const A_L_NAMESPACE: &str = "namespace";
pub const A_S_ANCHOR: char = 'a';
pub const A_L_ANCHOR: &str = "anchor";
pub const A_S_SEARCH: char = 's';
pub const A_L_SEARCH: &str = "search";
pub const A_S_TYPE: char = 't';
pub const A_L_TYPE: &str = "type";
pub const A_S_TREE: char = 'T';
pub const A_L_TREE: &str = "tree";
pub const A_S_JSON: char = 'j';
pub const A_L_JSON: &str = "json";
pub const A_L_IN_FILE: &str = "ontology-file";
const G_VIEW: &str = "view";

fn arg_version() -> Arg {
    Arg::new(A_L_VERSION)
        .help(formatcp!(
            "Print version information and exit. \
May be combined with -{A_S_QUIET},--{A_L_QUIET}, \
to really only output the version string."
        ))
        .short(A_S_VERSION)
        .long(A_L_VERSION)
        .action(ArgAction::SetTrue)
}

fn arg_quiet() -> Arg {
    Arg::new(A_L_QUIET)
        .help("Minimize or suppress output to stderr")
        .long_help("Minimize or suppress output to stderr; the requested view is still written to stdout.")
        .action(ArgAction::SetTrue)
        .short(A_S_QUIET)
        .long(A_L_QUIET)
        .conflicts_with(A_L_VERBOSE)
}

fn arg_verbose() -> Arg {
    Arg::new(A_L_VERBOSE)
        .help("more verbose output (useful for debugging)")
        .short(A_S_VERBOSE)
        .long(A_L_VERBOSE)
        .action(ArgAction::SetTrue)
}

fn arg_profile() -> Arg {
    Arg::new(A_L_PROFILE)
        .help("The dialect the vocabulary is written in: owl or rdfs")
        .long_help(formatcp!(
            "The dialect the vocabulary is written in. \
'owl' reads owl:Class, owl:ObjectProperty and owl:DatatypeProperty. \
'rdfs' reads rdfs:Class and rdf:Property, \
plus the 'required' and 'icon' annotations of the vocabulary, \
and sorts anchored at '{DEFAULT_ANCHOR}' (see -{A_S_ANCHOR},--{A_L_ANCHOR})."
        ))
        .short(A_S_PROFILE)
        .long(A_L_PROFILE)
        .action(ArgAction::Set)
        .value_parser(Profile::from_str)
        .value_hint(ValueHint::Other)
        .value_name("PROFILE")
        .default_value("owl")
}

fn parse_namespace(iri: &str) -> Result<Namespace, NamespaceError> {
    Namespace::new(DEFAULT_NAMESPACE.prefix.clone(), iri)
}

fn arg_namespace() -> Arg {
    Arg::new(A_L_NAMESPACE)
        .help("The base IRI of the vocabulary; classes and properties outside of it are ignored")
        .short(A_S_NAMESPACE)
        .long(A_L_NAMESPACE)
        .action(ArgAction::Set)
        .value_parser(parse_namespace)
        .value_hint(ValueHint::Url)
        .value_name("IRI")
}

fn arg_anchor() -> Arg {
    Arg::new(A_L_ANCHOR)
        .help("Sort this root type first, then its direct sub-types, then all the rest")
        .short(A_S_ANCHOR)
        .long(A_L_ANCHOR)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("ID")
}

fn arg_search() -> Arg {
    Arg::new(A_L_SEARCH)
        .help("Only list types whose name or description contains this text (case-insensitive)")
        .short(A_S_SEARCH)
        .long(A_L_SEARCH)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("TEXT")
}

fn arg_type() -> Arg {
    Arg::new(A_L_TYPE)
        .help("Show the details of the type with this ID")
        .short(A_S_TYPE)
        .long(A_L_TYPE)
        .action(ArgAction::Set)
        .value_hint(ValueHint::Other)
        .value_name("ID")
}

fn arg_tree() -> Arg {
    Arg::new(A_L_TREE)
        .help("Show all types as an inheritance tree")
        .short(A_S_TREE)
        .long(A_L_TREE)
        .action(ArgAction::SetTrue)
}

fn arg_json() -> Arg {
    Arg::new(A_L_JSON)
        .help("Write all compiled types as JSON")
        .short(A_S_JSON)
        .long(A_L_JSON)
        .action(ArgAction::SetTrue)
}

fn arg_in_file() -> Arg {
    Arg::new(A_L_IN_FILE)
        .help("The vocabulary to explore; RDF/Turtle, or any other RDF format, by file extension")
        .action(ArgAction::Set)
        .value_parser(value_parser!(std::path::PathBuf))
        .value_hint(ValueHint::FilePath)
        .value_name("ONTOLOGY_FILE")
        .required_unless_present(A_L_VERSION)
}

#[must_use]
pub fn args_matcher() -> Command {
    command!()
        .about(clap::crate_description!())
        .bin_name(clap::crate_name!())
        .help_expected(true)
        .disable_version_flag(true)
        .arg(arg_version())
        .arg(arg_quiet())
        .arg(arg_verbose())
        .arg(arg_profile())
        .arg(arg_namespace())
        .arg(arg_anchor())
        .arg(arg_search())
        .arg(arg_type())
        .arg(arg_tree())
        .arg(arg_json())
        .arg(arg_in_file())
        .group(
            ArgGroup::new(G_VIEW)
                .args([A_L_SEARCH, A_L_TYPE, A_L_TREE, A_L_JSON])
                .multiple(false),
        )
}

#[allow(clippy::print_stdout)]
fn print_version_and_exit(quiet: bool) {
    if !quiet {
        print!("{} ", clap::crate_name!());
    }
    println!("{}", crate::VERSION);
    std::process::exit(0);
}

#[derive(Clone, Debug)]
pub struct Args {
    pub quiet: bool,
    pub verbose: bool,
    pub config: Config,
}

/// Parses the command line arguments,
/// including verification.
///
/// # Panics
///
/// - No input file/ontology was supplied
#[must_use]
pub fn parse() -> Args {
    let args = args_matcher().get_matches();

    let quiet = args.get_flag(A_L_QUIET);
    let version = args.get_flag(A_L_VERSION);
    if version {
        print_version_and_exit(quiet);
    }

    let verbose = args.get_flag(A_L_VERBOSE);
    let profile = args.get_one::<Profile>(A_L_PROFILE).copied().unwrap_or_default();
    let namespace = args
        .get_one::<Namespace>(A_L_NAMESPACE)
        .cloned()
        .unwrap_or_else(|| DEFAULT_NAMESPACE.clone());
    let mut compiler = CompilerConfig::for_profile(profile, namespace);
    if let Some(anchor) = args.get_one::<String>(A_L_ANCHOR) {
        compiler.sort = SortPolicy::Anchored {
            root: anchor.clone(),
        };
    }

    let view = if let Some(id) = args.get_one::<String>(A_L_TYPE) {
        View::Detail { id: id.clone() }
    } else if args.get_flag(A_L_TREE) {
        View::Tree
    } else if args.get_flag(A_L_JSON) {
        View::Json
    } else {
        View::List {
            query: args.get_one::<String>(A_L_SEARCH).cloned(),
        }
    };

    let ontology = args
        .get_one::<PathBuf>(A_L_IN_FILE)
        .cloned()
        .expect("The vocabulary input file is required");

    let config = Config {
        ontology,
        compiler,
        view,
    };

    Args {
        quiet,
        verbose,
        config,
    }
}
