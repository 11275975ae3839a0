// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::HashSet;

use rpg_schema_compiler::{
    compile, compile_turtle, CompilerConfig, Error, RdfFormat, SortPolicy, TypeDescriptor,
    TypeGraph,
};
use rpg_schema_iri::Namespace;

const RPG_TTL: &str = include_str!("data/rpg.ttl");

fn rpg() -> TypeGraph {
    compile_turtle(RPG_TTL, &CompilerConfig::default()).unwrap()
}

fn ids<'a>(types: impl IntoIterator<Item = &'a TypeDescriptor>) -> Vec<&'a str> {
    types.into_iter().map(|typ| typ.id.as_str()).collect()
}

fn property_names(typ: &TypeDescriptor) -> Vec<&str> {
    typ.properties.iter().map(|prop| prop.name.as_str()).collect()
}

#[test]
fn classes_in_presentation_order() {
    let graph = rpg();
    assert_eq!(
        ids(&graph),
        vec![
            "Ghost",
            "Thing",
            "Character",
            "Creature",
            "Item",
            "PlayerCharacter",
            "Spell"
        ]
    );
}

#[test]
fn ids_are_unique() {
    let graph = rpg();
    let unique: HashSet<_> = graph.iter().map(|typ| &typ.id).collect();
    assert_eq!(unique.len(), graph.len());
}

#[test]
fn parents_and_sub_types_agree() {
    let graph = rpg();
    for typ in &graph {
        if let Some(parent) = &typ.parent {
            let parent = graph.get(parent).expect("parent is a known type");
            assert!(parent.sub_types().contains(&typ.id));
        }
        for sub_id in typ.sub_types() {
            let sub = graph.get(sub_id).expect("sub-type is a known type");
            assert_eq!(sub.parent.as_ref(), Some(&typ.id));
        }
        assert_ne!(typ.sub_types.as_ref().map(Vec::len), Some(0));
    }
    assert_eq!(
        graph.get("Thing").unwrap().sub_types(),
        ["Character", "Creature", "Item", "Spell"]
    );
}

#[test]
fn first_parent_within_namespace_wins() {
    let graph = rpg();
    assert_eq!(
        graph.get("PlayerCharacter").unwrap().parent.as_deref(),
        Some("Character")
    );
    assert_eq!(
        ids(graph.hierarchy("PlayerCharacter")),
        vec!["Thing", "Character", "PlayerCharacter"]
    );
}

#[test]
fn unknown_parent_is_cleared() {
    let ghost = rpg().get("Ghost").cloned().unwrap();
    assert!(ghost.is_root());
    assert_eq!(ghost.icon, "📦");
}

#[test]
fn labels_comments_and_defaults() {
    let graph = rpg();
    let spell = graph.get("Spell").unwrap();
    assert_eq!(spell.name, "Spell");
    assert_eq!(spell.description, "");
    assert_eq!(spell.icon, "🔮");

    let character = graph.get("Character").unwrap();
    assert_eq!(character.description, "A player or non-player character.");
    assert_eq!(character.icon, "🧙");
    assert_eq!(graph.get("PlayerCharacter").unwrap().name, "Player Character");
}

#[test]
fn foreign_classes_are_ignored() {
    let graph = rpg();
    assert!(graph.get("Person").is_none());
    assert!(graph.get("Undead").is_none());
    assert!(graph.get("Thing").unwrap().properties.is_empty());
}

#[test]
fn properties_bound_to_domains() {
    let graph = rpg();
    let character = graph.get("Character").unwrap();
    assert_eq!(
        property_names(character),
        vec!["inventory", "known spells", "wields", "level", "alias", "hit points"]
    );
    assert_eq!(
        property_names(graph.get("Creature").unwrap()),
        vec!["inventory", "hit points"]
    );
    assert_eq!(
        property_names(graph.get("Item").unwrap()),
        vec!["weight", "is magical"]
    );
}

#[test]
fn expected_types() {
    let graph = rpg();
    let character = graph.get("Character").unwrap();
    let expected = |name: &str| {
        character
            .properties
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| prop.expected_type.clone())
            .unwrap()
    };
    assert_eq!(expected("level"), vec!["Text"]);
    assert_eq!(expected("known spells"), vec!["Thing"]);
    assert_eq!(expected("inventory"), vec!["Item"]);
    assert_eq!(expected("wields"), vec!["Item", "Spell"]);
    assert_eq!(expected("alias"), vec!["Text"]);
    assert_eq!(expected("hit points"), vec!["Non-negative Integer"]);

    let item = graph.get("Item").unwrap();
    assert_eq!(item.properties[0].expected_type, vec!["Number"]);
    assert_eq!(item.properties[0].description, "In kilograms.");
    assert_eq!(item.properties[1].expected_type, vec!["Boolean"]);
}

#[test]
fn owl_properties_are_never_required() {
    for typ in &rpg() {
        for prop in &typ.properties {
            assert_eq!(prop.required, None);
        }
    }
}

#[test]
fn multi_domain_properties_are_independent_copies() {
    let mut types = rpg().into_types();
    let inventory_of = |types: &[TypeDescriptor], id: &str| {
        types
            .iter()
            .find(|typ| typ.id == id)
            .and_then(|typ| typ.properties.iter().find(|prop| prop.name == "inventory"))
            .cloned()
            .unwrap()
    };
    assert_eq!(inventory_of(&types, "Character"), inventory_of(&types, "Creature"));

    let character = types.iter_mut().find(|typ| typ.id == "Character").unwrap();
    character.properties[0].description = "changed".to_owned();
    assert_eq!(
        inventory_of(&types, "Creature").description,
        "What is being carried around."
    );
}

#[test]
fn compiling_is_deterministic() {
    assert_eq!(rpg(), rpg());
}

#[test]
fn inheritance_forest() {
    let graph = rpg();
    let forest = graph.inheritance_forest();
    let roots: Vec<_> = forest.roots.iter().map(|node| forest.graph[*node].id.as_str()).collect();
    assert_eq!(roots, vec!["Ghost", "Thing"]);
    assert_eq!(forest.graph.edge_count(), 5);
    assert!(!graph.has_sub_class_cycle());
}

#[test]
fn parse_errors_are_fatal() {
    let broken = format!("{RPG_TTL}\nrpg:Broken a owl:Class ;");
    let err = compile_turtle(&broken, &CompilerConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("Turtle"));
}

#[test]
fn other_serializations() {
    let doc = "\
<http://www.rpg-schema.org/1.0/Tag> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> .
<http://www.rpg-schema.org/1.0/Tag> <http://www.w3.org/2000/01/rdf-schema#label> \"Tag\" .
";
    let graph = compile(doc, RdfFormat::NTriples, &CompilerConfig::default()).unwrap();
    assert_eq!(ids(&graph), vec!["Tag"]);
    assert_eq!(graph.get("Tag").unwrap().icon, "🏷️");
}

const RDFS_TTL: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix ex:   <https://example.org/rpg#> .

ex:Roll a rdfs:Class .
ex:Thing a rdfs:Class ;
    ex:icon "🌐" .
ex:Wizard a rdfs:Class ;
    rdfs:subClassOf ex:Character ;
    ex:icon "🪄" .
ex:Character a rdfs:Class ;
    rdfs:subClassOf ex:Thing .
ex:Aura a rdfs:Class ;
    rdfs:subClassOf ex:Thing ;
    ex:icon "  " .

ex:name a rdf:Property ;
    rdfs:domain ex:Character ;
    ex:required "true" .
ex:age a rdf:Property ;
    rdfs:domain ex:Character ;
    rdfs:range xsd:integer ;
    ex:required "false" .
ex:school a rdf:Property ;
    rdfs:domain ex:Wizard ;
    rdfs:range ex:Thing ;
    ex:required "1" .
"#;

fn rdfs_config() -> CompilerConfig {
    CompilerConfig::rdfs(Namespace::new("ex", "https://example.org/rpg#").unwrap())
}

#[test]
fn rdfs_profile() {
    let graph = compile_turtle(RDFS_TTL, &rdfs_config()).unwrap();
    assert_eq!(
        ids(&graph),
        vec!["Thing", "Aura", "Character", "Roll", "Wizard"]
    );

    assert_eq!(graph.get("Thing").unwrap().icon, "🌐");
    assert_eq!(graph.get("Wizard").unwrap().icon, "🪄");
    assert_eq!(graph.get("Character").unwrap().icon, "🧙");
    assert_eq!(graph.get("Aura").unwrap().icon, "📦");

    let character = graph.get("Character").unwrap();
    assert_eq!(character.properties[0].name, "name");
    assert_eq!(character.properties[0].expected_type, vec!["Text"]);
    assert_eq!(character.properties[0].required, Some(true));
    assert_eq!(character.properties[1].expected_type, vec!["Integer"]);
    assert_eq!(character.properties[1].required, None);
    assert_eq!(
        graph.get("Wizard").unwrap().properties[0].required,
        Some(true)
    );
}

#[test]
fn rdfs_document_under_owl_profile_is_empty() {
    let config = CompilerConfig {
        sort: SortPolicy::RootsFirst,
        ..CompilerConfig::owl(rdfs_config().namespace)
    };
    let graph = compile_turtle(RDFS_TTL, &config).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn default_namespace_ignores_other_vocabularies() {
    let graph = compile_turtle(RDFS_TTL, &CompilerConfig::rdfs(CompilerConfig::default().namespace))
        .unwrap();
    assert!(graph.is_empty());
}

const OWL_PREFIXES: &str = r#"
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix rpg:  <http://www.rpg-schema.org/1.0/> .
"#;

#[test]
fn blank_labels_fall_back_to_local_names() {
    let doc = format!(
        r#"{OWL_PREFIXES}
rpg:Blank a owl:Class ;
    rdfs:label "" .
rpg:Spaced a owl:Class ;
    rdfs:label "   " .
rpg:p a owl:DatatypeProperty ;
    rdfs:label "" ;
    rdfs:domain rpg:Blank .
"#
    );
    let graph = compile_turtle(&doc, &CompilerConfig::default()).unwrap();
    let blank = graph.get("Blank").unwrap();
    assert_eq!(blank.name, "Blank");
    assert_eq!(blank.properties[0].name, "p");
    assert_eq!(graph.get("Spaced").unwrap().name, "Spaced");
}

#[test]
fn accented_names_sort_with_their_base_letter() {
    let doc = format!(
        r#"{OWL_PREFIXES}
rpg:Zed a owl:Class ;
    rdfs:label "Zed" .
rpg:Aether a owl:Class ;
    rdfs:label "Ätherwesen" .
rpg:Bee a owl:Class ;
    rdfs:label "Bee" .
"#
    );
    let graph = compile_turtle(&doc, &CompilerConfig::default()).unwrap();
    assert_eq!(ids(&graph), vec!["Aether", "Bee", "Zed"]);
}
