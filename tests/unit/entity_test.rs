//! Unit tests for IRI validation and entity construction.

use owlcsv::{Entity, EntityKind, ExportError, Iri, Literal};

#[test]
fn test_iri_round_trip() {
    let iri = Iri::new("http://example.org/ns#Dog").unwrap();
    assert_eq!(iri.as_str(), "http://example.org/ns#Dog");
    assert_eq!(iri.to_string(), "http://example.org/ns#Dog");
}

#[test]
fn test_iri_rejects_whitespace() {
    let result = Iri::new("http://example.org/a b");
    assert!(matches!(result, Err(ExportError::InvalidIri { .. })));
}

#[test]
fn test_iri_ordering_is_deterministic() {
    let a = Iri::new("http://example.org/Animal").unwrap();
    let b = Iri::new("http://example.org/Pet").unwrap();
    assert!(a < b);
}

#[test]
fn test_entity_constructors_set_kind() {
    let iri = Iri::new("http://example.org/x").unwrap();
    assert_eq!(Entity::class(iri.clone()).kind, EntityKind::Class);
    assert_eq!(
        Entity::named_individual(iri.clone()).kind,
        EntityKind::NamedIndividual
    );
    assert_eq!(
        Entity::object_property(iri.clone()).kind,
        EntityKind::ObjectProperty
    );
    assert_eq!(
        Entity::data_property(iri.clone()).kind,
        EntityKind::DataProperty
    );
    assert_eq!(
        Entity::annotation_property(iri).kind,
        EntityKind::AnnotationProperty
    );
}

#[test]
fn test_entity_kind_display_matches_name() {
    assert_eq!(EntityKind::ObjectProperty.to_string(), "ObjectProperty");
    assert_eq!(EntityKind::Class.to_string(), "Class");
}

#[test]
fn test_literal_constructors() {
    let datatype = Iri::new("http://www.w3.org/2001/XMLSchema#integer").unwrap();
    let typed = Literal::typed("7", datatype.clone());
    assert_eq!(typed.lexical_form(), "7");
    assert_eq!(typed.datatype(), Some(&datatype));
    assert_eq!(typed.language(), None);
}
