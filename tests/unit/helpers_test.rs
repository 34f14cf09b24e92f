//! Unit tests for the ontology-building helpers.

use owlcsv::{helpers, Axiom, ClassExpression, EntityKind, MemoryOntology, OntologyStore};

#[test]
fn test_declare_helpers_register_entities() {
    let mut ontology = MemoryOntology::new();
    let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog").unwrap();
    let rex = helpers::declare_named_individual(&mut ontology, "http://example.org/rex").unwrap();

    assert_eq!(dog.kind, EntityKind::Class);
    assert_eq!(rex.kind, EntityKind::NamedIndividual);
    assert_eq!(ontology.entity_count(), 2);
    assert_eq!(ontology.entity(&dog.iri).unwrap(), dog);
}

#[test]
fn test_declare_rejects_invalid_iri() {
    let mut ontology = MemoryOntology::new();
    assert!(helpers::declare_class(&mut ontology, "not an iri").is_err());
    assert_eq!(ontology.entity_count(), 0);
}

#[test]
fn test_assert_subclass_records_axiom_under_subject() {
    let mut ontology = MemoryOntology::new();
    let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog").unwrap();
    let person = helpers::declare_class(&mut ontology, "http://example.org/Person").unwrap();
    let owner =
        helpers::declare_object_property(&mut ontology, "http://example.org/hasOwner").unwrap();

    helpers::assert_subclass(&mut ontology, &dog, helpers::some_values_from(&owner, &person));

    let axioms = ontology.class_axioms(&dog.iri);
    assert_eq!(axioms.len(), 1);
    assert!(matches!(
        &axioms[0],
        Axiom::SubClassOf {
            sub: ClassExpression::Class(sub),
            sup: ClassExpression::ObjectSomeValuesFrom { .. },
        } if sub == &dog.iri
    ));
}

#[test]
fn test_assert_equivalent_lists_class_first() {
    let mut ontology = MemoryOntology::new();
    let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog").unwrap();
    let person = helpers::declare_class(&mut ontology, "http://example.org/Person").unwrap();
    let owner =
        helpers::declare_object_property(&mut ontology, "http://example.org/hasOwner").unwrap();

    helpers::assert_equivalent(&mut ontology, &dog, helpers::all_values_from(&owner, &person));

    let axioms = ontology.class_axioms(&dog.iri);
    assert!(matches!(
        &axioms[0],
        Axiom::EquivalentClasses(expressions)
            if matches!(&expressions[0], ClassExpression::Class(first) if first == &dog.iri)
    ));
}

#[test]
fn test_annotate_attaches_literal_value() {
    let mut ontology = MemoryOntology::new();
    let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog").unwrap();
    let comment =
        helpers::declare_annotation_property(&mut ontology, "http://example.org/comment").unwrap();
    helpers::annotate(&mut ontology, &dog, &comment, "good boy");

    let assertions = ontology.annotation_assertions(&dog.iri);
    assert_eq!(assertions.len(), 1);
    assert_eq!(assertions[0].property, comment.iri);
}
