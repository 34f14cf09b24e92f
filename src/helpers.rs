//! Convenience helpers for building ontologies in process.
//!
//! This module cuts boilerplate when populating a [`MemoryOntology`]:
//! declaring entities from IRI strings, asserting subclass and equivalence
//! relationships, and attaching annotations and property assertions.

use crate::error::Result;
use crate::ontology::{
    AnnotationAssertion, AnnotationValue, Axiom, ClassExpression, Entity, Iri, Literal,
    MemoryOntology,
};

/// Declare a class and return its entity.
///
/// # Errors
///
/// Returns [`crate::ExportError::InvalidIri`] if `iri` is not a valid IRI.
pub fn declare_class(ontology: &mut MemoryOntology, iri: &str) -> Result<Entity> {
    let entity = Entity::class(Iri::new(iri)?);
    ontology.declare(entity.clone());
    Ok(entity)
}

/// Declare a named individual and return its entity.
///
/// # Errors
///
/// Returns [`crate::ExportError::InvalidIri`] if `iri` is not a valid IRI.
pub fn declare_named_individual(ontology: &mut MemoryOntology, iri: &str) -> Result<Entity> {
    let entity = Entity::named_individual(Iri::new(iri)?);
    ontology.declare(entity.clone());
    Ok(entity)
}

/// Declare an object property and return its entity.
///
/// # Errors
///
/// Returns [`crate::ExportError::InvalidIri`] if `iri` is not a valid IRI.
pub fn declare_object_property(ontology: &mut MemoryOntology, iri: &str) -> Result<Entity> {
    let entity = Entity::object_property(Iri::new(iri)?);
    ontology.declare(entity.clone());
    Ok(entity)
}

/// Declare a data property and return its entity.
///
/// # Errors
///
/// Returns [`crate::ExportError::InvalidIri`] if `iri` is not a valid IRI.
pub fn declare_data_property(ontology: &mut MemoryOntology, iri: &str) -> Result<Entity> {
    let entity = Entity::data_property(Iri::new(iri)?);
    ontology.declare(entity.clone());
    Ok(entity)
}

/// Declare an annotation property and return its entity.
///
/// # Errors
///
/// Returns [`crate::ExportError::InvalidIri`] if `iri` is not a valid IRI.
pub fn declare_annotation_property(ontology: &mut MemoryOntology, iri: &str) -> Result<Entity> {
    let entity = Entity::annotation_property(Iri::new(iri)?);
    ontology.declare(entity.clone());
    Ok(entity)
}

/// Assert that `sub` is a subclass of the given expression.
pub fn assert_subclass(ontology: &mut MemoryOntology, sub: &Entity, sup: ClassExpression) {
    ontology.add_axiom(Axiom::SubClassOf {
        sub: ClassExpression::Class(sub.iri.clone()),
        sup,
    });
}

/// Assert that `class` is equivalent to the given expression.
pub fn assert_equivalent(ontology: &mut MemoryOntology, class: &Entity, other: ClassExpression) {
    ontology.add_axiom(Axiom::EquivalentClasses(vec![
        ClassExpression::Class(class.iri.clone()),
        other,
    ]));
}

/// Attach a literal annotation to a subject.
pub fn annotate(ontology: &mut MemoryOntology, subject: &Entity, property: &Entity, text: &str) {
    ontology.add_axiom(Axiom::AnnotationAssertion(AnnotationAssertion {
        subject: subject.iri.clone(),
        property: property.iri.clone(),
        value: AnnotationValue::Literal(Literal::string(text)),
    }));
}

/// Assert an object-property link between two individuals.
pub fn assert_object_property(
    ontology: &mut MemoryOntology,
    subject: &Entity,
    property: &Entity,
    target: &Entity,
) {
    ontology.add_axiom(Axiom::ObjectPropertyAssertion {
        subject: subject.iri.clone(),
        property: property.iri.clone(),
        target: target.iri.clone(),
    });
}

/// Assert a data-property value on an individual.
pub fn assert_data_property(
    ontology: &mut MemoryOntology,
    subject: &Entity,
    property: &Entity,
    value: Literal,
) {
    ontology.add_axiom(Axiom::DataPropertyAssertion {
        subject: subject.iri.clone(),
        property: property.iri.clone(),
        value,
    });
}

/// An existential restriction on `property` with a named-class filler.
pub fn some_values_from(property: &Entity, filler: &Entity) -> ClassExpression {
    ClassExpression::ObjectSomeValuesFrom {
        property: property.iri.clone(),
        filler: Box::new(ClassExpression::Class(filler.iri.clone())),
    }
}

/// A universal restriction on `property` with a named-class filler.
pub fn all_values_from(property: &Entity, filler: &Entity) -> ClassExpression {
    ClassExpression::ObjectAllValuesFrom {
        property: property.iri.clone(),
        filler: Box::new(ClassExpression::Class(filler.iri.clone())),
    }
}
