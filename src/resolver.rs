//! Value resolution for (entity, property) pairs.
//!
//! Given a subject entity and a target property, [`ValueResolver`] scans the
//! relevant axioms and produces the list of rendered values the property
//! takes for that entity. Resolution never fails: a pair with no matching
//! axiom resolves to an empty list and renders as an empty cell.

use log::trace;

use crate::ontology::{
    AnnotationValue, Axiom, ClassExpression, Entity, EntityKind, OntologyStore,
};
use crate::render::{render_filler, EntityRenderer};

/// Resolves the values a property takes for an entity.
///
/// Values are returned in axiom iteration order, which is not guaranteed to
/// be stable across ontology implementations — consumers that compare
/// results should compare them as sets.
pub struct ValueResolver<'a> {
    ontology: &'a dyn OntologyStore,
    renderer: &'a dyn EntityRenderer,
}

impl<'a> ValueResolver<'a> {
    /// Create a resolver over the given ontology and renderer.
    pub fn new(ontology: &'a dyn OntologyStore, renderer: &'a dyn EntityRenderer) -> Self {
        Self { ontology, renderer }
    }

    /// Resolve the values `property` takes for `entity`.
    ///
    /// Dispatches on the property kind: annotation properties are resolved
    /// from annotation assertions; object and data properties are resolved
    /// from subclass/equivalence restrictions (class subjects) or property
    /// assertions (individual subjects). Anything else resolves to nothing.
    pub fn resolve(&self, entity: &Entity, property: &Entity) -> Vec<String> {
        let values = match property.kind {
            EntityKind::AnnotationProperty => self.annotation_values(entity, property),
            EntityKind::ObjectProperty | EntityKind::DataProperty => {
                self.asserted_values(entity, property)
            }
            _ => Vec::new(),
        };
        trace!(
            "resolved {} value(s) for {} × {}",
            values.len(),
            entity.iri,
            property.iri
        );
        values
    }

    fn annotation_values(&self, entity: &Entity, property: &Entity) -> Vec<String> {
        let mut values = Vec::new();
        for assertion in self.ontology.annotation_assertions(&entity.iri) {
            if assertion.property != property.iri {
                continue;
            }
            match &assertion.value {
                AnnotationValue::Iri(iri) => values.push(iri.as_str().to_string()),
                AnnotationValue::Literal(literal) => {
                    values.push(sanitize_literal(literal.lexical_form()));
                }
                AnnotationValue::AnonymousIndividual(id) => {
                    values.push(format!("AnonymousIndividual-{id}"));
                }
            }
        }
        values
    }

    fn asserted_values(&self, entity: &Entity, property: &Entity) -> Vec<String> {
        match entity.kind {
            EntityKind::Class => self.class_restriction_values(entity, property),
            EntityKind::NamedIndividual => self.individual_assertion_values(entity, property),
            _ => Vec::new(),
        }
    }

    fn class_restriction_values(&self, entity: &Entity, property: &Entity) -> Vec<String> {
        let mut values = Vec::new();
        for axiom in self.ontology.class_axioms(&entity.iri) {
            if !axiom.mentions(&property.iri) {
                continue;
            }
            let filler = match &axiom {
                Axiom::SubClassOf { sub, sup } => self.restriction_filler(sub, sup, entity, property),
                // Only the first pair of the pairwise SubClassOf normal form
                // is considered.
                Axiom::EquivalentClasses(expressions) if expressions.len() >= 2 => {
                    self.restriction_filler(&expressions[0], &expressions[1], entity, property)
                }
                _ => None,
            };
            if let Some(filler) = filler {
                values.push(filler);
            }
        }
        values
    }

    /// Inspect whichever side of a subclass-style pair is not the entity
    /// itself, and render its filler when the restricted property matches.
    fn restriction_filler(
        &self,
        sub: &ClassExpression,
        sup: &ClassExpression,
        entity: &Entity,
        property: &Entity,
    ) -> Option<String> {
        let entity_side = ClassExpression::Class(entity.iri.clone());
        let other = if *sub == entity_side { sup } else { sub };
        let restriction = other.as_restriction()?;
        if restriction.property != property.iri {
            return None;
        }
        restriction
            .filler
            .map(|filler| render_filler(&filler, self.renderer))
    }

    fn individual_assertion_values(&self, entity: &Entity, property: &Entity) -> Vec<String> {
        let mut values = Vec::new();
        for axiom in self.ontology.individual_axioms(&entity.iri) {
            match &axiom {
                Axiom::DataPropertyAssertion {
                    property: asserted,
                    value,
                    ..
                } if *asserted == property.iri => {
                    values.push(sanitize_literal(value.lexical_form()));
                }
                Axiom::ObjectPropertyAssertion {
                    property: asserted,
                    target,
                    ..
                } if *asserted == property.iri => {
                    values.push(self.renderer.render(target));
                }
                _ => {}
            }
        }
        values
    }
}

/// Replace embedded double quotes with single quotes so literal text cannot
/// corrupt the quoting convention of the delimited cell it lands in.
fn sanitize_literal(lexical: &str) -> String {
    lexical.replace('"', "'")
}
