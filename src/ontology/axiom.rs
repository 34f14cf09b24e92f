//! Ontology axioms: structured statements about entities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::expression::ClassExpression;
use super::types::{AnnotationValue, Iri, Literal};

/// A metadata statement attaching a value to a subject via an annotation
/// property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationAssertion {
    /// Annotated subject
    pub subject: Iri,
    /// Annotation property
    pub property: Iri,
    /// Attached value
    pub value: AnnotationValue,
}

/// A structured ontology statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Axiom {
    /// `sub` is a subclass of `sup`
    SubClassOf {
        /// Subclass side
        sub: ClassExpression,
        /// Superclass side
        sup: ClassExpression,
    },
    /// All listed expressions describe the same class
    EquivalentClasses(Vec<ClassExpression>),
    /// Annotation attached to a subject
    AnnotationAssertion(AnnotationAssertion),
    /// `subject` is linked to `target` via an object property
    ObjectPropertyAssertion {
        /// Source individual
        subject: Iri,
        /// Object property
        property: Iri,
        /// Target individual
        target: Iri,
    },
    /// `subject` carries a literal value via a data property
    DataPropertyAssertion {
        /// Source individual
        subject: Iri,
        /// Data property
        property: Iri,
        /// Asserted literal
        value: Literal,
    },
}

impl Axiom {
    /// All IRIs mentioned anywhere in the axiom.
    pub fn signature(&self) -> BTreeSet<Iri> {
        let mut out = BTreeSet::new();
        match self {
            Axiom::SubClassOf { sub, sup } => {
                out.extend(sub.signature());
                out.extend(sup.signature());
            }
            Axiom::EquivalentClasses(expressions) => {
                for expression in expressions {
                    out.extend(expression.signature());
                }
            }
            Axiom::AnnotationAssertion(assertion) => {
                out.insert(assertion.subject.clone());
                out.insert(assertion.property.clone());
                if let AnnotationValue::Iri(value) = &assertion.value {
                    out.insert(value.clone());
                }
            }
            Axiom::ObjectPropertyAssertion {
                subject,
                property,
                target,
            } => {
                out.insert(subject.clone());
                out.insert(property.clone());
                out.insert(target.clone());
            }
            Axiom::DataPropertyAssertion {
                subject, property, ..
            } => {
                out.insert(subject.clone());
                out.insert(property.clone());
            }
        }
        out
    }

    /// Whether the axiom mentions the given IRI.
    pub fn mentions(&self, iri: &Iri) -> bool {
        self.signature().contains(iri)
    }
}
