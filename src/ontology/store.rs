//! Ontology query seam and the in-memory store implementation.
//!
//! [`OntologyStore`] is the boundary between the exporter and whatever owns
//! the ontology. [`MemoryOntology`] is the first-party implementation: a
//! standalone axiom store with per-subject indexes, suitable for tests and
//! for programs that build their ontology in process.

use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::axiom::{AnnotationAssertion, Axiom};
use super::expression::ClassExpression;
use super::types::{Entity, EntityKind, Iri};

/// Read-only query interface over an ontology.
///
/// The exporter only ever reads through this trait; no axioms are added or
/// removed during an export. Implementations are free to answer the
/// superclass query with a purely structural computation — classification
/// and consistency checking are NOT required.
pub trait OntologyStore {
    /// Annotation assertion axioms whose subject is the given IRI.
    fn annotation_assertions(&self, subject: &Iri) -> Vec<AnnotationAssertion>;

    /// Axioms describing the given class: subclass axioms where it is the
    /// subclass side, and equivalence axioms that list it.
    fn class_axioms(&self, class: &Iri) -> Vec<Axiom>;

    /// Property-assertion axioms whose subject is the given named individual.
    fn individual_axioms(&self, individual: &Iri) -> Vec<Axiom>;

    /// Direct superclasses of the given class, computed structurally.
    fn direct_superclasses(&self, class: &Iri) -> Vec<Iri>;
}

/// In-memory ontology store backed by an axiom list with lookup indexes.
///
/// Axioms are returned in insertion order. The per-subject indexes make the
/// [`OntologyStore`] queries independent of the total axiom count.
#[derive(Debug, Clone, Default)]
pub struct MemoryOntology {
    entities: BTreeMap<Iri, EntityKind>,
    axioms: Vec<Axiom>,
    class_index: HashMap<Iri, Vec<usize>>,
    individual_index: HashMap<Iri, Vec<usize>>,
    annotation_index: HashMap<Iri, Vec<usize>>,
}

impl MemoryOntology {
    /// Create an empty ontology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an entity. Re-declaring an IRI overwrites its kind (punning
    /// is left to the caller's discretion).
    pub fn declare(&mut self, entity: Entity) {
        self.entities.insert(entity.iri, entity.kind);
    }

    /// Look up a declared entity by IRI.
    pub fn entity(&self, iri: &Iri) -> Option<Entity> {
        self.entities
            .get(iri)
            .map(|kind| Entity::new(iri.clone(), *kind))
    }

    /// All declared entities, ordered by IRI.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities
            .iter()
            .map(|(iri, kind)| Entity::new(iri.clone(), *kind))
    }

    /// Number of declared entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Add an axiom to the store and index it by subject.
    pub fn add_axiom(&mut self, axiom: Axiom) {
        let index = self.axioms.len();
        match &axiom {
            Axiom::SubClassOf { sub, .. } => {
                if let ClassExpression::Class(iri) = sub {
                    self.class_index.entry(iri.clone()).or_default().push(index);
                }
            }
            Axiom::EquivalentClasses(expressions) => {
                for expression in expressions {
                    if let ClassExpression::Class(iri) = expression {
                        self.class_index.entry(iri.clone()).or_default().push(index);
                    }
                }
            }
            Axiom::AnnotationAssertion(assertion) => {
                self.annotation_index
                    .entry(assertion.subject.clone())
                    .or_default()
                    .push(index);
            }
            Axiom::ObjectPropertyAssertion { subject, .. }
            | Axiom::DataPropertyAssertion { subject, .. } => {
                self.individual_index
                    .entry(subject.clone())
                    .or_default()
                    .push(index);
            }
        }
        self.axioms.push(axiom);
        debug!("axiom added, store now holds {}", self.axioms.len());
    }

    /// Number of stored axioms.
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    fn indexed_axioms(&self, index: Option<&Vec<usize>>) -> Vec<Axiom> {
        index
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| self.axioms[position].clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl OntologyStore for MemoryOntology {
    fn annotation_assertions(&self, subject: &Iri) -> Vec<AnnotationAssertion> {
        self.annotation_index
            .get(subject)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&position| match &self.axioms[position] {
                        Axiom::AnnotationAssertion(assertion) => Some(assertion.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn class_axioms(&self, class: &Iri) -> Vec<Axiom> {
        self.indexed_axioms(self.class_index.get(class))
    }

    fn individual_axioms(&self, individual: &Iri) -> Vec<Axiom> {
        self.indexed_axioms(self.individual_index.get(individual))
    }

    fn direct_superclasses(&self, class: &Iri) -> Vec<Iri> {
        let mut superclasses = BTreeSet::new();
        if let Some(positions) = self.class_index.get(class) {
            for &position in positions {
                if let Axiom::SubClassOf {
                    sub: ClassExpression::Class(sub),
                    sup: ClassExpression::Class(sup),
                } = &self.axioms[position]
                {
                    if sub == class {
                        superclasses.insert(sup.clone());
                    }
                }
            }
        }
        superclasses.into_iter().collect()
    }
}
