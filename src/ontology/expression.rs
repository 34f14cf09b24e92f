//! Class expressions and property-restriction inspection.
//!
//! Class expressions form a tagged union over atomic classes, boolean
//! combinations, enumerations, and the property-restriction shapes for both
//! object- and data-valued properties. Restriction inspection is an
//! exhaustive match over the variants: adding a new expression shape without
//! deciding its inspection behavior is a compile error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::{Iri, Literal};

/// A (possibly compound) description of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassExpression {
    /// Atomic named class
    Class(Iri),
    /// Intersection of class expressions
    ObjectIntersectionOf(Vec<ClassExpression>),
    /// Union of class expressions
    ObjectUnionOf(Vec<ClassExpression>),
    /// Complement of a class expression
    ObjectComplementOf(Box<ClassExpression>),
    /// Enumeration of named individuals
    ObjectOneOf(Vec<Iri>),
    /// Existential restriction on an object property
    ObjectSomeValuesFrom {
        /// Restricted property
        property: Iri,
        /// Filler class expression
        filler: Box<ClassExpression>,
    },
    /// Universal restriction on an object property
    ObjectAllValuesFrom {
        /// Restricted property
        property: Iri,
        /// Filler class expression
        filler: Box<ClassExpression>,
    },
    /// Has-value restriction on an object property
    ObjectHasValue {
        /// Restricted property
        property: Iri,
        /// Required individual
        individual: Iri,
    },
    /// Local-reflexivity (self) restriction on an object property
    ObjectHasSelf {
        /// Restricted property
        property: Iri,
    },
    /// Minimum-cardinality restriction on an object property
    ObjectMinCardinality {
        /// Lower bound
        cardinality: u32,
        /// Restricted property
        property: Iri,
        /// Qualifying filler, absent for unqualified restrictions
        filler: Option<Box<ClassExpression>>,
    },
    /// Exact-cardinality restriction on an object property
    ObjectExactCardinality {
        /// Required count
        cardinality: u32,
        /// Restricted property
        property: Iri,
        /// Qualifying filler, absent for unqualified restrictions
        filler: Option<Box<ClassExpression>>,
    },
    /// Maximum-cardinality restriction on an object property
    ObjectMaxCardinality {
        /// Upper bound
        cardinality: u32,
        /// Restricted property
        property: Iri,
        /// Qualifying filler, absent for unqualified restrictions
        filler: Option<Box<ClassExpression>>,
    },
    /// Existential restriction on a data property
    DataSomeValuesFrom {
        /// Restricted property
        property: Iri,
        /// Filler range
        range: DataRange,
    },
    /// Universal restriction on a data property
    DataAllValuesFrom {
        /// Restricted property
        property: Iri,
        /// Filler range
        range: DataRange,
    },
    /// Has-value restriction on a data property
    DataHasValue {
        /// Restricted property
        property: Iri,
        /// Required literal
        literal: Literal,
    },
    /// Minimum-cardinality restriction on a data property
    DataMinCardinality {
        /// Lower bound
        cardinality: u32,
        /// Restricted property
        property: Iri,
        /// Qualifying range, absent for unqualified restrictions
        range: Option<DataRange>,
    },
    /// Exact-cardinality restriction on a data property
    DataExactCardinality {
        /// Required count
        cardinality: u32,
        /// Restricted property
        property: Iri,
        /// Qualifying range, absent for unqualified restrictions
        range: Option<DataRange>,
    },
    /// Maximum-cardinality restriction on a data property
    DataMaxCardinality {
        /// Upper bound
        cardinality: u32,
        /// Restricted property
        property: Iri,
        /// Qualifying range, absent for unqualified restrictions
        range: Option<DataRange>,
    },
}

/// The filler side of a data restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataRange {
    /// A named datatype
    Datatype(Iri),
    /// Enumeration of literals
    DataOneOf(Vec<Literal>),
}

/// A property restriction extracted from a class expression.
///
/// `filler` is absent for self-restrictions (no filler concept applies) and
/// for unqualified cardinality restrictions.
#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    /// The restricted property
    pub property: Iri,
    /// The filler object, when the restriction shape has one
    pub filler: Option<Filler>,
}

/// The filler object of a restriction.
#[derive(Debug, Clone, PartialEq)]
pub enum Filler {
    /// Class-expression filler of an object restriction
    Class(ClassExpression),
    /// Individual filler of an object has-value restriction
    Individual(Iri),
    /// Data-range filler of a data restriction
    Range(DataRange),
    /// Literal filler of a data has-value restriction
    Literal(Literal),
}

impl ClassExpression {
    /// Extract the `(property, filler)` pair if this expression is a
    /// property restriction.
    ///
    /// Only the top-level expression is inspected; nested or compound
    /// expressions are not recursively unwrapped. Non-restriction shapes
    /// (atomic class, intersection, union, complement, enumeration) return
    /// `None` — a deliberately permissive policy so unusual expressions
    /// contribute no value instead of aborting an export.
    pub fn as_restriction(&self) -> Option<Restriction> {
        match self {
            ClassExpression::Class(_)
            | ClassExpression::ObjectIntersectionOf(_)
            | ClassExpression::ObjectUnionOf(_)
            | ClassExpression::ObjectComplementOf(_)
            | ClassExpression::ObjectOneOf(_) => None,
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler } => Some(Restriction {
                property: property.clone(),
                filler: Some(Filler::Class((**filler).clone())),
            }),
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => Some(Restriction {
                property: property.clone(),
                filler: Some(Filler::Individual(individual.clone())),
            }),
            ClassExpression::ObjectHasSelf { property } => Some(Restriction {
                property: property.clone(),
                filler: None,
            }),
            ClassExpression::ObjectMinCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectExactCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectMaxCardinality {
                property, filler, ..
            } => Some(Restriction {
                property: property.clone(),
                filler: filler.as_ref().map(|f| Filler::Class((**f).clone())),
            }),
            ClassExpression::DataSomeValuesFrom { property, range }
            | ClassExpression::DataAllValuesFrom { property, range } => Some(Restriction {
                property: property.clone(),
                filler: Some(Filler::Range(range.clone())),
            }),
            ClassExpression::DataHasValue { property, literal } => Some(Restriction {
                property: property.clone(),
                filler: Some(Filler::Literal(literal.clone())),
            }),
            ClassExpression::DataMinCardinality {
                property, range, ..
            }
            | ClassExpression::DataExactCardinality {
                property, range, ..
            }
            | ClassExpression::DataMaxCardinality {
                property, range, ..
            } => Some(Restriction {
                property: property.clone(),
                filler: range.as_ref().map(|r| Filler::Range(r.clone())),
            }),
        }
    }

    /// All IRIs mentioned anywhere in the expression.
    pub fn signature(&self) -> BTreeSet<Iri> {
        let mut out = BTreeSet::new();
        self.collect_signature(&mut out);
        out
    }

    fn collect_signature(&self, out: &mut BTreeSet<Iri>) {
        match self {
            ClassExpression::Class(iri) => {
                out.insert(iri.clone());
            }
            ClassExpression::ObjectIntersectionOf(operands)
            | ClassExpression::ObjectUnionOf(operands) => {
                for operand in operands {
                    operand.collect_signature(out);
                }
            }
            ClassExpression::ObjectComplementOf(inner) => inner.collect_signature(out),
            ClassExpression::ObjectOneOf(individuals) => {
                out.extend(individuals.iter().cloned());
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler }
            | ClassExpression::ObjectAllValuesFrom { property, filler } => {
                out.insert(property.clone());
                filler.collect_signature(out);
            }
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                out.insert(property.clone());
                out.insert(individual.clone());
            }
            ClassExpression::ObjectHasSelf { property } => {
                out.insert(property.clone());
            }
            ClassExpression::ObjectMinCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectExactCardinality {
                property, filler, ..
            }
            | ClassExpression::ObjectMaxCardinality {
                property, filler, ..
            } => {
                out.insert(property.clone());
                if let Some(filler) = filler {
                    filler.collect_signature(out);
                }
            }
            ClassExpression::DataSomeValuesFrom { property, range }
            | ClassExpression::DataAllValuesFrom { property, range } => {
                out.insert(property.clone());
                range.collect_signature(out);
            }
            ClassExpression::DataHasValue { property, .. } => {
                out.insert(property.clone());
            }
            ClassExpression::DataMinCardinality {
                property, range, ..
            }
            | ClassExpression::DataExactCardinality {
                property, range, ..
            }
            | ClassExpression::DataMaxCardinality {
                property, range, ..
            } => {
                out.insert(property.clone());
                if let Some(range) = range {
                    range.collect_signature(out);
                }
            }
        }
    }
}

impl DataRange {
    fn collect_signature(&self, out: &mut BTreeSet<Iri>) {
        match self {
            DataRange::Datatype(iri) => {
                out.insert(iri.clone());
            }
            DataRange::DataOneOf(_) => {}
        }
    }
}
