//! Core ontology types: IRIs, entities, literals, and annotation values.

use crate::error::{ExportError, Result};
use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated IRI identifying an ontology element.
///
/// Construction goes through [`oxrdf::NamedNode`] validation so that every
/// entity in the model carries a canonical identifier. IRIs are ordered,
/// which gives sets of IRIs a deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri {
    value: String,
}

impl Iri {
    /// Validate and construct a new IRI.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidIri`] if the input is not a valid IRI.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        NamedNode::new(value.as_str()).map_err(|_| ExportError::InvalidIri {
            value: value.clone(),
        })?;
        Ok(Self { value })
    }

    /// The full textual form of the IRI.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl std::str::FromStr for Iri {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Iri {
    type Error = ExportError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.value
    }
}

/// Kind of a named ontology entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// OWL class
    Class,
    /// Named individual
    NamedIndividual,
    /// Object property (links individuals)
    ObjectProperty,
    /// Data property (attaches literal values)
    DataProperty,
    /// Annotation property (attaches metadata)
    AnnotationProperty,
}

impl EntityKind {
    /// Stable name used for the Type column of an export.
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::NamedIndividual => "NamedIndividual",
            EntityKind::ObjectProperty => "ObjectProperty",
            EntityKind::DataProperty => "DataProperty",
            EntityKind::AnnotationProperty => "AnnotationProperty",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named ontology entity: an IRI plus its kind tag.
///
/// Entities are immutable; the ontology model owns their definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier of the entity
    pub iri: Iri,
    /// Kind tag
    pub kind: EntityKind,
}

impl Entity {
    /// Create an entity with the given IRI and kind.
    pub fn new(iri: Iri, kind: EntityKind) -> Self {
        Self { iri, kind }
    }

    /// Create a class entity.
    pub fn class(iri: Iri) -> Self {
        Self::new(iri, EntityKind::Class)
    }

    /// Create a named-individual entity.
    pub fn named_individual(iri: Iri) -> Self {
        Self::new(iri, EntityKind::NamedIndividual)
    }

    /// Create an object-property entity.
    pub fn object_property(iri: Iri) -> Self {
        Self::new(iri, EntityKind::ObjectProperty)
    }

    /// Create a data-property entity.
    pub fn data_property(iri: Iri) -> Self {
        Self::new(iri, EntityKind::DataProperty)
    }

    /// Create an annotation-property entity.
    pub fn annotation_property(iri: Iri) -> Self {
        Self::new(iri, EntityKind::AnnotationProperty)
    }

    /// Whether this entity is a class.
    pub fn is_class(&self) -> bool {
        self.kind == EntityKind::Class
    }

    /// Whether this entity is a named individual.
    pub fn is_named_individual(&self) -> bool {
        self.kind == EntityKind::NamedIndividual
    }

    /// Whether this entity is a property of any kind.
    pub fn is_property(&self) -> bool {
        matches!(
            self.kind,
            EntityKind::ObjectProperty | EntityKind::DataProperty | EntityKind::AnnotationProperty
        )
    }
}

/// An OWL literal: lexical form plus optional datatype and language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    lexical: String,
    datatype: Option<Iri>,
    language: Option<String>,
}

impl Literal {
    /// Create a plain string literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: None,
        }
    }

    /// Create a literal with an explicit datatype.
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype),
            language: None,
        }
    }

    /// Create a language-tagged string literal.
    pub fn lang_tagged(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
            language: Some(language.into()),
        }
    }

    /// The lexical form of the literal.
    pub fn lexical_form(&self) -> &str {
        &self.lexical
    }

    /// The datatype IRI, if any.
    pub fn datatype(&self) -> Option<&Iri> {
        self.datatype.as_ref()
    }

    /// The language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Identifier of an anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnonymousId(String);

impl AnonymousId {
    /// Wrap an existing anonymous-node identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh identifier.
    pub fn fresh() -> Self {
        Self(format!("genid-{}", Uuid::new_v4().simple()))
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AnonymousId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value attached by an annotation assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    /// An IRI value
    Iri(Iri),
    /// A literal value
    Literal(Literal),
    /// An anonymous individual
    AnonymousIndividual(AnonymousId),
}
