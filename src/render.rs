//! Entity and expression rendering.
//!
//! An [`EntityRenderer`] maps an IRI to the string that represents it in the
//! exported document. Two implementations are provided: [`ShortFormRenderer`]
//! (the IRI's fragment or last path segment) and [`LabelRenderer`] (an
//! explicit label map with short-form fallback). Filler objects recovered
//! from restrictions are rendered through the same renderer, with compound
//! class expressions written in Manchester-style keywords.

use std::collections::HashMap;

use crate::ontology::{
    AnnotationValue, ClassExpression, DataRange, Entity, Filler, Iri, OntologyStore,
};

/// Maps an entity's IRI to a display string.
pub trait EntityRenderer {
    /// Display form for the entity behind `iri`.
    fn render(&self, iri: &Iri) -> String;
}

/// Renders an IRI as its short form: the fragment after `#`, or the segment
/// after the last `/`, or the whole IRI when neither applies.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortFormRenderer;

impl EntityRenderer for ShortFormRenderer {
    fn render(&self, iri: &Iri) -> String {
        short_form(iri).to_string()
    }
}

/// Renders entities through an explicit label map, falling back to the short
/// form for unlabeled IRIs.
#[derive(Debug, Clone, Default)]
pub struct LabelRenderer {
    labels: HashMap<Iri, String>,
}

impl LabelRenderer {
    /// Create an empty label map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: register a label and return self.
    pub fn with_label(mut self, iri: Iri, label: impl Into<String>) -> Self {
        self.labels.insert(iri, label.into());
        self
    }

    /// Register a label for an IRI.
    pub fn insert(&mut self, iri: Iri, label: impl Into<String>) {
        self.labels.insert(iri, label.into());
    }

    /// Build a label map from literal assertions of `label_property` (for
    /// example `rdfs:label`) on the given subjects. The first literal
    /// assertion per subject wins.
    pub fn from_ontology(
        ontology: &dyn OntologyStore,
        label_property: &Iri,
        subjects: &[Entity],
    ) -> Self {
        let mut renderer = Self::new();
        for subject in subjects {
            for assertion in ontology.annotation_assertions(&subject.iri) {
                if &assertion.property == label_property {
                    if let AnnotationValue::Literal(literal) = &assertion.value {
                        renderer
                            .labels
                            .entry(subject.iri.clone())
                            .or_insert_with(|| literal.lexical_form().to_string());
                    }
                }
            }
        }
        renderer
    }
}

impl EntityRenderer for LabelRenderer {
    fn render(&self, iri: &Iri) -> String {
        self.labels
            .get(iri)
            .cloned()
            .unwrap_or_else(|| short_form(iri).to_string())
    }
}

/// Render a restriction filler through the given renderer.
pub fn render_filler(filler: &Filler, renderer: &dyn EntityRenderer) -> String {
    match filler {
        Filler::Class(expression) => render_expression(expression, renderer),
        Filler::Individual(iri) => renderer.render(iri),
        Filler::Range(range) => render_data_range(range, renderer),
        Filler::Literal(literal) => literal.lexical_form().to_string(),
    }
}

/// Render a class expression in Manchester-style syntax.
pub fn render_expression(expression: &ClassExpression, renderer: &dyn EntityRenderer) -> String {
    match expression {
        ClassExpression::Class(iri) => renderer.render(iri),
        ClassExpression::ObjectIntersectionOf(operands) => {
            join_operands(operands, " and ", renderer)
        }
        ClassExpression::ObjectUnionOf(operands) => join_operands(operands, " or ", renderer),
        ClassExpression::ObjectComplementOf(inner) => {
            format!("not {}", render_operand(inner, renderer))
        }
        ClassExpression::ObjectOneOf(individuals) => {
            let rendered: Vec<String> = individuals.iter().map(|i| renderer.render(i)).collect();
            format!("{{{}}}", rendered.join(", "))
        }
        ClassExpression::ObjectSomeValuesFrom { property, filler } => {
            format!(
                "{} some {}",
                renderer.render(property),
                render_operand(filler, renderer)
            )
        }
        ClassExpression::ObjectAllValuesFrom { property, filler } => {
            format!(
                "{} only {}",
                renderer.render(property),
                render_operand(filler, renderer)
            )
        }
        ClassExpression::ObjectHasValue {
            property,
            individual,
        } => {
            format!(
                "{} value {}",
                renderer.render(property),
                renderer.render(individual)
            )
        }
        ClassExpression::ObjectHasSelf { property } => {
            format!("{} Self", renderer.render(property))
        }
        ClassExpression::ObjectMinCardinality {
            cardinality,
            property,
            filler,
        } => render_cardinality("min", *cardinality, property, filler.as_deref(), renderer),
        ClassExpression::ObjectExactCardinality {
            cardinality,
            property,
            filler,
        } => render_cardinality("exactly", *cardinality, property, filler.as_deref(), renderer),
        ClassExpression::ObjectMaxCardinality {
            cardinality,
            property,
            filler,
        } => render_cardinality("max", *cardinality, property, filler.as_deref(), renderer),
        ClassExpression::DataSomeValuesFrom { property, range } => {
            format!(
                "{} some {}",
                renderer.render(property),
                render_data_range(range, renderer)
            )
        }
        ClassExpression::DataAllValuesFrom { property, range } => {
            format!(
                "{} only {}",
                renderer.render(property),
                render_data_range(range, renderer)
            )
        }
        ClassExpression::DataHasValue { property, literal } => {
            format!(
                "{} value {}",
                renderer.render(property),
                literal.lexical_form()
            )
        }
        ClassExpression::DataMinCardinality {
            cardinality,
            property,
            range,
        } => render_data_cardinality("min", *cardinality, property, range.as_ref(), renderer),
        ClassExpression::DataExactCardinality {
            cardinality,
            property,
            range,
        } => render_data_cardinality("exactly", *cardinality, property, range.as_ref(), renderer),
        ClassExpression::DataMaxCardinality {
            cardinality,
            property,
            range,
        } => render_data_cardinality("max", *cardinality, property, range.as_ref(), renderer),
    }
}

/// Render a data range through the given renderer.
pub fn render_data_range(range: &DataRange, renderer: &dyn EntityRenderer) -> String {
    match range {
        DataRange::Datatype(iri) => renderer.render(iri),
        DataRange::DataOneOf(literals) => {
            let rendered: Vec<&str> = literals.iter().map(|l| l.lexical_form()).collect();
            format!("{{{}}}", rendered.join(", "))
        }
    }
}

fn join_operands(
    operands: &[ClassExpression],
    keyword: &str,
    renderer: &dyn EntityRenderer,
) -> String {
    let rendered: Vec<String> = operands
        .iter()
        .map(|operand| render_operand(operand, renderer))
        .collect();
    rendered.join(keyword)
}

// Compound subexpressions are parenthesized to keep the output unambiguous.
fn render_operand(operand: &ClassExpression, renderer: &dyn EntityRenderer) -> String {
    match operand {
        ClassExpression::Class(_) | ClassExpression::ObjectOneOf(_) => {
            render_expression(operand, renderer)
        }
        _ => format!("({})", render_expression(operand, renderer)),
    }
}

fn render_cardinality(
    keyword: &str,
    cardinality: u32,
    property: &Iri,
    filler: Option<&ClassExpression>,
    renderer: &dyn EntityRenderer,
) -> String {
    match filler {
        Some(filler) => format!(
            "{} {} {} {}",
            renderer.render(property),
            keyword,
            cardinality,
            render_operand(filler, renderer)
        ),
        None => format!("{} {} {}", renderer.render(property), keyword, cardinality),
    }
}

fn render_data_cardinality(
    keyword: &str,
    cardinality: u32,
    property: &Iri,
    range: Option<&DataRange>,
    renderer: &dyn EntityRenderer,
) -> String {
    match range {
        Some(range) => format!(
            "{} {} {} {}",
            renderer.render(property),
            keyword,
            cardinality,
            render_data_range(range, renderer)
        ),
        None => format!("{} {} {}", renderer.render(property), keyword, cardinality),
    }
}

fn short_form(iri: &Iri) -> &str {
    let text = iri.as_str();
    if let Some(position) = text.rfind('#') {
        &text[position + 1..]
    } else if let Some(position) = text.rfind('/') {
        &text[position + 1..]
    } else {
        text
    }
}
