//! The export coordinator: entities × properties to a delimited document.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::format::format_cell;
use super::options::ExportOptions;
use crate::error::{ExportError, Result};
use crate::ontology::{Entity, Iri, OntologyStore};
use crate::render::EntityRenderer;
use crate::resolver::ValueResolver;
use crate::sink::ExportSink;

/// The assembled export output: an ordered sequence of row strings.
///
/// Built once per export run and discarded after being persisted; no state
/// survives between runs. The optional trailer block is carried as a final
/// pseudo-row beginning with two newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    rows: Vec<String>,
}

impl ExportDocument {
    /// Wrap an ordered sequence of rows.
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// The rows in output order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows (the trailer block counts as one).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the document has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the document, yielding its rows.
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Exports selected entities and their property values as delimited text.
///
/// Constructed through [`CsvExporter::builder`]. The export is a single
/// linear pass on the invoking thread: no retries, no partial-completion
/// recovery. If the sink fails, the whole export fails; no partially
/// written output is cleaned up.
///
/// # Examples
///
/// ```
/// use owlcsv::{helpers, CsvExporter, MemoryOntology, MemorySink, ShortFormRenderer};
///
/// # fn example() -> owlcsv::Result<()> {
/// let mut ontology = MemoryOntology::new();
/// let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog")?;
/// let owner = helpers::declare_object_property(&mut ontology, "http://example.org/hasOwner")?;
/// let person = helpers::declare_class(&mut ontology, "http://example.org/Person")?;
/// helpers::assert_subclass(&mut ontology, &dog, helpers::some_values_from(&owner, &person));
///
/// let renderer = ShortFormRenderer;
/// let exporter = CsvExporter::builder(&ontology, &renderer)
///     .subjects(vec![dog])
///     .properties(vec![owner])
///     .build()?;
///
/// let mut sink = MemorySink::new();
/// exporter.export(&mut sink)?;
/// assert_eq!(sink.rows()[0], "http://example.org/Dog,\"'Person'\",");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct CsvExporter<'a> {
    ontology: &'a dyn OntologyStore,
    renderer: &'a dyn EntityRenderer,
    subjects: Vec<Entity>,
    properties: Vec<Entity>,
    options: ExportOptions,
}

impl<'a> CsvExporter<'a> {
    /// Start building an exporter over the given ontology and renderer.
    pub fn builder(
        ontology: &'a dyn OntologyStore,
        renderer: &'a dyn EntityRenderer,
    ) -> CsvExporterBuilder<'a> {
        CsvExporterBuilder::new(ontology, renderer)
    }

    /// The subject entities, in row order.
    pub fn subjects(&self) -> &[Entity] {
        &self.subjects
    }

    /// The selected properties, in column order.
    pub fn properties(&self) -> &[Entity] {
        &self.properties
    }

    /// The export options.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Build the export document without persisting it.
    ///
    /// Row order follows the subject selection; cell order follows the
    /// property selection. Resolution misses render as empty fields, so
    /// every data row carries the same field count as the header.
    pub fn build_document(&self) -> ExportDocument {
        let resolver = ValueResolver::new(self.ontology, self.renderer);
        let superclass_cells = self.superclass_cells();

        let mut rows = Vec::with_capacity(self.subjects.len() + 2);
        for subject in &self.subjects {
            let mut row = self.entity_rendering(subject);
            row.push_str(&self.options.file_delimiter);
            if self.options.include_entity_types {
                row.push_str(subject.kind.name());
                row.push_str(&self.options.file_delimiter);
            }
            if self.options.include_superclasses {
                if let Some(cell) = superclass_cells.get(&subject.iri) {
                    row.push_str(cell);
                }
                row.push_str(&self.options.file_delimiter);
            }
            for property in &self.properties {
                let values = resolver.resolve(subject, property);
                row.push_str(&format_cell(
                    &values,
                    &self.options.value_delimiter,
                    &self.options.file_delimiter,
                ));
            }
            rows.push(row);
        }

        if self.options.include_headers {
            rows.insert(0, self.header());
        }
        if self.options.include_trailer_text {
            rows.push(format!("\n\n{}", self.options.trailer_text));
        }
        ExportDocument::new(rows)
    }

    /// Build the document and hand it to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Sink`] if the sink cannot persist the
    /// document. The failure is surfaced as-is; a partially written file is
    /// not cleaned up.
    pub fn export(&self, sink: &mut dyn ExportSink) -> Result<()> {
        info!(
            "exporting {} entities x {} properties",
            self.subjects.len(),
            self.properties.len()
        );
        let document = self.build_document();
        sink.write_document(&document)?;
        info!("... done exporting");
        Ok(())
    }

    fn header(&self) -> String {
        let mut header = String::from("Entity");
        header.push_str(&self.options.file_delimiter);
        if self.options.include_entity_types {
            header.push_str("Type");
            header.push_str(&self.options.file_delimiter);
        }
        if self.options.include_superclasses {
            header.push_str("Superclass(es)");
            header.push_str(&self.options.file_delimiter);
        }
        for property in &self.properties {
            header.push_str(&self.entity_rendering(property));
            header.push_str(&self.options.file_delimiter);
        }
        header
    }

    // Superclasses are computed once for the whole selection, not per row.
    fn superclass_cells(&self) -> HashMap<Iri, String> {
        let mut cells = HashMap::new();
        if !self.options.include_superclasses {
            return cells;
        }
        for subject in self.subjects.iter().filter(|subject| subject.is_class()) {
            let rendered: Vec<String> = self
                .ontology
                .direct_superclasses(&subject.iri)
                .iter()
                .map(|superclass| self.entity_rendering_for(superclass))
                .collect();
            debug!(
                "{} direct superclass(es) for {}",
                rendered.len(),
                subject.iri
            );
            cells.insert(
                subject.iri.clone(),
                rendered.join(&self.options.value_delimiter),
            );
        }
        cells
    }

    fn entity_rendering(&self, entity: &Entity) -> String {
        self.entity_rendering_for(&entity.iri)
    }

    fn entity_rendering_for(&self, iri: &Iri) -> String {
        if self.options.use_display_rendering {
            self.renderer.render(iri)
        } else {
            iri.as_str().to_string()
        }
    }
}

/// Builder for [`CsvExporter`].
///
/// Validation happens in [`build`](CsvExporterBuilder::build): an empty file
/// or value delimiter is rejected with [`ExportError::Config`] before any
/// resolution work begins.
pub struct CsvExporterBuilder<'a> {
    ontology: &'a dyn OntologyStore,
    renderer: &'a dyn EntityRenderer,
    subjects: Vec<Entity>,
    properties: Vec<Entity>,
    options: ExportOptions,
}

impl<'a> CsvExporterBuilder<'a> {
    /// Create a builder with default options and empty selections.
    pub fn new(ontology: &'a dyn OntologyStore, renderer: &'a dyn EntityRenderer) -> Self {
        Self {
            ontology,
            renderer,
            subjects: Vec::new(),
            properties: Vec::new(),
            options: ExportOptions::default(),
        }
    }

    /// Set the subject entities to export, in row order.
    pub fn subjects(mut self, subjects: Vec<Entity>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Set the properties whose values should be exported, in column order.
    pub fn properties(mut self, properties: Vec<Entity>) -> Self {
        self.properties = properties;
        self
    }

    /// Replace the options wholesale.
    pub fn options(mut self, options: ExportOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the cell separator.
    pub fn file_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.file_delimiter = delimiter.into();
        self
    }

    /// Set the separator for multiple values within one cell.
    pub fn value_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.options.value_delimiter = delimiter.into();
        self
    }

    /// Prepend a header row with column labels.
    pub fn include_headers(mut self, include: bool) -> Self {
        self.options.include_headers = include;
        self
    }

    /// Include a column with each entity's kind.
    pub fn include_entity_types(mut self, include: bool) -> Self {
        self.options.include_entity_types = include;
        self
    }

    /// Render entities through the display renderer instead of raw IRIs.
    pub fn use_display_rendering(mut self, use_display: bool) -> Self {
        self.options.use_display_rendering = use_display;
        self
    }

    /// Include a column listing each class's direct superclasses.
    pub fn include_superclasses(mut self, include: bool) -> Self {
        self.options.include_superclasses = include;
        self
    }

    /// Append a trailer block at the end of the document.
    pub fn include_trailer_text(mut self, include: bool) -> Self {
        self.options.include_trailer_text = include;
        self
    }

    /// Set the trailer text and enable the trailer block.
    pub fn trailer_text(mut self, text: impl Into<String>) -> Self {
        self.options.trailer_text = text.into();
        self.options.include_trailer_text = true;
        self
    }

    /// Validate the configuration and construct the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] if either delimiter is empty.
    pub fn build(self) -> Result<CsvExporter<'a>> {
        if self.options.file_delimiter.is_empty() {
            return Err(ExportError::config("file delimiter must not be empty"));
        }
        if self.options.value_delimiter.is_empty() {
            return Err(ExportError::config("value delimiter must not be empty"));
        }
        Ok(CsvExporter {
            ontology: self.ontology,
            renderer: self.renderer,
            subjects: self.subjects,
            properties: self.properties,
            options: self.options,
        })
    }
}
