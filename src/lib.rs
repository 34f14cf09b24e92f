//! # owlcsv
//!
//! A flexible delimited-text exporter for OWL ontology entities and their property values.
//!
//! ## Core Principles
//!
//! - **Model Agnostic**: bring your own ontology behind the [`OntologyStore`] seam
//! - **Resolution Never Fails**: a missing value is an empty cell, not an error
//! - **Fail Fast Otherwise**: bad configuration is rejected before anything is written
//! - **Compatible Output**: the quoting convention of Protégé's CSV export, preserved exactly
//!
//! ## Architecture
//!
//! owlcsv is organized in layers:
//!
//! ```text
//! CsvExporter (coordination: rows, headers, trailer)
//!     ↓
//! ValueResolver (axiom scanning, restriction inspection)
//!     ↓
//! Ontology model (entities, class expressions, axioms)
//!     ↓
//! OntologyStore / EntityRenderer / ExportSink (external seams)
//! ```
//!
//! ## Example
//!
//! ```
//! use owlcsv::{helpers, CsvExporter, MemoryOntology, MemorySink, ShortFormRenderer};
//!
//! # fn example() -> owlcsv::Result<()> {
//! let mut ontology = MemoryOntology::new();
//! let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog")?;
//! let comment = helpers::declare_annotation_property(&mut ontology, "http://example.org/comment")?;
//! helpers::annotate(&mut ontology, &dog, &comment, "good boy");
//!
//! let renderer = ShortFormRenderer;
//! let exporter = CsvExporter::builder(&ontology, &renderer)
//!     .subjects(vec![dog])
//!     .properties(vec![comment])
//!     .include_headers(true)
//!     .build()?;
//!
//! let mut sink = MemorySink::new();
//! exporter.export(&mut sink)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod helpers;
pub mod ontology;
pub mod render;
pub mod resolver;
pub mod sink;

// Re-export main types
pub use error::{ExportError, Result};
pub use export::{
    CsvExporter, CsvExporterBuilder, ExportDocument, ExportOptions, DEFAULT_FILE_DELIMITER,
    DEFAULT_VALUE_DELIMITER,
};
pub use ontology::{
    AnnotationAssertion, AnnotationValue, AnonymousId, Axiom, ClassExpression, DataRange, Entity,
    EntityKind, Filler, Iri, Literal, MemoryOntology, OntologyStore, Restriction,
};
pub use render::{EntityRenderer, LabelRenderer, ShortFormRenderer};
pub use resolver::ValueResolver;
pub use sink::{ExportSink, FileSink, MemorySink};
