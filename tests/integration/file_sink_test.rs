//! Integration tests for the file sink.

use owlcsv::{helpers, CsvExporter, ExportError, FileSink, MemoryOntology, ShortFormRenderer};
use tempfile::TempDir;

#[test]
fn test_export_writes_one_row_per_line() {
    let mut ontology = MemoryOntology::new();
    let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog").unwrap();
    let cat = helpers::declare_class(&mut ontology, "http://example.org/Cat").unwrap();

    let renderer = ShortFormRenderer;
    let exporter = CsvExporter::builder(&ontology, &renderer)
        .subjects(vec![dog, cat])
        .include_headers(true)
        .use_display_rendering(true)
        .build()
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.csv");
    let mut sink = FileSink::new(&path);
    exporter.export(&mut sink).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Entity,\nDog,\nCat,\n");
}

#[test]
fn test_trailer_is_separated_by_a_blank_line() {
    let mut ontology = MemoryOntology::new();
    let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog").unwrap();

    let renderer = ShortFormRenderer;
    let exporter = CsvExporter::builder(&ontology, &renderer)
        .subjects(vec![dog])
        .use_display_rendering(true)
        .trailer_text("END")
        .build()
        .unwrap();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.csv");
    let mut sink = FileSink::new(&path);
    exporter.export(&mut sink).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.first(), Some(&"Dog,"));
    assert_eq!(lines.last(), Some(&"END"));
    // A blank line separates the data rows from the trailer.
    assert!(lines[1..lines.len() - 1].iter().all(|line| line.is_empty()));
}

#[test]
fn test_rewriting_truncates_previous_output() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.csv");
    std::fs::write(&path, "stale content\nmore stale content\n").unwrap();

    let mut ontology = MemoryOntology::new();
    let dog = helpers::declare_class(&mut ontology, "http://example.org/Dog").unwrap();
    let renderer = ShortFormRenderer;
    let exporter = CsvExporter::builder(&ontology, &renderer)
        .subjects(vec![dog])
        .use_display_rendering(true)
        .build()
        .unwrap();

    let mut sink = FileSink::new(&path);
    exporter.export(&mut sink).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "Dog,\n");
}

#[test]
fn test_unwritable_path_surfaces_sink_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("export.csv");

    let ontology = MemoryOntology::new();
    let renderer = ShortFormRenderer;
    let exporter = CsvExporter::builder(&ontology, &renderer).build().unwrap();

    let mut sink = FileSink::new(&path);
    let result = exporter.export(&mut sink);
    assert!(matches!(result, Err(ExportError::Sink { .. })));
}

#[test]
fn test_sink_reports_target_path() {
    let sink = FileSink::new("/tmp/export.csv");
    assert_eq!(sink.path(), std::path::Path::new("/tmp/export.csv"));
}
