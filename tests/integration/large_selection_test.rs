//! Integration test for a large selection: the export is a single linear
//! pass and must stay well-behaved as the ontology grows.

use owlcsv::{helpers, CsvExporter, Entity, MemoryOntology, MemorySink, ShortFormRenderer};

#[test]
fn test_thousand_entity_export() {
    let mut ontology = MemoryOntology::new();
    let person = helpers::declare_class(&mut ontology, "http://example.org/Person").unwrap();
    let owner =
        helpers::declare_object_property(&mut ontology, "http://example.org/hasOwner").unwrap();
    let comment =
        helpers::declare_annotation_property(&mut ontology, "http://example.org/comment").unwrap();

    let mut subjects: Vec<Entity> = Vec::new();
    for index in 0..1000 {
        let class =
            helpers::declare_class(&mut ontology, &format!("http://example.org/Breed{index}"))
                .unwrap();
        helpers::assert_subclass(&mut ontology, &class, helpers::some_values_from(&owner, &person));
        helpers::annotate(&mut ontology, &class, &comment, &format!("breed {index}"));
        subjects.push(class);
    }

    let renderer = ShortFormRenderer;
    let exporter = CsvExporter::builder(&ontology, &renderer)
        .subjects(subjects)
        .properties(vec![owner, comment])
        .include_headers(true)
        .use_display_rendering(true)
        .build()
        .unwrap();

    let mut sink = MemorySink::new();
    exporter.export(&mut sink).unwrap();

    // Header plus one row per subject.
    assert_eq!(sink.rows().len(), 1001);
    assert_eq!(sink.rows()[1], "Breed0,\"'Person'\",\"'breed 0'\",");
    assert_eq!(sink.rows()[1000], "Breed999,\"'Person'\",\"'breed 999'\",");
}
