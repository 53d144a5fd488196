use super::*;
use crate::header::HeaderClassifier;
use crate::records::{
    AssayRecord, AttributeField, AttributeValue, InvestigationRecord, Metadata, StudyRecord,
    ASSAY_FILE_NAME,
};

fn table(header: &[&str], rows: &[&[&str]]) -> RowTable {
    let rows: Vec<Vec<&str>> = rows.iter().map(|r| r.to_vec()).collect();
    RowTable::from_cells(header, &rows, &HeaderClassifier::default())
}

fn text(value: &str) -> AttributeValue {
    AttributeValue::Text(value.to_string())
}

#[test]
fn test_first_row_wins_for_repeated_entity() {
    let table = table(
        &["Sample Name", "Characteristics[strain]"],
        &[&["S1", "A"], &["S1", "B"], &["S2", "C"]],
    );

    let nodes = build_nodes(&table, &["Sample Name"]);
    assert_eq!(nodes.len(), 2);

    let s1 = &nodes["Sample Name-S1"];
    assert_eq!(s1.name, "S1");
    assert_eq!(s1.node_type, "Sample Name");
    let strains: Vec<&AttributeValue> = s1.values("strain").collect();
    assert_eq!(strains, vec![&text("A")]);
}

#[test]
fn test_same_name_under_different_types_stays_distinct() {
    let table = table(
        &["Source Name", "Protocol REF", "Sample Name"],
        &[&["X1", "sampling", "X1"]],
    );

    let nodes = build_nodes(&table, &["Source Name", "Sample Name"]);
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes["Source Name-X1"].node_type, "Source Name");
    assert_eq!(nodes["Sample Name-X1"].node_type, "Sample Name");
}

#[test]
fn test_qualifier_columns_fold_into_one_attribute() {
    let table = table(
        &["Sample Name", "Factor Value[Age]", "Unit"],
        &[&["S1", "5", "years"]],
    );

    let nodes = build_nodes(&table, &["Sample Name"]);
    let node = &nodes["Sample Name-S1"];

    assert!(node.metadata.get("Unit").is_none());
    let ages: Vec<&AttributeValue> = node.values("Age").collect();
    assert_eq!(
        ages,
        vec![&AttributeValue::Qualified(vec![
            AttributeField {
                name: "Age".into(),
                value: "5".into()
            },
            AttributeField {
                name: "Unit".into(),
                value: "years".into()
            },
        ])]
    );
    assert_eq!(ages[0].field("Unit"), Some("years"));
}

#[test]
fn test_node_metadata_covers_typed_groups() {
    let table = table(
        &[
            "Source Name",
            "Characteristics[organism]",
            "Term Source REF",
            "Protocol REF",
            "Sample Name",
            "Comment[notes]",
            "Unrecognized Column",
        ],
        &[&["Src1", "Homo sapiens", "NCBITAXON", "sampling", "S1", "fresh", "ignored"]],
    );

    let nodes = build_nodes(&table, &["Sample Name"]);
    let node = &nodes["Sample Name-S1"];

    let keys: Vec<&str> = node.metadata.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["Source Name", "organism", "Protocol REF", "Sample Name", "notes"]
    );
    assert_eq!(node.values("Source Name").next(), Some(&text("Src1")));
    assert_eq!(node.values("Protocol REF").next(), Some(&text("sampling")));
    assert_eq!(node.values("notes").next(), Some(&text("fresh")));

    let organism = node.values("organism").next().unwrap();
    assert_eq!(organism.primary(), "Homo sapiens");
    assert_eq!(organism.field("Term_Source_REF"), Some("NCBITAXON"));
}

#[test]
fn test_empty_and_header_valued_cells_are_skipped() {
    let table = table(
        &["Source Name", "Sample Name"],
        &[&["A", ""], &["Sample Name", "S1"], &["", "S2"]],
    );

    let nodes = build_nodes(&table, &["Source Name", "Sample Name", "Extract Name"]);
    let keys: Vec<&str> = nodes.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Source Name-A", "Sample Name-S1", "Sample Name-S2"]);
}

#[test]
fn test_short_rows_read_as_empty_cells() {
    let table = table(
        &["Sample Name", "Characteristics[strain]", "Comment[note]"],
        &[&["S1"], &["S2", "K12"]],
    );

    let nodes = build_nodes(&table, &["Sample Name"]);
    assert_eq!(nodes["Sample Name-S1"].values("strain").next(), Some(&text("")));
    assert_eq!(nodes["Sample Name-S2"].values("strain").next(), Some(&text("K12")));
    assert_eq!(nodes["Sample Name-S2"].values("note").next(), Some(&text("")));
}

#[test]
fn test_process_fan_in_and_fan_out() {
    let table = table(
        &["Sample Name", "Protocol REF", "Raw Data File"],
        &[
            &["S1", "P1", "D1"],
            &["S1", "P1", "D2"],
            &["S2", "P1", "D2"],
        ],
    );

    let processes = build_process_nodes(&table).unwrap();
    assert_eq!(processes.len(), 1);

    let process = &processes["P11"];
    assert_eq!(process.name, "P11");
    assert_eq!(process.process_type, "Protocol REF");
    assert_eq!(
        process.inputs.iter().collect::<Vec<_>>(),
        vec!["Sample Name-S1", "Sample Name-S2"]
    );
    assert_eq!(
        process.outputs.iter().collect::<Vec<_>>(),
        vec!["Raw Data File-D1", "Raw Data File-D2"]
    );
}

#[test]
fn test_unrelated_rows_mint_new_processes() {
    let table = table(
        &["Source Name", "Protocol REF", "Sample Name"],
        &[
            &["A", "growth", "X1"],
            &["", "", ""],
            &["B", "growth", "X2"],
            &["C", "growth", "X3"],
        ],
    );

    let processes = build_process_nodes(&table).unwrap();
    let names: Vec<&str> = processes.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["growth1", "growth2", "growth3"]);
    assert_eq!(
        processes["growth3"].inputs.iter().collect::<Vec<_>>(),
        vec!["Source Name-C"]
    );
}

#[test]
fn test_processing_without_left_neighbour_aborts_graph() {
    let table = table(
        &["Protocol REF", "Sample Name", "Characteristics[strain]"],
        &[&["growth", "S1", "K12"]],
    );

    assert!(build_process_nodes(&table).is_none());

    // node construction for the same file is unaffected
    let nodes = build_nodes(&table, &["Sample Name"]);
    assert_eq!(nodes.len(), 1);
}

#[test]
fn test_any_unlinkable_processing_column_aborts_graph() {
    let table = table(
        &["Source Name", "Protocol REF", "Sample Name", "Protocol REF"],
        &[&["A", "growth", "X1", "labelling"]],
    );

    assert!(build_process_nodes(&table).is_none());
}

#[test]
fn test_file_without_processing_columns_has_empty_graph() {
    let table = table(&["Sample Name"], &[&["S1"]]);
    assert_eq!(build_process_nodes(&table).map(|p| p.len()), Some(0));
}

#[test]
fn test_processing_columns_share_counter() {
    let table = table(
        &[
            "Sample Name",
            "Protocol REF",
            "Performer",
            "Extract Name",
            "Protocol REF",
            "Raw Data File",
        ],
        &[
            &["S1", "extraction", "Ann", "E1", "sequencing", "r1.fastq"],
            &["S2", "extraction", "Ann", "E2", "sequencing", "r2.fastq"],
        ],
    );

    let processes = build_process_nodes(&table).unwrap();
    let names: Vec<&str> = processes.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["extraction1", "extraction2", "sequencing3", "sequencing4"]
    );
    assert_eq!(
        processes["sequencing3"].inputs.iter().collect::<Vec<_>>(),
        vec!["Extract Name-E1"]
    );
    assert_eq!(
        processes["sequencing4"].outputs.iter().collect::<Vec<_>>(),
        vec!["Raw Data File-r2.fastq"]
    );
}

#[test]
fn test_process_links_skip_attribute_groups() {
    let classifier = HeaderClassifier::default();
    let header = classifier.classify(&[
        "Source Name",
        "Characteristics[organism]",
        "Protocol REF",
        "Parameter Value[temperature]",
        "Sample Name",
    ]);

    let links = ProcessLink::resolve(&header).unwrap();
    assert_eq!(
        links,
        vec![ProcessLink {
            input_group: 0,
            processing_group: 2,
            output_group: 4,
        }]
    );
}

#[test]
fn test_nearest_neighbour_search() {
    let sorted = [1, 4, 7];
    assert_eq!(nearest_before(&sorted, 4), Some(1));
    assert_eq!(nearest_before(&sorted, 5), Some(4));
    assert_eq!(nearest_before(&sorted, 1), None);
    assert_eq!(nearest_after(&sorted, 4), Some(7));
    assert_eq!(nearest_after(&sorted, 0), Some(1));
    assert_eq!(nearest_after(&sorted, 7), None);
    assert_eq!(nearest_before(&[], 3), None);
}

#[test]
fn test_table_from_reader() {
    let content = "Source Name\tProtocol REF\tArray Data File\n\
                   A\thyb\tfile.cel\n\
                   B\thyb\n";
    let table = RowTable::from_reader(content.as_bytes(), &HeaderClassifier::default()).unwrap();

    assert_eq!(table.header().names()[2], "Raw Data File");
    assert_eq!(table.rows().len(), 2);
    assert_eq!(table.rows()[1].cell(2), "");
    assert_eq!(table.rows()[1].len(), 2);
}

#[test]
fn test_trailing_blank_header_columns_are_dropped() {
    let content = "Sample Name\tComment[note]\t\t\nS1\tfresh\t\t\n";
    let table = RowTable::from_reader(content.as_bytes(), &HeaderClassifier::default()).unwrap();

    assert_eq!(table.header().names().len(), 2);
    assert_eq!(table.header().groups().len(), 2);
    assert_eq!(table.rows()[0].cell(1), "fresh");
}

#[test]
fn test_open_absent_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let table = RowTable::open(&dir.path().join("s_missing.txt"), &HeaderClassifier::default()).unwrap();
    assert!(table.is_none());
}

#[test]
fn test_read_failure_reports_io_error_with_path() {
    let dir = tempfile::tempdir().unwrap();

    // a directory exists but cannot be read as a table
    match RowTable::open(dir.path(), &HeaderClassifier::default()) {
        Err(StudyError::IoError { path, .. }) => assert_eq!(path, dir.path()),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_invalid_utf8_is_csv_error() {
    let content: &[u8] = b"Sample Name\tComment[note]\nS1\t\xff\xfe\n";
    let result = RowTable::from_reader(content, &HeaderClassifier::default());
    assert!(matches!(result, Err(StudyError::CsvError(_))));
}

#[test]
fn test_blank_file_names_are_dropped_without_reading() {
    let dir = tempfile::tempdir().unwrap();
    let investigation = dir.path().join("i_investigation.txt");
    std::fs::write(&investigation, "").unwrap();
    std::fs::write(dir.path().join("s_study.txt"), "Sample Name\nS1\n").unwrap();
    std::fs::write(dir.path().join("a_assay.txt"), "Sample Name\tRaw Data File\nS1\tr1.raw\n").unwrap();

    let mut study = StudyRecord::with_file_name("s_study.txt");
    for name in ["a_assay.txt", "", "  "] {
        let mut metadata = Metadata::new();
        metadata.insert(ASSAY_FILE_NAME.to_string(), name.to_string());
        study.assays.push(AssayRecord::new(metadata));
    }
    let mut record = InvestigationRecord::new();
    record.studies.push(study);
    record.studies.push(StudyRecord::with_file_name(""));

    let record = StudyAssayParser::new(&investigation).parse(record).unwrap();
    assert_eq!(record.studies.len(), 1);
    assert_eq!(record.studies[0].assays.len(), 1);
    assert_eq!(record.studies[0].assays[0].file_name(), Some("a_assay.txt"));
}
