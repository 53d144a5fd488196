use super::*;

fn qualified(pairs: &[(&str, &str)]) -> AttributeValue {
    AttributeValue::Qualified(
        pairs
            .iter()
            .map(|(name, value)| AttributeField {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect(),
    )
}

#[test]
fn test_node_identity_is_type_qualified() {
    assert_eq!(node_identity("Sample Name", "X1"), "Sample Name-X1");
    assert_ne!(node_identity("Sample Name", "X1"), node_identity("Source Name", "X1"));

    let node = EntityNode::new("X1", "Source Name");
    assert_eq!(node.identity(), "Source Name-X1");
}

#[test]
fn test_entity_node_values_are_sets() {
    let mut node = EntityNode::new("S1", "Sample Name");
    assert!(node.add_value("organism", AttributeValue::Text("Homo sapiens".into())));
    assert!(!node.add_value("organism", AttributeValue::Text("Homo sapiens".into())));
    assert!(node.add_value("organism", AttributeValue::Text("Mus musculus".into())));

    let values: Vec<&str> = node.values("organism").map(AttributeValue::primary).collect();
    assert_eq!(values, vec!["Homo sapiens", "Mus musculus"]);
    assert_eq!(node.values("missing").count(), 0);
}

#[test]
fn test_process_node_links_are_unique() {
    let mut process = ProcessNode::new("extraction1", "Protocol REF");
    assert!(process.add_input("Sample Name-S1"));
    assert!(!process.add_input("Sample Name-S1"));
    assert!(process.add_output("Extract Name-E1"));
    assert!(process.add_output("Extract Name-E2"));

    assert_eq!(process.inputs.len(), 1);
    assert_eq!(
        process.outputs.iter().collect::<Vec<_>>(),
        vec!["Extract Name-E1", "Extract Name-E2"]
    );
}

#[test]
fn test_attribute_value_accessors() {
    let age = qualified(&[("Age", "5"), ("Unit", "years")]);
    assert_eq!(age.primary(), "5");
    assert_eq!(age.field("Unit"), Some("years"));
    assert_eq!(age.field("Term_Source_REF"), None);
    assert_eq!(age.as_text(), None);
    assert_eq!(age.to_string(), "(Age=5, Unit=years)");

    let text = AttributeValue::Text("liver".into());
    assert_eq!(text.as_text(), Some("liver"));
    assert_eq!(text.field("Unit"), None);
    assert_eq!(text.to_string(), "liver");
}

#[test]
fn test_file_name_accessors() {
    let study = StudyRecord::with_file_name("s_study.txt");
    assert_eq!(study.file_name(), Some("s_study.txt"));
    assert_eq!(StudyRecord::default().file_name(), None);

    let mut metadata = Metadata::new();
    metadata.insert(ASSAY_FILE_NAME.to_string(), "a_assay.txt".to_string());
    let assay = AssayRecord::new(metadata);
    assert_eq!(assay.file_name(), Some("a_assay.txt"));
}

#[test]
fn test_counts_include_assays() {
    let mut study = StudyRecord::with_file_name("s_study.txt");
    study
        .nodes
        .insert("Source Name-A".into(), EntityNode::new("A", "Source Name"));
    study
        .process_nodes
        .insert("growth1".into(), ProcessNode::new("growth1", "Protocol REF"));

    let mut assay = AssayRecord::default();
    assay
        .nodes
        .insert("Sample Name-B".into(), EntityNode::new("B", "Sample Name"));
    assay
        .nodes
        .insert("Raw Data File-b.raw".into(), EntityNode::new("b.raw", "Raw Data File"));
    study.assays.push(assay);

    let mut record = InvestigationRecord::new();
    record.studies.push(study);

    assert_eq!(record.node_count(), 3);
    assert_eq!(record.process_count(), 1);
}

#[test]
fn test_json_roundtrip_keeps_structure() {
    let mut node = EntityNode::new("S1", "Sample Name");
    node.add_value("Age", qualified(&[("Age", "5"), ("Unit", "years")]));
    node.add_value("Sample Name", AttributeValue::Text("S1".into()));

    let mut study = StudyRecord::with_file_name("s_study.txt");
    study.nodes.insert(node.identity(), node);

    let mut record = InvestigationRecord::new();
    record
        .metadata
        .insert("Investigation Title".into(), "Growth".into());
    record.studies.push(study);

    let json = record.to_json().unwrap();
    assert!(json.contains("\"type\": \"Sample Name\""));

    let restored = InvestigationRecord::from_json(&json).unwrap();
    assert_eq!(restored, record);
}

#[test]
fn test_display_renders_tree() {
    let mut process = ProcessNode::new("growth1", "Protocol REF");
    process.add_input("Source Name-A");
    process.add_output("Sample Name-B");

    let mut study = StudyRecord::with_file_name("s_study.txt");
    study
        .nodes
        .insert("Source Name-A".into(), EntityNode::new("A", "Source Name"));
    study.process_nodes.insert("growth1".into(), process);

    let mut record = InvestigationRecord::new();
    record.studies.push(study);

    let rendered = record.to_string();
    assert!(rendered.starts_with("* ISA-Tab Record\n"));
    assert!(rendered.contains("    * Study\n"));
    assert!(rendered.contains("* Node -> A (Source Name)"));
    assert!(rendered.contains("* Process Node -> growth1 (Protocol REF)"));
    assert!(rendered.contains("inputs: [Source Name-A]"));
    assert!(rendered.contains("outputs: [Sample Name-B]"));
}

#[test]
fn test_display_metadata_line() {
    let mut record = InvestigationRecord::new();
    record.metadata.insert("Investigation Identifier".into(), "I1".into());
    record.metadata.insert("Investigation Title".into(), "Growth".into());

    let rendered = record.to_string();
    assert!(rendered.contains("  metadata: {Investigation Identifier: I1, Investigation Title: Growth}\n"));

    let assay = AssayRecord::default();
    assert!(assay.to_string().contains("  metadata: {}\n"));
}
