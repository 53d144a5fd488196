use std::fmt;

use super::investigation::{AssayRecord, InvestigationRecord, Metadata, StudyRecord};
use super::node::{EntityNode, ProcessNode};

const STEP: usize = 2;

fn metadata_line(f: &mut fmt::Formatter<'_>, depth: usize, label: &str, md: &Metadata) -> fmt::Result {
    let line: Vec<String> = md.iter().map(|(key, value)| format!("{key}: {value}")).collect();
    writeln!(f, "{:depth$}{label}: {{{}}}", "", line.join(", "))
}

fn entries_line(f: &mut fmt::Formatter<'_>, depth: usize, label: &str, entries: &[Metadata]) -> fmt::Result {
    writeln!(f, "{:depth$}{label}: {} entries", "", entries.len())
}

fn write_node(f: &mut fmt::Formatter<'_>, depth: usize, node: &EntityNode) -> fmt::Result {
    writeln!(f, "{:depth$}* Node -> {} ({})", "", node.name, node.node_type)?;
    let inner = depth + STEP;
    for (key, values) in &node.metadata {
        let joined: Vec<String> = values.iter().map(ToString::to_string).collect();
        writeln!(f, "{:inner$}{key}: {}", "", joined.join("; "))?;
    }
    Ok(())
}

fn write_process(f: &mut fmt::Formatter<'_>, depth: usize, process: &ProcessNode) -> fmt::Result {
    let inner = depth + STEP;
    let inputs: Vec<&str> = process.inputs.iter().map(String::as_str).collect();
    let outputs: Vec<&str> = process.outputs.iter().map(String::as_str).collect();
    writeln!(f, "{:depth$}* Process Node -> {} ({})", "", process.name, process.process_type)?;
    writeln!(f, "{:inner$}inputs: [{}]", "", inputs.join(", "))?;
    writeln!(f, "{:inner$}outputs: [{}]", "", outputs.join(", "))
}

fn write_assay(f: &mut fmt::Formatter<'_>, depth: usize, assay: &AssayRecord) -> fmt::Result {
    let inner = depth + STEP;
    writeln!(f, "{:depth$}* Assay", "")?;
    metadata_line(f, inner, "metadata", &assay.metadata)?;
    writeln!(f, "{:inner$}nodes:", "")?;
    for node in assay.nodes.values() {
        write_node(f, inner + STEP, node)?;
    }
    writeln!(f, "{:inner$}process_nodes:", "")?;
    for process in assay.process_nodes.values() {
        write_process(f, inner + STEP, process)?;
    }
    Ok(())
}

fn write_study(f: &mut fmt::Formatter<'_>, depth: usize, study: &StudyRecord) -> fmt::Result {
    let inner = depth + STEP;
    writeln!(f, "{:depth$}* Study", "")?;
    metadata_line(f, inner, "metadata", &study.metadata)?;
    entries_line(f, inner, "design_descriptors", &study.design_descriptors)?;
    entries_line(f, inner, "publications", &study.publications)?;
    entries_line(f, inner, "factors", &study.factors)?;
    entries_line(f, inner, "protocols", &study.protocols)?;
    entries_line(f, inner, "contacts", &study.contacts)?;
    writeln!(f, "{:inner$}nodes:", "")?;
    for node in study.nodes.values() {
        write_node(f, inner + STEP, node)?;
    }
    writeln!(f, "{:inner$}process_nodes:", "")?;
    for process in study.process_nodes.values() {
        write_process(f, inner + STEP, process)?;
    }
    writeln!(f, "{:inner$}assays:", "")?;
    for assay in &study.assays {
        write_assay(f, inner + STEP, assay)?;
    }
    Ok(())
}

impl fmt::Display for InvestigationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "* ISA-Tab Record")?;
        metadata_line(f, STEP, "metadata", &self.metadata)?;
        entries_line(f, STEP, "ontology_refs", &self.ontology_refs)?;
        entries_line(f, STEP, "publications", &self.publications)?;
        entries_line(f, STEP, "contacts", &self.contacts)?;
        writeln!(f, "{:1$}studies:", "", STEP)?;
        for study in &self.studies {
            write_study(f, STEP * 2, study)?;
        }
        Ok(())
    }
}

impl fmt::Display for StudyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_study(f, 0, self)
    }
}

impl fmt::Display for AssayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_assay(f, 0, self)
    }
}

impl fmt::Display for EntityNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, 0, self)
    }
}

impl fmt::Display for ProcessNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_process(f, 0, self)
    }
}
