use std::collections::HashMap;

use log::{debug, warn};

use super::table::{Row, RowTable};
use crate::header::{ClassifiedHeader, ColumnType};
use crate::records::{node_identity, ProcessMap, ProcessNode};

/// Rightmost value of `sorted` strictly less than `index`
pub fn nearest_before(sorted: &[usize], index: usize) -> Option<usize> {
    let pos = sorted.partition_point(|&i| i < index);
    pos.checked_sub(1).map(|p| sorted[p])
}

/// Leftmost value of `sorted` strictly greater than `index`
pub fn nearest_after(sorted: &[usize], index: usize) -> Option<usize> {
    let pos = sorted.partition_point(|&i| i <= index);
    sorted.get(pos).copied()
}

/// A processing group and the identity groups it reads from and writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessLink {
    /// Nearest identity group on the left
    pub input_group: usize,
    /// The processing group
    pub processing_group: usize,
    /// Nearest identity group on the right
    pub output_group: usize,
}

impl ProcessLink {
    /// Pair every processing group with its neighbouring identity groups.
    ///
    /// Returns `None` if any processing group lacks a neighbour on either side.
    pub fn resolve(header: &ClassifiedHeader) -> Option<Vec<ProcessLink>> {
        let processing = header.group_indices(|t| t == ColumnType::Processing);
        let node_groups = header.group_indices(ColumnType::is_node);

        processing
            .into_iter()
            .map(|processing_group| {
                Some(ProcessLink {
                    input_group: nearest_before(&node_groups, processing_group)?,
                    processing_group,
                    output_group: nearest_after(&node_groups, processing_group)?,
                })
            })
            .collect()
    }
}

/// Link entities through processing steps.
///
/// Every processing group gets one ordered pass over the rows. A row joins
/// the process already holding its input identity, else the one holding its
/// output identity, else starts a new process named after its processing
/// cell and the file-scoped process counter. Rows with both identity cells
/// empty are skipped.
///
/// Returns `None` when a processing group has no identity group on one of
/// its sides; the file is then considered too irregular to link.
pub fn build_process_nodes(table: &RowTable) -> Option<ProcessMap> {
    let header = table.header();
    let Some(links) = ProcessLink::resolve(header) else {
        warn!("Processing column without input or output neighbour; skipping process graph");
        return None;
    };

    let mut process_nodes = ProcessMap::new();
    let mut process_number: usize = 1;
    for link in &links {
        link_rows(header, table.rows(), link, &mut process_nodes, &mut process_number);
    }

    debug!(
        "Built {} process nodes from {} processing columns",
        process_nodes.len(),
        links.len()
    );
    Some(process_nodes)
}

fn link_rows(
    header: &ClassifiedHeader,
    rows: &[Row],
    link: &ProcessLink,
    process_nodes: &mut ProcessMap,
    process_number: &mut usize,
) {
    let (Some(input), Some(output), Some(processing)) = (
        header.group(link.input_group),
        header.group(link.output_group),
        header.group(link.processing_group),
    ) else {
        return;
    };
    let input_column = input.representative();
    let output_column = output.representative();
    let processing_column = processing.representative();
    let input_type = header.name(input_column);
    let output_type = header.name(output_column);
    let processing_type = header.name(processing_column);

    let mut by_input: HashMap<String, String> = HashMap::new();
    let mut by_output: HashMap<String, String> = HashMap::new();

    for row in rows {
        let input_name = row.cell(input_column);
        let output_name = row.cell(output_column);
        if input_name.is_empty() && output_name.is_empty() {
            continue;
        }

        let input_id = node_identity(input_type, input_name);
        let output_id = node_identity(output_type, output_name);

        let process_name = match by_input.get(&input_id).or_else(|| by_output.get(&output_id)) {
            Some(name) => name.clone(),
            None => format!("{}{}", row.cell(processing_column), process_number),
        };

        let process = process_nodes.entry(process_name.clone()).or_insert_with(|| {
            *process_number += 1;
            ProcessNode::new(process_name.as_str(), processing_type)
        });
        process.add_input(input_id.as_str());
        process.add_output(output_id.as_str());

        by_input.insert(input_id, process_name.clone());
        by_output.insert(output_id, process_name);
    }
}
