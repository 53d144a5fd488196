use log::debug;

use super::table::{Row, RowTable};
use crate::header::{attribute_field_name, clean_header, ClassifiedHeader, HeaderGroup};
use crate::records::{node_identity, AttributeField, AttributeValue, EntityNode, NodeMap, NodeMetadata};

/// Deduplicate the entities named in each anchor column present in the header.
///
/// Entities are keyed by `anchor-name`, so equal names under different
/// anchors stay distinct. Rows with an empty anchor cell, or whose anchor
/// cell repeats a header name, are skipped. An entity's metadata comes from
/// the first row that names it; later rows naming the same entity add
/// nothing.
pub fn build_nodes<S: AsRef<str>>(table: &RowTable, anchors: &[S]) -> NodeMap {
    let header = table.header();
    let mut nodes = NodeMap::new();

    for anchor in anchors {
        let anchor = anchor.as_ref();
        let Some(name_index) = header.position(anchor) else {
            debug!("No {} column in header", anchor);
            continue;
        };

        for row in table.rows() {
            let name = row.cell(name_index);
            if name.is_empty() || header.contains(name) {
                continue;
            }

            let identity = node_identity(anchor, name);
            if nodes.contains_key(&identity) {
                continue;
            }

            let mut node = EntityNode::new(name, anchor);
            collect_row_attributes(header, row, &mut node.metadata);
            nodes.insert(identity, node);
        }
    }

    debug!("Built {} entity nodes", nodes.len());
    nodes
}

/// Add the typed groups of one row to `metadata`, keyed by cleaned header.
///
/// Identity groups contribute their bare cell; attribute and processing
/// groups contribute their qualifiers too.
fn collect_row_attributes(header: &ClassifiedHeader, row: &Row, metadata: &mut NodeMetadata) {
    for group in header.groups() {
        let Some(column_type) = group.column_type else {
            continue;
        };
        let representative = group.representative();
        let value = if column_type.is_collapsed() {
            collapse_group(header, row, group)
        } else {
            AttributeValue::Text(row.cell(representative).to_string())
        };
        metadata
            .entry(clean_header(header.name(representative)))
            .or_default()
            .insert(value);
    }
}

/// Merge a group's representative column and its qualifiers into one value
fn collapse_group(header: &ClassifiedHeader, row: &Row, group: &HeaderGroup) -> AttributeValue {
    if !group.is_qualified() {
        return AttributeValue::Text(row.cell(group.representative()).to_string());
    }
    let fields = group
        .columns()
        .iter()
        .map(|&column| AttributeField {
            name: attribute_field_name(header.name(column)),
            value: row.cell(column).to_string(),
        })
        .collect();
    AttributeValue::Qualified(fields)
}
