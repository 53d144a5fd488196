#![no_main]

use isatab::config::ASSAY_ANCHORS;
use isatab::header::HeaderClassifier;
use isatab::investigation::InvestigationParser;
use isatab::study::{build_nodes, build_process_nodes, RowTable};
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Malformed input must surface as an error, never a panic
    let _ = InvestigationParser::new().parse_reader(Cursor::new(data));

    let classifier = HeaderClassifier::default();
    let Ok(table) = RowTable::from_reader(Cursor::new(data), &classifier) else {
        return;
    };
    let header = table.header();
    let nodes = build_nodes(&table, ASSAY_ANCHORS);
    let Some(processes) = build_process_nodes(&table) else {
        return;
    };

    // Identities linked under an anchor that is the only header with its
    // prefix resolve to a node, unless the cell was empty or repeats a header.
    for process in processes.values() {
        for identity in process.inputs.iter().chain(process.outputs.iter()) {
            for anchor in ASSAY_ANCHORS {
                let Some(name) = identity.strip_prefix(anchor).and_then(|r| r.strip_prefix('-')) else {
                    continue;
                };
                let sharing_prefix = header.names().iter().filter(|h| h.starts_with(anchor)).count();
                let unambiguous = sharing_prefix == 1 && header.contains(anchor);
                if unambiguous && !name.is_empty() && !header.contains(name) {
                    assert!(nodes.contains_key(identity), "dangling {}", identity);
                }
            }
        }
    }
});
