#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pretty_string::collection::{format_collection, format_mapping_with, format_sequence_with};
use std::collections::BTreeMap;

#[derive(Arbitrary, Debug)]
struct CollectionInput {
    items: Vec<String>,
    pairs: Vec<(String, String)>,
    before: String,
    separator: String,
    after: String,
}

fuzz_target!(|input: CollectionInput| {
    let seq = format_sequence_with(&input.items, &input.before, &input.separator, &input.after);
    assert!(seq.starts_with(input.before.as_str()));
    assert!(seq.ends_with(input.after.as_str()));
    if input.items.is_empty() {
        assert_eq!(seq.len(), input.before.len() + input.after.len());
    }

    let map = format_mapping_with(
        input.pairs.iter().map(|(k, v)| (k, v)),
        &input.before,
        "=",
        &input.separator,
        &input.after,
    );
    assert!(map.starts_with(input.before.as_str()));

    let tree: BTreeMap<&String, &String> = input.pairs.iter().map(|(k, v)| (k, v)).collect();
    let _ = format_collection(&tree);
});
