//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Items from the reference example plus one more positive item
pub const SAMPLE_ITEMS: &str = r#"[
    {"elementName": "A", "weight": 1, "price": 10},
    {"elementName": "B", "weight": 5, "price": 3},
    {"elementName": "C", "weight": 1, "price": 2}
]"#;

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("fixture should be writable");
    path
}

/// Items named `item-1..=count`, weight 1 and increasing price
pub fn ascending_items_json(count: usize) -> String {
    let entries: Vec<String> = (1..=count)
        .map(|i| {
            format!(
                r#"{{"elementName": "item-{}", "weight": 1, "price": {}}}"#,
                i,
                1 + i
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}
