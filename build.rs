//! Build script for training table validation
//!
//! This script runs at compile time and validates the bundled gesture
//! table so a corrupt row fails the build instead of the first classification.

// Include the shared row format
#[path = "src/dataset_format.rs"]
mod dataset_format;

use dataset_format::{is_skipped, parse_row, FEATURE_COUNT};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Validate the table, returning the sample count per label
fn validate_table(path: &Path) -> Result<BTreeMap<i32, usize>, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let mut errors = Vec::new();
    let mut per_label = BTreeMap::new();

    for (index, line) in contents.lines().enumerate() {
        if is_skipped(line) {
            continue;
        }
        match parse_row(line) {
            Ok((features, label)) => {
                if let Some(column) = features.iter().position(|a| !(0.0..=180.0).contains(a)) {
                    errors.push(format!(
                        "  line {}: angle in column {} outside [0, 180]",
                        index + 1,
                        column + 1
                    ));
                }
                *per_label.entry(label).or_insert(0) += 1;
            }
            Err(e) => errors.push(format!("  line {}: {}", index + 1, e)),
        }
    }

    if !errors.is_empty() {
        return Err(format!(
            "{} has invalid rows:\n{}",
            path.display(),
            errors.join("\n")
        ));
    }
    if per_label.is_empty() {
        return Err(format!("{} contains no samples", path.display()));
    }

    Ok(per_label)
}

fn main() {
    let table = Path::new("data/gesture_train.csv");

    // Rerun if the shared parser or the table changes
    println!("cargo:rerun-if-changed=src/dataset_format.rs");
    println!("cargo:rerun-if-changed={}", table.display());

    match validate_table(table) {
        Ok(per_label) => {
            let total: usize = per_label.values().sum();
            println!(
                "cargo:warning=✓ gesture table validated ({} samples x {} angles, labels {:?})",
                total,
                FEATURE_COUNT,
                per_label.keys().collect::<Vec<_>>()
            );
        }
        Err(e) => {
            println!("cargo:warning=VALIDATION ERROR: {}", e);
            panic!("Gesture table validation failed! Fix the rows in data/gesture_train.csv.");
        }
    }
}
