//! Labeled training table
//!
//! Loaded once before classification starts and read-only afterwards.

use crate::dataset_format::{is_skipped, parse_row};
use crate::error::{Error, Result};
use crate::features::FeatureVector;
use std::fs;
use std::path::Path;

/// Table shipped with the crate (validated by build.rs)
const BUNDLED_TABLE: &str = include_str!("../data/gesture_train.csv");

/// One labeled angle vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSample {
    pub features: FeatureVector,
    pub label: i32,
}

/// Immutable set of labeled samples in file order.
///
/// File order matters: it breaks distance ties during neighbor search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    samples: Vec<TrainingSample>,
}

impl TrainingSet {
    pub fn new(samples: Vec<TrainingSample>) -> Self {
        Self { samples }
    }

    /// Parse comma-separated rows of 15 angles plus a label.
    ///
    /// Fails on the first malformed row; rows are never skipped silently.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut samples = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if is_skipped(line) {
                continue;
            }
            let (features, label) = parse_row(line).map_err(|e| Error::DatasetLoad {
                line: Some(index + 1),
                reason: e.to_string(),
            })?;
            samples.push(TrainingSample {
                features: FeatureVector(features),
                label,
            });
        }

        Ok(Self { samples })
    }

    /// Read and parse a table from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::DatasetLoad {
            line: None,
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let set = Self::from_csv(&text).map_err(|e| match e {
            Error::DatasetLoad { line, reason } => Error::DatasetLoad {
                line,
                reason: format!("{}: {}", path.display(), reason),
            },
            other => other,
        })?;
        log::info!(
            "Loaded {} training samples from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }

    /// The gesture table shipped with the crate
    pub fn bundled() -> Result<Self> {
        Self::from_csv(BUNDLED_TABLE)
    }

    pub fn samples(&self) -> &[TrainingSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Distinct labels in order of first appearance
    pub fn labels(&self) -> Vec<i32> {
        let mut labels = Vec::new();
        for sample in &self.samples {
            if !labels.contains(&sample.label) {
                labels.push(sample.label);
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset_format::FEATURE_COUNT;

    fn row(value: f32, label: i32) -> String {
        let mut fields = vec![format!("{}", value); FEATURE_COUNT];
        fields.push(format!("{}.000000", label));
        fields.join(",")
    }

    #[test]
    fn test_from_csv_keeps_file_order() {
        let text = [row(0.0, 0), row(90.0, 5), row(45.0, 9)].join("\n");
        let set = TrainingSet::from_csv(&text).unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.labels(), vec![0, 5, 9]);
        assert_eq!(set.samples()[1].features, FeatureVector([90.0; FEATURE_COUNT]));
    }

    #[test]
    fn test_from_csv_skips_comments_and_blank_lines() {
        let text = format!("# angles then label\n\n{}\n   \n{}\n", row(1.0, 0), row(2.0, 5));
        let set = TrainingSet::from_csv(&text).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_short_row_fails_whole_load() {
        let short = vec!["1.0"; FEATURE_COUNT].join(",");
        let text = [row(0.0, 0), short, row(45.0, 9)].join("\n");

        match TrainingSet::from_csv(&text) {
            Err(Error::DatasetLoad { line, reason }) => {
                assert_eq!(line, Some(2));
                assert!(reason.contains("found 15"), "unexpected reason: {}", reason);
            }
            other => panic!("expected DatasetLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_dataset_error() {
        let err = TrainingSet::load("does/not/exist/gesture_train.csv").unwrap_err();
        assert!(matches!(err, Error::DatasetLoad { line: None, .. }));
    }

    #[test]
    fn test_out_of_range_label_fails_load() {
        let mut fields = vec!["1.0"; FEATURE_COUNT];
        fields.push("1e20");
        let text = [row(0.0, 0), fields.join(",")].join("\n");

        match TrainingSet::from_csv(&text) {
            Err(Error::DatasetLoad { line, reason }) => {
                assert_eq!(line, Some(2));
                assert!(reason.contains("32-bit"), "unexpected reason: {}", reason);
            }
            other => panic!("expected DatasetLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_labels_above_f32_precision_stay_distinct() {
        let rows: Vec<String> = ["16777216", "16777217"]
            .iter()
            .map(|label| {
                let mut fields = vec!["1.0"; FEATURE_COUNT];
                fields.push(label);
                fields.join(",")
            })
            .collect();
        let set = TrainingSet::from_csv(&rows.join("\n")).unwrap();
        assert_eq!(set.labels(), vec![16_777_216, 16_777_217]);
    }

    #[test]
    fn test_load_reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "rps-gesture-{}-train.csv",
            std::process::id()
        ));
        fs::write(&path, [row(0.0, 0), row(90.0, 5)].join("\n")).unwrap();

        let set = TrainingSet::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(set.labels(), vec![0, 5]);
    }

    #[test]
    fn test_empty_text_gives_empty_set() {
        let set = TrainingSet::from_csv("# nothing here\n").unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_bundled_table_loads() {
        let set = TrainingSet::bundled().unwrap();
        assert!(!set.is_empty());
        for label in [0, 5, 9] {
            assert!(set.labels().contains(&label), "missing label {}", label);
        }
    }
}
