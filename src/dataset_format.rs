//! Training table row format shared by build.rs and runtime code.
//!
//! The build script includes this file directly so the bundled table is
//! checked at compile time with exactly the parser the classifier loads it with.

// Some items are only used by the runtime loader
#![allow(dead_code)]

use std::fmt;

/// Number of joint angles in one feature vector.
pub const FEATURE_COUNT: usize = 15;

/// Columns per row: the features followed by the label.
pub const COLUMN_COUNT: usize = FEATURE_COUNT + 1;

/// Field separator of the training table.
pub const DELIMITER: char = ',';

/// Lines starting with this character are ignored.
pub const COMMENT_PREFIX: char = '#';

/// Why a single row of the training table was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    ColumnCount { found: usize },
    NotANumber { column: usize, text: String },
    NonFinite { column: usize },
    FractionalLabel { value: f64 },
    LabelOutOfRange { value: f64 },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::ColumnCount { found } => {
                write!(f, "expected {} columns, found {}", COLUMN_COUNT, found)
            }
            RowError::NotANumber { column, text } => {
                write!(f, "column {} is not a number: {:?}", column + 1, text)
            }
            RowError::NonFinite { column } => write!(f, "column {} is not finite", column + 1),
            RowError::FractionalLabel { value } => {
                write!(f, "label {} is not an integer", value)
            }
            RowError::LabelOutOfRange { value } => {
                write!(f, "label {} does not fit in a 32-bit integer", value)
            }
        }
    }
}

/// Blank lines and comments carry no sample.
pub fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX)
}

/// Parse one row into its features and integer label.
///
/// The label column is stored as a float (`5.000000`) and must hold a whole
/// number in `i32` range. It is read as `f64` so every such label is exact.
pub fn parse_row(line: &str) -> Result<([f32; FEATURE_COUNT], i32), RowError> {
    let fields: Vec<&str> = line.trim().split(DELIMITER).collect();
    if fields.len() != COLUMN_COUNT {
        return Err(RowError::ColumnCount {
            found: fields.len(),
        });
    }

    let mut features = [0.0f32; FEATURE_COUNT];
    for (column, field) in fields[..FEATURE_COUNT].iter().enumerate() {
        let value = parse_field::<f32>(column, field)?;
        if !value.is_finite() {
            return Err(RowError::NonFinite { column });
        }
        features[column] = value;
    }

    let label = parse_field::<f64>(FEATURE_COUNT, fields[FEATURE_COUNT])?;
    if !label.is_finite() {
        return Err(RowError::NonFinite {
            column: FEATURE_COUNT,
        });
    }
    if label.fract() != 0.0 {
        return Err(RowError::FractionalLabel { value: label });
    }
    if label < f64::from(i32::MIN) || label > f64::from(i32::MAX) {
        return Err(RowError::LabelOutOfRange { value: label });
    }

    Ok((features, label as i32))
}

fn parse_field<T: std::str::FromStr>(column: usize, field: &str) -> Result<T, RowError> {
    let text = field.trim();
    text.parse().map_err(|_| RowError::NotANumber {
        column,
        text: text.to_string(),
    })
}
