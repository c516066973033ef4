//! Feature Row Builder

use crate::columns::{ColumnType, COLUMN_COUNT, MODEL_COLUMNS};
use crate::BuildError;
use feature_mapper::{FieldValue, InternalFeatureRecord};
use serde::Serialize;
use tracing::debug;

/// One typed cell of the model input row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    /// 64-bit integer cell
    Int(i64),
    /// 64-bit float cell
    Float(f64),
    /// Category text cell
    Text(String),
}

impl FeatureValue {
    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Int(v) => Some(*v as f64),
            FeatureValue::Float(v) => Some(*v),
            FeatureValue::Text(_) => None,
        }
    }
}

/// The single ordered, typed row the trained pipeline accepts.
///
/// Cells always follow [`MODEL_COLUMNS`] order; a `FeatureRow` can only be
/// obtained through [`FeatureRowBuilder::build`], so the model never sees a
/// partially checked row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    values: Vec<FeatureValue>,
}

impl FeatureRow {
    /// Cells in the fixed column order.
    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// Get a cell by column name.
    pub fn get(&self, column: &str) -> Option<&FeatureValue> {
        let position = MODEL_COLUMNS.iter().position(|(name, _)| *name == column)?;
        self.values.get(position)
    }

    /// Numeric view of a cell by column name.
    pub fn as_f64(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(FeatureValue::as_f64)
    }

    /// Text view of a cell by column name.
    pub fn as_text(&self, column: &str) -> Option<&str> {
        match self.get(column) {
            Some(FeatureValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Assembles the ordered, typed feature row from a normalized record.
pub struct FeatureRowBuilder;

impl FeatureRowBuilder {
    /// Build the model input row.
    ///
    /// Verifies every required column is present before any cast, then
    /// applies the per-column casts in the fixed order.
    pub fn build(record: &InternalFeatureRecord) -> Result<FeatureRow, BuildError> {
        let missing: Vec<&'static str> = MODEL_COLUMNS
            .iter()
            .map(|(name, _)| *name)
            .filter(|name| !record.contains(name))
            .collect();
        if !missing.is_empty() {
            return Err(BuildError::MissingColumns(missing));
        }

        let mut values = Vec::with_capacity(COLUMN_COUNT);
        for (column, dtype) in MODEL_COLUMNS {
            match record.get(column) {
                Some(field) => values.push(cast(column, dtype, field)?),
                // Unreachable after the presence check; kept as a hard error
                // rather than a panic.
                None => return Err(BuildError::MissingColumns(vec![column])),
            }
        }

        debug!(columns = values.len(), "assembled feature row");
        Ok(FeatureRow { values })
    }
}

/// Coerce one field to its column dtype.
///
/// Float to int64 truncates toward zero, matching the training pipeline's
/// integer casts. Text in a numeric column and non-finite floats are hard
/// errors, never silent defaults.
fn cast(
    column: &'static str,
    dtype: ColumnType,
    value: &FieldValue,
) -> Result<FeatureValue, BuildError> {
    match (dtype, value) {
        (ColumnType::Int64, FieldValue::Int(v)) => Ok(FeatureValue::Int(*v)),
        (ColumnType::Int64, FieldValue::Float(v)) => {
            if v.is_finite() {
                Ok(FeatureValue::Int(*v as i64))
            } else {
                Err(BuildError::CastError {
                    column,
                    found: "non-finite float",
                    expected: "int64",
                })
            }
        }
        (ColumnType::Int64, FieldValue::Text(_)) => Err(BuildError::CastError {
            column,
            found: "text",
            expected: "int64",
        }),
        (ColumnType::Float64, FieldValue::Int(v)) => Ok(FeatureValue::Float(*v as f64)),
        (ColumnType::Float64, FieldValue::Float(v)) => Ok(FeatureValue::Float(*v)),
        (ColumnType::Float64, FieldValue::Text(_)) => Err(BuildError::CastError {
            column,
            found: "text",
            expected: "float64",
        }),
        (ColumnType::Text, FieldValue::Text(s)) => Ok(FeatureValue::Text(s.clone())),
        (ColumnType::Text, FieldValue::Int(_)) => Err(BuildError::CastError {
            column,
            found: "int64",
            expected: "text",
        }),
        (ColumnType::Text, FieldValue::Float(_)) => Err(BuildError::CastError {
            column,
            found: "float64",
            expected: "text",
        }),
    }
}
