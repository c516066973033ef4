//! Record Normalizer

use crate::mapping::RENAME_TABLE;
use crate::record::{FieldValue, InternalFeatureRecord, VehicleRecord};
use tracing::debug;

/// Internal column name of the derived feature.
const MILEAGE_PER_YEAR: &str = "Mileage_per_year";

/// Converts an API-shaped vehicle record into the model-facing record.
///
/// Normalization never fails: unparsable numeric text degrades to a default
/// value, matching the training-time preprocessing. Shape errors are the
/// upstream schema layer's job; anything structural that slips through is
/// caught by the row builder's missing-column check.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Create a normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Rename and re-encode every field, then fill the derived feature.
    pub fn normalize(&self, record: &VehicleRecord) -> InternalFeatureRecord {
        let mut out = InternalFeatureRecord::new();

        for (external, internal) in RENAME_TABLE {
            let Some(value) = record.field(external) else {
                // Absent fields stay absent; the builder reports them.
                continue;
            };

            let value = match (external, &value) {
                ("Leather_interior", FieldValue::Text(raw)) => {
                    FieldValue::Int(encode_leather_interior(raw))
                }
                ("Levy", FieldValue::Text(raw)) => FieldValue::Float(parse_levy(raw)),
                _ => value,
            };

            out.insert(internal, value);
        }

        if !out.contains(MILEAGE_PER_YEAR) {
            // Guard against zero or negative age with the training-time floor.
            let derived = record.mileage / (record.age as f64).max(0.1);
            debug!(derived, "derived Mileage_per_year from mileage and age");
            out.insert(MILEAGE_PER_YEAR, FieldValue::Float(derived));
        }

        out
    }
}

/// "Yes" means leather, every other value (including casing variants) does
/// not. Kept as-is from the training data encoding.
fn encode_leather_interior(raw: &str) -> i64 {
    if raw == "Yes" {
        1
    } else {
        0
    }
}

/// "-" is the no-levy sentinel (exact match, no trimming); numeric text may
/// carry surrounding whitespace; anything else degrades to 0.0.
fn parse_levy(raw: &str) -> f64 {
    if raw == "-" {
        return 0.0;
    }
    raw.trim().parse().unwrap_or(0.0)
}
