//! External and Internal Record Types

use serde::{Deserialize, Serialize};

/// Vehicle description as received over the API.
///
/// Field names follow the public request schema; serde deserialization of
/// the request body is the upstream shape/type validation layer. Only
/// `Mileage_per_year` may be omitted, in which case the normalizer derives
/// it from mileage and age.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "Levy")]
    pub levy: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Prod_year")]
    pub prod_year: i64,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Leather_interior")]
    pub leather_interior: String,
    #[serde(rename = "Fuel_type")]
    pub fuel_type: String,
    #[serde(rename = "Engine_volume")]
    pub engine_volume: f64,
    #[serde(rename = "Mileage")]
    pub mileage: f64,
    #[serde(rename = "Cylinders")]
    pub cylinders: f64,
    #[serde(rename = "Gear_box_type")]
    pub gear_box_type: String,
    #[serde(rename = "Drive_wheels")]
    pub drive_wheels: String,
    #[serde(rename = "Wheel")]
    pub wheel: String,
    #[serde(rename = "Color")]
    pub color: String,
    #[serde(rename = "Airbags")]
    pub airbags: f64,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "Mileage_per_year", default)]
    pub mileage_per_year: Option<f64>,
}

impl VehicleRecord {
    /// Look up a field by its external schema name.
    ///
    /// Returns `None` when the field carries no value (only possible for
    /// `Mileage_per_year`) or the name is not part of the schema.
    pub fn field(&self, external: &str) -> Option<FieldValue> {
        match external {
            "Levy" => Some(FieldValue::Text(self.levy.clone())),
            "Manufacturer" => Some(FieldValue::Text(self.manufacturer.clone())),
            "Model" => Some(FieldValue::Text(self.model.clone())),
            "Prod_year" => Some(FieldValue::Int(self.prod_year)),
            "Category" => Some(FieldValue::Text(self.category.clone())),
            "Leather_interior" => Some(FieldValue::Text(self.leather_interior.clone())),
            "Fuel_type" => Some(FieldValue::Text(self.fuel_type.clone())),
            "Engine_volume" => Some(FieldValue::Float(self.engine_volume)),
            "Mileage" => Some(FieldValue::Float(self.mileage)),
            "Cylinders" => Some(FieldValue::Float(self.cylinders)),
            "Gear_box_type" => Some(FieldValue::Text(self.gear_box_type.clone())),
            "Drive_wheels" => Some(FieldValue::Text(self.drive_wheels.clone())),
            "Wheel" => Some(FieldValue::Text(self.wheel.clone())),
            "Color" => Some(FieldValue::Text(self.color.clone())),
            "Airbags" => Some(FieldValue::Float(self.airbags)),
            "Age" => Some(FieldValue::Int(self.age)),
            "Mileage_per_year" => self.mileage_per_year.map(FieldValue::Float),
            _ => None,
        }
    }
}

/// One field value in the internal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free-form category text
    Text(String),
    /// Integer-valued field
    Int(i64),
    /// Floating point field
    Float(f64),
}

impl FieldValue {
    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

/// Model-facing record keyed by internal column names.
///
/// Entries keep insertion order but carry no positional guarantee; the row
/// builder imposes the training-time column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternalFeatureRecord {
    entries: Vec<(&'static str, FieldValue)>,
}

impl InternalFeatureRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a column value.
    pub fn insert(&mut self, column: &'static str, value: FieldValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == column) {
            entry.1 = value;
        } else {
            self.entries.push((column, value));
        }
    }

    /// Get a column value by internal name.
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value)
    }

    /// Whether the record contains the column.
    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    /// Number of populated columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over populated column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}
