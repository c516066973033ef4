//! Model Input Column Contract

use serde::{Deserialize, Serialize};

/// Number of model input columns
pub const COLUMN_COUNT: usize = 17;

/// Required dtype of a model input column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// 64-bit integer
    Int64,
    /// 64-bit float
    Float64,
    /// Category text
    Text,
}

impl ColumnType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Int64 => "int64",
            ColumnType::Float64 => "float64",
            ColumnType::Text => "text",
        }
    }
}

/// Training-time column order and dtypes, verbatim from the fitted pipeline.
/// Order is load-bearing; do not reorder.
pub const MODEL_COLUMNS: [(&str, ColumnType); COLUMN_COUNT] = [
    ("Levy", ColumnType::Int64),
    ("Manufacturer", ColumnType::Text),
    ("Model", ColumnType::Text),
    ("Prod. year", ColumnType::Int64),
    ("Category", ColumnType::Text),
    ("Leather interior", ColumnType::Int64),
    ("Fuel type", ColumnType::Text),
    ("Engine volume", ColumnType::Float64),
    ("Mileage", ColumnType::Int64),
    ("Cylinders", ColumnType::Float64),
    ("Gear box type", ColumnType::Text),
    ("Drive wheels", ColumnType::Text),
    ("Wheel", ColumnType::Text),
    ("Color", ColumnType::Text),
    ("Airbags", ColumnType::Int64),
    ("Age", ColumnType::Int64),
    ("Mileage_per_year", ColumnType::Float64),
];

/// Column names in the fixed order.
pub fn expected_columns() -> [&'static str; COLUMN_COUNT] {
    let mut names = [""; COLUMN_COUNT];
    let mut i = 0;
    while i < COLUMN_COUNT {
        names[i] = MODEL_COLUMNS[i].0;
        i += 1;
    }
    names
}
