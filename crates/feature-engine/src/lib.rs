//! Feature Row Assembly
//!
//! Builds the single ordered, strictly typed row the trained price pipeline
//! accepts. The column order and per-column dtypes are a training-time
//! contract: the artifact is positional and not self-describing, so a
//! reordered or retyped row produces silently wrong predictions rather than
//! a crash. Both live here as explicit constants.

mod builder;
mod columns;

pub use builder::{FeatureRow, FeatureRowBuilder, FeatureValue};
pub use columns::{expected_columns, ColumnType, COLUMN_COUNT, MODEL_COLUMNS};

use thiserror::Error;

/// Errors while assembling the feature row
#[derive(Debug, Clone, Error)]
pub enum BuildError {
    /// The normalized record lacks required columns. Raised before any cast
    /// or model call is attempted.
    #[error("Missing required columns: {0:?}")]
    MissingColumns(Vec<&'static str>),

    /// A value cannot be coerced to its required column type.
    #[error("Column '{column}': cannot cast {found} to {expected}")]
    CastError {
        column: &'static str,
        found: &'static str,
        expected: &'static str,
    },
}
