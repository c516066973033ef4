//! Request Normalization
//!
//! Maps the external API schema onto the model's internal column names and
//! value encodings, producing a fully populated record for the row builder.

mod mapping;
mod normalizer;
mod record;

pub use mapping::{internal_name, RENAME_TABLE};
pub use normalizer::RecordNormalizer;
pub use record::{FieldValue, InternalFeatureRecord, VehicleRecord};
