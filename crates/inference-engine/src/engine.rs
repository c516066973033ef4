//! Price Engine Implementation

use crate::InferenceError;
use feature_engine::{FeatureRow, COLUMN_COUNT};
use tracing::{debug, info};

/// The opaque prediction capability the rest of the service depends on.
///
/// Swapping model implementations only requires another `PriceModel`; no
/// caller sees an artifact-specific type.
pub trait PriceModel: Send + Sync {
    /// Predict a price for one feature row. Returns the raw scalar; rounding
    /// for presentation is the caller's concern.
    fn predict(&self, row: &FeatureRow) -> Result<f64, InferenceError>;
}

/// Trained price pipeline wrapper (mock implementation for development)
pub struct PriceEngine {
    /// Model artifact path
    model_path: String,
    /// Whether model is loaded
    loaded: bool,
    /// Enable mock mode (no actual artifact)
    mock_mode: bool,
}

impl PriceEngine {
    /// Create a new price engine
    pub fn new(model_path: &str) -> Result<Self, InferenceError> {
        info!("Creating price engine with model: {}", model_path);

        Ok(Self {
            model_path: model_path.to_string(),
            loaded: false,
            mock_mode: true, // Start in mock mode until a trained artifact export ships
        })
    }

    /// Create a mock price engine for testing
    pub fn mock() -> Self {
        info!("Creating mock price engine");
        Self {
            model_path: "mock".to_string(),
            loaded: true,
            mock_mode: true,
        }
    }

    /// Load the model artifact. Called once at startup; the engine is
    /// read-only afterwards.
    pub fn load(&mut self) -> Result<(), InferenceError> {
        if self.mock_mode {
            debug!("Mock mode: skipping model load");
            self.loaded = true;
            return Ok(());
        }

        // No artifact runtime is wired up yet; fail loudly instead of
        // pretending a trained model is loaded.
        Err(InferenceError::ModelLoadError(format!(
            "no runtime available for model artifact: {}",
            self.model_path
        )))
    }

    /// Check if engine is loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Get model path
    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    /// Deterministic stand-in for the trained pipeline: a depreciation curve
    /// over the row's numeric cells. Pure function of the input.
    fn mock_predict(&self, row: &FeatureRow) -> f64 {
        let age = row.as_f64("Age").unwrap_or(10.0);
        let engine_volume = row.as_f64("Engine volume").unwrap_or(2.0);
        let mileage = row.as_f64("Mileage").unwrap_or(100_000.0);
        let leather = row.as_f64("Leather interior").unwrap_or(0.0);
        let airbags = row.as_f64("Airbags").unwrap_or(4.0);
        let levy = row.as_f64("Levy").unwrap_or(0.0);

        let new_price = 18_000.0 + 6_500.0 * engine_volume + 350.0 * airbags + 1_500.0 * leather;
        let depreciated = new_price * 0.92_f64.powf(age);
        let mileage_penalty = mileage / 10_000.0 * 120.0;

        (depreciated - mileage_penalty + levy * 0.1).max(500.0)
    }
}

impl PriceModel for PriceEngine {
    fn predict(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        if !self.loaded {
            return Err(InferenceError::ModelLoadError(
                "Model not loaded".to_string(),
            ));
        }

        if row.values().len() != COLUMN_COUNT {
            return Err(InferenceError::InvalidInputShape {
                expected: format!("1x{COLUMN_COUNT}"),
                actual: format!("1x{}", row.values().len()),
            });
        }

        if !self.mock_mode {
            // Heuristic prices must never masquerade as pipeline output.
            return Err(InferenceError::PredictionFailed(
                "no trained artifact runtime available".to_string(),
            ));
        }

        let price = self.mock_predict(row);
        debug!(price, "inference complete");
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feature_engine::FeatureRowBuilder;
    use feature_mapper::{FieldValue, InternalFeatureRecord};

    fn sample_row() -> FeatureRow {
        let mut record = InternalFeatureRecord::new();
        record.insert("Levy", FieldValue::Float(1399.0));
        record.insert("Manufacturer", FieldValue::Text("LEXUS".to_string()));
        record.insert("Model", FieldValue::Text("RX 450".to_string()));
        record.insert("Prod. year", FieldValue::Int(2010));
        record.insert("Category", FieldValue::Text("Jeep".to_string()));
        record.insert("Leather interior", FieldValue::Int(1));
        record.insert("Fuel type", FieldValue::Text("Hybrid".to_string()));
        record.insert("Engine volume", FieldValue::Float(3.5));
        record.insert("Mileage", FieldValue::Float(186005.0));
        record.insert("Cylinders", FieldValue::Float(6.0));
        record.insert("Gear box type", FieldValue::Text("Automatic".to_string()));
        record.insert("Drive wheels", FieldValue::Text("4x4".to_string()));
        record.insert("Wheel", FieldValue::Text("Left wheel".to_string()));
        record.insert("Color", FieldValue::Text("Silver".to_string()));
        record.insert("Airbags", FieldValue::Float(12.0));
        record.insert("Age", FieldValue::Int(15));
        record.insert("Mileage_per_year", FieldValue::Float(12400.0));
        FeatureRowBuilder::build(&record).unwrap()
    }

    #[test]
    fn test_mock_prediction_is_positive() {
        let engine = PriceEngine::mock();
        let price = engine.predict(&sample_row()).unwrap();
        assert!(price > 0.0);
    }

    #[test]
    fn test_mock_prediction_is_deterministic() {
        let engine = PriceEngine::mock();
        let row = sample_row();
        assert_eq!(engine.predict(&row).unwrap(), engine.predict(&row).unwrap());
    }

    #[test]
    fn test_unloaded_engine_rejects_prediction() {
        let engine = PriceEngine::new("models/car_price_pipeline.onnx").unwrap();
        assert!(!engine.is_loaded());
        assert!(matches!(
            engine.predict(&sample_row()),
            Err(InferenceError::ModelLoadError(_))
        ));
    }

    #[test]
    fn test_load_without_artifact_runtime_fails() {
        let mut engine = PriceEngine {
            model_path: "models/car_price_pipeline.bin".to_string(),
            loaded: false,
            mock_mode: false,
        };
        assert!(matches!(
            engine.load(),
            Err(InferenceError::ModelLoadError(_))
        ));
        assert!(!engine.is_loaded());
    }

    #[test]
    fn test_non_mock_predict_is_explicit_error() {
        // A non-mock engine must never serve heuristic prices
        let engine = PriceEngine {
            model_path: "models/car_price_pipeline.bin".to_string(),
            loaded: true,
            mock_mode: false,
        };
        assert!(matches!(
            engine.predict(&sample_row()),
            Err(InferenceError::PredictionFailed(_))
        ));
    }

    #[test]
    fn test_load_marks_engine_ready() {
        let mut engine = PriceEngine::new("models/car_price_pipeline.onnx").unwrap();
        engine.load().unwrap();
        assert!(engine.is_loaded());
        assert!(engine.predict(&sample_row()).is_ok());
    }

    #[test]
    fn test_older_car_predicts_lower_price() {
        let engine = PriceEngine::mock();
        let young = sample_row();

        let mut record = InternalFeatureRecord::new();
        for column in feature_engine::expected_columns() {
            let value = match column {
                "Age" => FieldValue::Int(25),
                "Prod. year" => FieldValue::Int(2000),
                _ => match young.get(column).unwrap() {
                    feature_engine::FeatureValue::Int(v) => FieldValue::Int(*v),
                    feature_engine::FeatureValue::Float(v) => FieldValue::Float(*v),
                    feature_engine::FeatureValue::Text(s) => FieldValue::Text(s.clone()),
                },
            };
            record.insert(column, value);
        }
        let old = FeatureRowBuilder::build(&record).unwrap();

        assert!(engine.predict(&old).unwrap() < engine.predict(&young).unwrap());
    }
}
