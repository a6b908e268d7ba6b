//! Crop prediction models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for direct crop prediction from soil and climate inputs.
#[derive(Debug, Clone, Serialize)]
pub struct CropPredictionRequest {
    pub crop_type: String,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub area_hectares: f64,
}

impl Default for CropPredictionRequest {
    fn default() -> Self {
        // Defaults match the backend schema's field defaults
        Self {
            crop_type: "Generic".to_string(),
            n: 0.0,
            p: 0.0,
            k: 0.0,
            ph: 7.0,
            rainfall: 0.0,
            temperature: 0.0,
            area_hectares: 1.0,
        }
    }
}

/// Request body for a recommendation tied to a farm and a city's weather.
#[derive(Debug, Clone, Serialize)]
pub struct CropRecommendationRequest {
    pub farm_id: Uuid,
    pub crop_type: String,
    pub n: f64,
    pub p: f64,
    pub k: f64,
    pub ph: f64,
    pub city: String,
}

/// Prediction result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CropPrediction {
    pub recommended_crop: String,
    pub expected_yield: f64,
    pub confidence: f64,
}
