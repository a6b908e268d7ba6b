//! Crop prediction operations.
//!
//! The prediction routes take no bearer token; they ride the
//! unauthenticated path.

use tracing::{debug, instrument};

use agris_core::Result;
use agris_core::models::{CropPrediction, CropPredictionRequest, CropRecommendationRequest};

use crate::AgrisClient;
use crate::endpoints::{PREDICT_CROP, PREDICT_RECOMMENDATION};

impl AgrisClient {
    /// Check the prediction service's health endpoint.
    pub async fn prediction_health(&self) -> Result<Option<serde_json::Value>> {
        self.get_public("/prediction/health").await
    }

    /// Predict a crop directly from soil and climate inputs.
    #[instrument(skip(self, request))]
    pub async fn predict_crop(
        &self,
        request: &CropPredictionRequest,
    ) -> Result<Option<CropPrediction>> {
        debug!(crop_type = %request.crop_type, "predicting crop");
        self.post_public(PREDICT_CROP, request).await
    }

    /// Recommend a crop for a farm using a city's current weather.
    #[instrument(skip(self, request), fields(farm_id = %request.farm_id))]
    pub async fn recommend_crop(
        &self,
        request: &CropRecommendationRequest,
    ) -> Result<Option<CropPrediction>> {
        debug!(city = %request.city, "requesting crop recommendation");
        self.post_public(PREDICT_RECOMMENDATION, request).await
    }
}
