//! Yield (crop sale) operations.

use tracing::{debug, instrument};
use uuid::Uuid;

use agris_core::Result;
use agris_core::models::{NewYieldRecord, YieldRecord};

use crate::AgrisClient;
use crate::endpoints::YIELDS;

impl AgrisClient {
    /// Record a yield (crop sale) against a farm.
    #[instrument(skip(self, record), fields(farm_id = %record.farm_id))]
    pub async fn add_yield(&self, record: &NewYieldRecord) -> Result<Option<YieldRecord>> {
        debug!(crop = %record.crop_name, "recording yield");
        self.post(YIELDS, record).await
    }

    /// List all yields for a farm.
    #[instrument(skip(self))]
    pub async fn farm_yields(&self, farm_id: Uuid) -> Result<Vec<YieldRecord>> {
        debug!("listing yields");
        Ok(self
            .get(&format!("{}/farm/{}", YIELDS, farm_id))
            .await?
            .unwrap_or_default())
    }
}
