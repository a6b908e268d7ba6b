//! Farm operations.

use std::time::Duration;

use tracing::{debug, instrument};
use uuid::Uuid;

use agris_core::Result;
use agris_core::models::{Farm, NewFarm};

use crate::client::{AgrisClient, ApiRequest};
use crate::endpoints::FARMS;

/// Farm registration involves server-side geocoding and can stall; the
/// original front end aborted it after ten seconds.
const CREATE_FARM_TIMEOUT: Duration = Duration::from_secs(10);

impl AgrisClient {
    /// Register a new farm.
    #[instrument(skip(self, farm), fields(name = %farm.name))]
    pub async fn create_farm(&self, farm: &NewFarm) -> Result<Option<Farm>> {
        debug!("creating farm");
        self.execute(ApiRequest::post(FARMS, farm)?.with_timeout(CREATE_FARM_TIMEOUT))
            .await
    }

    /// List the current user's farms.
    #[instrument(skip(self))]
    pub async fn farms(&self) -> Result<Vec<Farm>> {
        debug!("listing farms");
        Ok(self.get(FARMS).await?.unwrap_or_default())
    }

    /// Fetch a single farm.
    #[instrument(skip(self))]
    pub async fn farm(&self, farm_id: Uuid) -> Result<Option<Farm>> {
        debug!("fetching farm");
        self.get(&format!("{}/{}", FARMS, farm_id)).await
    }
}
