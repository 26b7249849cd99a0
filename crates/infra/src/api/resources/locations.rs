use flume_domain::{Envelope, Location, LocationPatch, LocationsParams, ResponseEnvelope};
use reqwest::Method;
use tracing::instrument;

use super::require;
use crate::api::{ApiClient, ApiError};

impl ApiClient {
    #[instrument(skip(self, params))]
    pub async fn get_locations(
        &self,
        params: Option<&LocationsParams>,
    ) -> Result<Envelope<Vec<Location>>, ApiError> {
        let url = self.user_url_with(&["locations"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self))]
    pub async fn get_location(
        &self,
        location_id: &str,
    ) -> Result<Envelope<Vec<Location>>, ApiError> {
        require("location_id", location_id)?;
        let url = self.user_url(&["locations", location_id]).await?;
        self.dispatcher().get(url.as_str()).await
    }

    /// Toggle away mode for a location.
    #[instrument(skip(self))]
    pub async fn update_location(
        &self,
        location_id: &str,
        patch: LocationPatch,
    ) -> Result<ResponseEnvelope, ApiError> {
        require("location_id", location_id)?;
        let url = self.user_url(&["locations", location_id]).await?;
        self.dispatcher().dispatch(Method::PATCH, url.as_str(), Some(&patch)).await
    }
}
