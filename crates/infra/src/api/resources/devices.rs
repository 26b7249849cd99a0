use flume_domain::{
    Budget, BudgetsParams, Device, DeviceParams, DevicesParams, Envelope, Flow,
    QueryUsageRequest, UsageQuery,
};
use reqwest::Method;
use tracing::instrument;

use super::require;
use crate::api::{ApiClient, ApiError};

impl ApiClient {
    #[instrument(skip(self, params))]
    pub async fn get_devices(
        &self,
        params: Option<&DevicesParams>,
    ) -> Result<Envelope<Vec<Device>>, ApiError> {
        let url = self.user_url_with(&["devices"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_device(
        &self,
        device_id: &str,
        params: Option<&DeviceParams>,
    ) -> Result<Envelope<Vec<Device>>, ApiError> {
        require("device_id", device_id)?;
        let url = self.user_url_with(&["devices", device_id], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    /// Bucketed water usage for one device.
    #[instrument(skip(self, request), fields(request_id = %request.request_id))]
    pub async fn query_usage(
        &self,
        device_id: &str,
        request: &QueryUsageRequest,
    ) -> Result<Envelope<Vec<UsageQuery>>, ApiError> {
        require("device_id", device_id)?;
        let url = self.user_url(&["devices", device_id, "query"]).await?;
        self.dispatcher().dispatch(Method::POST, url.as_str(), Some(request)).await
    }

    /// Instantaneous flow reading.
    #[instrument(skip(self))]
    pub async fn get_current_flow(&self, device_id: &str) -> Result<Envelope<Vec<Flow>>, ApiError> {
        require("device_id", device_id)?;
        let url = self.user_url(&["devices", device_id, "query", "active"]).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_budgets(
        &self,
        device_id: &str,
        params: Option<&BudgetsParams>,
    ) -> Result<Envelope<Vec<Budget>>, ApiError> {
        require("device_id", device_id)?;
        let url = self.user_url_with(&["devices", device_id, "budgets"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }
}
