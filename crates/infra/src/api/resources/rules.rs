use flume_domain::{
    Envelope, EventRule, EventRulesParams, UsageAlert, UsageAlertRule, UsageAlertRulesParams,
    UsageAlertsParams,
};
use tracing::instrument;

use super::require;
use crate::api::{ApiClient, ApiError};

impl ApiClient {
    /// Alerts already triggered for the account.
    #[instrument(skip(self, params))]
    pub async fn get_usage_alerts(
        &self,
        params: Option<&UsageAlertsParams>,
    ) -> Result<Envelope<Vec<UsageAlert>>, ApiError> {
        let url = self.user_url_with(&["usage-alerts"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_event_rules(
        &self,
        device_id: &str,
        params: Option<&EventRulesParams>,
    ) -> Result<Envelope<Vec<EventRule>>, ApiError> {
        require("device_id", device_id)?;
        let url = self.user_url_with(&["devices", device_id, "event_rules"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_usage_alert_rules(
        &self,
        device_id: &str,
        params: Option<&UsageAlertRulesParams>,
    ) -> Result<Envelope<Vec<UsageAlertRule>>, ApiError> {
        require("device_id", device_id)?;
        let url =
            self.user_url_with(&["devices", device_id, "usage_alert_rules"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self))]
    pub async fn get_usage_alert_rule(
        &self,
        device_id: &str,
        rule_id: &str,
    ) -> Result<Envelope<Vec<UsageAlertRule>>, ApiError> {
        require("device_id", device_id)?;
        require("rule_id", rule_id)?;
        let url = self.user_url(&["devices", device_id, "usage_alert_rules", rule_id]).await?;
        self.dispatcher().get(url.as_str()).await
    }
}
