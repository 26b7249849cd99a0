use flume_domain::{Envelope, PagedEnvelope, Subscription, SubscriptionsParams};
use tracing::instrument;

use super::require;
use crate::api::{ApiClient, ApiError};

impl ApiClient {
    /// Alert subscriptions; this endpoint answers with `{next, prev}`
    /// pagination.
    #[instrument(skip(self, params))]
    pub async fn get_subscriptions(
        &self,
        params: Option<&SubscriptionsParams>,
    ) -> Result<PagedEnvelope<Vec<Subscription>>, ApiError> {
        let url = self.user_url_with(&["subscriptions"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self))]
    pub async fn get_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<Envelope<Subscription>, ApiError> {
        require("subscription_id", subscription_id)?;
        let url = self.user_url(&["subscriptions", subscription_id]).await?;
        self.dispatcher().get(url.as_str()).await
    }
}
