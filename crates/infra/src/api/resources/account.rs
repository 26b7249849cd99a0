use flume_domain::{
    Contact, ContactsParams, Envelope, Notification, NotificationsParams, User,
};
use tracing::instrument;

use crate::api::{ApiClient, ApiError};

impl ApiClient {
    /// Profile of the signed-in user.
    #[instrument(skip(self))]
    pub async fn get_user(&self) -> Result<Envelope<Vec<User>>, ApiError> {
        let url = self.user_url(&[]).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_notifications(
        &self,
        params: Option<&NotificationsParams>,
    ) -> Result<Envelope<Vec<Notification>>, ApiError> {
        let url = self.user_url_with(&["notifications"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_contacts(
        &self,
        params: Option<&ContactsParams>,
    ) -> Result<Envelope<Vec<Contact>>, ApiError> {
        let url = self.user_url_with(&["contacts"], params).await?;
        self.dispatcher().get(url.as_str()).await
    }
}
