use bytes::Bytes;

use crate::api::validate;
use crate::client::SleeperClient;
use crate::error::Result;

impl SleeperClient {
    /// Full-size avatar image bytes.
    pub async fn get_avatar_image(&self, avatar_id: &str) -> Result<Bytes> {
        self.fetch_avatar(avatar_id, false).await
    }

    /// Thumbnail avatar image bytes.
    pub async fn get_avatar_thumbnail(&self, avatar_id: &str) -> Result<Bytes> {
        self.fetch_avatar(avatar_id, true).await
    }

    async fn fetch_avatar(&self, avatar_id: &str, thumbnail: bool) -> Result<Bytes> {
        let avatar_id = validate::required("avatar_id", avatar_id)?;
        let url = self.avatar_url(avatar_id, thumbnail)?;
        self.get_raw(&url).await
    }
}
