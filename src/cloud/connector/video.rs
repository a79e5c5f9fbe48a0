use super::LetvCloudConnector;
use crate::cloud::converters::{
    image_get_params, video_del_batch_params, video_id_params, video_list_params,
    video_update_params,
};
use crate::core::{
    kernel::RestClient,
    traits::{RawResponse, VideoCatalog},
    types::{VideoList, VideoUpdate},
};
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
impl<R: RestClient> VideoCatalog for LetvCloudConnector<R> {
    #[instrument(skip(self), fields(video_id = request.video_id))]
    async fn video_update(&self, request: &VideoUpdate) -> RawResponse {
        self.signed_get("video.update", video_update_params(request))
            .await
    }

    #[instrument(skip(self))]
    async fn video_list(&self, request: &VideoList) -> RawResponse {
        let params = video_list_params(request)?;
        self.signed_get("video.list", params).await
    }

    #[instrument(skip(self))]
    async fn video_get(&self, video_id: u64) -> RawResponse {
        self.signed_get("video.get", video_id_params(video_id)).await
    }

    #[instrument(skip(self))]
    async fn video_del(&self, video_id: u64) -> RawResponse {
        self.signed_get("video.del", video_id_params(video_id)).await
    }

    #[instrument(skip(self, video_ids), fields(count = video_ids.len()))]
    async fn video_del_batch(&self, video_ids: &[u64]) -> RawResponse {
        let params = video_del_batch_params(video_ids)?;
        self.signed_get("video.del.batch", params).await
    }

    #[instrument(skip(self))]
    async fn video_pause(&self, video_id: u64) -> RawResponse {
        self.signed_get("video.pause", video_id_params(video_id)).await
    }

    #[instrument(skip(self))]
    async fn video_restore(&self, video_id: u64) -> RawResponse {
        self.signed_get("video.restore", video_id_params(video_id))
            .await
    }

    #[instrument(skip(self))]
    async fn image_get(&self, video_id: u64, size: &str) -> RawResponse {
        let params = image_get_params(video_id, size)?;
        self.signed_get("image.get", params).await
    }
}
