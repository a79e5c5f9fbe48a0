use super::LetvCloudConnector;
use crate::cloud::converters::{video_upload_flash_params, video_upload_init_params};
use crate::core::{
    kernel::{ParameterSet, RestClient},
    traits::{RawResponse, VideoUploader},
    types::{VideoUploadFlash, VideoUploadInit},
};
use async_trait::async_trait;
use std::path::Path;
use tracing::instrument;

#[async_trait]
impl<R: RestClient> VideoUploader for LetvCloudConnector<R> {
    #[instrument(skip(self), fields(video_name = %request.video_name))]
    async fn video_upload_init(&self, request: &VideoUploadInit) -> RawResponse {
        let params = video_upload_init_params(request)?;
        self.signed_get("video.upload.init", params).await
    }

    /// The upload URL is opaque and already authorised, so nothing is signed here
    #[instrument(skip(self, upload_url), fields(file = %video_file.display()))]
    async fn video_upload(&self, video_file: &Path, upload_url: &str) -> RawResponse {
        self.rest.upload_file(video_file, upload_url).await
    }

    #[instrument(skip(self), fields(video_name = %request.video_name))]
    async fn video_upload_flash(&self, request: &VideoUploadFlash) -> RawResponse {
        let params = video_upload_flash_params(request)?;
        self.signed_get("video.upload.flash", params).await
    }

    #[instrument(skip(self, token))]
    async fn video_upload_resume(&self, token: &str) -> RawResponse {
        let mut params = ParameterSet::new();
        params.insert("token", token);
        self.signed_get("video.upload.resume", params).await
    }
}
