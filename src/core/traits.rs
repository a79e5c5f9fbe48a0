use crate::core::errors::CloudError;
use crate::core::types::{
    DataTotalDate, DataVideoDate, DataVideoHour, PlayInterface, VideoList, VideoUpdate,
    VideoUploadFlash, VideoUploadInit,
};
use async_trait::async_trait;
use std::path::Path;

/// Every call returns the raw response body; interpreting it per the
/// configured `format` is up to the caller.
pub type RawResponse = Result<Vec<u8>, CloudError>;

#[async_trait]
pub trait VideoUploader {
    /// Reserve an upload slot; the response carries the upload URL and token
    async fn video_upload_init(&self, request: &VideoUploadInit) -> RawResponse;

    /// Send a local file to an upload URL obtained from `video_upload_init`
    async fn video_upload(&self, video_file: &Path, upload_url: &str) -> RawResponse;

    /// Obtain a Flash uploader for browser-side uploads
    async fn video_upload_flash(&self, request: &VideoUploadFlash) -> RawResponse;

    /// Resume an interrupted upload
    async fn video_upload_resume(&self, token: &str) -> RawResponse;
}

#[async_trait]
pub trait VideoCatalog {
    async fn video_update(&self, request: &VideoUpdate) -> RawResponse;
    async fn video_list(&self, request: &VideoList) -> RawResponse;
    async fn video_get(&self, video_id: u64) -> RawResponse;
    async fn video_del(&self, video_id: u64) -> RawResponse;

    /// Delete up to 50 videos in one call
    async fn video_del_batch(&self, video_ids: &[u64]) -> RawResponse;

    async fn video_pause(&self, video_id: u64) -> RawResponse;
    async fn video_restore(&self, video_id: u64) -> RawResponse;

    /// Fetch screenshots of a video at the given size, e.g. `100_100`
    async fn image_get(&self, video_id: u64, size: &str) -> RawResponse;
}

#[async_trait]
pub trait DataReporter {
    async fn data_video_hour(&self, request: &DataVideoHour) -> RawResponse;
    async fn data_video_date(&self, request: &DataVideoDate) -> RawResponse;
    async fn data_total_date(&self, request: &DataTotalDate) -> RawResponse;
}

pub trait PlayerEmbed {
    /// Render player embed code; no request is sent
    fn video_get_play_interface(&self, request: &PlayInterface) -> String;
}

// Optional: composite trait for callers that want the whole API surface
pub trait CloudConnector: VideoUploader + VideoCatalog + DataReporter + PlayerEmbed {}
