use super::LetvCloudConnector;
use crate::cloud::converters::{
    data_total_date_params, data_video_date_params, data_video_hour_params,
};
use crate::core::{
    kernel::RestClient,
    traits::{DataReporter, RawResponse},
    types::{DataTotalDate, DataVideoDate, DataVideoHour},
};
use async_trait::async_trait;
use tracing::instrument;

#[async_trait]
impl<R: RestClient> DataReporter for LetvCloudConnector<R> {
    #[instrument(skip(self), fields(date = %request.date))]
    async fn data_video_hour(&self, request: &DataVideoHour) -> RawResponse {
        let params = data_video_hour_params(request)?;
        self.signed_get("data.video.hour", params).await
    }

    #[instrument(skip(self), fields(start = %request.start_date, end = %request.end_date))]
    async fn data_video_date(&self, request: &DataVideoDate) -> RawResponse {
        let params = data_video_date_params(request)?;
        self.signed_get("data.video.date", params).await
    }

    #[instrument(skip(self), fields(start = %request.start_date, end = %request.end_date))]
    async fn data_total_date(&self, request: &DataTotalDate) -> RawResponse {
        let params = data_total_date_params(request)?;
        self.signed_get("data.total.date", params).await
    }
}
