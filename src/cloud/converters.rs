use crate::core::errors::CloudError;
use crate::core::kernel::ParameterSet;
use crate::core::types::{
    DataTotalDate, DataVideoDate, DataVideoHour, PlayInterface, VideoList, VideoUpdate,
    VideoUploadFlash, VideoUploadInit,
};

pub const MAX_PAGE_SIZE: u32 = 100;
pub const MAX_BATCH_DELETE: usize = 50;

/// Insert a text field unless it is absent or empty
fn insert_text(params: &mut ParameterSet, key: &str, value: Option<&String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.insert(key, value.as_str());
    }
}

fn bool_flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

fn insert_paging(
    params: &mut ParameterSet,
    index: Option<u32>,
    size: Option<u32>,
) -> Result<(), CloudError> {
    if index == Some(0) {
        return Err(CloudError::InvalidParameters(
            "index starts at 1".to_string(),
        ));
    }
    if let Some(size) = size {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(CloudError::InvalidParameters(format!(
                "size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, size
            )));
        }
    }
    params.insert_opt("index", index).insert_opt("size", size);
    Ok(())
}

fn require(value: &str, name: &str) -> Result<(), CloudError> {
    if value.is_empty() {
        Err(CloudError::InvalidParameters(format!(
            "{} must not be empty",
            name
        )))
    } else {
        Ok(())
    }
}

pub fn video_upload_init_params(request: &VideoUploadInit) -> Result<ParameterSet, CloudError> {
    require(&request.video_name, "video_name")?;

    let mut params = ParameterSet::new();
    params.insert("video_name", request.video_name.as_str());
    insert_text(&mut params, "client_ip", request.client_ip.as_ref());
    params.insert_opt("file_size", request.file_size);
    Ok(params)
}

pub fn video_upload_flash_params(request: &VideoUploadFlash) -> Result<ParameterSet, CloudError> {
    require(&request.video_name, "video_name")?;

    let mut params = ParameterSet::new();
    params.insert("video_name", request.video_name.as_str());
    insert_text(&mut params, "js_callback", request.js_callback.as_ref());
    params
        .insert_opt("flash_width", request.flash_width)
        .insert_opt("flash_height", request.flash_height);
    insert_text(&mut params, "client_ip", request.client_ip.as_ref());
    Ok(params)
}

pub fn video_update_params(request: &VideoUpdate) -> ParameterSet {
    let mut params = ParameterSet::new();
    params.insert("video_id", request.video_id.to_string());
    insert_text(&mut params, "video_name", request.video_name.as_ref());
    insert_text(&mut params, "video_desc", request.video_desc.as_ref());
    insert_text(&mut params, "tag", request.tag.as_ref());
    params.insert_opt("is_pay", request.is_pay.map(bool_flag));
    params
}

pub fn video_list_params(request: &VideoList) -> Result<ParameterSet, CloudError> {
    let mut params = ParameterSet::new();
    insert_paging(&mut params, request.index, request.size)?;
    params.insert_opt("status", request.status.map(|s| s.code()));
    Ok(params)
}

pub fn video_id_params(video_id: u64) -> ParameterSet {
    let mut params = ParameterSet::new();
    params.insert("video_id", video_id.to_string());
    params
}

/// Ids are joined with `-`, the separator the batch endpoint expects
pub fn video_del_batch_params(video_ids: &[u64]) -> Result<ParameterSet, CloudError> {
    if video_ids.is_empty() || video_ids.len() > MAX_BATCH_DELETE {
        return Err(CloudError::InvalidParameters(format!(
            "batch delete takes 1 to {} ids, got {}",
            MAX_BATCH_DELETE,
            video_ids.len()
        )));
    }

    let list = video_ids
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join("-");

    let mut params = ParameterSet::new();
    params.insert("video_id_list", list);
    Ok(params)
}

pub fn image_get_params(video_id: u64, size: &str) -> Result<ParameterSet, CloudError> {
    require(size, "size")?;

    let mut params = video_id_params(video_id);
    params.insert("size", size);
    Ok(params)
}

pub fn data_video_hour_params(request: &DataVideoHour) -> Result<ParameterSet, CloudError> {
    require(&request.date, "date")?;
    if let Some(hour) = request.hour.filter(|h| *h > 23) {
        return Err(CloudError::InvalidParameters(format!(
            "hour must be between 0 and 23, got {}",
            hour
        )));
    }

    let mut params = ParameterSet::new();
    params
        .insert("date", request.date.as_str())
        .insert_opt("hour", request.hour)
        .insert_opt("video_id", request.video_id);
    insert_paging(&mut params, request.index, request.size)?;
    Ok(params)
}

pub fn data_video_date_params(request: &DataVideoDate) -> Result<ParameterSet, CloudError> {
    require(&request.start_date, "start_date")?;
    require(&request.end_date, "end_date")?;

    let mut params = ParameterSet::new();
    params
        .insert("start_date", request.start_date.as_str())
        .insert("end_date", request.end_date.as_str())
        .insert_opt("video_id", request.video_id);
    insert_paging(&mut params, request.index, request.size)?;
    Ok(params)
}

pub fn data_total_date_params(request: &DataTotalDate) -> Result<ParameterSet, CloudError> {
    require(&request.start_date, "start_date")?;
    require(&request.end_date, "end_date")?;

    let mut params = ParameterSet::new();
    params
        .insert("start_date", request.start_date.as_str())
        .insert("end_date", request.end_date.as_str());
    insert_paging(&mut params, request.index, request.size)?;
    Ok(params)
}

/// Player parameters; these are rendered into embed code, never signed
pub fn play_interface_params(request: &PlayInterface) -> ParameterSet {
    let mut params = ParameterSet::new();
    params
        .insert("uu", request.uu.as_str())
        .insert("vu", request.vu.as_str());
    insert_text(&mut params, "pu", request.pu.as_ref());
    params
        .insert_opt("auto_play", request.auto_play.map(bool_flag))
        .insert_opt("width", request.width.filter(|w| *w > 0))
        .insert_opt("height", request.height.filter(|h| *h > 0));
    params
}
