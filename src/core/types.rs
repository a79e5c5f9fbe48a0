use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TypesError {
    #[error("Unknown video status code: {0}")]
    UnknownVideoStatus(i32),
    #[error("Unknown player interface type: {0}")]
    UnknownInterfaceType(String),
}

/// Processing state filter for video listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoStatus {
    All,
    PlayOk,
    Failed,
    Wait,
}

impl VideoStatus {
    /// Wire code used by the `status` parameter
    pub const fn code(self) -> i32 {
        match self {
            Self::All => 0,
            Self::PlayOk => 10,
            Self::Failed => 20,
            Self::Wait => 30,
        }
    }
}

impl TryFrom<i32> for VideoStatus {
    type Error = TypesError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::All),
            10 => Ok(Self::PlayOk),
            20 => Ok(Self::Failed),
            30 => Ok(Self::Wait),
            other => Err(TypesError::UnknownVideoStatus(other)),
        }
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Shape of the player embed returned by the play interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerInterfaceType {
    /// Player page URL
    Url,
    /// JavaScript configuration block plus loader
    Js,
    /// Flash movie URL
    Flash,
    /// `<embed>` HTML snippet
    Html,
}

impl PlayerInterfaceType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Js => "js",
            Self::Flash => "flash",
            Self::Html => "html",
        }
    }
}

impl FromStr for PlayerInterfaceType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "url" => Ok(Self::Url),
            "js" => Ok(Self::Js),
            "flash" => Ok(Self::Flash),
            "html" => Ok(Self::Html),
            _ => Err(TypesError::UnknownInterfaceType(s.to_string())),
        }
    }
}

impl fmt::Display for PlayerInterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters for `video.upload.init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUploadInit {
    pub video_name: String,
    pub client_ip: Option<String>,
    /// Size in bytes
    pub file_size: Option<u64>,
}

impl VideoUploadInit {
    pub fn new(video_name: impl Into<String>) -> Self {
        Self {
            video_name: video_name.into(),
            client_ip: None,
            file_size: None,
        }
    }
}

/// Parameters for `video.upload.flash`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUploadFlash {
    pub video_name: String,
    /// JavaScript function invoked once the upload finishes
    pub js_callback: Option<String>,
    pub flash_width: Option<u32>,
    pub flash_height: Option<u32>,
    pub client_ip: Option<String>,
}

impl VideoUploadFlash {
    pub fn new(video_name: impl Into<String>) -> Self {
        Self {
            video_name: video_name.into(),
            js_callback: None,
            flash_width: None,
            flash_height: None,
            client_ip: None,
        }
    }
}

/// Parameters for `video.update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUpdate {
    pub video_id: u64,
    pub video_name: Option<String>,
    pub video_desc: Option<String>,
    pub tag: Option<String>,
    /// Paid videos are authenticated on playback
    pub is_pay: Option<bool>,
}

impl VideoUpdate {
    pub fn new(video_id: u64) -> Self {
        Self {
            video_id,
            video_name: None,
            video_desc: None,
            tag: None,
            is_pay: None,
        }
    }
}

/// Parameters for `video.list`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoList {
    /// Page index, starting at 1
    pub index: Option<u32>,
    /// Page size, at most 100
    pub size: Option<u32>,
    pub status: Option<VideoStatus>,
}

/// Parameters for `data.video.hour`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataVideoHour {
    /// `yyyy-mm-dd`
    pub date: String,
    /// 0 to 23
    pub hour: Option<u8>,
    pub video_id: Option<u64>,
    pub index: Option<u32>,
    pub size: Option<u32>,
}

impl DataVideoHour {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            hour: None,
            video_id: None,
            index: None,
            size: None,
        }
    }
}

/// Parameters for `data.video.date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataVideoDate {
    pub start_date: String,
    pub end_date: String,
    /// Without it the report covers every video
    pub video_id: Option<u64>,
    pub index: Option<u32>,
    pub size: Option<u32>,
}

impl DataVideoDate {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            video_id: None,
            index: None,
            size: None,
        }
    }
}

/// Parameters for `data.total.date`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTotalDate {
    pub start_date: String,
    pub end_date: String,
    pub index: Option<u32>,
    pub size: Option<u32>,
}

impl DataTotalDate {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            index: None,
            size: None,
        }
    }
}

/// Inputs for rendering player embed code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayInterface {
    /// Account identifier of the video owner
    pub uu: String,
    /// Video identifier
    pub vu: String,
    pub interface_type: PlayerInterfaceType,
    /// Player identifier
    pub pu: Option<String>,
    pub auto_play: Option<bool>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl PlayInterface {
    pub fn new(
        uu: impl Into<String>,
        vu: impl Into<String>,
        interface_type: PlayerInterfaceType,
    ) -> Self {
        Self {
            uu: uu.into(),
            vu: vu.into(),
            interface_type,
            pu: None,
            auto_play: None,
            width: None,
            height: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_status_codes() {
        assert_eq!(VideoStatus::All.code(), 0);
        assert_eq!(VideoStatus::PlayOk.code(), 10);
        assert_eq!(VideoStatus::Failed.code(), 20);
        assert_eq!(VideoStatus::Wait.code(), 30);
        assert_eq!(VideoStatus::Wait.to_string(), "30");
    }

    #[test]
    fn test_video_status_from_code() {
        assert_eq!(VideoStatus::try_from(10), Ok(VideoStatus::PlayOk));
        assert_eq!(
            VideoStatus::try_from(-1),
            Err(TypesError::UnknownVideoStatus(-1))
        );
    }

    #[test]
    fn test_interface_type_parsing() {
        assert_eq!("url".parse(), Ok(PlayerInterfaceType::Url));
        assert_eq!("HTML".parse(), Ok(PlayerInterfaceType::Html));
        assert!("iframe".parse::<PlayerInterfaceType>().is_err());
        assert_eq!(PlayerInterfaceType::Flash.to_string(), "flash");
    }
}
