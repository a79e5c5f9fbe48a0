use super::LetvCloudConnector;
use crate::cloud::converters::play_interface_params;
use crate::core::{
    kernel::{encode, ParameterSet, RestClient},
    traits::PlayerEmbed,
    types::{PlayInterface, PlayerInterfaceType},
};
use tracing::warn;

pub const PLAYER_PAGE_URL: &str = "http://yuntv.letv.com/bcloud.html";
pub const PLAYER_SCRIPT_URL: &str = "http://yuntv.letv.com/bcloud.js";
pub const PLAYER_SWF_URL: &str = "http://yuntv.letv.com/bcloud.swf";

pub const DEFAULT_PLAYER_WIDTH: u32 = 800;
pub const DEFAULT_PLAYER_HEIGHT: u32 = 450;

impl<R: RestClient> PlayerEmbed for LetvCloudConnector<R> {
    fn video_get_play_interface(&self, request: &PlayInterface) -> String {
        render_play_interface(request)
    }
}

/// Render the player embed code for the requested interface type
pub fn render_play_interface(request: &PlayInterface) -> String {
    let params = play_interface_params(request);

    match request.interface_type {
        PlayerInterfaceType::Url => format!("{}?{}", PLAYER_PAGE_URL, encode(&params)),
        PlayerInterfaceType::Js => format!(
            "<script type=\"text/javascript\">var letvcloud_player_conf = {};</script>\
             <script type=\"text/javascript\" src=\"{}\"></script>",
            to_json_string(&params),
            PLAYER_SCRIPT_URL
        ),
        PlayerInterfaceType::Flash => format!("{}?{}", PLAYER_SWF_URL, encode(&params)),
        PlayerInterfaceType::Html => {
            let width = request
                .width
                .filter(|w| *w > 0)
                .unwrap_or(DEFAULT_PLAYER_WIDTH);
            let height = request
                .height
                .filter(|h| *h > 0)
                .unwrap_or(DEFAULT_PLAYER_HEIGHT);
            format!(
                "<embed src=\"{}\" allowFullScreen=\"true\" quality=\"high\" width=\"{}\" \
                 height=\"{}\" align=\"middle\" allowScriptAccess=\"always\" flashvars=\"{}\" \
                 type=\"application/x-shockwave-flash\"></embed>",
                PLAYER_SWF_URL,
                width,
                height,
                encode(&params)
            )
        }
    }
}

/// JSON form of the player parameters; empty when serialization fails
///
/// The object lands inside a `<script>` element, so markup-significant
/// characters are emitted as `\u` escapes and can never close the element.
fn to_json_string(params: &ParameterSet) -> String {
    match serde_json::to_string(params) {
        Ok(json) => escape_for_script(&json),
        Err(e) => {
            warn!("Failed to serialize player parameters: {}", e);
            String::new()
        }
    }
}

fn escape_for_script(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}
