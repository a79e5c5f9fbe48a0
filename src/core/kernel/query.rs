use crate::core::kernel::params::ParameterSet;

/// Render parameters as a `key=value&...` query string
///
/// Form encoding turns spaces into `+` and literal `+` into `%2B`, so every
/// `+` left in the output stands for a space. The API rejects `+` for spaces,
/// hence the rewrite to `%20`.
#[must_use]
pub fn encode(params: &ParameterSet) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();

    if encoded.contains('+') {
        encoded.replace('+', "%20")
    } else {
        encoded
    }
}

/// Join an endpoint and an encoded query string into a request URL
#[must_use]
pub fn build_url(base_url: &str, params: &ParameterSet) -> String {
    let query = encode(params);
    if query.is_empty() {
        base_url.to_string()
    } else if base_url.contains('?') {
        format!("{}&{}", base_url, query)
    } else {
        format!("{}?{}", base_url, query)
    }
}
