use crate::core::kernel::params::ParameterSet;
use md5::{Digest, Md5};
use secrecy::{ExposeSecret, Secret};

/// Name of the query field carrying the request signature
pub const SIGN_FIELD: &str = "sign";

/// Signer trait for request authentication
///
/// Implementations compute a signature over every field currently in the
/// parameter set. The signature field itself is never part of the input.
pub trait Signer: Send + Sync {
    /// Compute the signature for the given parameters
    fn signature(&self, params: &ParameterSet) -> String;

    /// Sign in place: drop any stale signature, then insert a fresh one
    fn sign(&self, params: &mut ParameterSet) {
        params.remove(SIGN_FIELD);
        let signature = self.signature(params);
        params.insert(SIGN_FIELD, signature);
    }
}

/// MD5 signer for the cloud `open.php` API
pub struct Md5Signer {
    secret_key: Secret<String>,
}

impl Md5Signer {
    /// Create a new signer
    ///
    /// # Arguments
    /// * `secret_key` - Shared secret issued alongside the account identifier
    pub fn new(secret_key: String) -> Self {
        Self {
            secret_key: Secret::new(secret_key),
        }
    }
}

impl std::fmt::Debug for Md5Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Md5Signer").finish_non_exhaustive()
    }
}

impl Signer for Md5Signer {
    fn signature(&self, params: &ParameterSet) -> String {
        sign(params, self.secret_key.expose_secret())
    }
}

/// Sign a parameter set with the given secret
///
/// Keys are taken in ascending byte order, each immediately followed by its
/// value, with the secret appended last. The MD5 digest of that string is
/// returned as lowercase hex.
#[must_use]
pub fn sign(params: &ParameterSet, secret: &str) -> String {
    let mut hasher = Md5::new();
    for (key, value) in params.iter() {
        hasher.update(key.as_bytes());
        hasher.update(value.as_bytes());
    }
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_get_params() -> ParameterSet {
        [
            ("api", "video.get"),
            ("video_id", "123"),
            ("user_unique", "u1"),
            ("timestamp", "1000"),
            ("ver", "2.0"),
            ("format", "json"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_known_signature() {
        // md5("apivideo.getformatjsontimestamp1000user_uniqueu1ver2.0video_id123k")
        let signature = sign(&video_get_params(), "k");
        assert_eq!(signature, "1e7f17968f09e19b2f86dca0800f3ec6");
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signature = sign(&video_get_params(), "k");
        assert_eq!(signature.len(), 32);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_deterministic() {
        let params = video_get_params();
        assert_eq!(sign(&params, "k"), sign(&params, "k"));
        assert_eq!(sign(&params.clone(), "k"), sign(&params, "k"));
    }

    #[test]
    fn test_any_change_alters_signature() {
        let base = sign(&video_get_params(), "k");

        let mut changed_value = video_get_params();
        changed_value.insert("video_id", "124");
        assert_ne!(sign(&changed_value, "k"), base);

        let mut changed_key = video_get_params();
        let value = changed_key.remove("video_id").unwrap();
        changed_key.insert("video_ids", value);
        assert_ne!(sign(&changed_key, "k"), base);

        assert_ne!(sign(&video_get_params(), "other"), base);
    }

    #[test]
    fn test_omitted_optional_field_alters_signature() {
        let minimal = video_get_params();
        let mut with_tag = video_get_params();
        with_tag.insert("tag", "");
        assert_ne!(sign(&minimal, "k"), sign(&with_tag, "k"));
    }

    #[test]
    fn test_empty_params_sign_secret_only() {
        assert_eq!(
            sign(&ParameterSet::new(), "k"),
            "8ce4b16b22b58894aa86c421e8759df3"
        );
    }

    #[test]
    fn test_signer_inserts_sign_field() {
        let signer = Md5Signer::new("k".to_string());
        let mut params = video_get_params();
        signer.sign(&mut params);
        assert_eq!(params.get(SIGN_FIELD), Some("1e7f17968f09e19b2f86dca0800f3ec6"));
    }

    #[test]
    fn test_signer_ignores_stale_sign_field() {
        let signer = Md5Signer::new("k".to_string());
        let mut params = video_get_params();
        params.insert(SIGN_FIELD, "stale");
        signer.sign(&mut params);
        assert_eq!(params.get(SIGN_FIELD), Some("1e7f17968f09e19b2f86dca0800f3ec6"));

        // re-signing an already signed set is stable
        signer.sign(&mut params);
        assert_eq!(params.get(SIGN_FIELD), Some("1e7f17968f09e19b2f86dca0800f3ec6"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let signer = Md5Signer::new("super-secret".to_string());
        assert!(!format!("{:?}", signer).contains("super-secret"));
    }
}
