use crate::abstract_trait::auth::AuthPolicyTrait;
use axum::http::HeaderMap;
use shared::config::MASTER_KEY_HEADER;

/// Static shared-secret check against the `X-MASTER-KEY` header.
#[derive(Clone)]
pub struct MasterKeyPolicy {
    key: String,
}

impl MasterKeyPolicy {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl AuthPolicyTrait for MasterKeyPolicy {
    fn authorize(&self, headers: &HeaderMap) -> bool {
        headers
            .get(MASTER_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value == self.key)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_key(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(MASTER_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        headers
    }

    #[test]
    fn accepts_matching_key() {
        let policy = MasterKeyPolicy::new("secret");
        assert!(policy.authorize(&headers_with_key("secret")));
    }

    #[test]
    fn rejects_wrong_key() {
        let policy = MasterKeyPolicy::new("secret");
        assert!(!policy.authorize(&headers_with_key("other")));
    }

    #[test]
    fn rejects_missing_header() {
        let policy = MasterKeyPolicy::new("secret");
        assert!(!policy.authorize(&HeaderMap::new()));
    }
}
