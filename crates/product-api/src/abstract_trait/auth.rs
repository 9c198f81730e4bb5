use axum::http::HeaderMap;
use std::sync::Arc;

pub type DynAuthPolicy = Arc<dyn AuthPolicyTrait + Send + Sync>;

/// Decides whether a request may reach the product handlers.
pub trait AuthPolicyTrait {
    fn authorize(&self, headers: &HeaderMap) -> bool;
}
