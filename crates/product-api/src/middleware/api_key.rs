use crate::abstract_trait::auth::DynAuthPolicy;
use axum::{
    body::Body, extract::Extension, http::Request, middleware::Next, response::IntoResponse,
};
use shared::errors::HttpError;
use tracing::warn;

pub async fn auth_middleware(
    Extension(policy): Extension<DynAuthPolicy>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    if !policy.authorize(req.headers()) {
        warn!(
            "Rejected request to {} with missing or invalid master key",
            req.uri().path()
        );

        return Err(HttpError::Unauthorized(
            "You are not authorized to access this resource.".to_string(),
        ));
    }

    Ok(next.run(req).await)
}
