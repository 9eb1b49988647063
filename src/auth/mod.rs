//! Admin gate over mutating endpoints.
//!
//! Authorization here is nothing more than allow-list membership: the web
//! layer in front of this service establishes the caller's external identity
//! (via the social-login provider) and forwards it in a header, which is
//! trusted as supplied. Score submission and registration creation are
//! deliberately ungated.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::state::AppState;

/// Header carrying the caller's external user identifier.
pub const ADMIN_HEADER: &str = "x-user-id";

pub fn is_admin(user_id: &str, allow_list: &[String]) -> bool {
    allow_list.iter().any(|id| id == user_id)
}

/// Extractor proving the caller is on the admin allow-list. Handlers taking
/// this reject everyone else with a fixed 403 before running.
pub struct AdminUser(pub String);

#[derive(Debug)]
pub struct Forbidden;

impl IntoResponse for Forbidden {
    fn into_response(self) -> Response {
        (
            StatusCode::FORBIDDEN,
            axum::Json(json!({ "error": "Forbidden" })),
        )
            .into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = Forbidden;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let user_id = parts
            .headers
            .get(ADMIN_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or(Forbidden)?;

        if is_admin(user_id, &state.config.admin_user_ids) {
            Ok(AdminUser(user_id.to_string()))
        } else {
            tracing::debug!(user_id, "admin check refused");
            Err(Forbidden)
        }
    }
}
