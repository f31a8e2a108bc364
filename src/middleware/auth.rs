use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header};
use uuid::Uuid;

use crate::{services::auth_service::verify_token, state::AppState};

/// Request context resolved from the `Authorization` header.
///
/// Extraction never fails: a missing, malformed or expired token yields an
/// anonymous session, and the guards decide what that means for the route.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user_id: Option<Uuid>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(Session::anonymous());
        };

        let token = auth_header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        let user_id = match token {
            Some(token) => match verify_token(&state.jwt_secret, token) {
                Ok(user_id) => Some(user_id),
                Err(err) => {
                    tracing::debug!(error = %err, "ignoring session token");
                    None
                }
            },
            None => {
                tracing::debug!("ignoring non-bearer authorization header");
                None
            }
        };

        Ok(Session { user_id })
    }
}
