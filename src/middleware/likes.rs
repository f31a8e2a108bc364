//! Preconditions for the like routes.
//!
//! Each guard either returns the validated value the next step needs or an
//! [`AppError`] that ends the request. Handlers run them in order and pass
//! the results forward explicitly.

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::Session,
    services::{
        freet_service,
        like_service::{self, ALREADY_LIKED, NOT_LIKED, freet_not_found},
    },
    state::AppState,
};

pub const NOT_LOGGED_IN: &str = "You must be logged in to complete this action.";
pub const NOT_SESSION_USER: &str = "You can only like or unlike freets as yourself.";

/// The path id must be a well-formed UUID naming an existing freet.
pub async fn freet_exists(state: &AppState, raw_freet_id: &str) -> AppResult<Uuid> {
    let Ok(freet_id) = Uuid::parse_str(raw_freet_id) else {
        return Err(AppError::NotFound(freet_not_found(raw_freet_id)));
    };

    match freet_service::find_freet(state, freet_id).await? {
        Some(_) => Ok(freet_id),
        None => Err(AppError::NotFound(freet_not_found(raw_freet_id))),
    }
}

pub fn user_authenticated(session: &Session) -> AppResult<Uuid> {
    session
        .user_id
        .ok_or_else(|| AppError::Forbidden(NOT_LOGGED_IN.into()))
}

/// The `:userId` path segment names the liker and must be the session user.
pub fn acting_user(session_user_id: Uuid, raw_user_id: &str) -> AppResult<Uuid> {
    match Uuid::parse_str(raw_user_id) {
        Ok(user_id) if user_id == session_user_id => Ok(user_id),
        _ => Err(AppError::Forbidden(NOT_SESSION_USER.into())),
    }
}

pub async fn can_like(state: &AppState, user_id: Uuid, freet_id: Uuid) -> AppResult<()> {
    if like_service::find_like(state, user_id, freet_id).await? {
        return Err(AppError::Forbidden(ALREADY_LIKED.into()));
    }
    Ok(())
}

pub async fn can_unlike(state: &AppState, user_id: Uuid, freet_id: Uuid) -> AppResult<()> {
    if !like_service::find_like(state, user_id, freet_id).await? {
        return Err(AppError::Forbidden(NOT_LIKED.into()));
    }
    Ok(())
}
