use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::likes::{LikeList, LikeResponse, to_like_response},
    error::{AppError, AppResult},
    middleware::{
        auth::Session,
        likes::{acting_user, can_like, can_unlike, freet_exists, user_authenticated},
    },
    response::{ApiResponse, Meta},
    services::like_service::{self, NOT_LIKED},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{freet_id}", get(list_likes))
        .route("/{freet_id}/{user_id}", post(like_freet).delete(unlike_freet))
}

#[utoipa::path(
    get,
    path = "/api/likes/{freet_id}",
    params(
        ("freet_id" = String, Path, description = "Freet ID")
    ),
    responses(
        (status = 200, description = "Likes on the freet", body = ApiResponse<LikeList>),
        (status = 404, description = "Freet not found")
    ),
    tag = "Likes"
)]
pub async fn list_likes(
    State(state): State<AppState>,
    Path(freet_id): Path<String>,
) -> AppResult<Json<ApiResponse<LikeList>>> {
    let freet_id = freet_exists(&state, &freet_id).await?;

    let likes = like_service::find_users_who_liked(&state, freet_id).await?;
    let data: LikeList = likes.iter().map(|l| to_like_response(&l.like)).collect();
    let meta = Meta::total(data.items.len() as u64);

    Ok(Json(ApiResponse::success("OK", data, Some(meta))))
}

#[utoipa::path(
    post,
    path = "/api/likes/{freet_id}/{user_id}",
    params(
        ("freet_id" = String, Path, description = "Freet ID"),
        ("user_id" = String, Path, description = "ID of the liking user, must be the session user")
    ),
    responses(
        (status = 201, description = "User successfully liked this freet", body = ApiResponse<LikeResponse>),
        (status = 403, description = "Not logged in or already liked"),
        (status = 404, description = "Freet not found, or session user does not exist")
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn like_freet(
    State(state): State<AppState>,
    session: Session,
    Path((freet_id, user_id)): Path<(String, String)>,
) -> AppResult<(StatusCode, Json<ApiResponse<LikeResponse>>)> {
    let freet_id = freet_exists(&state, &freet_id).await?;
    let session_user = user_authenticated(&session)?;
    let user_id = acting_user(session_user, &user_id)?;
    can_like(&state, user_id, freet_id).await?;

    let like = like_service::add_like(&state, user_id, freet_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "User successfully liked this freet.",
            to_like_response(&like),
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/likes/{freet_id}/{user_id}",
    params(
        ("freet_id" = String, Path, description = "Freet ID"),
        ("user_id" = String, Path, description = "ID of the unliking user, must be the session user")
    ),
    responses(
        (status = 201, description = "User successfully unliked this freet", body = ApiResponse<serde_json::Value>),
        (status = 403, description = "Not logged in or not yet liked"),
        (status = 404, description = "Freet not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Likes"
)]
pub async fn unlike_freet(
    State(state): State<AppState>,
    session: Session,
    Path((freet_id, user_id)): Path<(String, String)>,
) -> AppResult<(StatusCode, Json<ApiResponse<serde_json::Value>>)> {
    let freet_id = freet_exists(&state, &freet_id).await?;
    let session_user = user_authenticated(&session)?;
    let user_id = acting_user(session_user, &user_id)?;
    can_unlike(&state, user_id, freet_id).await?;

    // A concurrent unlike can win between the guard and the delete.
    if !like_service::delete_like(&state, user_id, freet_id).await? {
        return Err(AppError::Forbidden(NOT_LIKED.into()));
    }

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "User successfully unliked this freet.",
            serde_json::json!({}),
            Some(Meta::empty()),
        )),
    ))
}
