use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::likes::{LikeList, to_like_response},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    services::{
        like_service::{self, user_not_found},
        user_service,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/{user_id}/likes", get(list_liked_freets))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/likes",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Likes left by the user", body = ApiResponse<LikeList>),
        (status = 404, description = "User not found")
    ),
    tag = "Likes"
)]
pub async fn list_liked_freets(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<LikeList>>> {
    let not_found = || AppError::NotFound(user_not_found(&user_id));

    let id = Uuid::parse_str(&user_id).map_err(|_| not_found())?;
    if user_service::find_user(&state, id).await?.is_none() {
        return Err(not_found());
    }

    let liked = like_service::find_liked_freets(&state, id).await?;
    let data: LikeList = liked.iter().map(|l| to_like_response(&l.like)).collect();
    let meta = Meta::total(data.items.len() as u64);

    Ok(Json(ApiResponse::success("OK", data, Some(meta))))
}
