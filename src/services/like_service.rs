use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use uuid::Uuid;

use crate::{
    entity::{
        Freets, Likes, Users, freets,
        likes::{ActiveModel as LikeActive, Column as LikeCol, Model as LikeModel},
        users,
    },
    error::{AppError, AppResult},
    services::freet_service,
    state::AppState,
};

pub const ALREADY_LIKED: &str = "User has already liked this freet.";
pub const NOT_LIKED: &str = "User has not liked this freet yet.";

pub fn freet_not_found(freet_id: &str) -> String {
    format!("Freet with freet ID {freet_id} does not exist.")
}

pub fn user_not_found(user_id: &str) -> String {
    format!("User with user ID {user_id} does not exist.")
}

/// A like together with the user who left it.
#[derive(Debug, Clone)]
pub struct PopulatedLike {
    pub like: LikeModel,
    pub user: Option<users::Model>,
}

/// A like together with the freet it targets.
#[derive(Debug, Clone)]
pub struct LikedFreet {
    pub like: LikeModel,
    pub freet: Option<freets::Model>,
}

/// Record that `user_id` liked `freet_id`.
///
/// The freet must exist. Duplicates are not checked up front; the unique
/// index on `(user_id, freet_id)` rejects them and the caller gets
/// [`AppError::Forbidden`]. A user id that no longer exists (stale session)
/// fails the foreign key and is reported as [`AppError::NotFound`].
pub async fn add_like(state: &AppState, user_id: Uuid, freet_id: Uuid) -> AppResult<LikeModel> {
    if freet_service::find_freet(state, freet_id).await?.is_none() {
        return Err(AppError::NotFound(freet_not_found(&freet_id.to_string())));
    }

    let like = LikeActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        freet_id: Set(freet_id),
        created_at: Set(Utc::now().fixed_offset()),
    };

    match like.insert(&state.orm).await {
        Ok(like) => {
            tracing::info!(like_id = %like.id, %user_id, %freet_id, "freet liked");
            Ok(like)
        }
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            tracing::warn!(%user_id, %freet_id, "duplicate like rejected");
            Err(AppError::Forbidden(ALREADY_LIKED.into()))
        }
        Err(err) if matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))) => {
            tracing::warn!(%user_id, %freet_id, "like rejected, user does not exist");
            Err(AppError::NotFound(user_not_found(&user_id.to_string())))
        }
        Err(err) => Err(err.into()),
    }
}

/// Remove the like of `user_id` on `freet_id`. Returns whether a row was deleted.
pub async fn delete_like(state: &AppState, user_id: Uuid, freet_id: Uuid) -> AppResult<bool> {
    let result = Likes::delete_many()
        .filter(LikeCol::UserId.eq(user_id))
        .filter(LikeCol::FreetId.eq(freet_id))
        .exec(&state.orm)
        .await?;

    let deleted = result.rows_affected > 0;
    if deleted {
        tracing::info!(%user_id, %freet_id, "freet unliked");
    }
    Ok(deleted)
}

pub async fn find_users_who_liked(
    state: &AppState,
    freet_id: Uuid,
) -> AppResult<Vec<PopulatedLike>> {
    let rows = Likes::find()
        .find_also_related(Users)
        .filter(LikeCol::FreetId.eq(freet_id))
        .order_by_asc(LikeCol::CreatedAt)
        .order_by_asc(LikeCol::Id)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(like, user)| PopulatedLike { like, user })
        .collect())
}

pub async fn find_liked_freets(state: &AppState, user_id: Uuid) -> AppResult<Vec<LikedFreet>> {
    let rows = Likes::find()
        .find_also_related(Freets)
        .filter(LikeCol::UserId.eq(user_id))
        .order_by_asc(LikeCol::CreatedAt)
        .order_by_asc(LikeCol::Id)
        .all(&state.orm)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(like, freet)| LikedFreet { like, freet })
        .collect())
}

pub async fn find_like(state: &AppState, user_id: Uuid, freet_id: Uuid) -> AppResult<bool> {
    let like = Likes::find()
        .filter(LikeCol::UserId.eq(user_id))
        .filter(LikeCol::FreetId.eq(freet_id))
        .one(&state.orm)
        .await?;
    Ok(like.is_some())
}

pub async fn count_likes(state: &AppState, freet_id: Uuid) -> AppResult<u64> {
    let total = Likes::find()
        .filter(LikeCol::FreetId.eq(freet_id))
        .count(&state.orm)
        .await?;
    Ok(total)
}
