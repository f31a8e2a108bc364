use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::{
    entity::{Users, users},
    error::AppResult,
    state::AppState,
};

pub async fn find_user(state: &AppState, user_id: Uuid) -> AppResult<Option<users::Model>> {
    let user = Users::find_by_id(user_id).one(&state.orm).await?;
    Ok(user)
}
