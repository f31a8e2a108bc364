use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::{
    entity::{Freets, freets},
    error::AppResult,
    state::AppState,
};

pub async fn find_freet(state: &AppState, freet_id: Uuid) -> AppResult<Option<freets::Model>> {
    let freet = Freets::find_by_id(freet_id).one(&state.orm).await?;
    Ok(freet)
}
