#![allow(dead_code)]

use chrono::{Duration, Utc};
use freet_likes_api::{
    db::{create_orm_conn, run_migrations},
    entity::{freets::ActiveModel as FreetActive, users::ActiveModel as UserActive},
    services::auth_service::issue_token,
    state::AppState,
};
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret";

// Each call gets its own empty in-memory database with the real migrations applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_orm_conn("sqlite::memory:").await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm, JWT_SECRET))
}

pub async fn create_user(state: &AppState, username: &str) -> anyhow::Result<Uuid> {
    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        password_hash: Set("dummy".into()),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(&state.orm)
    .await?;

    Ok(user.id)
}

pub async fn create_freet(state: &AppState, author_id: Uuid) -> anyhow::Result<Uuid> {
    let freet = FreetActive {
        id: Set(Uuid::new_v4()),
        author_id: Set(author_id),
        content: Set("a freet".into()),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(&state.orm)
    .await?;

    Ok(freet.id)
}

pub fn token_for(user_id: Uuid) -> String {
    issue_token(JWT_SECRET, user_id, Duration::hours(1)).expect("token")
}
