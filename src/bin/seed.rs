use argon2::{Argon2, PasswordHasher};
use chrono::{Duration, Utc};
use freet_likes_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{
        Users,
        freets::ActiveModel as FreetActive,
        users::{ActiveModel as UserActive, Column as UserCol},
    },
    services::auth_service::issue_token,
};
use password_hash::{SaltString, rand_core::OsRng};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let user_id = ensure_user(&orm, "demo", "demo123").await?;
    let freet_id = seed_freet(&orm, user_id, "Hello from the seed script").await?;
    let token = issue_token(&config.jwt_secret, user_id, Duration::hours(24))?;

    println!("Seed completed. User ID: {user_id}, Freet ID: {freet_id}");
    println!("Authorization: Bearer {token}");
    Ok(())
}

async fn ensure_user(
    orm: &DatabaseConnection,
    username: &str,
    password: &str,
) -> anyhow::Result<Uuid> {
    if let Some(user) = Users::find()
        .filter(UserCol::Username.eq(username))
        .one(orm)
        .await?
    {
        return Ok(user.id);
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();

    let user = UserActive {
        id: Set(Uuid::new_v4()),
        username: Set(username.to_string()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(orm)
    .await?;

    Ok(user.id)
}

async fn seed_freet(orm: &DatabaseConnection, author_id: Uuid, content: &str) -> anyhow::Result<Uuid> {
    let freet = FreetActive {
        id: Set(Uuid::new_v4()),
        author_id: Set(author_id),
        content: Set(content.to_string()),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(orm)
    .await?;

    Ok(freet.id)
}
