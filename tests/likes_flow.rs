mod common;

use std::collections::HashSet;

use freet_likes_api::{
    entity::{Freets, Users},
    error::AppError,
    services::like_service,
};
use sea_orm::EntityTrait;
use uuid::Uuid;

use common::{create_freet, create_user, setup_state};

#[tokio::test]
async fn added_like_is_found() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, "alice").await?;
    let freet = create_freet(&state, user).await?;

    assert!(!like_service::find_like(&state, user, freet).await?);

    let like = like_service::add_like(&state, user, freet).await?;
    assert_eq!(like.user_id, user);
    assert_eq!(like.freet_id, freet);
    assert!(like_service::find_like(&state, user, freet).await?);
    Ok(())
}

#[tokio::test]
async fn deleted_like_is_gone() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, "alice").await?;
    let freet = create_freet(&state, user).await?;
    like_service::add_like(&state, user, freet).await?;

    assert!(like_service::delete_like(&state, user, freet).await?);
    assert!(!like_service::find_like(&state, user, freet).await?);
    Ok(())
}

#[tokio::test]
async fn deleting_missing_like_leaves_store_unchanged() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    let freet = create_freet(&state, alice).await?;
    like_service::add_like(&state, alice, freet).await?;

    assert!(!like_service::delete_like(&state, bob, freet).await?);
    assert_eq!(like_service::count_likes(&state, freet).await?, 1);
    assert!(like_service::find_like(&state, alice, freet).await?);
    Ok(())
}

#[tokio::test]
async fn liking_missing_freet_is_not_found_and_writes_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, "alice").await?;
    let missing = Uuid::new_v4();

    let err = like_service::add_like(&state, user, missing)
        .await
        .expect_err("missing freet must fail");
    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(like_service::count_likes(&state, missing).await?, 0);
    Ok(())
}

#[tokio::test]
async fn duplicate_like_is_rejected_by_store() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let user = create_user(&state, "alice").await?;
    let freet = create_freet(&state, user).await?;
    like_service::add_like(&state, user, freet).await?;

    let err = like_service::add_like(&state, user, freet)
        .await
        .expect_err("second like must fail");
    assert!(matches!(err, AppError::Forbidden(msg) if msg == like_service::ALREADY_LIKED));
    assert_eq!(like_service::count_likes(&state, freet).await?, 1);
    Ok(())
}

#[tokio::test]
async fn users_who_liked_are_those_of_the_freet_only() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    let carol = create_user(&state, "carol").await?;
    let first = create_freet(&state, alice).await?;
    let second = create_freet(&state, alice).await?;

    like_service::add_like(&state, alice, first).await?;
    like_service::add_like(&state, bob, first).await?;
    like_service::add_like(&state, carol, second).await?;

    let likes = like_service::find_users_who_liked(&state, first).await?;
    assert_eq!(likes.len(), 2);
    assert!(likes.iter().all(|l| l.like.freet_id == first));

    let users: HashSet<_> = likes
        .iter()
        .map(|l| {
            let user = l.user.as_ref().expect("user populated");
            assert_eq!(user.id, l.like.user_id);
            user.username.clone()
        })
        .collect();
    assert_eq!(users, HashSet::from(["alice".to_string(), "bob".to_string()]));
    Ok(())
}

#[tokio::test]
async fn liked_freets_are_those_of_the_user_only() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    let first = create_freet(&state, bob).await?;
    let second = create_freet(&state, bob).await?;
    let third = create_freet(&state, bob).await?;

    like_service::add_like(&state, alice, first).await?;
    like_service::add_like(&state, alice, second).await?;
    like_service::add_like(&state, bob, third).await?;

    let liked = like_service::find_liked_freets(&state, alice).await?;
    let freets: HashSet<_> = liked
        .iter()
        .map(|l| {
            assert_eq!(l.like.user_id, alice);
            l.freet.as_ref().expect("freet populated").id
        })
        .collect();
    assert_eq!(freets, HashSet::from([first, second]));
    Ok(())
}

#[tokio::test]
async fn liking_as_missing_user_is_not_found_and_writes_nothing() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let author = create_user(&state, "alice").await?;
    let freet = create_freet(&state, author).await?;
    let ghost = Uuid::new_v4();

    let err = like_service::add_like(&state, ghost, freet)
        .await
        .expect_err("unknown user must fail");
    assert!(matches!(err, AppError::NotFound(msg) if msg == like_service::user_not_found(&ghost.to_string())));
    assert_eq!(like_service::count_likes(&state, freet).await?, 0);
    Ok(())
}

#[tokio::test]
async fn deleting_freet_removes_its_likes() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    let freet = create_freet(&state, alice).await?;
    like_service::add_like(&state, alice, freet).await?;
    like_service::add_like(&state, bob, freet).await?;

    Freets::delete_by_id(freet).exec(&state.orm).await?;

    assert_eq!(like_service::count_likes(&state, freet).await?, 0);
    assert!(like_service::find_liked_freets(&state, bob).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_user_removes_their_likes() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let alice = create_user(&state, "alice").await?;
    let bob = create_user(&state, "bob").await?;
    let freet = create_freet(&state, alice).await?;
    like_service::add_like(&state, alice, freet).await?;
    like_service::add_like(&state, bob, freet).await?;

    Users::delete_by_id(bob).exec(&state.orm).await?;

    assert!(like_service::find_liked_freets(&state, bob).await?.is_empty());
    let remaining = like_service::find_users_who_liked(&state, freet).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].like.user_id, alice);
    Ok(())
}
