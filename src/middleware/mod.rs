pub mod auth;
pub mod likes;
