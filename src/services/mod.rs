pub mod auth_service;
pub mod freet_service;
pub mod like_service;
pub mod user_service;
