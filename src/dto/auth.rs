use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims carried by a session token. `sub` is the user id.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
