use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::{
    dto::auth::Claims,
    error::{AppError, AppResult},
};

/// Sign a session token for `user_id`, valid for `ttl`.
pub fn issue_token(secret: &str, user_id: Uuid, ttl: Duration) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

/// Verify a session token and return the user id it was issued for.
pub fn verify_token(secret: &str, token: &str) -> AppResult<Uuid> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Forbidden("Invalid or expired token".into()))?;

    Uuid::parse_str(&decoded.claims.sub)
        .map_err(|_| AppError::Forbidden("Invalid user id in token".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_same_user() {
        let user_id = Uuid::new_v4();
        let token = issue_token("secret", user_id, Duration::hours(1)).unwrap();
        assert_eq!(verify_token("secret", &token).unwrap(), user_id);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = issue_token("secret", Uuid::new_v4(), Duration::hours(1)).unwrap();
        assert!(matches!(
            verify_token("other", &token),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let token = issue_token("secret", Uuid::new_v4(), Duration::hours(-2)).unwrap();
        assert!(verify_token("secret", &token).is_err());
    }
}
