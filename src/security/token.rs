use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    config::AuthSettings,
    dto::auth::Claims,
    error::{AppError, AppResult},
};

pub fn issue_token(settings: &AuthSettings, account_id: i64, role: &str) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::hours(settings.token_ttl_hours))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: account_id.to_string(),
        role: role.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(settings.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

pub fn decode_token(settings: &AuthSettings, token: &str) -> AppResult<Claims> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::BadRequest("Invalid or expired token".into()))?;
    Ok(decoded.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(secret: &str) -> AuthSettings {
        AuthSettings {
            jwt_secret: secret.into(),
            token_ttl_hours: 1,
        }
    }

    #[test]
    fn issued_token_decodes_to_same_subject() {
        let s = settings("unit-secret");
        let token = issue_token(&s, 42, "dealer").unwrap();
        let claims = decode_token(&s, &token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "dealer");
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token(&settings("one"), 1, "admin").unwrap();
        assert!(matches!(
            decode_token(&settings("two"), &token),
            Err(AppError::BadRequest(_))
        ));
    }
}
