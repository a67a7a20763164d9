use axum::{extract::FromRequestParts, http::header};
use sea_orm::EntityTrait;

use crate::{
    entity::accounts, error::AppError, security::token::decode_token, state::AppState,
};

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_DEALER: &str = "dealer";

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub account_id: i64,
    pub role: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

pub fn ensure_role(user: &AuthUser, role: &str) -> Result<(), AppError> {
    if user.role != role {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

pub fn ensure_admin(user: &AuthUser) -> Result<(), AppError> {
    ensure_role(user, ROLE_ADMIN)
}

pub fn ensure_dealer(user: &AuthUser) -> Result<(), AppError> {
    ensure_role(user, ROLE_DEALER)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::BadRequest("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::BadRequest("Invalid Authorization scheme".into()))?
            .trim();

        let claims = decode_token(&state.auth, token)?;

        let account_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest("Invalid account id in token".into()))?;

        // A disabled account loses access even with an unexpired token.
        let account = accounts::Entity::find_by_id(account_id)
            .one(&state.orm)
            .await?;
        if !account.is_some_and(|a| a.enabled) {
            tracing::debug!(account_id, "token for disabled or missing account");
            return Err(AppError::Forbidden);
        }

        Ok(AuthUser {
            account_id,
            role: claims.role,
        })
    }
}
