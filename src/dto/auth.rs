use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Admin, Dealer};

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub role: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    /// Account id.
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

/// The authenticated principal. Exactly one of `admin` / `dealer` is present,
/// matching `role`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Profile {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<Admin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer: Option<Dealer>,
}
