use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Dealer;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAdminRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub require_login_email_confirmation: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterDealerRequest {
    pub username: String,
    pub password: String,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDealerRequest {
    pub company_name: Option<String>,
    pub address: Option<String>,
    /// `null` or a blank string clears the phone.
    #[serde(default, deserialize_with = "super::nullable")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetEnabledRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DealerList {
    pub items: Vec<Dealer>,
}
