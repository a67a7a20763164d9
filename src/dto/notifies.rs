use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Notify;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNotifyRequest {
    pub title: String,
    pub message: Option<String>,
    pub time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "type")]
    pub notify_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotifyList {
    pub items: Vec<Notify>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UnreadCount {
    pub unread: u64,
}
