use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatistics {
    pub user_count: i64,
    pub monthly_active_user_count: i64,
    pub premium: PremiumStatistics,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PremiumStatistics {
    pub user_count: i64,
    pub user_without_subscription_count: i64,
    pub user_with_subscription_count: i64,
    pub active_subscription_count: i64,
    pub active_non_expiring_subscription_count: i64,
    pub active_expiring_subscription_count: i64,
    pub suspended_subscription_count: i64,
    pub expired_subscription_count: i64,
    pub canceled_subscription_count: i64,
}

// Requests

#[derive(Default, Debug, Clone, Copy)]
pub struct GetStatistics;

impl Request for GetStatistics {
    type Data = ();
    type Response = UserStatistics;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/statistics".into()
    }
}
