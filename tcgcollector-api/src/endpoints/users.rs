use super::ListResponse;
use crate::macros::{action, get_by_id, setter};
use crate::request::{Request, RequestData};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    pub display_name: String,
    pub email_address: String,
    pub is_email_address_verified: bool,
    pub has_api_access_token: bool,
    pub is_admin: bool,
    pub can_write_api_expansions: bool,
    pub can_read_api_cards: bool,
    pub can_read_api_cards_minimal: bool,
    pub can_write_api_cards: bool,
    pub can_read_api_card_variants: bool,
    pub can_read_api_card_variants_minimal: bool,
    pub can_write_api_card_variants: bool,
    pub can_write_api_card_variant_types: bool,
    pub can_write_api_card_illustrators: bool,
    pub can_write_api_card_lists: bool,
    pub can_read_api_statistics: bool,
    pub can_write_api_tcg_prices: bool,
    pub can_read_api_users: bool,
    pub is_premium_enabled: bool,
    pub is_premium_without_subscription_enabled: bool,
    pub is_premium_with_subscription_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_start_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_premium_start_date_time: Option<DateTime<Utc>>,
    pub last_visit_date_time: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub id: i64,
    pub user_id: i64,
    pub default_currency: String,
    pub language: String,
}

// Requests

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsers {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,
}

impl ListUsers {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt value page: u32);
    setter!(opt value page_size: u32);
    setter!(opt search: String);
}

impl Request for ListUsers {
    type Data = Self;
    type Response = ListResponse<User>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/users".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

get_by_id!(GetUser, User, "/api/users");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub display_name: String,
    pub email_address: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    user: NewUser,
}

impl CreateUser {
    pub fn new(
        display_name: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user: NewUser {
                display_name: display_name.into(),
                email_address: email_address.into(),
                password: password.into(),
            },
        }
    }
}

impl Request for CreateUser {
    type Data = NewUser;
    type Response = User;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/users".into()
    }

    fn data(&self) -> RequestData<&NewUser> {
        RequestData::Json(&self.user)
    }
}

/// Partial update; only the fields that are set are sent.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateUser {
    id: i64,
    update: UserUpdate,
}

impl UpdateUser {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            update: UserUpdate::default(),
        }
    }

    setter!(opt update.display_name: String);
    setter!(opt update.email_address: String);
    setter!(opt update.password: String);
}

impl Request for UpdateUser {
    type Data = UserUpdate;
    type Response = User;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/users/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&UserUpdate> {
        RequestData::Json(&self.update)
    }
}

action!(DELETE DeleteUser(id), "/api/users/{}");

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetCurrentUser;

impl GetCurrentUser {
    pub fn new() -> Self {
        Self
    }
}

impl Request for GetCurrentUser {
    type Data = ();
    type Response = User;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/users/me".into()
    }
}

#[derive(Default, Debug, Clone)]
pub struct UpdateCurrentUser {
    update: UserUpdate,
}

impl UpdateCurrentUser {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt update.display_name: String);
    setter!(opt update.email_address: String);
    setter!(opt update.password: String);
}

impl Request for UpdateCurrentUser {
    type Data = UserUpdate;
    type Response = User;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/users/me".into()
    }

    fn data(&self) -> RequestData<&UserUpdate> {
        RequestData::Json(&self.update)
    }
}

action!(DELETE DeleteCurrentUser, "/api/users/me");

#[derive(Debug, Clone, Copy)]
pub struct GetUserPreferences {
    user_id: i64,
}

impl GetUserPreferences {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl Request for GetUserPreferences {
    type Data = ();
    type Response = UserPreferences;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/users/{}/preferences", self.user_id).into()
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUserPreferences {
    user_id: i64,
    preferences: UserPreferences,
}

impl UpdateUserPreferences {
    pub fn new(user_id: i64, preferences: UserPreferences) -> Self {
        Self {
            user_id,
            preferences,
        }
    }
}

impl Request for UpdateUserPreferences {
    type Data = UserPreferences;
    type Response = UserPreferences;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/users/{}/preferences", self.user_id).into()
    }

    fn data(&self) -> RequestData<&UserPreferences> {
        RequestData::Json(&self.preferences)
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct GetUserCount;

impl Request for GetUserCount {
    type Data = ();
    type Response = UserCount;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/users/count".into()
    }
}

action!(POST PruneActivityLogs, "/api/users/prune-activity-logs");
action!(POST DisableUserPremium(user_id), "/api/users/{}/disable-premium");
action!(
    POST EnableUserPremiumWithoutSubscription(user_id),
    "/api/users/{}/enable-premium-without-subscription"
);

#[derive(Debug, Clone, Copy)]
pub struct GenerateApiAccessToken {
    user_id: i64,
}

impl GenerateApiAccessToken {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl Request for GenerateApiAccessToken {
    type Data = ();
    type Response = ApiAccessToken;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/users/{}/generate-api-access-token", self.user_id).into()
    }
}

action!(POST RevokeApiAccessToken(user_id), "/api/users/{}/revoke-api-access-token");

#[derive(Debug, Clone, Copy)]
pub struct GetUserPermissions {
    user_id: i64,
}

impl GetUserPermissions {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

impl Request for GetUserPermissions {
    type Data = ();
    type Response = UserPermissions;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/users/{}/permissions", self.user_id).into()
    }
}

// Responses

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCount {
    pub count: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiAccessToken {
    pub token: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPermissions {
    pub permissions: Vec<String>,
}
