use crate::macros::{action, paged};
use crate::request::Request;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDatabaseLog {
    pub id: i64,
    pub card_id: i64,
    pub user_id: i64,
    pub action: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Row of the raw change log. `created_at` is passed through as sent.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDatabaseLogEntry {
    pub id: i64,
    pub action: String,
    pub details: String,
    pub created_at: String,
}

// Requests

paged!(
    ListCardDatabaseLogs,
    GetCardDatabaseLog,
    CardDatabaseLog,
    "/api/card-database-logs"
);

#[derive(Default, Debug, Clone, Copy)]
pub struct ListCardDatabaseLogEntries;

impl ListCardDatabaseLogEntries {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListCardDatabaseLogEntries {
    type Data = ();
    type Response = Vec<CardDatabaseLogEntry>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/card-database-log".into()
    }
}

action!(POST PruneCardDatabaseLog, "/api/card-database-log/prune");
