use super::ListResponse;
use crate::macros::{get_by_id, setter};
use crate::request::{Request, RequestData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogEventType {
    pub id: i64,
    pub code_name: String,
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogEntry {
    pub id: i64,
    pub event_type_id: i64,
    pub user_id: i64,
    pub ip_address: String,
    pub created_at: DateTime<Utc>,
    pub details: String,
}

// Requests

#[derive(Default, Debug, Clone, Copy)]
pub struct ListAuditLogEventTypes;

impl ListAuditLogEventTypes {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListAuditLogEventTypes {
    type Data = ();
    type Response = ListResponse<AuditLogEventType>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/audit-log-event-types".into()
    }
}

get_by_id!(GetAuditLogEventType, AuditLogEventType, "/api/audit-log-event-types");

/// Date filters are sent as RFC 3339 timestamps.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAuditLogEntries {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListAuditLogEntries {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt event_type_id: i64);
    setter!(opt user_id: i64);
    setter!(opt start_date: DateTime<Utc>);
    setter!(opt end_date: DateTime<Utc>);
    setter!(opt value page: u32);
    setter!(opt value page_size: u32);
}

impl Request for ListAuditLogEntries {
    type Data = Self;
    type Response = ListResponse<AuditLogEntry>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/audit-log".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

get_by_id!(GetAuditLogEntry, AuditLogEntry, "/api/audit-log");
