use super::ListResponse;
use super::cards::Card;
use crate::macros::{catalog, get_by_id, setter};
use crate::request::{Request, RequestData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Set {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub release_date: String,
    pub total_cards: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Requests

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSets {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListSets {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt name: String);
    setter!(opt code: String);
    setter!(opt release_date: DateTime<Utc>);
    setter!(opt value page: u32);
    setter!(opt value page_size: u32);
}

impl Request for ListSets {
    type Data = Self;
    type Response = ListResponse<Set>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/sets".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

get_by_id!(GetSet, Set, "/api/sets");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSetCards {
    set_id: i64,
}

impl ListSetCards {
    pub fn new(set_id: i64) -> Self {
        Self { set_id }
    }
}

impl Request for ListSetCards {
    type Data = ();
    type Response = ListResponse<Card>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/sets/{}/cards", self.set_id).into()
    }
}

// The card-sets collection serves the same records as a plain array.
catalog!(ListCardSets, GetCardSet, Set, "/api/card-sets");
