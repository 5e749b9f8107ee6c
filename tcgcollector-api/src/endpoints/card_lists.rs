use crate::macros::{action, catalog};
use crate::request::{EmptyResponse, Request, RequestData};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

// Card list timestamps are not guaranteed to be RFC 3339 and stay as strings.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardList {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub card_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardListEntry {
    pub id: i64,
    pub card_list_id: i64,
    pub card_id: i64,
    pub quantity: i64,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardListEntry {
    pub card_id: i64,
    pub quantity: i64,
}

// Requests

catalog!(ListCardLists, GetCardList, CardList, "/api/card-lists");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCardListEntries {
    card_list_id: i64,
}

impl ListCardListEntries {
    pub fn new(card_list_id: i64) -> Self {
        Self { card_list_id }
    }
}

impl Request for ListCardListEntries {
    type Data = ();
    type Response = Vec<CardListEntry>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/card-lists/{}/entries", self.card_list_id).into()
    }
}

/// Replaces every entry of a card list with `entries`.
#[derive(Debug, Clone)]
pub struct BulkReplaceCardListEntries {
    card_list_id: i64,
    entries: Vec<NewCardListEntry>,
}

impl BulkReplaceCardListEntries {
    pub fn new(card_list_id: i64, entries: Vec<NewCardListEntry>) -> Self {
        Self {
            card_list_id,
            entries,
        }
    }
}

impl Request for BulkReplaceCardListEntries {
    type Data = [NewCardListEntry];
    type Response = EmptyResponse;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/card-lists/{}/entries/bulk-replace", self.card_list_id).into()
    }

    fn data(&self) -> RequestData<&[NewCardListEntry]> {
        RequestData::Json(self.entries.as_slice())
    }
}

action!(POST RecalculateCardListCounts, "/api/card-lists/recalculate-card-counts");
action!(POST RegenerateCardListSlugs, "/api/card-lists/regenerate-slugs");
