use super::ListResponse;
use crate::macros::{action, get_by_id, setter};
use crate::request::{Request, RequestData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub id: i64,
    pub set_id: i64,
    pub name: String,
    pub number: String,
    pub rarity: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub description: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardPrice {
    pub id: i64,
    pub card_id: i64,
    pub price: f64,
    pub currency: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

// Requests

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCards {
    #[serde(skip_serializing_if = "Option::is_none")]
    set_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListCards {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt set_id: i64);
    setter!(opt name: String);
    setter!(opt number: String);
    setter!(opt rarity: String);
    setter!(opt value page: u32);
    setter!(opt value page_size: u32);
}

impl Request for ListCards {
    type Data = Self;
    type Response = ListResponse<Card>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/cards".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

get_by_id!(GetCard, Card, "/api/cards");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCardPrices {
    card_id: i64,
}

impl ListCardPrices {
    pub fn new(card_id: i64) -> Self {
        Self { card_id }
    }
}

impl Request for ListCardPrices {
    type Data = ();
    type Response = Vec<CardPrice>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/cards/{}/prices", self.card_id).into()
    }
}

action!(POST RecalculateCardCachedValues, "/api/cards/recalculate-cached-values");
action!(POST RegenerateCardSlugs, "/api/cards/regenerate-slugs");
action!(
    POST RegenerateCardSurrogateNumbersAndFullNames,
    "/api/cards/regenerate-surrogate-numbers-and-full-names"
);
