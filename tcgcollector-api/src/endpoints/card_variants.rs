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
pub struct CardVariant {
    pub id: i64,
    pub card_id: i64,
    pub type_id: i64,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardVariantPrice {
    pub id: i64,
    pub variant_id: i64,
    pub price: f64,
    pub currency: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Writable fields of a card variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardVariant {
    pub card_id: i64,
    pub type_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl NewCardVariant {
    pub fn new(card_id: i64, type_id: i64, name: impl Into<String>) -> Self {
        Self {
            card_id,
            type_id,
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
        }
    }
}

// Requests

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCardVariants {
    #[serde(skip_serializing_if = "Option::is_none")]
    card_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListCardVariants {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt card_id: i64);
    setter!(opt type_id: i64);
    setter!(opt value page: u32);
    setter!(opt value page_size: u32);
}

impl Request for ListCardVariants {
    type Data = Self;
    type Response = ListResponse<CardVariant>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/card-variants".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

get_by_id!(GetCardVariant, CardVariant, "/api/card-variants");

#[derive(Debug, Clone)]
pub struct CreateCardVariant {
    variant: NewCardVariant,
}

impl CreateCardVariant {
    pub fn new(variant: NewCardVariant) -> Self {
        Self { variant }
    }

    setter!(variant.description: String);
    setter!(variant.image_url: String);
}

impl Request for CreateCardVariant {
    type Data = NewCardVariant;
    type Response = CardVariant;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/card-variants".into()
    }

    fn data(&self) -> RequestData<&NewCardVariant> {
        RequestData::Json(&self.variant)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCardVariant {
    id: i64,
    variant: NewCardVariant,
}

impl UpdateCardVariant {
    pub fn new(id: i64, variant: NewCardVariant) -> Self {
        Self { id, variant }
    }

    setter!(variant.description: String);
    setter!(variant.image_url: String);
}

impl Request for UpdateCardVariant {
    type Data = NewCardVariant;
    type Response = CardVariant;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/card-variants/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&NewCardVariant> {
        RequestData::Json(&self.variant)
    }
}

action!(DELETE DeleteCardVariant(id), "/api/card-variants/{}");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCardVariantPrices {
    variant_id: i64,
}

impl ListCardVariantPrices {
    pub fn new(variant_id: i64) -> Self {
        Self { variant_id }
    }
}

impl Request for ListCardVariantPrices {
    type Data = ();
    type Response = Vec<CardVariantPrice>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/card-variants/{}/prices", self.variant_id).into()
    }
}

action!(
    POST RecalculateCardVariantValues,
    "/api/card-variants/recalculate-computed-and-cached-values"
);
