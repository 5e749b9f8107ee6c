use crate::macros::{action, paged};
use crate::request::{Request, RequestData};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardVariantType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCardVariantType {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl NewCardVariantType {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

// Requests

paged!(
    ListCardVariantTypes,
    GetCardVariantType,
    CardVariantType,
    "/api/card-variant-types"
);

#[derive(Debug, Clone)]
pub struct CreateCardVariantType {
    variant_type: NewCardVariantType,
}

impl CreateCardVariantType {
    pub fn new(variant_type: NewCardVariantType) -> Self {
        Self { variant_type }
    }
}

impl Request for CreateCardVariantType {
    type Data = NewCardVariantType;
    type Response = CardVariantType;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/card-variant-types".into()
    }

    fn data(&self) -> RequestData<&NewCardVariantType> {
        RequestData::Json(&self.variant_type)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCardVariantType {
    id: i64,
    variant_type: NewCardVariantType,
}

impl UpdateCardVariantType {
    pub fn new(id: i64, variant_type: NewCardVariantType) -> Self {
        Self { id, variant_type }
    }
}

impl Request for UpdateCardVariantType {
    type Data = NewCardVariantType;
    type Response = CardVariantType;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/card-variant-types/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&NewCardVariantType> {
        RequestData::Json(&self.variant_type)
    }
}

action!(DELETE DeleteCardVariantType(id), "/api/card-variant-types/{}");
