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
pub struct Collection {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionCard {
    pub id: i64,
    pub collection_id: i64,
    pub card_id: i64,
    pub quantity: i64,
    pub condition: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollection {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_public: bool,
}

impl NewCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_public: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollectionCard {
    pub card_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub notes: String,
}

impl NewCollectionCard {
    pub fn new(card_id: i64, quantity: i64) -> Self {
        Self {
            card_id,
            quantity,
            condition: String::new(),
            notes: String::new(),
        }
    }
}

// Requests

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCollections {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListCollections {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt user_id: i64);
    setter!(opt name: String);
    setter!(opt is_public: bool);
    setter!(opt value page: u32);
    setter!(opt value page_size: u32);
}

impl Request for ListCollections {
    type Data = Self;
    type Response = ListResponse<Collection>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/collections".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

get_by_id!(GetCollection, Collection, "/api/collections");

#[derive(Debug, Clone)]
pub struct CreateCollection {
    collection: NewCollection,
}

impl CreateCollection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            collection: NewCollection::new(name),
        }
    }

    setter!(collection.description: String);
    setter!(collection.is_public: bool);
}

impl Request for CreateCollection {
    type Data = NewCollection;
    type Response = Collection;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/collections".into()
    }

    fn data(&self) -> RequestData<&NewCollection> {
        RequestData::Json(&self.collection)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCollection {
    id: i64,
    collection: NewCollection,
}

impl UpdateCollection {
    pub fn new(id: i64, collection: NewCollection) -> Self {
        Self { id, collection }
    }
}

impl Request for UpdateCollection {
    type Data = NewCollection;
    type Response = Collection;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/collections/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&NewCollection> {
        RequestData::Json(&self.collection)
    }
}

action!(DELETE DeleteCollection(id), "/api/collections/{}");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCollectionCards {
    collection_id: i64,
}

impl ListCollectionCards {
    pub fn new(collection_id: i64) -> Self {
        Self { collection_id }
    }
}

impl Request for ListCollectionCards {
    type Data = ();
    type Response = Vec<CollectionCard>;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/collections/{}/cards", self.collection_id).into()
    }
}

#[derive(Debug, Clone)]
pub struct AddCollectionCard {
    collection_id: i64,
    card: NewCollectionCard,
}

impl AddCollectionCard {
    pub fn new(collection_id: i64, card_id: i64, quantity: i64) -> Self {
        Self {
            collection_id,
            card: NewCollectionCard::new(card_id, quantity),
        }
    }

    setter!(card.condition: String);
    setter!(card.notes: String);
}

impl Request for AddCollectionCard {
    type Data = NewCollectionCard;
    type Response = CollectionCard;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/collections/{}/cards", self.collection_id).into()
    }

    fn data(&self) -> RequestData<&NewCollectionCard> {
        RequestData::Json(&self.card)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCollectionCard {
    collection_id: i64,
    card: NewCollectionCard,
}

impl UpdateCollectionCard {
    pub fn new(collection_id: i64, card_id: i64, quantity: i64) -> Self {
        Self {
            collection_id,
            card: NewCollectionCard::new(card_id, quantity),
        }
    }

    setter!(card.condition: String);
    setter!(card.notes: String);
}

impl Request for UpdateCollectionCard {
    type Data = NewCollectionCard;
    type Response = CollectionCard;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!(
            "/api/collections/{}/cards/{}",
            self.collection_id, self.card.card_id
        )
        .into()
    }

    fn data(&self) -> RequestData<&NewCollectionCard> {
        RequestData::Json(&self.card)
    }
}

action!(
    DELETE RemoveCollectionCard(collection_id, card_id),
    "/api/collections/{}/cards/{}"
);
action!(
    POST InvalidateCardListCache,
    "/api/card-collection/invalidate-card-list-cache"
);
action!(
    POST InvalidateExpansionCache,
    "/api/card-collection/invalidate-expansion-cache"
);
