use crate::macros::paged;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardListPrice {
    pub id: i64,
    pub card_list_id: i64,
    pub price: f64,
    pub currency: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpansionPrice {
    pub id: i64,
    pub expansion_id: i64,
    pub price: f64,
    pub currency: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

paged!(ListCardListPrices, GetCardListPrice, CardListPrice, "/api/card-list-prices");
paged!(ListExpansionPrices, GetExpansionPrice, ExpansionPrice, "/api/expansion-prices");
