//! Cross references linking catalog entities to external reference ids.

use crate::macros::paged;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardReference {
    pub id: i64,
    pub card_id: i64,
    pub reference_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpansionReference {
    pub id: i64,
    pub expansion_id: i64,
    pub reference_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardListReference {
    pub id: i64,
    pub card_list_id: i64,
    pub reference_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardVariantReference {
    pub id: i64,
    pub card_variant_id: i64,
    pub reference_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

paged!(ListCardReferences, GetCardReference, CardReference, "/api/card-references");
paged!(
    ListExpansionReferences,
    GetExpansionReference,
    ExpansionReference,
    "/api/expansion-references"
);
paged!(
    ListCardListReferences,
    GetCardListReference,
    CardListReference,
    "/api/card-list-references"
);
paged!(
    ListCardVariantReferences,
    GetCardVariantReference,
    CardVariantReference,
    "/api/card-variant-references"
);
