use crate::macros::{action, catalog};
use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Expansion {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub slug: String,
    pub card_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

catalog!(ListExpansions, GetExpansion, Expansion, "/api/expansions");

action!(POST RecalculateExpansionCardCounts, "/api/expansions/recalculate-card-counts");
action!(POST RegenerateExpansionSlugs, "/api/expansions/regenerate-slugs");
