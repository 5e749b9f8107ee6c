pub mod audit_log;
pub mod auth;
pub mod card_database_logs;
pub mod card_grades;
pub mod card_lists;
pub mod card_variant_types;
pub mod card_variants;
pub mod cards;
pub mod catalog;
pub mod collections;
pub mod configuration;
pub mod expansions;
pub mod health;
pub mod images;
pub mod news_posts;
pub mod prices;
pub mod reference_data;
pub mod references;
pub mod sets;
pub mod statistics;
pub mod users;

use serde::{Deserialize, Serialize};

/// Paginated envelope shared by most list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub item_count: i64,
    pub total_item_count: i64,
    pub page: i64,
    pub page_count: i64,
}

// Derived `Default` would require `T: Default`.
impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            total_item_count: 0,
            page: 0,
            page_count: 0,
        }
    }
}

impl<T> ListResponse<T> {
    /// Number of the page after this one, if there is one.
    pub fn next_page(&self) -> Option<i64> {
        (self.page < self.page_count).then_some(self.page + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for ListResponse<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Query parameters for endpoints that only page.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
