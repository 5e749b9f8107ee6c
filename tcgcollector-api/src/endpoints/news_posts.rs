use super::PageQuery;
use crate::macros::{action, get_by_id, setter};
use crate::request::{Request, RequestData};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsPost {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub text_md: String,
    pub slug: String,
    pub created_date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNewsPost {
    pub title: String,
    pub content: String,
}

// Requests

#[derive(Default, Debug, Clone, Copy)]
pub struct ListNewsPosts {
    query: PageQuery,
}

impl ListNewsPosts {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt value query.page: u32);
    setter!(opt value query.page_size: u32);
}

impl Request for ListNewsPosts {
    type Data = PageQuery;
    type Response = NewsPostsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/news-posts".into()
    }

    fn data(&self) -> RequestData<&PageQuery> {
        RequestData::Query(&self.query)
    }
}

get_by_id!(GetNewsPost, NewsPost, "/api/news-posts");

#[derive(Debug, Clone)]
pub struct CreateNewsPost {
    post: NewNewsPost,
}

impl CreateNewsPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            post: NewNewsPost {
                title: title.into(),
                content: content.into(),
            },
        }
    }
}

impl Request for CreateNewsPost {
    type Data = NewNewsPost;
    type Response = NewsPost;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/news-posts".into()
    }

    fn data(&self) -> RequestData<&NewNewsPost> {
        RequestData::Json(&self.post)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateNewsPost {
    id: i64,
    post: NewNewsPost,
}

impl UpdateNewsPost {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            post: NewNewsPost {
                title: title.into(),
                content: content.into(),
            },
        }
    }
}

impl Request for UpdateNewsPost {
    type Data = NewNewsPost;
    type Response = NewsPost;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/news-posts/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&NewNewsPost> {
        RequestData::Json(&self.post)
    }
}

action!(DELETE DeleteNewsPost(id), "/api/news-posts/{}");

// Responses

/// News posts use their own envelope rather than the shared paginated one.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsPostsResponse {
    pub items: Vec<NewsPost>,
    pub total: i64,
}
