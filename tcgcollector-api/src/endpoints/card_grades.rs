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
pub struct CardGrade {
    pub id: i64,
    pub card_id: i64,
    pub grade_company_id: i64,
    pub grade_value: String,
    pub certificate_id: String,
    pub graded_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable fields of a card grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCardGrade {
    pub card_id: i64,
    pub grade_company_id: i64,
    pub grade_value: String,
    pub certificate_id: String,
    pub graded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// Requests

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCardGrades {
    #[serde(skip_serializing_if = "Option::is_none")]
    card_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grade_company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grade_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ListCardGrades {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt card_id: i64);
    setter!(opt grade_company_id: i64);
    setter!(opt grade_value: String);
    setter!(opt value page: u32);
    setter!(opt value page_size: u32);
}

impl Request for ListCardGrades {
    type Data = Self;
    type Response = ListResponse<CardGrade>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/card-grades".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

get_by_id!(GetCardGrade, CardGrade, "/api/card-grades");

#[derive(Debug, Clone)]
pub struct CreateCardGrade {
    grade: NewCardGrade,
}

impl CreateCardGrade {
    pub fn new(grade: NewCardGrade) -> Self {
        Self { grade }
    }

    setter!(opt grade.notes: String);
}

impl Request for CreateCardGrade {
    type Data = NewCardGrade;
    type Response = CardGrade;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/card-grades".into()
    }

    fn data(&self) -> RequestData<&NewCardGrade> {
        RequestData::Json(&self.grade)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCardGrade {
    id: i64,
    grade: NewCardGrade,
}

impl UpdateCardGrade {
    pub fn new(id: i64, grade: NewCardGrade) -> Self {
        Self { id, grade }
    }

    setter!(opt grade.notes: String);
}

impl Request for UpdateCardGrade {
    type Data = NewCardGrade;
    type Response = CardGrade;
    const METHOD: Method = Method::PUT;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/api/card-grades/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&NewCardGrade> {
        RequestData::Json(&self.grade)
    }
}

action!(DELETE DeleteCardGrade(id), "/api/card-grades/{}");
