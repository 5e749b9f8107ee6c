use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

// Requests

#[derive(Default, Debug, Clone, Copy)]
pub struct GetHealth;

impl GetHealth {
    pub fn new() -> Self {
        Self
    }
}

impl Request for GetHealth {
    type Data = ();
    type Response = HealthStatus;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/health".into()
    }
}
