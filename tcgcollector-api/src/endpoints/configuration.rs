use crate::request::Request;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Responses

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowedExternalAccountHosts {
    pub hosts: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseTcgCurrency {
    pub currency: String,
}

// Requests

#[derive(Default, Debug, Clone, Copy)]
pub struct GetAllowedExternalAccountHosts;

impl Request for GetAllowedExternalAccountHosts {
    type Data = ();
    type Response = AllowedExternalAccountHosts;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/configuration/allowed-external-account-hosts".into()
    }
}

#[derive(Default, Debug, Clone, Copy)]
pub struct GetBaseTcgCurrency;

impl Request for GetBaseTcgCurrency {
    type Data = ();
    type Response = BaseTcgCurrency;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/configuration/base-tcg-currency".into()
    }
}
