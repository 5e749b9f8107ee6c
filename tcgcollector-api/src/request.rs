use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use std::borrow::Cow;

/// Payload attached to an outgoing request.
#[derive(Debug, Clone, Copy)]
pub enum RequestData<T> {
    Empty,
    /// Serialized into the query string.
    Query(T),
    /// Serialized as the JSON request body.
    Json(T),
}

/// A single API call: where it goes, what it carries and what comes back.
pub trait Request {
    type Data: Serialize + ?Sized;
    type Response: FromResponse;
    const METHOD: Method = Method::GET;

    fn endpoint(&self) -> Cow<'_, str>;

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Empty
    }
}

/// Decodes the body of a successful (< 400) response.
pub trait FromResponse: Sized {
    /// When false the body is never read and `from_body` receives an empty slice.
    const READS_BODY: bool = true;

    fn from_body(body: &[u8]) -> Result<Self, serde_json::Error>;
}

impl<T> FromResponse for T
where
    T: DeserializeOwned,
{
    fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Response of endpoints that return nothing worth decoding (deletes and actions).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyResponse;

impl FromResponse for EmptyResponse {
    const READS_BODY: bool = false;

    fn from_body(_body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(EmptyResponse)
    }
}
