use crate::macros::{action, paged};
use crate::request::{Request, RequestData};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSize {
    pub url: String,
    pub width: i64,
    pub height: i64,
    pub aspect_ratio: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub id: i64,
    pub url: String,
    pub content_type: String,
    pub size: i64,
    pub width: i64,
    pub height: i64,
    pub sizes: Vec<ImageSize>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upload payload. The file bytes travel as standard base64 in the JSON body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewImage {
    #[serde(with = "base64_bytes")]
    pub file: Vec<u8>,
}

impl std::fmt::Debug for NewImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewImage")
            .field("file", &format_args!("{} bytes", self.file.len()))
            .finish()
    }
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

// Requests

paged!(ListImages, GetImage, Image, "/api/images");

#[derive(Debug, Clone)]
pub struct CreateImage {
    image: NewImage,
}

impl CreateImage {
    pub fn new(file: impl Into<Vec<u8>>) -> Self {
        Self {
            image: NewImage { file: file.into() },
        }
    }
}

impl Request for CreateImage {
    type Data = NewImage;
    type Response = Image;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/api/images".into()
    }

    fn data(&self) -> RequestData<&NewImage> {
        RequestData::Json(&self.image)
    }
}

action!(DELETE DeleteImage(id), "/api/images/{}");
