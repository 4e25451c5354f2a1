use jiff::Timestamp;
use linkhop_core::ShortLink;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const LIST_MESSAGE: &str = "URLs fetched successfully";
pub const CREATE_MESSAGE: &str = "URL created successfully";

/// Body of `POST /url`. A missing or `null` `url` is reported as
/// "URL is required" rather than as a malformed body.
#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlResponse {
    pub url: String,
    pub slug: String,
    pub short_url: String,
    pub message: &'static str,
}

impl CreateUrlResponse {
    pub fn new(link: ShortLink, base_url: &str) -> Self {
        Self {
            short_url: link.slug.to_url(base_url),
            slug: link.slug.to_string(),
            url: link.long_url,
            message: CREATE_MESSAGE,
        }
    }
}

/// A stored link as clients see it: the long URL is exposed as `url`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortLinkView {
    pub id: Uuid,
    pub url: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ShortLink> for ShortLinkView {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            url: link.long_url,
            slug: link.slug.to_string(),
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListUrlsResponse {
    pub urls: Vec<ShortLinkView>,
    pub message: &'static str,
}

impl ListUrlsResponse {
    pub fn new(links: Vec<ShortLink>) -> Self {
        Self {
            urls: links.into_iter().map(ShortLinkView::from).collect(),
            message: LIST_MESSAGE,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
