// Partial community — the community fragment embedded in other payloads.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{required, Result};

use super::WEVERSE_ORIGIN;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommunityPayload {
    community_id: Option<i64>,
    community_name: Option<String>,
    url_path: Option<String>,
    logo_image: Option<String>,
    home_banner_image: Option<String>,
}

/// The subset of a community carried inside notifications, posts, and members.
#[derive(Debug, Clone, Serialize)]
pub struct PartialCommunity {
    pub id: i64,
    pub name: String,
    pub url_path: Option<String>,
    pub logo_image_url: Option<String>,
    pub home_banner_image_url: Option<String>,
}

impl PartialCommunity {
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let payload = CommunityPayload::deserialize(value)?;
        Ok(Self {
            id: required(payload.community_id, "community.communityId")?,
            name: required(payload.community_name, "community.communityName")?,
            url_path: payload.url_path,
            logo_image_url: payload.logo_image,
            home_banner_image_url: payload.home_banner_image,
        })
    }

    /// Link to the community's home, when the payload carried a url path.
    pub fn url(&self) -> Option<String> {
        self.url_path
            .as_deref()
            .map(|path| format!("{}/{}", WEVERSE_ORIGIN, path.trim_start_matches('/')))
    }
}

impl PartialEq for PartialCommunity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PartialCommunity {}

impl Hash for PartialCommunity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for PartialCommunity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
