// Partial member — the author fragment attached to comment notifications.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{required, Result};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberPayload {
    member_id: Option<String>,
    community_id: Option<i64>,
    profile_name: Option<String>,
    profile_image_url: Option<String>,
    profile_type: Option<String>,
    artist_official_profile: Option<OfficialProfilePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OfficialProfilePayload {
    official_name: Option<String>,
}

/// A community member as embedded in another object's payload.
#[derive(Debug, Clone, Serialize)]
pub struct PartialMember {
    pub id: String,
    pub community_id: Option<i64>,
    pub profile_name: String,
    pub profile_image_url: Option<String>,
    pub profile_type: Option<String>,
    /// The artist's official name, only present on artist profiles.
    pub official_name: Option<String>,
}

impl PartialMember {
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let payload = MemberPayload::deserialize(value)?;
        Ok(Self {
            id: required(payload.member_id, "authors[0].memberId")?,
            community_id: payload.community_id,
            profile_name: required(payload.profile_name, "authors[0].profileName")?,
            profile_image_url: payload.profile_image_url,
            profile_type: payload.profile_type,
            official_name: payload
                .artist_official_profile
                .and_then(|profile| profile.official_name),
        })
    }

    pub fn is_artist(&self) -> bool {
        self.profile_type.as_deref() == Some("ARTIST")
    }
}

impl PartialEq for PartialMember {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PartialMember {}

impl Hash for PartialMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for PartialMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.profile_name)
    }
}
