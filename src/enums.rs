// Enumerations shared across the object model.

use serde::{Deserialize, Serialize};

/// The kind of content a notification leads to.
///
/// Post-fetching code switches on this to decide which endpoint serves the
/// referenced content. `NotImplemented` is the sentinel for a `messageId`
/// carrying none of the known markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotificationType {
    #[serde(rename = "USER_POST_COMMENT")]
    UserPostComment,
    #[serde(rename = "MEDIA_COMMENT")]
    MediaComment,
    #[serde(rename = "MOMENT_COMMENT")]
    MomentComment,
    #[serde(rename = "ARTIST_POST_COMMENT")]
    ArtistPostComment,
    #[serde(rename = "POST")]
    Post,
    #[serde(rename = "MOMENT")]
    Moment,
    #[serde(rename = "LIVE")]
    Live,
    #[serde(rename = "MEDIA")]
    Media,
    #[serde(rename = "NOTICE")]
    Notice,
    #[serde(rename = "BIRTHDAY")]
    Birthday,
    #[serde(rename = "NOT IMPLEMENTED")]
    NotImplemented,
}

/// Marker substrings of `messageId`, checked in this order. Several markers
/// overlap (`_MOMENT_COMMENT` contains `MOMENT_COMMENT`, `ST_FEED_COMMENT`
/// contains `T_FEED_COMMENT`), so the order decides the outcome.
pub const POST_TYPE_MARKERS: &[(&str, NotificationType)] = &[
    ("T_FEED_COMMENT", NotificationType::UserPostComment),
    ("ST_FEED_COMMENT", NotificationType::UserPostComment),
    ("_MEDIA_COMMENT", NotificationType::MediaComment),
    ("_MOMENT_COMMENT", NotificationType::MomentComment),
    ("MOMENT_COMMENT", NotificationType::MomentComment),
    ("ARTIST_COMMENT", NotificationType::ArtistPostComment),
    ("ARTIST_POST", NotificationType::Post),
    ("ARTIST_MOMENT", NotificationType::Moment),
    ("ARTIST_LIVE_ON_AIR", NotificationType::Live),
    ("COMMUNITY_MEDIA", NotificationType::Media),
    ("NOTICE", NotificationType::Notice),
    ("COMMUNITY_ANNIVERSARY", NotificationType::Birthday),
];

impl NotificationType {
    /// Classify a `messageId` by the first marker it contains.
    pub fn from_message_id(message_id: &str) -> Self {
        POST_TYPE_MARKERS
            .iter()
            .find(|(marker, _)| message_id.contains(marker))
            .map(|&(_, kind)| kind)
            .unwrap_or(NotificationType::NotImplemented)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::UserPostComment => "USER_POST_COMMENT",
            NotificationType::MediaComment => "MEDIA_COMMENT",
            NotificationType::MomentComment => "MOMENT_COMMENT",
            NotificationType::ArtistPostComment => "ARTIST_POST_COMMENT",
            NotificationType::Post => "POST",
            NotificationType::Moment => "MOMENT",
            NotificationType::Live => "LIVE",
            NotificationType::Media => "MEDIA",
            NotificationType::Notice => "NOTICE",
            NotificationType::Birthday => "BIRTHDAY",
            NotificationType::NotImplemented => "NOT IMPLEMENTED",
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            NotificationType::UserPostComment
                | NotificationType::MediaComment
                | NotificationType::MomentComment
                | NotificationType::ArtistPostComment
        )
    }

    pub fn is_classified(&self) -> bool {
        *self != NotificationType::NotImplemented
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Languages a notification message is delivered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    Ko,
    Ja,
    #[default]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::Ja => "ja",
            Locale::En => "en",
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" => Ok(Locale::Ko),
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(format!("unknown locale {other:?} (expected ko, ja or en)")),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
