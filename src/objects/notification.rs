// Notification — one alert from the Weverse notification feed.
//
// A notification points at a post, comment, live broadcast, or platform
// notice. The payload is parsed once through a strict wire struct; the
// derived properties (url, post id, post type) read only the two raw
// strings kept for them: `webUrl` and `messageId`.

use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::enums::{Locale, NotificationType};
use crate::error::{required, Result, WeverseError};

use super::{PartialCommunity, PartialMember, WEVERSE_ORIGIN};

/// A `<section>-<post>` fragment inside a messageId, e.g. `3-12345`.
/// The section is matched at full width, so `12-345` stays `12-345`
/// rather than being cut to its last section digit.
static SECTION_POST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+-\d+").expect("section-post pattern is valid"));

/// Fallback for notices, whose messageId has no section-post fragment.
static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationPayload {
    activity_id: Option<i64>,
    title: Option<String>,
    message: Option<MessagePayload>,
    image_url: Option<String>,
    logo_image_url: Option<String>,
    time: Option<i64>,
    count: Option<i64>,
    read: Option<bool>,
    community: Option<serde_json::Value>,
    authors: Option<Vec<serde_json::Value>>,
    web_url: Option<String>,
    message_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessagePayload {
    values: Option<LocalizedValues>,
}

#[derive(Debug, Deserialize)]
struct LocalizedValues {
    ko: Option<String>,
    ja: Option<String>,
    en: Option<String>,
}

/// A Weverse notification.
///
/// Equality and hashing use `id` alone, so notifications can be collected
/// into sets and maps keyed by identity. `Display` is the English message.
#[derive(Clone, Serialize)]
pub struct Notification {
    id: i64,
    title: String,
    message_ko: String,
    message_ja: String,
    message_en: String,
    image_url: Option<String>,
    logo_image_url: String,
    time_created: i64,
    count: i64,
    is_read: bool,
    community: PartialCommunity,
    author: Option<PartialMember>,
    web_url: Option<String>,
    message_id: Option<String>,
}

impl Notification {
    /// Build a notification from one element of the notification feed.
    ///
    /// Fails with `MissingField` when a required key is absent and with
    /// `InvalidPayload` when a key holds the wrong JSON type.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let payload = NotificationPayload::deserialize(value)?;

        let id = required(payload.activity_id, "activityId")?;
        let title = required(payload.title, "title")?;
        let message = required(payload.message, "message")?;
        let values = required(message.values, "message.values")?;
        let logo_image_url = required(payload.logo_image_url, "logoImageUrl")?;
        let time_created = required(payload.time, "time")?;
        let count = required(payload.count, "count")?;
        let is_read = required(payload.read, "read")?;
        let community = PartialCommunity::from_value(&required(payload.community, "community")?)?;

        let author = match payload.authors.as_deref() {
            Some([first, ..]) => Some(PartialMember::from_value(first)?),
            _ => None,
        };

        Ok(Self {
            id,
            title,
            message_ko: values.ko.unwrap_or_default(),
            message_ja: values.ja.unwrap_or_default(),
            message_en: values.en.unwrap_or_default(),
            image_url: payload.image_url,
            logo_image_url,
            time_created,
            count,
            is_read,
            community,
            author,
            web_url: payload.web_url,
            message_id: payload.message_id,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Usually the group name; admin notices carry a proper title instead.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message_ko(&self) -> &str {
        &self.message_ko
    }

    pub fn message_ja(&self) -> &str {
        &self.message_ja
    }

    pub fn message_en(&self) -> &str {
        &self.message_en
    }

    /// The message body in the given locale. Empty when that locale was not sent.
    pub fn message(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ko => &self.message_ko,
            Locale::Ja => &self.message_ja,
            Locale::En => &self.message_en,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn logo_image_url(&self) -> &str {
        &self.logo_image_url
    }

    /// Creation time as sent by the API (epoch milliseconds).
    pub fn time_created(&self) -> i64 {
        self.time_created
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_created)
    }

    /// Number of artist comments on the post this notification leads to.
    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn community(&self) -> &PartialCommunity {
        &self.community
    }

    /// The artist behind a comment notification. `None` for everything else.
    pub fn author(&self) -> Option<&PartialMember> {
        self.author.as_ref()
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// URL of the Weverse page the notification leads to.
    pub fn url(&self) -> Result<String> {
        self.url_with_origin(WEVERSE_ORIGIN)
    }

    pub fn url_with_origin(&self, origin: &str) -> Result<String> {
        let path = required(self.web_url.as_deref(), "webUrl")?;
        Ok(format!("{}{}", origin.trim_end_matches('/'), path))
    }

    /// ID of the post the notification leads to.
    ///
    /// Returns the first `<digits>-<digits>` fragment of `messageId`, or the
    /// first run of digits when there is none (notices).
    pub fn post_id(&self) -> Result<&str> {
        let message_id = required(self.message_id.as_deref(), "messageId")?;

        SECTION_POST_PATTERN
            .find(message_id)
            .or_else(|| DIGITS_PATTERN.find(message_id))
            .map(|m| m.as_str())
            .ok_or_else(|| WeverseError::PatternNotFound {
                message_id: message_id.to_string(),
            })
    }

    /// Kind of content the notification leads to. Never fails: an unknown or
    /// absent messageId yields `NotificationType::NotImplemented`.
    pub fn post_type(&self) -> NotificationType {
        self.message_id
            .as_deref()
            .map(NotificationType::from_message_id)
            .unwrap_or(NotificationType::NotImplemented)
    }

    /// Compare against a value of any type.
    ///
    /// Comparing with anything other than a `Notification` is a caller bug and
    /// is reported as `UnsupportedComparison` instead of a quiet `false`.
    /// Pass the inner value of a box (`boxed.as_ref()`), not the box itself.
    pub fn try_eq(&self, other: &dyn Any) -> Result<bool> {
        match other.downcast_ref::<Notification>() {
            Some(notification) => Ok(self == notification),
            None => Err(WeverseError::UnsupportedComparison),
        }
    }
}

impl TryFrom<serde_json::Value> for Notification {
    type Error = WeverseError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Notification {}

impl Hash for Notification {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Notification notification_id={}, message={}",
            self.id, self.message_en
        )
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message_en)
    }
}
