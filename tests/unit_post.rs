// Unit tests for the derived post properties: url, post_id, post_type.

use serde_json::{json, Value};
use weverse::{Notification, NotificationType, WeverseError};

fn notification(message_id: Option<&str>, web_url: Option<&str>) -> Notification {
    let mut value = json!({
        "activityId": 1,
        "title": "IVE",
        "message": {"values": {"en": "New post"}},
        "logoImageUrl": "https://phinf.example/logo.png",
        "time": 0,
        "count": 0,
        "read": true,
        "community": {"communityId": 7, "communityName": "IVE"}
    });
    let map = value.as_object_mut().unwrap();
    if let Some(id) = message_id {
        map.insert("messageId".into(), Value::from(id));
    }
    if let Some(url) = web_url {
        map.insert("webUrl".into(), Value::from(url));
    }
    Notification::from_value(&value).unwrap()
}

fn with_message_id(message_id: &str) -> Notification {
    notification(Some(message_id), None)
}

// ============================================================
// url
// ============================================================

#[test]
fn url_joins_fixed_origin() {
    let n = notification(None, Some("/ive/artist/2-98765"));
    assert_eq!(n.url().unwrap(), "https://weverse.io/ive/artist/2-98765");
}

#[test]
fn url_with_custom_origin_trims_slash() {
    let n = notification(None, Some("/ive/live/4-1"));
    assert_eq!(
        n.url_with_origin("http://localhost:8080/").unwrap(),
        "http://localhost:8080/ive/live/4-1"
    );
}

#[test]
fn url_without_web_url_is_missing_field() {
    let n = notification(Some("NOTICE-1"), None);
    assert!(matches!(
        n.url(),
        Err(WeverseError::MissingField { field: "webUrl" })
    ));
}

// ============================================================
// post_id
// ============================================================

#[test]
fn post_id_takes_section_post_fragment() {
    assert_eq!(
        with_message_id("c2p-T_FEED_COMMENT-3-12345").post_id().unwrap(),
        "3-12345"
    );
}

#[test]
fn post_id_falls_back_to_digits_for_notice() {
    assert_eq!(with_message_id("NOTICE-98765").post_id().unwrap(), "98765");
}

#[test]
fn post_id_fallback_is_pattern_based_not_type_based() {
    assert_eq!(
        with_message_id("ARTIST_POST_555").post_id().unwrap(),
        "555"
    );
}

#[test]
fn post_id_returns_first_fragment() {
    assert_eq!(
        with_message_id("x-1-22-ARTIST_COMMENT-3-44").post_id().unwrap(),
        "1-22"
    );
}

#[test]
fn post_id_keeps_multi_digit_section() {
    assert_eq!(with_message_id("ARTIST_POST-12-345").post_id().unwrap(), "12-345");
}

#[test]
fn post_id_without_digits_is_pattern_not_found() {
    match with_message_id("ARTIST_POST").post_id() {
        Err(WeverseError::PatternNotFound { message_id }) => assert_eq!(message_id, "ARTIST_POST"),
        other => panic!("expected PatternNotFound, got {other:?}"),
    }
}

#[test]
fn post_id_without_message_id_is_missing_field() {
    assert!(matches!(
        notification(None, None).post_id(),
        Err(WeverseError::MissingField { field: "messageId" })
    ));
}

// ============================================================
// post_type
// ============================================================

#[test]
fn notice_marker() {
    assert_eq!(with_message_id("NOTICE-98765").post_type(), NotificationType::Notice);
}

#[test]
fn live_marker() {
    assert_eq!(
        with_message_id("c2p-ARTIST_LIVE_ON_AIR-4-100").post_type(),
        NotificationType::Live
    );
}

#[test]
fn unknown_marker_is_sentinel() {
    let kind = with_message_id("UNKNOWN_TYPE-1").post_type();
    assert_eq!(kind, NotificationType::NotImplemented);
    assert_eq!(kind.to_string(), "NOT IMPLEMENTED");
}

#[test]
fn absent_message_id_is_sentinel() {
    assert_eq!(notification(None, None).post_type(), NotificationType::NotImplemented);
}

#[test]
fn feed_comment_markers() {
    assert_eq!(
        with_message_id("c2p-T_FEED_COMMENT-3-12345").post_type(),
        NotificationType::UserPostComment
    );
    assert_eq!(
        with_message_id("c2p-ST_FEED_COMMENT-3-12345").post_type(),
        NotificationType::UserPostComment
    );
}

#[test]
fn media_and_moment_comments() {
    assert_eq!(
        with_message_id("c2p-ARTIST_MEDIA_COMMENT-1-2").post_type(),
        NotificationType::MediaComment
    );
    assert_eq!(
        with_message_id("c2p-ARTIST_MOMENT_COMMENT-1-2").post_type(),
        NotificationType::MomentComment
    );
    assert_eq!(
        with_message_id("MOMENT_COMMENT-1-2").post_type(),
        NotificationType::MomentComment
    );
}

#[test]
fn artist_markers() {
    assert_eq!(
        with_message_id("ARTIST_COMMENT-1-2").post_type(),
        NotificationType::ArtistPostComment
    );
    assert_eq!(with_message_id("ARTIST_POST-1-2").post_type(), NotificationType::Post);
    assert_eq!(with_message_id("ARTIST_MOMENT-1-2").post_type(), NotificationType::Moment);
}

#[test]
fn community_markers() {
    assert_eq!(
        with_message_id("COMMUNITY_MEDIA-5-6").post_type(),
        NotificationType::Media
    );
    assert_eq!(
        with_message_id("COMMUNITY_ANNIVERSARY-7").post_type(),
        NotificationType::Birthday
    );
}

#[test]
fn table_order_decides_overlapping_markers() {
    // Contains both ARTIST_MOMENT and _MOMENT_COMMENT; the comment marker is earlier.
    assert_eq!(
        with_message_id("ARTIST_MOMENT_COMMENT-1-2").post_type(),
        NotificationType::MomentComment
    );
    // Contains both ARTIST_POST and NOTICE; ARTIST_POST is earlier.
    assert_eq!(
        with_message_id("ARTIST_POST_NOTICE-9").post_type(),
        NotificationType::Post
    );
}

#[test]
fn comment_categories() {
    assert!(NotificationType::UserPostComment.is_comment());
    assert!(NotificationType::ArtistPostComment.is_comment());
    assert!(!NotificationType::Post.is_comment());
    assert!(!NotificationType::NotImplemented.is_classified());
}
