// Weverse object model — typed views over raw API payloads.
//
// Each object is built once from its JSON fragment and never mutated.
// Required keys are checked at construction; nothing defers a missing-key
// failure to first access.

pub mod community;
pub mod member;
pub mod notification;

pub use community::PartialCommunity;
pub use member::PartialMember;
pub use notification::Notification;

/// Origin every relative Weverse web path is joined onto.
pub const WEVERSE_ORIGIN: &str = "https://weverse.io";
