// Weverse: typed views over Weverse notification payloads.
//
// This is the library root. `objects` holds the entities parsed from API
// responses; `inbox` and `output` sit on top for batch handling and display.

pub mod config;
pub mod enums;
pub mod error;
pub mod inbox;
pub mod objects;
pub mod output;

pub use enums::{Locale, NotificationType};
pub use error::{Result, WeverseError};
pub use objects::{Notification, PartialCommunity, PartialMember};
