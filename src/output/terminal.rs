// Colored terminal output for notification lists.
//
// main.rs builds the Inbox and hands it here; nothing in this module
// touches the payloads directly.

use colored::Colorize;

use crate::enums::{Locale, NotificationType};
use crate::inbox::Inbox;
use crate::objects::Notification;

/// Display every notification in the inbox as a table.
pub fn display_inbox(inbox: &Inbox, locale: Locale) {
    if inbox.is_empty() {
        println!("No notifications found.");
        if inbox.skipped() > 0 {
            println!(
                "  {} {} payloads could not be parsed",
                "!".bright_red(),
                inbox.skipped()
            );
        }
        return;
    }

    println!(
        "\n{}",
        format!("=== Notifications ({}) ===", inbox.len()).bold()
    );
    println!();

    println!(
        "  {:>12}  {:<1}  {:<19}  {:<12}  {:<20}  {}",
        "ID".dimmed(),
        " ".dimmed(),
        "Type".dimmed(),
        "Post".dimmed(),
        "Title".dimmed(),
        "Message".dimmed(),
    );
    println!("  {}", "-".repeat(100).dimmed());

    for notification in inbox.notifications() {
        let read_marker = if notification.is_read() {
            " ".normal()
        } else {
            "*".yellow().bold()
        };
        let post_id = notification.post_id().unwrap_or("?");
        let message = super::truncate_chars(notification.message(locale), 40);

        println!(
            "  {:>12}  {}  {:<19}  {:<12}  {:<20}  {}",
            notification.id(),
            read_marker,
            colorize_type(notification.post_type()),
            post_id,
            super::truncate_chars(notification.title(), 20),
            message,
        );
    }

    println!();

    let unread = inbox.unread().count();
    if unread > 0 {
        println!("  {} {} unread", "*".yellow().bold(), unread);
    }
    if inbox.skipped() > 0 {
        println!(
            "  {} {} payloads skipped (run with RUST_LOG=weverse=warn for details)",
            "!".bright_red(),
            inbox.skipped()
        );
    }
}

/// Display one notification with all derived properties.
pub fn display_notification_detail(notification: &Notification, locale: Locale, origin: &str) {
    println!(
        "\n{}",
        format!("=== Notification {} ===", notification.id()).bold()
    );

    println!("  Title: {}", notification.title());
    println!("  Message ({}): {}", locale, notification.message(locale));
    println!("  Type: {}", colorize_type(notification.post_type()));

    match notification.post_id() {
        Ok(post_id) => println!("  Post ID: {}", post_id),
        Err(e) => println!("  Post ID: {}", e.to_string().red()),
    }
    match notification.url_with_origin(origin) {
        Ok(url) => println!("  URL: {}", url),
        Err(e) => println!("  URL: {}", e.to_string().red()),
    }

    let community = notification.community();
    println!("  Community: {} (#{})", community.name, community.id);
    if let Some(author) = notification.author() {
        let role = if author.is_artist() {
            "artist".magenta().to_string()
        } else {
            "member".normal().to_string()
        };
        println!("  Author: {} [{}]", author.profile_name, role);
    }

    if let Some(created_at) = notification.created_at() {
        println!("  Created: {}", created_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!("  Artist comments: {}", notification.count());
    let read_str = if notification.is_read() {
        "yes".green().to_string()
    } else {
        "no".yellow().to_string()
    };
    println!("  Read: {}", read_str);
    if let Some(image) = notification.image_url() {
        println!("  Image: {}", image.dimmed());
    }
}

/// Colorize a post type by how it is fetched.
fn colorize_type(kind: NotificationType) -> colored::ColoredString {
    match kind {
        NotificationType::Live => kind.as_str().red().bold(),
        NotificationType::Notice | NotificationType::Birthday => kind.as_str().cyan(),
        k if !k.is_classified() => k.as_str().dimmed(),
        k if k.is_comment() => k.as_str().green(),
        k => k.as_str().normal(),
    }
}
