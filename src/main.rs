use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use weverse::config::Config;
use weverse::enums::Locale;
use weverse::inbox::Inbox;
use weverse::output::terminal;

/// Weverse: inspect saved notification payloads.
///
/// Reads a notification list response (or a single notification) from a
/// file or stdin and prints the typed view with derived post links.
#[derive(Parser)]
#[command(name = "weverse", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every notification in a payload file
    Show {
        /// JSON file to read, or `-` for stdin
        input: PathBuf,

        /// Print the parsed notifications as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Message locale (ko, ja, en); overrides WEVERSE_LOCALE
        #[arg(long)]
        locale: Option<Locale>,
    },

    /// Show url, post id, type, and author for one notification
    Inspect {
        /// JSON file to read, or `-` for stdin
        input: PathBuf,

        /// The activityId of the notification to inspect
        #[arg(long)]
        id: i64,

        /// Message locale (ko, ja, en); overrides WEVERSE_LOCALE
        #[arg(long)]
        locale: Option<Locale>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("weverse=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Show {
            input,
            json,
            locale,
        } => {
            let inbox = load_inbox(&input)?;
            if json {
                let rendered = serde_json::to_string_pretty(inbox.notifications())
                    .context("Failed to serialize notifications")?;
                println!("{rendered}");
            } else {
                terminal::display_inbox(&inbox, locale.unwrap_or(config.locale));
            }
        }
        Commands::Inspect { input, id, locale } => {
            let inbox = load_inbox(&input)?;
            let notification = inbox
                .find(id)
                .with_context(|| format!("No notification with id {id} in {}", input.display()))?;
            terminal::display_notification_detail(
                notification,
                locale.unwrap_or(config.locale),
                &config.origin,
            );
        }
    }

    Ok(())
}

fn load_inbox(input: &Path) -> Result<Inbox> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read notifications from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };

    debug!(bytes = raw.len(), "Read notification payload");

    Inbox::from_json(&raw).with_context(|| format!("{} is not valid JSON", input.display()))
}
