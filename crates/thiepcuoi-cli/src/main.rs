//! Thiệp Cưới CLI
//!
//! Thin wrapper around thiepcuoi-core for the parts of the invitation that
//! make sense in a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Time left until the ceremony
//! thiepcuoi countdown
//! thiepcuoi countdown --watch
//!
//! # Ceremonies and their deep-links
//! thiepcuoi events
//! thiepcuoi calendar event1 --open
//! thiepcuoi map event2
//!
//! # Photos in the gallery
//! thiepcuoi gallery
//!
//! # Guestbook and RSVP
//! thiepcuoi wish --name "Lan" --message "Trăm năm hạnh phúc"
//! thiepcuoi confirm --name "Lan" --guests 2
//! thiepcuoi confirmations
//!
//! # Write the default invitation.json for editing
//! thiepcuoi config init
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use thiepcuoi_core::rsvp::{CONFIRM_THANKS, NETWORK_ALERT, VALIDATION_ALERT, WISH_THANKS};
use thiepcuoi_core::{
    config_path, find_event, submit_confirmation, submit_wish, ConfirmationForm,
    ConfirmationStore, HttpWishSender, InvitationConfig, InvitationError, WishForm, STORE_FILE,
};
use tokio_util::sync::CancellationToken;

/// Thiệp Cưới - wedding invitation
#[derive(Parser)]
#[command(name = "thiepcuoi")]
#[command(version = "0.1.0")]
#[command(about = "Thiệp Cưới - wedding invitation from the terminal")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: <data dir>/thiepcuoi)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Invitation config (default: <data dir>/invitation.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time left until the ceremony
    Countdown {
        /// Keep updating every second until the ceremony or Ctrl-C
        #[arg(short, long)]
        watch: bool,
    },

    /// List the ceremonies
    Events,

    /// Print (or open) the calendar link for a ceremony
    Calendar {
        /// Event id, e.g. event1
        event: String,

        /// Open the link in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Print (or open) the map link for a ceremony
    Map {
        /// Event id, e.g. event2
        event: String,

        /// Open the link in the default browser
        #[arg(long)]
        open: bool,
    },

    /// List the gallery photos in lightbox order
    Gallery,

    /// Send a wish to the guestbook
    Wish {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        message: String,
    },

    /// Confirm attendance
    Confirm {
        #[arg(short, long)]
        name: String,

        /// Party size
        #[arg(short, long)]
        guests: String,
    },

    /// List stored attendance confirmations
    Confirmations,

    /// Invitation config management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config as JSON
    Show,

    /// Write the default config to disk
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Get the default data directory (<data dir>/thiepcuoi)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("thiepcuoi")
}

fn open_link(url: &str) -> Result<()> {
    webbrowser::open(url).with_context(|| format!("failed to open {url}"))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config_file = cli.config.unwrap_or_else(|| config_path(&data_dir));
    let config = InvitationConfig::load(&config_file)?;

    tracing::debug!(data_dir = %data_dir.display(), "Starting");

    match cli.command {
        Commands::Countdown { watch } => {
            let countdown = config.countdown()?;
            println!("Đám cưới {}", config.couple());

            if !watch {
                let display = countdown.remaining();
                if display.finished {
                    println!("Ngày vui đã đến!");
                }
                println!("{}", display);
                return Ok(());
            }

            let cancel = CancellationToken::new();
            let mut ticks = countdown.spawn_ticker(cancel.clone());
            loop {
                let display = ticks.borrow_and_update().clone();
                println!("{}", display);
                if display.finished {
                    println!("Ngày vui đã đến!");
                    break;
                }
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        cancel.cancel();
                        break;
                    }
                    changed = ticks.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }
            }
        }

        Commands::Events => {
            if config.events.is_empty() {
                println!("No events.");
            }
            for event in &config.events {
                println!("{}: {}", event.id, event.name);
                println!(
                    "  When:  {}",
                    event.starts_at().format("%H:%M, %d/%m/%Y")
                );
                println!("  Where: {}", event.location);
                println!();
            }
        }

        Commands::Calendar { event, open } => {
            let event = find_event(&config.events, &event)?;
            let url = event.calendar_url();
            println!("{}", url);
            if open {
                open_link(&url)?;
                println!("Đã mở Google Calendar!");
            }
        }

        Commands::Map { event, open } => {
            let event = find_event(&config.events, &event)?;
            let url = event.map_url();
            println!("{}", url);
            if open {
                open_link(&url)?;
            }
        }

        Commands::Gallery => {
            let registry = thiepcuoi_core::ImageRegistry::build(&config.gallery);
            println!("Gallery ({} photos):", registry.len());
            for (i, image) in registry.iter().enumerate() {
                println!("  {:>2}. {} ({})", i + 1, image.source(), image.alt_text());
            }
        }

        Commands::Wish { name, message } => {
            let sender = HttpWishSender::new(&config.wish_endpoint);
            match submit_wish(&sender, &WishForm::new(name, message)).await {
                Ok(wish) => {
                    println!("{}", WISH_THANKS);
                    tracing::info!(name = %wish.name, "Wish sent");
                }
                Err(InvitationError::Validation(e)) => bail!("{VALIDATION_ALERT} ({e})"),
                Err(e @ InvitationError::Network(_)) => bail!("{NETWORK_ALERT} ({e})"),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Confirm { name, guests } => {
            let store = ConfirmationStore::open(data_dir.join(STORE_FILE))?;
            match submit_confirmation(&store, &ConfirmationForm::new(name, guests)) {
                Ok(confirmation) => {
                    println!("{}", CONFIRM_THANKS);
                    println!("  {} ({} khách)", confirmation.name, confirmation.number);
                }
                Err(InvitationError::Validation(e)) => bail!("{VALIDATION_ALERT} ({e})"),
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Confirmations => {
            let store = ConfirmationStore::open(data_dir.join(STORE_FILE))?;
            let confirmations = store.list()?;

            if confirmations.is_empty() {
                println!("No confirmations yet.");
            } else {
                let guests: u64 = confirmations.iter().map(|c| u64::from(c.number)).sum();
                println!("Confirmations ({}, {} guests):", confirmations.len(), guests);
                for c in &confirmations {
                    println!("  {} - {} ({})", c.name, c.number, c.date.to_rfc3339());
                }
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_file.exists() && !force {
                    bail!(
                        "{} already exists (use --force to overwrite)",
                        config_file.display()
                    );
                }
                InvitationConfig::default().save(&config_file)?;
                println!("Wrote {}", config_file.display());
            }
        },
    }

    Ok(())
}
