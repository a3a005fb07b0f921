#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Config file override, set from command line
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the invitation config path (set from command line or inside the data dir)
pub fn get_config_path() -> PathBuf {
    CONFIG_PATH
        .get()
        .cloned()
        .unwrap_or_else(|| thiepcuoi_core::config_path(get_data_dir()))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("thiepcuoi")
}

/// Thiệp Cưới - wedding invitation
#[derive(Parser, Debug)]
#[command(name = "thiepcuoi-desktop")]
#[command(about = "Thiệp Cưới - wedding invitation page")]
struct Args {
    /// Data directory for the RSVP store and invitation.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Invitation config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let _ = DATA_DIR.set(data_dir.clone());
    if let Some(config) = args.config {
        let _ = CONFIG_PATH.set(config);
    }

    tracing::info!(data_dir = %data_dir.display(), "Starting invitation window");

    // Portrait window, like a phone held upright
    let window_width = 480.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Thiệp Cưới")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
