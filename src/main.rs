#![allow(non_snake_case)]

mod actions;
mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use herogallery_core::{logging, GalleryConfig};

/// Global gallery configuration, set from command line
static CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Initial state of the images toggle, set from command line
static IMAGES_ENABLED: OnceLock<bool> = OnceLock::new();

/// Get the gallery configuration (set from command line or default)
pub fn get_config() -> GalleryConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Whether tile images start enabled
pub fn get_images_enabled() -> bool {
    IMAGES_ENABLED.get().copied().unwrap_or(true)
}

/// Hero Gallery - browse Mobile Legends heroes
#[derive(Parser, Debug)]
#[command(name = "herogallery-desktop")]
#[command(about = "Hero Gallery - browse heroes with a 3D detail card")]
struct Args {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog source URL; repeat to set priority order
    #[arg(short, long = "source")]
    sources: Vec<String>,

    /// Skip all sources and show the bundled fallback catalog
    #[arg(long)]
    offline: bool,

    /// Start with tile images turned off
    #[arg(long)]
    no_images: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = match GalleryConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config, using defaults: {}", e);
            GalleryConfig::default()
        }
    };
    if !args.sources.is_empty() {
        config = config.with_sources(args.sources);
    }
    if args.offline {
        config = config.with_sources(Vec::new());
    }

    tracing::info!(sources = ?config.sources, "Starting Hero Gallery");

    let _ = CONFIG.set(config);
    let _ = IMAGES_ENABLED.set(!args.no_images);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Hero Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
