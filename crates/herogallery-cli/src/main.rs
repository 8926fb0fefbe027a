//! Hero Gallery CLI
//!
//! Headless front-end over the same catalog loader the desktop app uses.
//!
//! ## Usage
//!
//! ```bash
//! # List the catalog (tries every configured source, then falls back)
//! herogallery list
//!
//! # Same, as JSON
//! herogallery list --json
//!
//! # Show one hero's detail
//! herogallery show 3
//!
//! # Skip the network entirely
//! herogallery --offline list
//!
//! # Print configured sources in priority order
//! herogallery sources
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use herogallery_core::{logging, CatalogLoader, GalleryConfig, LoadOutcome, VoiceAction};

/// Hero Gallery - browse the hero catalog
#[derive(Parser)]
#[command(name = "herogallery")]
#[command(version = "0.1.0")]
#[command(about = "Hero Gallery - load and inspect the hero catalog")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (JSON); defaults to <config dir>/herogallery/config.json
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog source URL; repeat to set priority order (replaces config)
    #[arg(short, long = "source", global = true)]
    sources: Vec<String>,

    /// Don't contact any source; use the bundled fallback catalog
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every hero in the catalog
    List {
        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Show one hero's detail
    Show {
        /// Catalog index (as printed by `list`)
        index: usize,
    },

    /// Print configured sources in priority order
    Sources,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = GalleryConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?;
    if !cli.sources.is_empty() {
        config = config.with_sources(cli.sources.clone());
    }
    if cli.offline {
        config = config.with_sources(Vec::new());
    }

    match cli.command {
        Commands::Sources => {
            if config.sources.is_empty() {
                println!("No sources configured (fallback catalog only).");
            }
            for (i, source) in config.sources.iter().enumerate() {
                println!("{}. {}", i + 1, source);
            }
        }
        Commands::List { json } => {
            let outcome = load(&config).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.records)?);
            } else {
                eprintln!("{}", outcome.status_message());
                for (i, record) in outcome.records.iter().enumerate() {
                    if record.role.is_empty() {
                        println!("{}. {}", i, record.name);
                    } else {
                        println!("{}. {} ({})", i, record.name, record.role);
                    }
                }
            }
        }
        Commands::Show { index } => {
            let outcome = load(&config).await;
            let Some(record) = outcome.records.get(index) else {
                bail!(
                    "Index {} out of range (catalog has {} heroes)",
                    index,
                    outcome.records.len()
                );
            };
            println!("{}", record.name);
            println!("  {}", record.role_label());
            println!("  {}", record.description());
            println!("  Wiki:  {}", record.wiki_link(&config.wiki_base));
            println!("  Image: {}", record.image);
            match herogallery_core::voice_action(record, config.voice_volume) {
                VoiceAction::Play { url, .. } => println!("  Voice: {}", url),
                VoiceAction::Unavailable { message } => println!("  Voice: {}", message),
            }
        }
    }

    Ok(())
}

async fn load(config: &GalleryConfig) -> LoadOutcome {
    let loader = CatalogLoader::from_config(config);
    tracing::debug!(sources = ?loader.source_labels(), "Loading catalog");
    loader.load().await
}
