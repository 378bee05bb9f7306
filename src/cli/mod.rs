//! Command-line interface for tatami.
//!
//! Provides commands for decoding stored values, resolving content keys,
//! normalizing videos and bios, loading whole sections, and managing the
//! image library.

use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::adapters::{ContentStore, ImageLibrary, InstructorSource, MemoryStore, SiteApi};
use crate::config::{self, ResolvedConfig};
use crate::core::{normalize_bio, normalize_video, BioInput, ContentFetcher};
use crate::domain::{ContentEnvelope, ContentKey, ImagePlacement, ResourceId};
use crate::sections::SiteSections;

/// tatami - content resolution for the gym site
#[derive(Parser, Debug)]
#[command(name = "tatami")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read content from a JSON snapshot instead of the site API
    #[arg(long, global = true, env = "TATAMI_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a raw stored value (no fetch)
    Decode {
        /// Raw value (reads from stdin if not provided)
        raw: Option<String>,
    },

    /// Fetch and resolve a content key
    Resolve {
        /// Content key, e.g. wrestling_hero_image
        key: String,
    },

    /// Normalize a video URL to its embed form
    Video {
        /// Video URL or reference
        input: String,
    },

    /// Render a bio to sanitized HTML
    Bio {
        /// Shorthand tokens or a single HTML string (reads stdin if empty)
        tokens: Vec<String>,
    },

    /// Load a whole section and print its view model as JSON
    Section {
        #[arg(value_enum)]
        name: SectionName,
    },

    /// Manage the image library
    Images {
        #[command(subcommand)]
        command: ImageCommands,
    },

    /// Show resolved configuration (debug)
    Config,
}

#[derive(Subcommand, Debug)]
pub enum ImageCommands {
    /// List library images
    List,

    /// Delete an image by id
    Delete {
        /// Image id
        id: String,
    },
}

/// Sections that can be loaded from the CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SectionName {
    Facility,
    Wrestling,
    Instagram,
    Instructors,
}

/// Store backends chosen from flags and config
struct Backend {
    content: Arc<dyn ContentStore>,
    images: Arc<dyn ImageLibrary>,
    instructors: Arc<dyn InstructorSource>,
}

impl Backend {
    async fn open(snapshot: Option<PathBuf>, config: &ResolvedConfig) -> Result<Self> {
        match snapshot.or_else(|| config.snapshot.clone()) {
            Some(path) => {
                let store = Arc::new(
                    MemoryStore::load(&path)
                        .await
                        .with_context(|| format!("Failed to load snapshot: {}", path.display()))?,
                );
                Ok(Self {
                    content: store.clone(),
                    images: store.clone(),
                    instructors: store,
                })
            }
            None => {
                let api = Arc::new(
                    SiteApi::from_config(config).context("Failed to create HTTP client")?,
                );
                Ok(Self {
                    content: api.clone(),
                    images: api.clone(),
                    instructors: api,
                })
            }
        }
    }
}

/// Output of `tatami resolve`
#[derive(Debug, Serialize)]
struct Resolution {
    key: ContentKey,
    /// Backend the value was read from
    store: String,
    envelope: ContentEnvelope,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<ImagePlacement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_url: Option<String>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Decode { raw } => decode(raw),
            Commands::Video { input } => {
                println!("{}", normalize_video(&input));
                Ok(())
            }
            Commands::Bio { tokens } => bio(tokens),
            Commands::Config => show_config(),
            Commands::Resolve { key } => resolve(self.snapshot, &key).await,
            Commands::Section { name } => section(self.snapshot, name).await,
            Commands::Images { command } => images(self.snapshot, command).await,
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Decode a raw value and print the envelope
fn decode(raw: Option<String>) -> Result<()> {
    let raw = match raw {
        Some(raw) => raw,
        None => read_stdin()?,
    };
    print_json(&ContentEnvelope::decode(Some(&raw)))
}

/// Render a bio from arguments or stdin
fn bio(tokens: Vec<String>) -> Result<()> {
    let input = match tokens.len() {
        0 => BioInput::Text(read_stdin()?),
        1 => BioInput::Text(tokens.into_iter().next().unwrap_or_default()),
        _ => BioInput::Tokens(tokens),
    };
    println!("{}", normalize_bio(&input));
    Ok(())
}

/// Fetch one key and show every resolution of it
async fn resolve(snapshot: Option<PathBuf>, key: &str) -> Result<()> {
    let config = config::config()?;
    let backend = Backend::open(snapshot, config).await?;
    let fetcher = ContentFetcher::new(backend.content);

    let key = ContentKey::new(key);
    let outcome = fetcher.fetch_one(&key).await;
    let envelope = outcome.envelope();

    let resolution = Resolution {
        image: ImagePlacement::resolve(&envelope),
        video_url: envelope.value().map(normalize_video),
        store: fetcher.store_name().to_string(),
        key,
        envelope,
    };

    print_json(&outcome)?;
    print_json(&resolution)
}

/// Load a section view model
async fn section(snapshot: Option<PathBuf>, name: SectionName) -> Result<()> {
    let config = config::config()?;
    let backend = Backend::open(snapshot, config).await?;
    let sections = SiteSections::new(
        ContentFetcher::new(backend.content),
        backend.instructors,
        Arc::new(config.defaults.clone()),
    );

    match name {
        SectionName::Facility => print_json(&sections.facility().await),
        SectionName::Wrestling => print_json(&sections.wrestling().await),
        SectionName::Instagram => print_json(&sections.instagram().await),
        SectionName::Instructors => print_json(&sections.instructors().await),
    }
}

/// Image library commands
async fn images(snapshot: Option<PathBuf>, command: ImageCommands) -> Result<()> {
    let config = config::config()?;
    let backend = Backend::open(snapshot, config).await?;

    let result = match command {
        ImageCommands::List => backend.images.list_images().await.map(|images| {
            if images.is_empty() {
                println!("No images found");
            }
            for image in images {
                println!("{:<8} {}", image.id.to_string(), image.thumbnail());
            }
        }),
        ImageCommands::Delete { id } => {
            let id = match id.parse::<i64>() {
                Ok(n) => ResourceId::Number(n),
                Err(_) => ResourceId::Text(id),
            };
            backend.images.delete_image(&id).await.map(|()| {
                println!("Deleted image {}", id);
            })
        }
    };

    result.map_err(|e| {
        tracing::error!(error = %e, "Image library action failed");
        anyhow::anyhow!(e.user_message())
    })
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("API base URL: {}", config.api_base_url);
    println!("Timeout: {}s", config.timeout_seconds);
    match &config.snapshot {
        Some(path) => println!("Snapshot: {}", path.display()),
        None => println!("Snapshot: (none)"),
    }
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }
    println!("\nSection defaults:");
    println!("{}", serde_yaml::to_string(&config.defaults)?);

    Ok(())
}
