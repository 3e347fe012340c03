//! CLI administration tool for shortlink.
//!
//! Talks to the configured backend directly, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL for one hour
//! cargo run --bin admin -- shorten https://example.com/a --ttl 60
//!
//! # Look a code up
//! cargo run --bin admin -- resolve 1
//! cargo run --bin admin -- info 1
//!
//! # Offline conversions
//! cargo run --bin admin -- encode 1000000
//! cargo run --bin admin -- decode 4c92
//!
//! # Check the backend
//! cargo run --bin admin -- ping
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (`REDIS_URL`, `REDIS_TIMEOUT_MS`, `KEY_PREFIX`, ...).
//! `STORE_BACKEND=memory` is accepted but only useful for trying commands out.

use shortlink::application::services::ShortenerService;
use shortlink::config::{self, Config};
use shortlink::domain::keys::Keyspace;
use shortlink::infrastructure::store::KeyValueStore;
use shortlink::server::connect_store;
use shortlink::utils::base62;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL
    Shorten {
        url: String,

        /// Lifetime in minutes (0 stores without expiry)
        #[arg(short, long, default_value_t = 0)]
        ttl: i64,
    },

    /// Print the original URL for a code
    Resolve { code: String },

    /// Print the detail record for a code
    Info { code: String },

    /// Encode a sequence number as a short code
    Encode { value: u64 },

    /// Decode a short code into its sequence number
    Decode { code: String },

    /// Check backend connectivity
    Ping,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { value } => encode(value)?,
        Commands::Decode { code } => decode(&code)?,
        Commands::Shorten { url, ttl } => {
            let backend = Backend::connect().await?;
            shorten(&backend, &url, ttl).await?;
        }
        Commands::Resolve { code } => {
            let backend = Backend::connect().await?;
            let url = backend
                .shortener
                .resolve(&code)
                .await
                .context("Failed to resolve code")?;
            println!("{}", url);
        }
        Commands::Info { code } => {
            let backend = Backend::connect().await?;
            info(&backend, &code).await?;
        }
        Commands::Ping => {
            let backend = Backend::connect().await?;
            if backend.store.health_check().await {
                println!("{}", "✓ Backend reachable".green());
            } else {
                println!("{}", "✗ Backend unreachable".red());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Connected backend plus an engine over it.
struct Backend {
    config: Config,
    store: Arc<dyn KeyValueStore>,
    shortener: ShortenerService<dyn KeyValueStore>,
}

impl Backend {
    async fn connect() -> Result<Self> {
        let config = config::load_from_env()?;
        let store = connect_store(&config).await?;
        let shortener = ShortenerService::new(store.clone(), Keyspace::new(&config.key_prefix));

        Ok(Self {
            config,
            store,
            shortener,
        })
    }
}

async fn shorten(backend: &Backend, url: &str, ttl: i64) -> Result<()> {
    let code = backend
        .shortener
        .shorten(url, ttl)
        .await
        .context("Failed to shorten URL")?;

    println!("{}", "✓ Short link ready".green().bold());
    println!("  Code:      {}", code.as_str().bright_white().bold());
    println!(
        "  Short URL: {}/{}",
        backend.config.base_url.trim_end_matches('/'),
        code
    );
    Ok(())
}

async fn info(backend: &Backend, code: &str) -> Result<()> {
    let detail = backend
        .shortener
        .info(code)
        .await
        .context("Failed to load info")?;

    println!("{}", format!("Short link {}", code).bright_blue().bold());
    println!("  URL:        {}", detail.url);
    println!("  Created at: {}", detail.created_at.to_rfc3339());
    match detail.expires_at() {
        Some(at) => println!(
            "  Expires at: {} ({} min)",
            at.to_rfc3339(),
            detail.expiration_in_minutes
        ),
        None => println!("  Expires at: {}", "never".dimmed()),
    }
    Ok(())
}

fn encode(value: u64) -> Result<()> {
    if value > base62::MAX_VALUE {
        anyhow::bail!("{} exceeds the supported range (max {})", value, base62::MAX_VALUE);
    }
    println!("{}", base62::encode(value));
    Ok(())
}

fn decode(code: &str) -> Result<()> {
    let value = base62::decode(code).with_context(|| format!("Invalid short code '{}'", code))?;
    println!("{}", value);
    Ok(())
}
