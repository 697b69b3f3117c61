//! CLI administration tool for tinyalias.
//!
//! Manages aliases directly against the database, through the same save,
//! resolve and delete workflows the HTTP API uses.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a generated alias
//! cargo run --bin admin -- url add https://example.com
//!
//! # Save under a chosen alias
//! cargo run --bin admin -- url add https://example.com --alias ex
//!
//! # Show where an alias points
//! cargo run --bin admin -- url get ex
//!
//! # Delete an alias
//! cargo run --bin admin -- url delete ex
//!
//! # List the newest aliases
//! cargo run --bin admin -- url list --limit 20
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DATABASE_PATH`: SQLite database (default: `storage/tinyalias.db`)

use tinyalias::application::services::UrlService;
use tinyalias::config::Config;
use tinyalias::domain::entities::NewUrl;
use tinyalias::error::AppError;
use tinyalias::infrastructure::persistence::{PoolSettings, SqliteUrlRepository, sqlite_pool};
use tinyalias::state::SqliteUrlService;
use tinyalias::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// CLI tool for managing tinyalias.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Save a URL
    Add {
        /// Target URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the URL stored under an alias
    Get { alias: String },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List the most recent aliases
    List {
        #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
        limit: u32,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = PoolSettings {
        database_url: Config::load_database_url(),
        max_connections: 1,
        busy_timeout: Duration::from_secs(5),
        acquire_timeout: Duration::from_secs(30),
        idle_timeout: Duration::from_secs(600),
        connect_retries: 0,
    };

    let pool = sqlite_pool::connect(&settings)
        .await
        .context("Failed to connect to database")?;
    sqlite_pool::migrate(&pool)
        .await
        .context("Failed to migrate")?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, pool: &SqlitePool) -> Result<()> {
    let service = url_service(pool)?;

    match action {
        UrlAction::Add { url, alias } => add_url(&service, url, alias).await?,
        UrlAction::Get { alias } => get_url(&service, &alias).await?,
        UrlAction::Delete { alias, yes } => delete_url(&service, &alias, yes).await?,
        UrlAction::List { limit } => list_urls(&service, limit).await?,
    }

    Ok(())
}

fn url_service(pool: &SqlitePool) -> Result<SqliteUrlService> {
    let repository = Arc::new(SqliteUrlRepository::new(pool.clone(), QUERY_TIMEOUT));
    let generator = Arc::new(
        RandomAliasGenerator::from_os_entropy().context("Failed to seed alias generator")?,
    );

    Ok(UrlService::new(repository, generator))
}

async fn add_url(service: &SqliteUrlService, url: String, alias: Option<String>) -> Result<()> {
    let saved = service
        .save_url(NewUrl::new(url.clone(), alias.unwrap_or_default()))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to save url: {}", e))?;

    println!("{}", "✅ Saved".green().bold());
    println!("  Alias: {}", saved.alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());
    println!("  ID:    {}", saved.id.to_string().bright_black());

    Ok(())
}

async fn get_url(service: &SqliteUrlService, alias: &str) -> Result<()> {
    let url = service
        .resolve_url(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve '{}': {}", alias, e))?;

    println!("  {} → {}", alias.bright_yellow(), url.cyan());

    Ok(())
}

/// Deletes an alias after confirmation (default: No).
async fn delete_url(service: &SqliteUrlService, alias: &str, skip_confirm: bool) -> Result<()> {
    match service.resolve_url(alias).await {
        Ok(url) => {
            println!("  Alias: {}", alias.bright_yellow());
            println!("  URL:   {}", url.cyan());
            println!();
        }
        Err(AppError::NotFound(_)) => {
            println!("{}", "⚠️  Alias not found, nothing to delete".yellow());
            return Ok(());
        }
        Err(e) => anyhow::bail!("Failed to look up '{}': {}", alias, e),
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_url(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete '{}': {}", alias, e))?;

    println!("{}", "✅ Alias deleted".green().bold());

    Ok(())
}

/// Lists the newest aliases.
///
/// # Output Format
///
/// ```text
///   ID    Alias            Created            URL
///   ──────────────────────────────────────────────────────────────
///   12    docs             2025-01-15 10:30   https://docs.rs
/// ```
async fn list_urls(service: &SqliteUrlService, limit: u32) -> Result<()> {
    let records = service
        .list_urls(i64::from(limit))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list urls: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No aliases found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<16} {:<18} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<5} {:<16} {:<18} {}",
            record.id.to_string().bright_black(),
            record.alias.bright_yellow(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.url.cyan()
        );
    }

    println!();
    println!("  Total: {}", records.len().to_string().bright_white().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite:  {}", version.bright_white());
            println!("  Aliases: {}", count.to_string().bright_green().bold());
        }
    }

    Ok(())
}
