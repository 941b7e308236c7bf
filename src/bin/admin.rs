//! CLI administration tool for wanderlust.
//!
//! Provides commands for seeding data, viewing counts, repairing review
//! references and checking the database without going through the site.
//!
//! # Usage
//!
//! ```bash
//! # Insert the sample listings
//! cargo run --bin admin -- seed
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Drop review ids that no longer name a review
//! cargo run --bin admin -- reviews prune
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use wanderlust::application::services::ReviewService;
use wanderlust::config::Config;
use wanderlust::domain::repositories::{ListingRepository, ReviewRepository};
use wanderlust::infrastructure::persistence::{PgListingRepository, PgReviewRepository};
use wanderlust::utils::sample_data::sample_listings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing wanderlust.
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
    /// Insert the sample listings
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show listing and review counts
    Stats,

    /// Review maintenance
    Reviews {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// Remove review ids that name no stored review from every listing
    Prune {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Seed { yes } => seed(&pool, yes).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Reviews { action } => handle_review_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Inserts [`sample_listings`] after confirmation.
///
/// Existing listings are kept; running it twice inserts the samples twice.
async fn seed(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Listings".bright_blue().bold());
    println!();

    let repo = PgListingRepository::new(Arc::new(pool.clone()));
    let samples = sample_listings();
    let existing = repo.count().await?;

    println!(
        "  {} sample listings will be added to {} existing.",
        samples.len().to_string().cyan(),
        existing.to_string().cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert sample listings?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    for sample in samples {
        let listing = repo
            .create(sample)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to insert listing: {}", e))?;

        println!(
            "  {:<5} {}",
            listing.id.to_string().bright_black(),
            listing.title.cyan()
        );
    }

    println!();
    println!("{}", "✅ Sample listings inserted".green().bold());
    println!();

    Ok(())
}

/// Displays listing and review counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let listings_count = PgListingRepository::new(pool.clone()).count().await?;
    let reviews_count = PgReviewRepository::new(pool).count().await?;

    println!(
        "  Listings: {}",
        listings_count.to_string().bright_green().bold()
    );
    println!(
        "  Reviews:  {}",
        reviews_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Dispatches review maintenance commands.
async fn handle_review_action(action: ReviewAction, pool: &PgPool) -> Result<()> {
    match action {
        ReviewAction::Prune { yes } => prune_reviews(pool, yes).await,
    }
}

/// Removes dangling review ids left behind by interrupted review writes.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
/// - Only listing references are changed; no review record is deleted
async fn prune_reviews(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Prune Review References".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove review ids that name no stored review?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let pool = Arc::new(pool.clone());
    let service = ReviewService::new(
        Arc::new(PgListingRepository::new(pool.clone())),
        Arc::new(PgReviewRepository::new(pool)),
    );

    let removed = service
        .prune_orphans()
        .await
        .map_err(|e| anyhow::anyhow!("Prune failed: {}", e))?;

    if removed == 0 {
        println!("{}", "✅ No dangling review references".green().bold());
    } else {
        println!(
            "{} {}",
            "✅ Removed dangling references:".green().bold(),
            removed.to_string().bright_white().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
