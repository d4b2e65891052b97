//! Command-line front end for the gurume search core.
//!
//! Stands in for the mobile presentation layer: it wires config, the
//! HotPepper client, and the orchestrator together and renders snapshots as
//! text.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gurume_core::{AppConfig, Coordinate};
use gurume_hotpepper::{
    budget_to_code, genre_to_code, HotpepperClient, RadiusCode, Restaurant, BUDGET_ANY, GENRE_ALL,
};
use gurume_search::{InitialSearch, SearchEvent, SearchOrchestrator, SearchSnapshot};

#[derive(Debug, Parser)]
#[command(name = "gurume")]
#[command(about = "Search nearby restaurants via the HotPepper Gourmet API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Everything around a coordinate, no filters.
    Nearby {
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lng: Option<f64>,
        /// Search radius code 1-5 (300m/500m/1km/2km/3km).
        #[arg(long)]
        radius: Option<u8>,
    },
    /// Keyword search with optional genre/budget filters.
    Search {
        keyword: String,
        /// Genre label, e.g. "ラーメン"; "すべて" means no filter.
        #[arg(long)]
        genre: Option<String>,
        /// Budget band label, e.g. "〜500円"; "指定なし" means no filter.
        #[arg(long)]
        budget: Option<String>,
        /// Search radius code 1-5 (300m/500m/1km/2km/3km).
        #[arg(long)]
        radius: Option<u8>,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lng: Option<f64>,
    },
    /// Look up a single shop by its provider ID.
    Detail { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = gurume_core::load_app_config().context("configuration error")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();
    tracing::debug!(?config, "configuration loaded");

    let client = HotpepperClient::with_base_url(
        &config.hotpepper_api_key,
        config.request_timeout_secs,
        &config.api_base_url,
    )?;

    match cli.command {
        Commands::Nearby { lat, lng, radius } => {
            let fix = resolve_fix(lat, lng, &config)?;
            let mut orchestrator =
                SearchOrchestrator::new(InitialSearch::Unfiltered, config.fallback_coordinate);
            if let Some(radius) = radius {
                orchestrator.apply(SearchEvent::RadiusChanged(parse_radius(radius)?));
            }
            orchestrator
                .dispatch(SearchEvent::LocationReady(fix), &client)
                .await;
            render_snapshot(orchestrator.snapshot())
        }
        Commands::Search {
            keyword,
            genre,
            budget,
            radius,
            lat,
            lng,
        } => {
            let fix = resolve_fix(lat, lng, &config)?;
            let mut orchestrator =
                SearchOrchestrator::new(InitialSearch::Unfiltered, Some(fix));
            if let Some(radius) = radius {
                orchestrator.apply(SearchEvent::RadiusChanged(parse_radius(radius)?));
            }
            if let Some(genre) = genre {
                if genre != GENRE_ALL && genre_to_code(&genre).is_empty() {
                    tracing::warn!(genre, "unknown genre label, searching without genre filter");
                }
                orchestrator.apply(SearchEvent::GenreSelected(genre));
            }
            if let Some(budget) = budget {
                if budget != BUDGET_ANY && budget_to_code(&budget).is_empty() {
                    tracing::warn!(budget, "unknown budget label, searching without budget filter");
                }
                orchestrator.apply(SearchEvent::BudgetSelected(budget));
            }
            orchestrator
                .dispatch(SearchEvent::KeywordSubmitted(keyword), &client)
                .await;
            render_snapshot(orchestrator.snapshot())
        }
        Commands::Detail { id } => {
            let shop = client.get_restaurant_detail(&id).await?;
            render_detail(&shop);
            Ok(())
        }
    }
}

/// The CLI's stand-in for a device fix: explicit flags beat the configured
/// fallback coordinate.
fn resolve_fix(lat: Option<f64>, lng: Option<f64>, config: &AppConfig) -> anyhow::Result<Coordinate> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Coordinate::new(lat, lng)),
        (None, None) => config.fallback_coordinate.ok_or_else(|| {
            anyhow!("no coordinate: pass --lat/--lng or set GURUME_FALLBACK_LAT/LNG")
        }),
        _ => bail!("--lat and --lng must be given together"),
    }
}

fn parse_radius(code: u8) -> anyhow::Result<RadiusCode> {
    RadiusCode::from_code(code)
        .ok_or_else(|| anyhow!("radius code must be 1-5, got {code}"))
}

fn render_snapshot(snapshot: &SearchSnapshot) -> anyhow::Result<()> {
    if let Some(err) = &snapshot.error {
        bail!("search failed: {err}");
    }
    if snapshot.restaurants.is_empty() {
        // Valid empty result, distinct from the error path above.
        println!("No restaurants matched this search.");
        return Ok(());
    }
    println!("{} restaurants found:", snapshot.restaurants.len());
    for shop in &snapshot.restaurants {
        println!("  {}  [{}] {} — {}", shop.id, shop.genre.name, shop.name, shop.access);
    }
    Ok(())
}

fn render_detail(shop: &Restaurant) {
    println!("{} ({})", shop.name, shop.id);
    println!("  genre:   {} — {}", shop.genre.name, shop.genre.catch_copy);
    println!("  address: {}", shop.address);
    println!("  access:  {}", shop.access);
    println!("  open:    {}", shop.open);
    if let Some(close) = &shop.close {
        println!("  closed:  {close}");
    }
    println!("  budget:  {} (average {})", shop.budget.name, shop.budget.average);
    if let Some(tel) = &shop.tel {
        println!("  tel:     {tel}");
    }
    println!("  url:     {}", shop.urls.pc);
}
