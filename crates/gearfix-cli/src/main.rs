//! One-shot search runner for manual testing: resolves a location, sweeps
//! the provider, and prints the ranked result as JSON.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gearfix_core::LocationQuery;
use gearfix_engine::ServiceLocator;

#[derive(Debug, Parser)]
#[command(name = "gearfix-cli")]
#[command(about = "Find nearby repair services for a piece of equipment")]
struct Cli {
    /// Latitude (requires --lng).
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude (requires --lat).
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,
    /// Postal code / pincode.
    #[arg(long, conflicts_with_all = ["lat", "city", "landmark", "address"])]
    pincode: Option<String>,
    /// City name.
    #[arg(long, conflicts_with_all = ["lat", "landmark", "address"])]
    city: Option<String>,
    /// Landmark name.
    #[arg(long, conflicts_with_all = ["lat", "address"])]
    landmark: Option<String>,
    /// Free-text street address.
    #[arg(long, conflicts_with = "lat")]
    address: Option<String>,

    /// Equipment category (electronics, industrial, hvac, automotive,
    /// power, or an equipment name like "laptop"). Unknown values search
    /// with generic repair keywords.
    #[arg(long, default_value = "all")]
    category: String,

    /// Search radius in metres, clamped to [1000, 50000].
    #[arg(long, default_value_t = 5000)]
    radius: u32,
}

impl Cli {
    fn location_query(&self) -> anyhow::Result<LocationQuery> {
        if let (Some(lat), Some(lng)) = (self.lat, self.lng) {
            return Ok(LocationQuery::Coordinates { lat, lng });
        }
        if let Some(code) = &self.pincode {
            return Ok(LocationQuery::PostalCode(code.clone()));
        }
        if let Some(city) = &self.city {
            return Ok(LocationQuery::City(city.clone()));
        }
        if let Some(landmark) = &self.landmark {
            return Ok(LocationQuery::Landmark(landmark.clone()));
        }
        if let Some(address) = &self.address {
            return Ok(LocationQuery::Address(address.clone()));
        }
        anyhow::bail!("provide a location: --lat/--lng, --pincode, --city, --landmark, or --address");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = gearfix_core::load_app_config().context("loading configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    let query = cli.location_query()?;

    let locator = ServiceLocator::from_config(&config)
        .context("set GEARFIX_PLACES_API_KEY to enable provider searches")?;

    let result = locator
        .locate_services(&query, &cli.category, cli.radius)
        .await?;

    tracing::info!(
        places = result.places.len(),
        keywords = result.keywords_used,
        "search complete"
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
