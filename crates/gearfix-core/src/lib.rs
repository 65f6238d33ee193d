pub mod app_config;
pub mod config;
pub mod geo;
pub mod types;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{distance_km, valid_coordinates};
pub use types::{
    BusinessStatus, CandidatePlace, LocationQuery, ResolvedLocation, ScoredPlace, SearchResult,
};

/// Errors raised while loading or validating application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
