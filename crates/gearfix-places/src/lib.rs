pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use normalize::normalize_place;
pub use types::{GeocodeHit, RawPlace};
