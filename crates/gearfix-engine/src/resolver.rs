//! Resolution of ambiguous location input into a canonical search origin.

use gearfix_core::{geo, LocationQuery, ResolvedLocation};

use crate::provider::Geocoder;
use crate::LocateError;

/// Resolves a [`LocationQuery`] to coordinates.
///
/// Coordinate input is range-validated locally; everything else is handed to
/// the geocoding provider as-is, exactly once — no retries, the caller may
/// re-request. The resulting `source_label` records which variant produced
/// the location, e.g. `"pincode: 380001 (Ahmedabad, Gujarat, India)"`.
///
/// # Errors
///
/// - [`LocateError::InvalidCoordinates`] for out-of-range coordinate input.
/// - [`LocateError::LocationNotFound`] when the geocoder has no match or
///   the geocode call itself fails (the failure is logged; to the caller an
///   unreachable geocoder and an unknown place read the same).
pub async fn resolve<G: Geocoder>(
    geocoder: &G,
    query: &LocationQuery,
) -> Result<ResolvedLocation, LocateError> {
    let (label, raw) = match query {
        LocationQuery::Coordinates { lat, lng } => {
            if !geo::valid_coordinates(*lat, *lng) {
                return Err(LocateError::InvalidCoordinates {
                    lat: *lat,
                    lng: *lng,
                });
            }
            return Ok(ResolvedLocation {
                latitude: *lat,
                longitude: *lng,
                source_label: format!("coordinates: {lat}, {lng}"),
            });
        }
        LocationQuery::PostalCode(code) => ("pincode", code),
        LocationQuery::City(city) => ("city", city),
        LocationQuery::Landmark(landmark) => ("landmark", landmark),
        LocationQuery::Address(address) => ("address", address),
    };

    let hit = match geocoder.geocode(raw).await {
        Ok(hit) => hit,
        Err(e) => {
            tracing::warn!(input = %raw, error = %e, "geocode call failed");
            None
        }
    };

    let hit = hit.ok_or_else(|| LocateError::LocationNotFound { input: raw.clone() })?;

    Ok(ResolvedLocation {
        latitude: hit.latitude,
        longitude: hit.longitude,
        source_label: format!("{label}: {raw} ({})", hit.formatted_address),
    })
}

#[cfg(test)]
mod tests {
    use gearfix_places::{GeocodeHit, PlacesError};

    use super::*;

    /// Stub geocoder returning a canned answer.
    struct StubGeocoder {
        hit: Option<GeocodeHit>,
        fail: bool,
    }

    impl Geocoder for StubGeocoder {
        async fn geocode(&self, _query: &str) -> Result<Option<GeocodeHit>, PlacesError> {
            if self.fail {
                return Err(PlacesError::ApiError {
                    status: "OVER_QUERY_LIMIT".to_owned(),
                    message: "quota exceeded".to_owned(),
                });
            }
            Ok(self.hit.clone())
        }
    }

    fn ahmedabad() -> StubGeocoder {
        StubGeocoder {
            hit: Some(GeocodeHit {
                latitude: 23.0225,
                longitude: 72.5714,
                formatted_address: "Ahmedabad, Gujarat, India".to_owned(),
            }),
            fail: false,
        }
    }

    #[tokio::test]
    async fn valid_coordinates_resolve_without_geocoding() {
        let geocoder = StubGeocoder {
            hit: None,
            fail: true,
        };
        let resolved = resolve(
            &geocoder,
            &LocationQuery::Coordinates {
                lat: 45.0,
                lng: 45.0,
            },
        )
        .await
        .unwrap();
        assert!((resolved.latitude - 45.0).abs() < f64::EPSILON);
        assert_eq!(resolved.source_label, "coordinates: 45, 45");
    }

    #[tokio::test]
    async fn out_of_range_latitude_is_invalid() {
        let geocoder = ahmedabad();
        let err = resolve(
            &geocoder,
            &LocationQuery::Coordinates { lat: 91.0, lng: 0.0 },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, LocateError::InvalidCoordinates { .. }));
    }

    #[tokio::test]
    async fn out_of_range_longitude_is_invalid() {
        let geocoder = ahmedabad();
        let err = resolve(
            &geocoder,
            &LocationQuery::Coordinates {
                lat: 45.0,
                lng: 200.0,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, LocateError::InvalidCoordinates { .. }));
    }

    #[tokio::test]
    async fn postal_code_resolves_with_provenance_label() {
        let geocoder = ahmedabad();
        let resolved = resolve(&geocoder, &LocationQuery::PostalCode("380001".to_owned()))
            .await
            .unwrap();
        assert!((resolved.latitude - 23.0225).abs() < 1e-9);
        assert_eq!(
            resolved.source_label,
            "pincode: 380001 (Ahmedabad, Gujarat, India)"
        );
    }

    #[tokio::test]
    async fn landmark_label_uses_landmark_prefix() {
        let geocoder = ahmedabad();
        let resolved = resolve(
            &geocoder,
            &LocationQuery::Landmark("Sabarmati Ashram".to_owned()),
        )
        .await
        .unwrap();
        assert!(resolved.source_label.starts_with("landmark: Sabarmati Ashram"));
    }

    #[tokio::test]
    async fn geocode_miss_is_location_not_found() {
        let geocoder = StubGeocoder {
            hit: None,
            fail: false,
        };
        let err = resolve(&geocoder, &LocationQuery::City("Atlantis".to_owned()))
            .await
            .unwrap_err();
        assert!(
            matches!(err, LocateError::LocationNotFound { ref input } if input == "Atlantis")
        );
    }

    #[tokio::test]
    async fn geocode_failure_is_location_not_found() {
        let geocoder = StubGeocoder {
            hit: None,
            fail: true,
        };
        let err = resolve(&geocoder, &LocationQuery::City("Ahmedabad".to_owned()))
            .await
            .unwrap_err();
        assert!(matches!(err, LocateError::LocationNotFound { .. }));
    }
}
