//! Great-circle distance and coordinate validation.

/// Mean Earth radius in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two coordinate pairs.
///
/// Pure and deterministic. Returns exactly `0.0` for coincident points and
/// stays numerically stable near the antipodal case, where naive spherical
/// law-of-cosines formulations lose precision.
#[must_use]
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    if lat1 == lat2 && lng1 == lng2 {
        return 0.0;
    }

    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Clamp guards against a > 1 from floating-point rounding at antipodes.
    let c = 2.0 * a.min(1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Returns `true` when `lat` is within [-90, 90] and `lng` within
/// [-180, 180].
#[must_use]
pub fn valid_coordinates(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero_distance() {
        assert_eq!(distance_km(23.0225, 72.5714, 23.0225, 72.5714), 0.0);
    }

    #[test]
    fn known_city_pair_distance() {
        // Ahmedabad -> Mumbai is roughly 440 km great-circle.
        let d = distance_km(23.0225, 72.5714, 19.0760, 72.8777);
        assert!((430.0..460.0).contains(&d), "got {d}");
    }

    #[test]
    fn short_hop_distance() {
        // ~1 degree of latitude is ~111 km.
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((110.0..112.5).contains(&d), "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        let half_circumference = std::f64::consts::PI * 6371.0;
        assert!((d - half_circumference).abs() < 1.0, "got {d}");
        assert!(d.is_finite());
    }

    #[test]
    fn distance_is_symmetric() {
        let a = distance_km(23.0225, 72.5714, 28.6139, 77.2090);
        let b = distance_km(28.6139, 77.2090, 23.0225, 72.5714);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn coordinate_range_validation() {
        assert!(valid_coordinates(45.0, 45.0));
        assert!(valid_coordinates(-90.0, 180.0));
        assert!(valid_coordinates(90.0, -180.0));
        assert!(!valid_coordinates(91.0, 0.0));
        assert!(!valid_coordinates(45.0, 200.0));
        assert!(!valid_coordinates(-90.5, 0.0));
    }
}
