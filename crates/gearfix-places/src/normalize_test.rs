use gearfix_core::BusinessStatus;

use super::*;
use crate::types::{Geometry, LatLng, OpeningHours, Photo};

fn raw_place(place_id: Option<&str>) -> RawPlace {
    RawPlace {
        place_id: place_id.map(str::to_owned),
        name: Some("Ace Laptop Repairs".to_owned()),
        vicinity: Some("12 CG Road, Ahmedabad".to_owned()),
        formatted_address: Some("12 CG Road, Ahmedabad, Gujarat, India".to_owned()),
        geometry: Some(Geometry {
            location: LatLng {
                lat: 23.03,
                lng: 72.57,
            },
        }),
        rating: Some(4.5),
        user_ratings_total: Some(120),
        opening_hours: Some(OpeningHours {
            open_now: Some(true),
        }),
        business_status: Some("OPERATIONAL".to_owned()),
        photos: vec![Photo {
            photo_reference: Some("photo-a".to_owned()),
        }],
    }
}

#[test]
fn normalizes_complete_record() {
    let place = normalize_place(raw_place(Some("place-1"))).unwrap();
    assert_eq!(place.provider_id, "place-1");
    assert_eq!(place.name, "Ace Laptop Repairs");
    assert_eq!(place.address, "12 CG Road, Ahmedabad");
    assert_eq!(place.rating, Some(4.5));
    assert_eq!(place.review_count, 120);
    assert_eq!(place.open_now, Some(true));
    assert_eq!(place.business_status, BusinessStatus::Operational);
    assert_eq!(place.photo_refs, vec!["photo-a".to_owned()]);
}

#[test]
fn drops_record_without_place_id() {
    assert!(normalize_place(raw_place(None)).is_none());
    assert!(normalize_place(raw_place(Some(""))).is_none());
}

#[test]
fn drops_record_without_geometry() {
    let mut raw = raw_place(Some("place-2"));
    raw.geometry = None;
    assert!(normalize_place(raw).is_none());
}

#[test]
fn address_falls_back_to_formatted_address() {
    let mut raw = raw_place(Some("place-3"));
    raw.vicinity = None;
    let place = normalize_place(raw).unwrap();
    assert_eq!(place.address, "12 CG Road, Ahmedabad, Gujarat, India");
}

#[test]
fn missing_optional_fields_default() {
    let mut raw = raw_place(Some("place-4"));
    raw.name = None;
    raw.vicinity = None;
    raw.formatted_address = None;
    raw.rating = None;
    raw.user_ratings_total = None;
    raw.opening_hours = None;
    raw.business_status = None;
    raw.photos = vec![];

    let place = normalize_place(raw).unwrap();
    assert_eq!(place.name, "");
    assert_eq!(place.address, "");
    assert_eq!(place.rating, None);
    assert_eq!(place.review_count, 0);
    assert_eq!(place.open_now, None);
    assert_eq!(place.business_status, BusinessStatus::Unknown);
    assert!(place.photo_refs.is_empty());
}

#[test]
fn out_of_range_rating_is_clamped() {
    let mut raw = raw_place(Some("place-5"));
    raw.rating = Some(7.2);
    let place = normalize_place(raw).unwrap();
    assert_eq!(place.rating, Some(5.0));
}

#[test]
fn photo_entries_without_reference_are_skipped() {
    let mut raw = raw_place(Some("place-6"));
    raw.photos = vec![
        Photo {
            photo_reference: None,
        },
        Photo {
            photo_reference: Some("keep".to_owned()),
        },
    ];
    let place = normalize_place(raw).unwrap();
    assert_eq!(place.photo_refs, vec!["keep".to_owned()]);
}
