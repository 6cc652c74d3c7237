//! Validation and region containment predicates.
//!
//! These are total: any parse or projection failure reads as `false`.

use serde::{Deserialize, Serialize};

use crate::convert::to_lat_lng;
use crate::grid::GridReference;
use crate::proj::GeodeticPoint;

/// Axis-aligned latitude/longitude rectangle in WGS84 degrees, bounds inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Approximate extent of Herefordshire.
pub const HEREFORDSHIRE: BoundingBox = BoundingBox {
    north: 52.4,
    south: 51.8,
    east: -2.3,
    west: -3.2,
};

impl BoundingBox {
    pub fn contains_lat_lng(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    pub fn contains(&self, point: &GeodeticPoint) -> bool {
        self.contains_lat_lng(point.lat(), point.lng())
    }
}

/// Whether the text parses as a grid reference.
pub fn is_valid(text: &str) -> bool {
    GridReference::parse(text).is_ok()
}

/// Whether the text converts to a WGS84 point inside `bbox`.
pub fn contained_in(text: &str, bbox: &BoundingBox) -> bool {
    match to_lat_lng(text) {
        Ok(point) => bbox.contains(&point),
        Err(e) => {
            tracing::debug!(grid_ref = text, error = %e, "grid reference has no location");
            false
        }
    }
}

pub fn is_in_herefordshire(text: &str) -> bool {
    contained_in(text, &HEREFORDSHIRE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::format;
    use crate::grid::encoder::tests::arb_reference;
    use proptest::prelude::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid("SO 514 398"));
        assert!(is_valid("so514398"));
        assert!(is_valid("NN16"));
        assert!(!is_valid(""));
        assert!(!is_valid("SO123"));
        assert!(!is_valid("ZZ123456"));
        assert!(!is_valid("SO1234567890123"));
        assert!(!is_valid("N/K"));
    }

    #[test]
    fn test_is_valid_is_idempotent() {
        for text in ["SO 514 398", "SO123", "", "TQ 3 8"] {
            let first = is_valid(text);
            let second = is_valid(text);
            assert_eq!(first, second, "{text:?}");
        }
    }

    proptest! {
        #[test]
        fn test_generated_references_stay_valid((text, _e, _n, _p) in arb_reference()) {
            let first = is_valid(&text);
            prop_assert!(first);
            prop_assert_eq!(is_valid(&text), first);
            prop_assert!(is_valid(&format(&text)));
        }

        #[test]
        fn test_validation_is_stable(text in "[A-Za-z ]{0,3}[0-9 ]{0,12}") {
            let first = is_valid(&text);
            prop_assert_eq!(is_valid(&text), first);
            prop_assert_eq!(first, GridReference::parse(&text).is_ok());
        }
    }

    #[test]
    fn test_contained_in_herefordshire() {
        assert!(contained_in("SO 514 398", &HEREFORDSHIRE));
        assert!(is_in_herefordshire("SO 600 400"));
        assert!(is_in_herefordshire("SO 580 410"));
    }

    #[test]
    fn test_other_square_not_contained() {
        // London, in TQ
        assert!(!contained_in("TQ 300 800", &HEREFORDSHIRE));
        // Edinburgh, in NT
        assert!(!is_in_herefordshire("NT 250 730"));
    }

    #[test]
    fn test_invalid_text_not_contained() {
        assert!(!contained_in("", &HEREFORDSHIRE));
        assert!(!contained_in("SO123", &HEREFORDSHIRE));
        assert!(!contained_in("ZZ123456", &HEREFORDSHIRE));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bbox = BoundingBox {
            north: 52.0,
            south: 51.0,
            east: -2.0,
            west: -3.0,
        };
        assert!(bbox.contains_lat_lng(52.0, -2.0));
        assert!(bbox.contains_lat_lng(51.0, -3.0));
        assert!(!bbox.contains_lat_lng(52.000_001, -2.5));
        assert!(!bbox.contains_lat_lng(51.5, -1.999_999));
        assert!(!bbox.contains_lat_lng(f64::NAN, -2.5));
    }

    #[test]
    fn test_bounding_box_from_json() {
        let bbox: BoundingBox =
            serde_json::from_str(r#"{"north": 52.4, "south": 51.8, "east": -2.3, "west": -3.2}"#)
                .unwrap();
        assert_eq!(bbox, HEREFORDSHIRE);
    }
}
