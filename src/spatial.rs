//! Great-circle arithmetic and circular bounding boxes.
//!
//! Everything here is deterministic and side-effect free. Points follow the
//! `geo` crate convention used across the codebase: `Point::new(lng, lat)`,
//! so `x()` is longitude and `y()` is latitude.

use geo::{Point, Rect};

/// Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = EARTH_RADIUS_KM * 1000.0;

/// Kilometers per degree of great-circle arc (standard geospatial scale
/// factor, 1° ≈ 111.32 km at the equator).
pub const KM_PER_DEGREE: f64 = 111.32;

/// Great-circle distance between two points in meters, via the haversine
/// formula.
///
/// Symmetric in its arguments and zero for identical points. Inputs are not
/// validated against the lat/lng domain; any finite coordinates are accepted.
///
/// # Examples
///
/// ```rust
/// use geo::Point;
/// use proxibench::spatial::haversine_distance;
///
/// let seoul = Point::new(126.9780, 37.5665);
/// let busan = Point::new(129.0756, 35.1796);
///
/// let dist = haversine_distance(&seoul, &busan);
/// assert!(dist > 300_000.0 && dist < 350_000.0); // ~325 km
/// ```
pub fn haversine_distance(a: &Point, b: &Point) -> f64 {
    let d_lat = (b.y() - a.y()).to_radians();
    let d_lng = (b.x() - a.x()).to_radians();
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Whether `candidate` lies within `radius_meters` of `center`.
///
/// The boundary is inclusive: a point exactly `radius_meters` away counts.
pub fn is_within_radius(center: &Point, candidate: &Point, radius_meters: f64) -> bool {
    haversine_distance(center, candidate) <= radius_meters
}

/// Smallest axis-aligned lat/lng rectangle containing the circle of
/// `radius_meters` centered at `center`.
///
/// Uses the symmetric degree-radius approximation: the radius is converted to
/// degrees with [`KM_PER_DEGREE`] and applied to both axes. Longitude degrees
/// shrink with latitude, so the box is somewhat larger than necessary away
/// from the equator; it is always a superset of the true circle, which is
/// what the composite-index strategy relies on. A non-positive radius yields
/// a degenerate box; callers validate the query first.
pub fn circle_bounding_box(center: &Point, radius_meters: f64) -> Rect {
    let radius_degrees = (radius_meters / 1000.0) / KM_PER_DEGREE;

    Rect::new(
        geo::coord! { x: center.x() - radius_degrees, y: center.y() - radius_degrees },
        geo::coord! { x: center.x() + radius_degrees, y: center.y() + radius_degrees },
    )
}

/// Inclusive containment test of a point against a bounding box.
pub fn point_in_bbox(bbox: &Rect, point: &Point) -> bool {
    point.x() >= bbox.min().x
        && point.x() <= bbox.max().x
        && point.y() >= bbox.min().y
        && point.y() <= bbox.max().y
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEOUL: (f64, f64) = (126.9780, 37.5665); // (lng, lat)

    #[test]
    fn test_haversine_symmetry_and_zero() {
        let a = Point::new(SEOUL.0, SEOUL.1);
        let b = Point::new(-74.0060, 40.7128); // NYC

        let ab = haversine_distance(&a, &b);
        let ba = haversine_distance(&b, &a);
        assert!((ab - ba).abs() < 1e-9);

        assert_eq!(haversine_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        // One degree of latitude is ~111 km regardless of longitude.
        let a = Point::new(SEOUL.0, SEOUL.1);
        let b = Point::new(SEOUL.0, SEOUL.1 + 1.0);

        let dist = haversine_distance(&a, &b);
        assert!(dist > 110_000.0 && dist < 112_500.0);
    }

    #[test]
    fn test_within_radius_boundary_inclusive() {
        let center = Point::new(SEOUL.0, SEOUL.1);
        let nearby = Point::new(SEOUL.0, SEOUL.1 + 0.0005); // ~55 m north

        let dist = haversine_distance(&center, &nearby);
        assert!(is_within_radius(&center, &nearby, dist));
        assert!(is_within_radius(&center, &nearby, dist + 1.0));
        assert!(!is_within_radius(&center, &nearby, dist - 1.0));
    }

    #[test]
    fn test_bounding_box_span_and_center() {
        let center = Point::new(SEOUL.0, SEOUL.1);
        let bbox = circle_bounding_box(&center, 100.0);

        // 100 m => (100/1000)/111.32 ≈ 0.000898 degrees per half-axis.
        let expected_half_span = 0.1 / KM_PER_DEGREE;
        assert!((bbox.max().y - SEOUL.1 - expected_half_span).abs() < 1e-9);
        assert!((SEOUL.1 - bbox.min().y - expected_half_span).abs() < 1e-9);
        assert!((bbox.max().x - SEOUL.0 - expected_half_span).abs() < 1e-9);

        let mid_x = (bbox.min().x + bbox.max().x) / 2.0;
        let mid_y = (bbox.min().y + bbox.max().y) / 2.0;
        assert!((mid_x - SEOUL.0).abs() < 1e-6);
        assert!((mid_y - SEOUL.1).abs() < 1e-6);
    }

    #[test]
    fn test_bounding_box_contains_circle() {
        let center = Point::new(SEOUL.0, SEOUL.1);
        let radius = 5_000.0;
        let bbox = circle_bounding_box(&center, radius);

        // Walk the circle boundary; every in-radius point must fall in the box.
        let radius_degrees = (radius / 1000.0) / KM_PER_DEGREE;
        for step in 0..360 {
            let bearing = f64::from(step).to_radians();
            let p = Point::new(
                center.x() + radius_degrees * bearing.cos(),
                center.y() + radius_degrees * bearing.sin(),
            );
            if is_within_radius(&center, &p, radius) {
                assert!(point_in_bbox(&bbox, &p), "boundary point escaped the box");
            }
        }
    }

    #[test]
    fn test_point_in_bbox_edges() {
        let bbox = Rect::new(
            geo::coord! { x: 126.8, y: 37.45 },
            geo::coord! { x: 127.1, y: 37.7 },
        );

        assert!(point_in_bbox(&bbox, &Point::new(126.8, 37.45)));
        assert!(point_in_bbox(&bbox, &Point::new(127.1, 37.7)));
        assert!(point_in_bbox(&bbox, &Point::new(126.95, 37.6)));
        assert!(!point_in_bbox(&bbox, &Point::new(127.2, 37.6)));
        assert!(!point_in_bbox(&bbox, &Point::new(126.95, 37.44)));
    }
}
