// crates/bibleviz-core/src/geodesic.rs
use crate::common::Point;

/// Mean Earth radius in kilometres (IUGG), the value web-map tooling uses
/// for its default great-circle distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance between two lng/lat points, in kilometres.
///
/// Uses the haversine formula, which stays well-conditioned for the short
/// hops between neighbouring genealogy points.
///
/// # Examples
/// ```rust
/// use bibleviz_core::common::Point;
/// use bibleviz_core::geodesic::distance_km;
///
/// let d = distance_km(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
/// assert!((d - 111.195).abs() < 0.01);
/// ```
pub fn distance_km(a: Point, b: Point) -> f64 {
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = lat2 - lat1;
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_identical_points() {
        let p = Point::new(23.8608, -0.3938);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = Point::new(14.7772, 3.1912);
        let b = Point::new(16.2846, 5.5798);
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn longitude_degrees_shrink_towards_the_poles() {
        let equator = distance_km(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        let north = distance_km(Point::new(0.0, 60.0), Point::new(1.0, 60.0));
        assert!((north / equator - 0.5).abs() < 1e-3);
    }

    #[test]
    fn differs_from_planar_distance() {
        // In degree space both pairs are 10 apart; on the sphere they are not.
        let along_equator = distance_km(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let along_parallel = distance_km(Point::new(0.0, 50.0), Point::new(10.0, 50.0));
        assert!(along_parallel < along_equator);
    }
}
