use std::cmp::Ordering;

/// Planar distance helpers over raw (latitude, longitude) degrees.
///
/// Coordinates are treated as Cartesian; there is no geodesic correction, so
/// east-west distances are overstated at high latitude.
pub struct DistanceHelper;

impl DistanceHelper {
    pub fn planar(
        latitude: f64,
        longitude: f64,
        target_latitude: f64,
        target_longitude: f64,
    ) -> f64 {
        let d_lat = latitude - target_latitude;
        let d_lon = longitude - target_longitude;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }

    /// IEEE 754 total order on distances. Callers only rank distances built
    /// from finite coordinates, so NaN never reaches this comparison.
    pub fn compare(lhs: f64, rhs: f64) -> Ordering {
        lhs.total_cmp(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_distance_is_euclidean() {
        assert_eq!(DistanceHelper::planar(3.0, 4.0, 0.0, 0.0), 5.0);
        assert_eq!(DistanceHelper::planar(30.2, 120.5, 30.2, 120.5), 0.0);
    }

    #[test]
    fn compare_orders_ascending() {
        assert_eq!(DistanceHelper::compare(0.1, 0.2), Ordering::Less);
        assert_eq!(DistanceHelper::compare(f64::NAN, 1e9), Ordering::Greater);
    }
}
