use crate::math::DistanceHelper;
use crate::prelude::{CoreError, CoreResult};
use crate::records::{RankedMatch, ReferencePoint};

/// Returns the `k` dataset points closest to the target, nearest first.
///
/// Distances are planar over raw degrees (see [`DistanceHelper::planar`]).
/// Equal distances are ordered by ascending id, so repeated calls over the
/// same dataset produce identical output.
///
/// Cost: a full scan computing `n` distances followed by an `O(n log n)`
/// sort, with no spatial index. That is acceptable while the dataset stays
/// small and static; a growing dataset should move to an index.
pub fn nearest(
    points: &[ReferencePoint],
    target_latitude: f64,
    target_longitude: f64,
    k: usize,
) -> CoreResult<Vec<RankedMatch>> {
    if k == 0 {
        return Err(CoreError::InvalidArgument(
            "number of points must be positive".into(),
        ));
    }

    let mut ranked: Vec<RankedMatch> = points
        .iter()
        .map(|point| RankedMatch {
            point: *point,
            distance: DistanceHelper::planar(
                point.latitude,
                point.longitude,
                target_latitude,
                target_longitude,
            ),
        })
        .collect();

    ranked.sort_by(|lhs, rhs| {
        DistanceHelper::compare(lhs.distance, rhs.distance).then(lhs.point.id.cmp(&rhs.point.id))
    });
    ranked.truncate(k);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ReferencePoint> {
        vec![
            ReferencePoint::new(4, 31.0, 121.0),
            ReferencePoint::new(1, 30.0, 120.0),
            ReferencePoint::new(3, 29.0, 119.0),
            ReferencePoint::new(2, 30.5, 120.5),
            ReferencePoint::new(5, 10.0, 100.0),
        ]
    }

    #[test]
    fn returns_k_matches_sorted_with_exact_distances() {
        let points = sample();
        let matches = nearest(&points, 30.4, 120.4, 3).unwrap();
        assert_eq!(matches.len(), 3);
        assert!(matches
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance));
        for m in &matches {
            let d_lat = m.point.latitude - 30.4;
            let d_lon = m.point.longitude - 120.4;
            let expected = (d_lat * d_lat + d_lon * d_lon).sqrt();
            assert_eq!(m.distance, expected);
        }
        assert_eq!(matches[0].point.id, 2);
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let points = vec![
            ReferencePoint::new(9, 1.0, 0.0),
            ReferencePoint::new(3, -1.0, 0.0),
            ReferencePoint::new(6, 0.0, 1.0),
            ReferencePoint::new(1, 0.0, -1.0),
        ];
        let ids: Vec<i64> = nearest(&points, 0.0, 0.0, 4)
            .unwrap()
            .iter()
            .map(|m| m.point.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 6, 9]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let points = sample();
        let first = nearest(&points, 0.0, 0.0, 5).unwrap();
        let second = nearest(&points, 0.0, 0.0, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_k_returns_whole_dataset() {
        let points = sample();
        let matches = nearest(&points, 30.0, 120.0, 50).unwrap();
        assert_eq!(matches.len(), points.len());
        for point in &points {
            assert!(matches.iter().any(|m| m.point == *point));
        }
    }

    #[test]
    fn empty_dataset_yields_empty_result() {
        assert!(nearest(&[], 30.0, 120.0, 5).unwrap().is_empty());
    }

    #[test]
    fn zero_k_is_rejected() {
        let err = nearest(&sample(), 0.0, 0.0, 0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }
}
