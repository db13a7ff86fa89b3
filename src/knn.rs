//! k-nearest-neighbor classification.
//!
//! Backs the KNN demo: the caller drags a query point around and the
//! classifier reports the k nearest training points and the majority vote
//! among them.
use crate::data::{LabeledPoint, Point};
use crate::errors::SaplingError;
use crate::impurity::majority_label;
use crate::utils::validate_finite_point;

/// A training point paired with its distance to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a> {
    pub point: &'a LabeledPoint,
    pub distance: f64,
}

fn euclidean(p: &LabeledPoint, q: &Point) -> f64 {
    ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}

/// The k training points closest to the query, ascending by distance.
///
/// The sort is stable, so distance ties keep the training set's order.
/// Fewer than k neighbors are returned when the training set is smaller.
pub fn nearest_neighbors<'a>(
    points: &'a [LabeledPoint],
    query: &Point,
    k: usize,
) -> Vec<Neighbor<'a>> {
    let mut neighbors: Vec<Neighbor<'a>> = points
        .iter()
        .map(|p| Neighbor {
            point: p,
            distance: euclidean(p, query),
        })
        .collect();
    neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    neighbors.truncate(k);
    neighbors
}

/// Classify the query by majority vote over its k nearest neighbors.
///
/// Vote ties resolve to the label first encountered in neighbor order,
/// matching the tree's majority rule.
pub fn classify<'a>(
    points: &'a [LabeledPoint],
    query: &Point,
    k: usize,
) -> Result<&'a str, SaplingError> {
    if points.is_empty() {
        return Err(SaplingError::EmptyTrainingSet);
    }
    if k == 0 {
        return Err(SaplingError::InvalidParameter(
            "k".to_string(),
            "a neighbor count of at least 1".to_string(),
            k.to_string(),
        ));
    }
    validate_finite_point(query)?;

    let neighbors = nearest_neighbors(points, query, k);
    let label = majority_label(neighbors.iter().map(|n| n.point.label.as_str()))
        .expect("a non-empty training set yields at least one neighbor");
    Ok(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Feature;

    // The demo's initial training set.
    fn demo_points() -> Vec<LabeledPoint> {
        vec![
            LabeledPoint::new(1.0, 2.0, "A"),
            LabeledPoint::new(2.0, 4.0, "A"),
            LabeledPoint::new(3.0, 5.0, "B"),
            LabeledPoint::new(4.0, 4.0, "B"),
            LabeledPoint::new(5.0, 5.0, "B"),
        ]
    }

    #[test]
    fn test_neighbors_sorted_ascending() {
        let points = demo_points();
        let neighbors = nearest_neighbors(&points, &Point::new(4.0, 4.0), 5);
        assert_eq!(neighbors.len(), 5);
        for pair in neighbors.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
        assert_eq!(neighbors[0].point, &points[3]);
        assert_eq!(neighbors[0].distance, 0.0);
    }

    #[test]
    fn test_distance_ties_keep_input_order() {
        let points = demo_points();
        // (3,5) and (5,5) are both sqrt(2) from the query; (3,5) comes
        // first in the training set.
        let neighbors = nearest_neighbors(&points, &Point::new(4.0, 4.0), 3);
        assert_eq!(neighbors[1].point, &points[2]);
        assert_eq!(neighbors[2].point, &points[4]);
    }

    #[test]
    fn test_classify_demo_query() {
        let points = demo_points();
        assert_eq!(classify(&points, &Point::new(4.0, 4.0), 3).unwrap(), "B");
        assert_eq!(classify(&points, &Point::new(1.0, 2.0), 1).unwrap(), "A");
    }

    #[test]
    fn test_classify_vote_tie_takes_first_neighbor_label() {
        let points = vec![
            LabeledPoint::new(4.0, 5.0, "A"),
            LabeledPoint::new(4.0, 3.0, "B"),
        ];
        // Both neighbors are at distance 1; the vote is 1-1 and A is
        // encountered first.
        assert_eq!(classify(&points, &Point::new(4.0, 4.0), 2).unwrap(), "A");
    }

    #[test]
    fn test_classify_k_larger_than_training_set() {
        let points = demo_points();
        assert_eq!(classify(&points, &Point::new(4.0, 4.0), 100).unwrap(), "B");
    }

    #[test]
    fn test_classify_contract_violations() {
        let points = demo_points();
        assert!(matches!(
            classify(&[], &Point::new(4.0, 4.0), 3).unwrap_err(),
            SaplingError::EmptyTrainingSet
        ));
        assert!(matches!(
            classify(&points, &Point::new(4.0, 4.0), 0).unwrap_err(),
            SaplingError::InvalidParameter(..)
        ));
        assert!(matches!(
            classify(&points, &Point::new(f64::NAN, 4.0), 3).unwrap_err(),
            SaplingError::NonFiniteFeature(Feature::X, _)
        ));
    }
}
