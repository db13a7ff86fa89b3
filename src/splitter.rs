//! Best-split search over candidate axis-aligned thresholds.
use crate::data::{Feature, LabeledPoint};
use crate::impurity::gini_impurity;
use log::debug;

/// A proposed binary split of a node's points.
///
/// Transient value produced by [`find_best_split`]; the tree keeps only the
/// feature and threshold, the partitioned points feed the recursion.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitCandidate {
    pub feature: Feature,
    pub threshold: f64,
    pub left: Vec<LabeledPoint>,
    pub right: Vec<LabeledPoint>,
}

/// Find the impurity-minimizing binary split, if any improves on the parent.
///
/// Every distinct observed value of each feature is a candidate threshold,
/// scanned ascending, features in `x`-before-`y` order. Points with a
/// feature value `<= threshold` go left, the rest right; candidates leaving
/// either side empty are skipped. The improvement of a candidate is the
/// parent impurity minus the count-weighted impurity of its two sides, and
/// a candidate only displaces the incumbent on a strictly larger
/// improvement, so the first candidate in scan order wins ties. Returns
/// `None` when no candidate improves strictly, which covers pure nodes,
/// inputs of size <= 1, and points stacked on identical coordinates.
pub fn find_best_split(points: &[LabeledPoint]) -> Option<SplitCandidate> {
    if points.len() <= 1 {
        return None;
    }
    let parent_impurity = gini_impurity(points);
    let total = points.len() as f64;

    let mut best: Option<SplitCandidate> = None;
    let mut best_improvement = 0.0;

    for feature in Feature::ALL {
        let mut thresholds: Vec<f64> = points.iter().map(|p| p.feature(feature)).collect();
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();

        for threshold in thresholds {
            let (left, right): (Vec<LabeledPoint>, Vec<LabeledPoint>) = points
                .iter()
                .cloned()
                .partition(|p| p.feature(feature) <= threshold);
            if left.is_empty() || right.is_empty() {
                continue;
            }

            let weighted_impurity = (left.len() as f64 / total) * gini_impurity(&left)
                + (right.len() as f64 / total) * gini_impurity(&right);
            let improvement = parent_impurity - weighted_impurity;

            if improvement > best_improvement {
                best_improvement = improvement;
                best = Some(SplitCandidate {
                    feature,
                    threshold,
                    left,
                    right,
                });
            }
        }
    }

    if let Some(ref split) = best {
        debug!(
            "best split {} <= {} with improvement {:.6}",
            split.feature, split.threshold, best_improvement
        );
    }
    best
}
