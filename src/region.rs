//! Decomposition of a bounding box into per-leaf decision regions.
//!
//! The visualization layer shades each leaf's region of the plane; this
//! module recovers those rectangles from a fitted tree.
use crate::data::Feature;
use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        BoundingBox {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

impl Default for BoundingBox {
    /// The 0..10 square the demo scatter plots live on.
    fn default() -> Self {
        BoundingBox::new(0.0, 10.0, 0.0, 10.0)
    }
}

/// One leaf's rectangle, labeled with the leaf's prediction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Region {
    pub bounds: BoundingBox,
    pub label: String,
}

/// Partition `bounds` along each internal node's split until leaves are
/// reached, one region per leaf.
///
/// The left subtree receives the sub-box with the split axis clipped to
/// `<= threshold`, the right subtree the remainder; regions are emitted in
/// left-to-right leaf order. Pure traversal over an immutable tree.
pub fn decision_regions(node: &TreeNode, bounds: BoundingBox) -> Vec<Region> {
    match node {
        TreeNode::Leaf { predicted_label, .. } => vec![Region {
            bounds,
            label: predicted_label.clone(),
        }],
        TreeNode::Internal {
            feature,
            threshold,
            left,
            right,
            ..
        } => {
            let (left_bounds, right_bounds) = match feature {
                Feature::X => (
                    BoundingBox {
                        x_max: *threshold,
                        ..bounds
                    },
                    BoundingBox {
                        x_min: *threshold,
                        ..bounds
                    },
                ),
                Feature::Y => (
                    BoundingBox {
                        y_max: *threshold,
                        ..bounds
                    },
                    BoundingBox {
                        y_min: *threshold,
                        ..bounds
                    },
                ),
            };
            let mut regions = decision_regions(left, left_bounds);
            regions.extend(decision_regions(right, right_bounds));
            regions
        }
    }
}
