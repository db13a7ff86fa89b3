//! Recursive construction of the binary decision tree, and prediction.
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::data::{Feature, LabeledPoint, Point};
use crate::errors::SaplingError;
use crate::impurity::majority_label;
use crate::region::{decision_regions, BoundingBox, Region};
use crate::splitter::find_best_split;
use crate::utils::validate_finite_point;
use hashbrown::HashSet;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A node of a fitted tree.
///
/// Children own their subtrees outright; there is no shared state between
/// nodes or between successive fits. The depth of each child is exactly its
/// parent's depth plus one, and internal nodes always carry two non-empty
/// subtrees.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub enum TreeNode {
    Leaf {
        predicted_label: String,
        sample_count: usize,
        depth: usize,
    },
    Internal {
        feature: Feature,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
        depth: usize,
    },
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { depth, .. } => *depth,
            TreeNode::Internal { depth, .. } => *depth,
        }
    }

    /// Descend to the leaf whose region contains the point.
    ///
    /// At every internal node the point goes left when its feature value is
    /// `<=` the threshold, right otherwise. Read-only; safe against a shared
    /// tree. Assumes finite coordinates, which [`DecisionTree::predict`]
    /// enforces at the API boundary.
    pub fn leaf_for(&self, point: &Point) -> &TreeNode {
        match self {
            TreeNode::Leaf { .. } => self,
            TreeNode::Internal {
                feature,
                threshold,
                left,
                right,
                ..
            } => {
                if point.feature(*feature) <= *threshold {
                    left.leaf_for(point)
                } else {
                    right.leaf_for(point)
                }
            }
        }
    }

    /// The predicted label of the leaf containing the point.
    pub fn predict(&self, point: &Point) -> &str {
        match self.leaf_for(point) {
            TreeNode::Leaf { predicted_label, .. } => predicted_label,
            TreeNode::Internal { .. } => unreachable!("leaf_for always returns a leaf"),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }

    /// The depth of the deepest leaf.
    pub fn max_leaf_depth(&self) -> usize {
        match self {
            TreeNode::Leaf { depth, .. } => *depth,
            TreeNode::Internal { left, right, .. } => {
                left.max_leaf_depth().max(right.max_leaf_depth())
            }
        }
    }
}

impl Display for TreeNode {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TreeNode::Leaf {
                predicted_label,
                sample_count,
                ..
            } => write!(f, "leaf={},count={}", predicted_label, sample_count),
            TreeNode::Internal {
                feature, threshold, ..
            } => write!(f, "[{} <= {}]", feature, threshold),
        }
    }
}

/// A fitted binary decision tree over labeled 2-D points.
///
/// Trees are immutable once fitted; the caller rebuilds from scratch on
/// every change to its training set and discards the previous tree.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecisionTree {
    pub root: TreeNode,
    pub max_depth: usize,
}

impl DecisionTree {
    /// Fit a tree on the given points, recursing at most `max_depth` levels.
    ///
    /// A node becomes a leaf when the depth limit is reached, when all of
    /// its points share one label, or when no candidate split strictly
    /// reduces impurity; the leaf predicts the majority label with ties
    /// resolved to the first-encountered label. The produced tree is exactly
    /// reproducible for a fixed input sequence and depth limit.
    ///
    /// Fitting on zero points is a contract violation and fails with
    /// [`SaplingError::EmptyTrainingSet`] rather than inventing a default
    /// label.
    pub fn fit(points: &[LabeledPoint], max_depth: usize) -> Result<Self, SaplingError> {
        if points.is_empty() {
            return Err(SaplingError::EmptyTrainingSet);
        }
        let root = grow(points, 0, max_depth);
        info!(
            "fit a tree on {} points: {} leaves, depth {} (max {})",
            points.len(),
            root.n_leaves(),
            root.max_leaf_depth(),
            max_depth
        );
        Ok(DecisionTree { root, max_depth })
    }

    /// Fit with the default depth limit of 5.
    pub fn with_default_depth(points: &[LabeledPoint]) -> Result<Self, SaplingError> {
        Self::fit(points, DEFAULT_MAX_DEPTH)
    }

    /// Predict the label for a query point.
    pub fn predict(&self, point: &Point) -> Result<&str, SaplingError> {
        validate_finite_point(point)?;
        Ok(self.root.predict(point))
    }

    /// Decompose a bounding box into the axis-aligned rectangles induced by
    /// the tree's splits, one per leaf.
    pub fn regions(&self, bounds: BoundingBox) -> Vec<Region> {
        decision_regions(&self.root, bounds)
    }

    pub fn depth(&self) -> usize {
        self.root.max_leaf_depth()
    }

    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }
}

impl Display for DecisionTree {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<&TreeNode> = vec![&self.root];
        let mut r = String::new();
        while let Some(node) = print_buffer.pop() {
            r += format!("{}{}\n", "      ".repeat(node.depth()).as_str(), node).as_str();
            if let TreeNode::Internal { left, right, .. } = node {
                print_buffer.push(right);
                print_buffer.push(left);
            }
        }
        write!(f, "{}", r)
    }
}

fn grow(points: &[LabeledPoint], depth: usize, max_depth: usize) -> TreeNode {
    let distinct_labels: HashSet<&str> = points.iter().map(|p| p.label.as_str()).collect();
    if depth >= max_depth || distinct_labels.len() == 1 {
        return leaf(points, depth);
    }
    match find_best_split(points) {
        // Impure but unsplittable, e.g. identical coordinates with
        // differing labels.
        None => leaf(points, depth),
        Some(split) => TreeNode::Internal {
            feature: split.feature,
            threshold: split.threshold,
            left: Box::new(grow(&split.left, depth + 1, max_depth)),
            right: Box::new(grow(&split.right, depth + 1, max_depth)),
            depth,
        },
    }
}

fn leaf(points: &[LabeledPoint], depth: usize) -> TreeNode {
    let predicted_label = majority_label(points.iter().map(|p| p.label.as_str()))
        .expect("leaves are only grown from non-empty point sets");
    TreeNode::Leaf {
        predicted_label: predicted_label.to_string(),
        sample_count: points.len(),
        depth,
    }
}
