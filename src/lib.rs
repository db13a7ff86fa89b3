// Modules
pub mod constants;
pub mod data;
pub mod errors;
pub mod impurity;
pub mod knn;
pub mod region;
pub mod regression;
pub mod splitter;
pub mod synthetic;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use data::{Feature, LabeledPoint, Point};
pub use errors::SaplingError;
pub use impurity::gini_impurity;
pub use region::{decision_regions, BoundingBox, Region};
pub use splitter::{find_best_split, SplitCandidate};
pub use tree::{DecisionTree, TreeNode};
