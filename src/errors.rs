//! Errors
//!
//! Custom error types used throughout the `sapling` crate.
use crate::data::Feature;
use thiserror::Error;

/// Errors that can occur when fitting or querying the models.
///
/// Every variant is a caller contract violation; the algorithms themselves
/// are total over well-formed input.
#[derive(Debug, Error)]
pub enum SaplingError {
    /// A model was asked to fit on zero points.
    #[error("Cannot fit on an empty training set.")]
    EmptyTrainingSet,
    /// A query point carried a NaN or infinite coordinate.
    #[error("Feature {0} has the non-finite value {1}; queries must provide finite coordinates.")]
    NonFiniteFeature(Feature, f64),
    /// A feature has a single observed value where spread is required.
    #[error("Feature {0} has no variance; a regression line is undefined.")]
    NoVariance(Feature),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
}
