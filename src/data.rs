//! Data types shared by the learning routines.
//!
//! All of the demos operate on small sets of points in a two dimensional
//! feature space, each carrying a categorical label. The caller owns the
//! collection and rebuilds models whenever it changes.
use crate::errors::SaplingError;
use crate::utils::items_to_strings;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// One of the two numeric features of a point.
///
/// The split search scans features in the fixed order `X`, then `Y`; that
/// order is part of the engine's deterministic tie-break behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Feature {
    X,
    Y,
}

impl Feature {
    /// All features, in scan order.
    pub const ALL: [Feature; 2] = [Feature::X, Feature::Y];
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Feature::X => write!(f, "x"),
            Feature::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Feature {
    type Err = SaplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Feature::X),
            "y" => Ok(Feature::Y),
            _ => Err(SaplingError::ParseString(
                s.to_string(),
                "Feature".to_string(),
                items_to_strings(vec!["x", "y"]),
            )),
        }
    }
}

/// An unlabeled query point.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The value of the given feature.
    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::X => self.x,
            Feature::Y => self.y,
        }
    }
}

/// A labeled training example.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LabeledPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

impl LabeledPoint {
    pub fn new(x: f64, y: f64, label: impl Into<String>) -> Self {
        LabeledPoint {
            x,
            y,
            label: label.into(),
        }
    }

    /// The value of the given feature.
    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::X => self.x,
            Feature::Y => self.y,
        }
    }

    /// The coordinates of this example, without its label.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl Display for LabeledPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}):{}", self.x, self.y, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_from_str() {
        assert_eq!("x".parse::<Feature>().unwrap(), Feature::X);
        assert_eq!("y".parse::<Feature>().unwrap(), Feature::Y);
        assert!("z".parse::<Feature>().is_err());
    }

    #[test]
    fn test_feature_display_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(feature.to_string().parse::<Feature>().unwrap(), feature);
        }
    }

    #[test]
    fn test_feature_accessors() {
        let p = LabeledPoint::new(3.0, 7.0, "A");
        assert_eq!(p.feature(Feature::X), 3.0);
        assert_eq!(p.feature(Feature::Y), 7.0);
        assert_eq!(p.position(), Point::new(3.0, 7.0));
        assert_eq!(p.position().feature(Feature::Y), 7.0);
    }
}
