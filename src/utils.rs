use crate::data::{Feature, Point};
use crate::errors::SaplingError;

/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

/// Reject query points with NaN or infinite coordinates before they reach
/// a threshold comparison.
pub(crate) fn validate_finite_point(point: &Point) -> Result<(), SaplingError> {
    for feature in Feature::ALL {
        let value = point.feature(feature);
        if !value.is_finite() {
            return Err(SaplingError::NonFiniteFeature(feature, value));
        }
    }
    Ok(())
}

/// Round to a specific number of decimal places.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_round() {
        assert_eq!(0.3, precision_round(0.3333, 1));
        assert_eq!(0.33, precision_round(0.3333, 2));
    }

    #[test]
    fn test_validate_finite_point() {
        assert!(validate_finite_point(&Point::new(1.0, 2.0)).is_ok());
        let err = validate_finite_point(&Point::new(f64::NAN, 2.0)).unwrap_err();
        assert!(matches!(err, SaplingError::NonFiniteFeature(Feature::X, _)));
        let err = validate_finite_point(&Point::new(1.0, f64::INFINITY)).unwrap_err();
        assert!(matches!(err, SaplingError::NonFiniteFeature(Feature::Y, _)));
    }
}
