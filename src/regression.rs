//! Regression fits for the linear and logistic demos.
//!
//! Both operate on plain `(x, y)` pairs rather than labeled points: the
//! linear demo fits a line through draggable points, the logistic demo fits
//! a 1-D sigmoid over binary outcomes.
use crate::constants::{LOGISTIC_ITERATIONS, LOGISTIC_LEARNING_RATE};
use crate::data::Feature;
use crate::errors::SaplingError;
use log::debug;
use serde::{Deserialize, Serialize};

/// A fitted least-squares line.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination of the fit on its training data.
    pub r_squared: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Closed-form simple linear regression.
///
/// Requires at least 2 points and some spread in x; both are caller
/// contract violations otherwise.
pub fn fit_linear(points: &[(f64, f64)]) -> Result<LinearFit, SaplingError> {
    if points.len() < 2 {
        return Err(SaplingError::InvalidParameter(
            "points".to_string(),
            "at least 2 samples".to_string(),
            points.len().to_string(),
        ));
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();
    let sum_x2: f64 = points.iter().map(|(x, _)| x * x).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(SaplingError::NoVariance(Feature::X));
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_residual: f64 = points
        .iter()
        .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
        .sum();
    let ss_total: f64 = points.iter().map(|(_, y)| (y - mean_y).powi(2)).sum();
    let r_squared = 1.0 - ss_residual / ss_total;

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

/// The logistic function.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// A 1-D logistic model `p = sigmoid(weight * x + bias)`, fitted by batch
/// gradient descent.
///
/// Refitting warm-starts from the current weights, so the model tracks an
/// interactively edited data set the way the demo does.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LogisticRegression {
    pub weight: f64,
    pub bias: f64,
    pub learning_rate: f64,
    pub iterations: usize,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl LogisticRegression {
    pub fn new(weight: f64, bias: f64) -> Self {
        LogisticRegression {
            weight,
            bias,
            learning_rate: LOGISTIC_LEARNING_RATE,
            iterations: LOGISTIC_ITERATIONS,
        }
    }

    /// Run gradient descent on `(x, y)` pairs with `y` in `{0, 1}`,
    /// starting from the current weights. Gradients are averaged over the
    /// batch each iteration.
    pub fn fit(&mut self, data: &[(f64, f64)]) -> Result<(), SaplingError> {
        if data.is_empty() {
            return Err(SaplingError::EmptyTrainingSet);
        }
        let n = data.len() as f64;
        for _ in 0..self.iterations {
            let mut grad_w = 0.0;
            let mut grad_b = 0.0;
            for &(x, y) in data {
                let p = sigmoid(self.weight * x + self.bias);
                grad_w += (p - y) * x;
                grad_b += p - y;
            }
            self.weight -= self.learning_rate * grad_w / n;
            self.bias -= self.learning_rate * grad_b / n;
        }
        debug!(
            "logistic fit on {} points: w={:.4}, b={:.4}",
            data.len(),
            self.weight,
            self.bias
        );
        Ok(())
    }

    pub fn predict_proba(&self, x: f64) -> f64 {
        sigmoid(self.weight * x + self.bias)
    }
}
