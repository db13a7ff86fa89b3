pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const LOGISTIC_LEARNING_RATE: f64 = 0.01;
pub const LOGISTIC_ITERATIONS: usize = 1000;
