//! Numerical constants shared by the boosting engine.

/// Added to the weighted error before inverting it,
/// so that a perfect classifier gets a finite confidence.
pub const ERROR_GUARD:       f64 = 1e-6;

/// Allowed gap between `1.0` and the sum of a distribution.
pub const SIMPLEX_TOLERANCE: f64 = 1e-5;

/// Smallest number of categories SAMME can work with.
pub const MIN_CATEGORIES:  usize = 2;

/// Default interval (in rounds) at which the research logger prints.
pub const DEFAULT_ROUND:   usize = 100;
