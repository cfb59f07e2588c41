//! This directory provides some features for research.
//! Measure the followings of SAMME per round
//! - Raw / weighted error of the classifier
//! - Confidence
//! - Training loss
//! - Test loss
//! - Running time

/// Defines the round-by-round logger.
pub mod logger;

/// Defines loss functions.
pub mod loss_functions;

pub use logger::{
    Logger,
    CurrentHypothesis,
};

pub use loss_functions::zero_one_loss;
