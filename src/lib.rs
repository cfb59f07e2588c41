#![warn(missing_docs)]

//!
//! A crate that provides SAMME,
//! the multi-class extension of AdaBoost by Zhu, Rosset, Zou, and Hastie.
//!
//! Unlike the usual boosting protocol, SAMME here does not ask a weak learner
//! for a new hypothesis every round.
//! It receives a fixed pool of **pre-trained** classifiers,
//! each exposing `predict(sample) -> category`,
//! and learns how much to trust each of them.
//!
//! - [`Samme`] owns the configuration and, once trained,
//!     the ranked pool paired with its confidence weights.
//! - [`Classifier`] is the only thing a weak classifier has to implement.
//! - [`research::Logger`] trains round by round
//!     and reports errors, confidences, and losses.
//!
//! ```
//! use samme::prelude::*;
//!
//! // Two categories, one perfect classifier and one that is always wrong.
//! let dataset = vec![(0_u8, 0), (1, 1), (2, 0), (3, 1)];
//! let right = FnClassifier::new(|x: &u8| (*x % 2) as usize);
//! let wrong = FnClassifier::new(|x: &u8| 1 - (*x % 2) as usize);
//!
//! let mut booster = Samme::new(2, 2).unwrap();
//! booster.train(&dataset, vec![
//!     Box::new(wrong) as Box<dyn Classifier<u8> + Send + Sync>,
//!     Box::new(right),
//! ]).unwrap();
//!
//! for (x, y) in &dataset {
//!     assert_eq!(booster.predict(x).unwrap(), *y);
//! }
//! ```

pub mod constants;
pub mod booster;
pub mod hypothesis;
pub mod research;
pub mod prelude;

mod error;
pub(crate) mod checkers;
pub(crate) mod helpers;


pub use error::SammeError;

pub use booster::{
    Booster,
    Samme,
    SammeTrainer,
    RoundRecord,
    DegeneratePolicy,
};

pub use hypothesis::{
    Classifier,
    LearnerError,
    WeightedVote,
    ThresholdStump,
    FnClassifier,
};
