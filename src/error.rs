//! Errors reported by the boosting engine.
use thiserror::Error;

use crate::hypothesis::LearnerError;


/// Everything that can go wrong while configuring, training,
/// or querying a [`Samme`](crate::Samme) booster.
#[derive(Debug, Error)]
pub enum SammeError {
    /// The number of categories must be at least `2`.
    #[error("Param num_cats should be at least 2 but was {num_cats}")]
    InvalidConfiguration {
        /// The rejected number of categories.
        num_cats: usize,
    },

    /// `predict` was called before `train` produced an ensemble.
    #[error("the booster has not been trained yet")]
    NotTrained,

    /// The training set has no entry.
    #[error("cannot train on an empty dataset")]
    EmptyDataset,

    /// The learner pool has no classifier.
    #[error("cannot boost an empty learner pool")]
    EmptyLearnerPool,

    /// The pool handed to `train` does not match `num_learner`.
    #[error("expected {expected} weak learners but got {actual}")]
    LearnerCountMismatch {
        /// The configured `num_learner`.
        expected: usize,
        /// The size of the pool actually passed.
        actual: usize,
    },

    /// A training label is not a category index.
    #[error("label {label} of entry {index} is not in [0, {num_cats})")]
    LabelOutOfRange {
        /// Position of the entry in the dataset.
        index: usize,
        /// The offending label.
        label: usize,
        /// The configured number of categories.
        num_cats: usize,
    },

    /// A weak learner returned something that is not a category index.
    #[error("learner {learner} predicted {prediction}, not in [0, {num_cats})")]
    PredictionOutOfRange {
        /// Position of the learner (pool order while ranking,
        /// ranked order while predicting).
        learner: usize,
        /// The offending prediction.
        prediction: usize,
        /// The configured number of categories.
        num_cats: usize,
    },

    /// Every learner got a zero confidence,
    /// so the learner weights cannot be normalized.
    #[error("every weak learner is at or below chance level; no ensemble can be formed")]
    DegenerateEnsemble,

    /// A weak learner failed. The error is passed through untouched.
    #[error(transparent)]
    Learner(LearnerError),

    /// Writing the training log failed.
    #[error("failed to write the training log: {0}")]
    Io(#[from] std::io::Error),
}
