//! Weak classifiers and the weighted vote that combines them.

pub(crate) mod hypothesis_traits;
pub(crate) mod weighted_vote;
pub(crate) mod threshold_stump;
pub(crate) mod fn_classifier;


pub use hypothesis_traits::{
    Classifier,
    LearnerError,
};

pub use weighted_vote::WeightedVote;
pub use threshold_stump::{ThresholdStump, MissingFeature};
pub use fn_classifier::FnClassifier;
