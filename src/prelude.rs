//! Exports the booster, the classifier trait, and the bundled classifiers.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // SAMME
    Samme,
    SammeTrainer,
    DegeneratePolicy,
};


pub use crate::hypothesis::{
    // Classifier trait
    Classifier,

    // Combined classifier
    WeightedVote,

    // Pre-trained classifiers
    ThresholdStump,
    FnClassifier,
};


pub use crate::SammeError;
