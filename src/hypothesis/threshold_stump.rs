//! Provides a pre-trained decision stump over dense feature vectors.
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::hypothesis::{Classifier, LearnerError};


/// Raised when a sample is shorter than the stump's feature index.
#[derive(Debug, Error)]
#[error("feature {feature_index} requested from a sample of length {len}")]
pub struct MissingFeature {
    feature_index: usize,
    len: usize,
}


/// The struct `ThresholdStump` defines a decision stump with fixed parameters.
/// Given a point `x` over the `d`-dimensional space,
/// it predicts `lhs` if `x[feature_index] < threshold`
/// and `rhs` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStump {
    /// The index of the feature used in prediction.
    pub feature_index: usize,

    /// The intercept of the stump.
    pub threshold: f64,

    /// Category predicted below the threshold.
    pub lhs: usize,

    /// Category predicted at or above the threshold.
    pub rhs: usize,
}


impl ThresholdStump {
    /// Construct a new stump.
    pub fn new(feature_index: usize, threshold: f64, lhs: usize, rhs: usize)
        -> Self
    {
        Self { feature_index, threshold, lhs, rhs, }
    }
}


impl<X> Classifier<X> for ThresholdStump
    where X: AsRef<[f64]>,
{
    fn predict(&self, sample: &X) -> Result<usize, LearnerError> {
        let sample = sample.as_ref();
        let value = sample.get(self.feature_index)
            .ok_or(MissingFeature {
                feature_index: self.feature_index,
                len: sample.len(),
            })?;

        if *value < self.threshold { Ok(self.lhs) } else { Ok(self.rhs) }
    }
}
