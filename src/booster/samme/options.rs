use serde::{Serialize, Deserialize};


/// What to do when every classifier ends up with zero confidence,
/// i.e., every one of them is at or below chance level
/// on the distribution it was evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegeneratePolicy {
    /// Fail with [`SammeError::DegenerateEnsemble`](crate::SammeError::DegenerateEnsemble).
    #[default]
    Fail,
    /// Give every classifier the weight `1 / M`.
    Uniform,
}
