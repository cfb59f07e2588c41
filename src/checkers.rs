//! This file defines some functions that checks some pre-conditions
//! E.g., the number of categories, labels, and distributions.

use crate::SammeError;
use crate::constants::{
    MIN_CATEGORIES,
    SIMPLEX_TOLERANCE,
};


/// Check whether the number of categories is valid or not.
#[inline(always)]
pub(crate) fn num_cats(num_cats: usize) -> Result<(), SammeError> {
    if num_cats < MIN_CATEGORIES {
        return Err(SammeError::InvalidConfiguration { num_cats });
    }
    Ok(())
}


/// Check whether every label in `dataset` is a category index.
#[inline(always)]
pub(crate) fn labels<X>(dataset: &[(X, usize)], num_cats: usize)
    -> Result<(), SammeError>
{
    let bad = dataset.iter()
        .enumerate()
        .find(|(_, (_, y))| *y >= num_cats);
    match bad {
        Some((index, (_, label))) => Err(SammeError::LabelOutOfRange {
            index, label: *label, num_cats,
        }),
        None => Ok(()),
    }
}


/// Check whether `prediction` made by `learner` is a category index.
#[inline(always)]
pub(crate) fn prediction(learner: usize, prediction: usize, num_cats: usize)
    -> Result<usize, SammeError>
{
    if prediction >= num_cats {
        return Err(SammeError::PredictionOutOfRange {
            learner, prediction, num_cats,
        });
    }
    Ok(prediction)
}


/// Check whether `dist` is a probability vector.
#[inline(always)]
pub(crate) fn simplex_condition(dist: &[f64]) {
    let sum = dist.iter().sum::<f64>();
    assert!((sum - 1f64).abs() < SIMPLEX_TOLERANCE, "sum(dist[..]) = {sum}");
    assert!(
        dist.iter().all(|d| *d >= 0f64),
        "every element must be non-negative. dist = {dist:?}"
    );
}
