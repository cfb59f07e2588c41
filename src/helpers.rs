//! Provides some helper functions
//! such as the weighted error and the confidence of a classifier.
use rayon::prelude::*;
use fixedbitset::FixedBitSet;

use crate::{Classifier, SammeError};
use crate::checkers;
use crate::constants::ERROR_GUARD;


/// Returns the set of entries in `dataset` that `h` misclassifies.
/// The `j`-th bit is set iff `h` predicts a wrong category
/// for the `j`-th entry.
///
/// The predictions for a single classifier are independent,
/// so they are computed in parallel.
/// If several predictions fail, the error of the first failing entry
/// is returned.
/// `learner` is only used to name the classifier in errors.
///
/// Time complexity: `O(m)`, where `m` is the number of training examples.
pub(crate) fn miss_set<X, H>(
    dataset: &[(X, usize)],
    h: &H,
    learner: usize,
    num_cats: usize,
) -> Result<FixedBitSet, SammeError>
    where X: Sync,
          H: Classifier<X> + Sync,
{
    // Collected in order first, so that the reported failure
    // is the one of the lowest failing entry.
    let wrong = dataset.par_iter()
        .map(|(x, y)| {
            let p = h.predict(x).map_err(SammeError::Learner)?;
            let p = checkers::prediction(learner, p, num_cats)?;
            Ok(p != *y)
        })
        .collect::<Vec<Result<bool, SammeError>>>()
        .into_iter()
        .collect::<Result<Vec<bool>, SammeError>>()?;

    let mut misses = FixedBitSet::with_capacity(dataset.len());
    wrong.into_iter()
        .enumerate()
        .filter(|(_, w)| *w)
        .for_each(|(j, _)| misses.insert(j));
    Ok(misses)
}


/// Returns `sum(wrong * dist) / sum(dist)`.
///
/// Time complexity: `O(m)`.
#[inline(always)]
pub(crate) fn weighted_error(dist: &[f64], misses: &FixedBitSet) -> f64 {
    let total = dist.iter().sum::<f64>();
    let wrong = misses.ones()
        .map(|j| dist[j])
        .sum::<f64>();
    wrong / total
}


/// Returns the SAMME confidence of a classifier whose weighted error is `err`:
/// ```txt
/// alpha = max(0, ln(1 / (err + 1e-6) - 1) + ln(K - 1)).
/// ```
/// A classifier at or below chance level gets `0`.
#[inline(always)]
pub(crate) fn confidence(err: f64, num_cats: usize) -> f64 {
    let odds = 1f64 / (err + ERROR_GUARD) - 1f64;
    if odds <= 0f64 {
        return 0f64;
    }
    (odds.ln() + ((num_cats - 1) as f64).ln()).max(0f64)
}


/// Scales the weight of every misclassified entry by `exp(alpha)`
/// and normalizes `dist` back onto the simplex.
#[inline(always)]
pub(crate) fn reweight(dist: &mut [f64], misses: &FixedBitSet, alpha: f64) {
    if alpha > 0f64 {
        let scale = alpha.exp();
        misses.ones()
            .for_each(|j| { dist[j] *= scale; });
    }
    normalize(dist);
}


/// Divides each element by the total so that the slice sums to `1`.
/// Returns `false` (leaving `items` untouched) if the total is zero.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) -> bool {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    if z == 0f64 { return false; }

    items.iter_mut()
        .for_each(|item| { *item /= z; });
    true
}


/// Adds the balanced vote for `category`, scaled by `weight`, to `scores`:
/// `+weight` on `category` and `-weight / (K - 1)` everywhere else.
#[inline(always)]
pub(crate) fn add_balanced_vote(scores: &mut [f64], category: usize, weight: f64) {
    let off = -1f64 / (scores.len() - 1) as f64;
    scores.iter_mut()
        .enumerate()
        .for_each(|(k, s)| {
            let vote = if k == category { 1f64 } else { off };
            *s += weight * vote;
        });
}


/// Returns the index of the largest score.
/// Ties go to the smallest index.
#[inline(always)]
pub(crate) fn first_argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (k, s) in scores.iter().enumerate().skip(1) {
        if *s > scores[best] { best = k; }
    }
    best
}
