//! The ranking pass of SAMME.
use fixedbitset::FixedBitSet;

use crate::{Classifier, SammeError};
use crate::helpers;


/// A classifier together with what it gets wrong on the training set.
pub(crate) struct RankedLearner<H> {
    /// Position of the classifier in the pool handed to `train`.
    pub(crate) origin: usize,
    pub(crate) learner: H,
    /// The `j`-th bit is set iff the classifier misclassifies entry `j`.
    pub(crate) misses: FixedBitSet,
}


impl<H> RankedLearner<H> {
    /// The raw (unweighted) number of misclassified entries.
    #[inline]
    pub(crate) fn n_miss(&self) -> usize {
        self.misses.count_ones(..)
    }
}


/// Orders `learners` by ascending raw misclassification count on `dataset`.
/// Classifiers with the same count keep their relative order in the pool.
///
/// Time complexity: `O(m * n)` predictions, where
/// - `m` is the number of training examples and
/// - `n` is the number of classifiers.
pub(crate) fn rank<X, H>(
    dataset: &[(X, usize)],
    learners: Vec<H>,
    num_cats: usize,
) -> Result<Vec<RankedLearner<H>>, SammeError>
    where X: Sync,
          H: Classifier<X> + Sync,
{
    let mut ranked = learners.into_iter()
        .enumerate()
        .map(|(origin, learner)| {
            let misses = helpers::miss_set(dataset, &learner, origin, num_cats)?;
            tracing::debug!(
                learner = origin,
                misses = misses.count_ones(..),
                "evaluated weak learner"
            );
            Ok(RankedLearner { origin, learner, misses })
        })
        .collect::<Result<Vec<_>, SammeError>>()?;

    // `sort_by_key` is stable.
    ranked.sort_by_key(RankedLearner::n_miss);
    Ok(ranked)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::FnClassifier;

    #[test]
    fn ties_keep_pool_order() {
        // Each classifier predicts `0` for the first `k` entries.
        let data = (0..4).map(|j| (j, 1)).collect::<Vec<(usize, usize)>>();
        let pool = [3, 1, 1, 2].into_iter()
            .map(|k| FnClassifier::new(move |x: &usize| if *x < k { 0 } else { 1 }))
            .collect::<Vec<_>>();

        let ranked = rank(&data, pool, 2).unwrap();
        let order = ranked.iter().map(|r| r.origin).collect::<Vec<_>>();
        let counts = ranked.iter().map(|r| r.n_miss()).collect::<Vec<_>>();
        assert_eq!(order, vec![1, 2, 3, 0]);
        assert_eq!(counts, vec![1, 1, 2, 3]);
    }

    #[test]
    fn learner_failure_stops_the_pass() {
        #[derive(Debug)]
        struct Broken;
        impl std::fmt::Display for Broken {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "broken")
            }
        }
        impl std::error::Error for Broken {}

        struct Failing;
        impl Classifier<usize> for Failing {
            fn predict(&self, _: &usize) -> Result<usize, crate::LearnerError> {
                Err(Box::new(Broken))
            }
        }

        let data = vec![(0_usize, 0_usize)];
        match rank(&data, vec![Failing], 2) {
            Err(SammeError::Learner(e)) => assert!(e.is::<Broken>()),
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("ranking should fail"),
        }
    }
}
