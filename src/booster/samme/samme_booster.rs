//! Provides [`Samme`], the trained-or-not SAMME booster.
use crate::{
    Booster,
    Classifier,
    SammeError,
    WeightedVote,
    checkers,
};
use super::{
    DegeneratePolicy,
    RoundRecord,
    SammeTrainer,
};


/// Defines `SAMME`, a multi-class AdaBoost that combines
/// a fixed pool of pre-trained classifiers.
///
/// This struct is based on the paper:
/// [Multi-class AdaBoost](https://doi.org/10.4310/SII.2009.v2.n3.a8)
/// by Ji Zhu, Saharon Rosset, Hui Zou, and Trevor Hastie.
///
/// Training is one sequential pass:
/// 1. Every classifier is evaluated on the raw training set and
///    the pool is sorted by ascending number of mistakes
///    (ties keep pool order).
/// 2. In that order, each classifier `h` with weighted error `err` gets
///    `alpha = max(0, ln(1 / (err + 1e-6) - 1) + ln(K - 1))`,
///    and the weight of every entry `h` misclassifies is multiplied
///    by `exp(alpha)` before the distribution is normalized.
/// 3. The confidences are normalized to sum to `1`.
///
/// A trained `Samme` is only read by `predict`,
/// so it can be shared between threads.
///
/// # Example
/// ```
/// use samme::prelude::*;
///
/// let dataset = vec![
///     (vec![0.1, 5.0], 0),
///     (vec![0.4, 1.0], 0),
///     (vec![0.6, 2.0], 1),
///     (vec![0.9, 9.0], 2),
/// ];
///
/// // Pre-trained weak classifiers.
/// let pool = vec![
///     ThresholdStump::new(0, 0.5, 0, 1),
///     ThresholdStump::new(1, 3.0, 1, 2),
///     ThresholdStump::new(0, 0.8, 0, 2),
/// ];
///
/// let mut booster = Samme::new(pool.len(), 3).unwrap();
/// booster.train(&dataset, pool).unwrap();
///
/// let predictions = booster.predict_all(
///     &dataset.iter().map(|(x, _)| x.clone()).collect::<Vec<_>>()
/// ).unwrap();
/// assert_eq!(predictions.len(), 4);
///
/// let sum = booster.learner_weights().unwrap().iter().sum::<f64>();
/// assert!((sum - 1.0).abs() < 1e-5);
/// ```
#[derive(Debug, Clone)]
pub struct Samme<H> {
    // The number of classifiers `train` expects.
    num_learner: usize,

    num_cats: usize,

    policy: DegeneratePolicy,

    // `None` until `train` succeeds.
    ensemble: Option<WeightedVote<H>>,

    history: Vec<RoundRecord>,
}


impl<H> Samme<H> {
    /// Initialize a booster for a pool of `num_learner` classifiers
    /// and `num_cats` categories.
    /// Fails if `num_cats < 2`.
    pub fn new(num_learner: usize, num_cats: usize)
        -> Result<Self, SammeError>
    {
        checkers::num_cats(num_cats)?;

        Ok(Self {
            num_learner,
            num_cats,
            policy: DegeneratePolicy::default(),
            ensemble: None,
            history: Vec::new(),
        })
    }


    /// Set what happens when every classifier gets zero confidence.
    /// The default is [`DegeneratePolicy::Fail`].
    pub fn degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.policy = policy;
        self
    }


    /// Returns the number of classifiers `train` expects.
    pub fn num_learner(&self) -> usize {
        self.num_learner
    }


    /// Returns the number of categories.
    pub fn num_cats(&self) -> usize {
        self.num_cats
    }


    /// Returns `true` once `train` has succeeded.
    pub fn is_trained(&self) -> bool {
        self.ensemble.is_some()
    }


    /// Returns the trained ensemble.
    pub fn ensemble(&self) -> Option<&WeightedVote<H>> {
        self.ensemble.as_ref()
    }


    /// Takes the trained ensemble out of the booster.
    pub fn into_ensemble(self) -> Option<WeightedVote<H>> {
        self.ensemble
    }


    /// Returns the normalized learner weights in ranked order.
    pub fn learner_weights(&self) -> Option<Vec<f64>> {
        self.ensemble.as_ref()
            .map(WeightedVote::weights)
    }


    /// Returns one record per classifier from the last training run.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history[..]
    }


    /// Returns a trainer over `dataset` and `learners`
    /// that can be driven round by round through [`Booster`].
    ///
    /// Fails if the pool size differs from `num_learner`.
    pub fn trainer<'a, X>(&self, dataset: &'a [(X, usize)], learners: Vec<H>)
        -> Result<SammeTrainer<'a, X, H>, SammeError>
    {
        if learners.len() != self.num_learner {
            return Err(SammeError::LearnerCountMismatch {
                expected: self.num_learner,
                actual: learners.len(),
            });
        }
        Ok(SammeTrainer::init(dataset, learners, self.num_cats, self.policy))
    }


    /// Train the booster on `dataset`, a sequence of `(sample, label)`,
    /// with the pre-trained classifiers in `learners`.
    ///
    /// On failure, the previous state of `self` is left untouched.
    pub fn train<X>(&mut self, dataset: &[(X, usize)], learners: Vec<H>)
        -> Result<(), SammeError>
        where X: Sync,
              H: Classifier<X> + Sync,
    {
        let mut trainer = self.trainer(dataset, learners)?;
        let ensemble = trainer.run()?;

        self.history = trainer.take_history();
        self.ensemble = Some(ensemble);
        Ok(())
    }


    fn trained(&self) -> Result<&WeightedVote<H>, SammeError> {
        self.ensemble.as_ref()
            .ok_or(SammeError::NotTrained)
    }


    /// Predicts the category of `sample`.
    pub fn predict<X>(&self, sample: &X) -> Result<usize, SammeError>
        where H: Classifier<X>,
    {
        self.trained()?.predict(sample)
    }


    /// Predicts the categories of `samples`.
    pub fn predict_all<X>(&self, samples: &[X]) -> Result<Vec<usize>, SammeError>
        where H: Classifier<X>,
    {
        self.trained()?.predict_all(samples)
    }


    /// Returns the accumulated balanced votes for `sample`,
    /// one score per category.
    pub fn decision_scores<X>(&self, sample: &X) -> Result<Vec<f64>, SammeError>
        where H: Classifier<X>,
    {
        self.trained()?.decision_scores(sample)
    }
}


impl<H> From<WeightedVote<H>> for Samme<H> {
    fn from(ensemble: WeightedVote<H>) -> Self {
        Self {
            num_learner: ensemble.len(),
            num_cats: ensemble.num_cats(),
            policy: DegeneratePolicy::default(),
            ensemble: Some(ensemble),
            history: Vec::new(),
        }
    }
}
