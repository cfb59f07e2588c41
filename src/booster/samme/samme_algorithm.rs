//! Provides the training loop of SAMME.
use serde::{Serialize, Deserialize};

use crate::{
    Booster,
    Classifier,
    SammeError,
    WeightedVote,
    checkers,
    helpers,
    research::CurrentHypothesis,
};
use super::ranking::{self, RankedLearner};
use super::DegeneratePolicy;

use std::ops::ControlFlow;


/// What happened to one classifier during the boosting pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The 1-based round, i.e., the rank of the classifier.
    pub round: usize,
    /// Position of the classifier in the pool handed to `train`.
    pub learner: usize,
    /// Raw number of misclassified training entries.
    pub raw_misses: usize,
    /// Weighted error against the distribution at the start of the round.
    pub weighted_error: f64,
    /// Confidence before the final normalization.
    pub alpha: f64,
}


/// Runs SAMME over a fixed pool of pre-trained classifiers.
///
/// One round is spent per classifier, in ranked order.
/// Each round reads the distribution left by the previous one,
/// so the rounds cannot be reordered or run concurrently.
///
/// Most callers want [`Samme::train`](crate::Samme::train);
/// this struct is exposed so that [`Logger`](crate::research::Logger)
/// (or a test) can look at the state between rounds.
pub struct SammeTrainer<'a, X, H> {
    // Training sample
    dataset: &'a [(X, usize)],

    num_cats: usize,

    // Pool in its original order. Emptied by the ranking pass.
    pool: Vec<H>,

    // Classifiers in ranked order.
    ranked: Vec<RankedLearner<H>>,

    // Distribution on `dataset`.
    dist: Vec<f64>,

    // Confidences of `ranked[..alphas.len()]`.
    alphas: Vec<f64>,

    history: Vec<RoundRecord>,

    policy: DegeneratePolicy,
}


impl<'a, X, H> SammeTrainer<'a, X, H> {
    /// Initialize the trainer.
    /// Nothing is evaluated until [`Booster::preprocess`] runs.
    pub(crate) fn init(
        dataset: &'a [(X, usize)],
        pool: Vec<H>,
        num_cats: usize,
        policy: DegeneratePolicy,
    ) -> Self
    {
        Self {
            dataset,
            num_cats,
            pool,
            ranked: Vec::new(),
            dist: Vec::new(),
            alphas: Vec::new(),
            history: Vec::new(),
            policy,
        }
    }


    /// Returns the training set.
    pub fn dataset(&self) -> &'a [(X, usize)] {
        self.dataset
    }


    /// Returns the current distribution over the training entries.
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the confidences computed so far, in ranked order.
    /// These are not normalized.
    pub fn alphas(&self) -> &[f64] {
        &self.alphas[..]
    }


    /// Returns one record per completed round.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history[..]
    }


    /// Returns the pool positions of the classifiers in ranked order.
    pub fn ranked_order(&self) -> Vec<usize> {
        self.ranked.iter()
            .map(|r| r.origin)
            .collect()
    }


    /// Returns the raw misclassification counts in ranked order.
    pub fn ranked_misses(&self) -> Vec<usize> {
        self.ranked.iter()
            .map(RankedLearner::n_miss)
            .collect()
    }


    /// Takes the history out of the trainer.
    pub(crate) fn take_history(&mut self) -> Vec<RoundRecord> {
        std::mem::take(&mut self.history)
    }


    /// Returns the learner weights:
    /// `alphas` divided by their sum, or the policy's fallback.
    fn learner_weights(&self) -> Result<Vec<f64>, SammeError> {
        // Nothing was boosted.
        if self.alphas.is_empty() {
            return Err(SammeError::EmptyLearnerPool);
        }

        let mut weights = self.alphas.clone();
        if helpers::normalize(&mut weights[..]) {
            return Ok(weights);
        }

        match self.policy {
            DegeneratePolicy::Fail => Err(SammeError::DegenerateEnsemble),
            DegeneratePolicy::Uniform => {
                tracing::warn!(
                    learners = weights.len(),
                    "every weak learner got zero confidence; \
                    falling back to uniform weights"
                );
                let uni = 1f64 / weights.len() as f64;
                Ok(vec![uni; weights.len()])
            },
        }
    }
}


impl<X, H> Booster for SammeTrainer<'_, X, H>
    where X: Sync,
          H: Classifier<X> + Sync,
{
    type Output = WeightedVote<H>;


    fn name(&self) -> &str {
        "SAMME"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let n_learners = self.pool.len().max(self.ranked.len());
        let info = Vec::from([
            ("# of examples", format!("{}", self.dataset.len())),
            ("# of learners", format!("{n_learners}")),
            ("# of categories", format!("{}", self.num_cats)),
            ("Degenerate policy", format!("{:?}", self.policy)),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<(), SammeError> {
        let n_examples = self.dataset.len();
        if n_examples == 0 {
            return Err(SammeError::EmptyDataset);
        }
        if self.pool.is_empty() {
            return Err(SammeError::EmptyLearnerPool);
        }
        checkers::labels(self.dataset, self.num_cats)?;

        let pool = std::mem::take(&mut self.pool);
        self.ranked = ranking::rank(self.dataset, pool, self.num_cats)?;

        let uni = 1f64 / n_examples as f64;
        self.dist = vec![uni; n_examples];
        self.alphas = Vec::with_capacity(self.ranked.len());
        self.history = Vec::with_capacity(self.ranked.len());

        Ok(())
    }


    fn boost(&mut self, iteration: usize) -> ControlFlow<usize> {
        let n_learners = self.ranked.len();
        let current = iteration.checked_sub(1)
            .and_then(|i| self.ranked.get(i));
        let Some(ranked) = current else {
            return ControlFlow::Break(n_learners);
        };

        let err = helpers::weighted_error(&self.dist[..], &ranked.misses);
        let alpha = helpers::confidence(err, self.num_cats);

        // A classifier with zero confidence leaves the distribution as is.
        helpers::reweight(&mut self.dist[..], &ranked.misses, alpha);
        #[cfg(debug_assertions)]
        checkers::simplex_condition(&self.dist[..]);

        self.alphas.push(alpha);

        let record = RoundRecord {
            round: iteration,
            learner: ranked.origin,
            raw_misses: ranked.n_miss(),
            weighted_error: err,
            alpha,
        };
        tracing::debug!(
            round = record.round,
            learner = record.learner,
            weighted_error = record.weighted_error,
            alpha = record.alpha,
            "boosting round"
        );
        self.history.push(record);

        if iteration >= n_learners {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(())
        }
    }


    fn postprocess(&mut self) -> Result<Self::Output, SammeError> {
        let weights = self.learner_weights()?;

        let ranked = std::mem::take(&mut self.ranked);
        let members = ranked.into_iter()
            .zip(weights)
            .map(|(r, w)| (r.learner, w))
            .collect::<Vec<_>>();

        tracing::debug!(learners = members.len(), "SAMME finished");
        WeightedVote::new(self.num_cats, members)
    }
}


impl<X, H> CurrentHypothesis for SammeTrainer<'_, X, H>
    where H: Clone,
{
    type Output = WeightedVote<H>;

    /// The vote of the classifiers seen so far.
    /// While every confidence is still zero, all weights are zero.
    fn current_hypothesis(&self) -> Self::Output {
        let mut weights = self.alphas.clone();
        helpers::normalize(&mut weights[..]);

        let members = self.ranked.iter()
            .zip(weights)
            .map(|(r, w)| (r.learner.clone(), w))
            .collect::<Vec<_>>();

        WeightedVote {
            num_cats: self.num_cats,
            members,
        }
    }
}
