use crate::{
    helpers,
    checkers,
    Classifier,
    LearnerError,
    SammeError,
};


/// The combined classifier that [`Samme`](crate::Samme) returns.
///
/// Each member is a pair `(classifier, weight)` kept in ranked order,
/// so a weight can never be read against the wrong classifier.
/// The weights are non-negative and sum to `1`.
///
/// Given a sample `x`, every member votes
/// `+w` for its predicted category and `-w / (K - 1)` for the others;
/// the category with the largest total wins,
/// the smallest index among ties.
#[derive(Debug, Clone)]
pub struct WeightedVote<H> {
    pub(crate) num_cats: usize,
    pub(crate) members: Vec<(H, f64)>,
}


impl<H> WeightedVote<H> {
    /// Construct a new `WeightedVote` from ranked `(classifier, weight)` pairs.
    /// The weights are used as given.
    #[inline]
    pub fn new(num_cats: usize, members: Vec<(H, f64)>)
        -> Result<Self, SammeError>
    {
        checkers::num_cats(num_cats)?;
        Ok(Self { num_cats, members })
    }


    /// Returns the number of categories.
    pub fn num_cats(&self) -> usize {
        self.num_cats
    }


    /// Returns the number of classifiers.
    pub fn len(&self) -> usize {
        self.members.len()
    }


    /// Returns `true` if there is no classifier.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }


    /// Returns the weights in ranked order.
    pub fn weights(&self) -> Vec<f64> {
        self.members.iter()
            .map(|(_, w)| *w)
            .collect()
    }


    /// Iterates over the classifiers in ranked order.
    pub fn learners(&self) -> impl Iterator<Item = &H> + '_ {
        self.members.iter()
            .map(|(h, _)| h)
    }


    /// Iterates over the `(classifier, weight)` pairs in ranked order.
    pub fn iter(&self) -> impl Iterator<Item = (&H, f64)> + '_ {
        self.members.iter()
            .map(|(h, w)| (h, *w))
    }


    /// Decompose the combined classifier into its ranked pairs.
    #[inline]
    pub fn into_parts(self) -> Vec<(H, f64)> {
        self.members
    }
}


impl<H> WeightedVote<H> {
    /// Returns the accumulated balanced votes, one score per category.
    pub fn decision_scores<X>(&self, sample: &X) -> Result<Vec<f64>, SammeError>
        where H: Classifier<X>,
    {
        let mut scores = vec![0f64; self.num_cats];
        for (i, (h, w)) in self.members.iter().enumerate() {
            let p = h.predict(sample).map_err(SammeError::Learner)?;
            let p = checkers::prediction(i, p, self.num_cats)?;
            helpers::add_balanced_vote(&mut scores, p, *w);
        }
        Ok(scores)
    }


    /// Predicts the category of `sample`.
    pub fn predict<X>(&self, sample: &X) -> Result<usize, SammeError>
        where H: Classifier<X>,
    {
        let scores = self.decision_scores(sample)?;
        Ok(helpers::first_argmax(&scores))
    }


    /// Predicts the categories of `samples`.
    pub fn predict_all<X>(&self, samples: &[X]) -> Result<Vec<usize>, SammeError>
        where H: Classifier<X>,
    {
        samples.iter()
            .map(|sample| self.predict(sample))
            .collect()
    }
}


impl<X, H> Classifier<X> for WeightedVote<H>
    where H: Classifier<X>,
{
    fn predict(&self, sample: &X) -> Result<usize, LearnerError> {
        WeightedVote::predict(self, sample)
            .map_err(LearnerError::from)
    }
}
