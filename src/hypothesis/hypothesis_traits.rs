use std::sync::Arc;


/// The failure type a weak classifier may report.
/// It is carried to the caller of `train`/`predict` unchanged.
pub type LearnerError = Box<dyn std::error::Error + Send + Sync>;


/// A trait that defines the behavor of a pre-trained classifier.
/// You only need to implement `predict` method.
///
/// `predict` must return a category index in `[0, num_cats)`
/// and must be deterministic:
/// the booster asks the same question more than once.
pub trait Classifier<X> {
    /// Predicts the category index of `sample`.
    fn predict(&self, sample: &X) -> Result<usize, LearnerError>;


    /// Predicts the category indices of `samples`.
    fn predict_all(&self, samples: &[X]) -> Result<Vec<usize>, LearnerError>
    {
        samples.iter()
            .map(|sample| self.predict(sample))
            .collect()
    }
}


impl<X, C> Classifier<X> for &C
    where C: Classifier<X> + ?Sized,
{
    fn predict(&self, sample: &X) -> Result<usize, LearnerError> {
        (**self).predict(sample)
    }
}


impl<X, C> Classifier<X> for Box<C>
    where C: Classifier<X> + ?Sized,
{
    fn predict(&self, sample: &X) -> Result<usize, LearnerError> {
        (**self).predict(sample)
    }
}


impl<X, C> Classifier<X> for Arc<C>
    where C: Classifier<X> + ?Sized,
{
    fn predict(&self, sample: &X) -> Result<usize, LearnerError> {
        (**self).predict(sample)
    }
}
