use crate::hypothesis::{Classifier, LearnerError};

use std::fmt;


/// Turns an infallible closure `Fn(&X) -> usize` into a [`Classifier`].
///
/// ```
/// use samme::prelude::*;
///
/// let parity = FnClassifier::new(|x: &u32| (*x % 2) as usize);
/// assert_eq!(parity.predict(&7_u32).unwrap(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnClassifier<F> {
    func: F,
}


impl<F> FnClassifier<F> {
    /// Wraps `func`.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}


impl<X, F> Classifier<X> for FnClassifier<F>
    where F: Fn(&X) -> usize,
{
    fn predict(&self, sample: &X) -> Result<usize, LearnerError> {
        Ok((self.func)(sample))
    }
}


impl<F> fmt::Debug for FnClassifier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnClassifier").finish_non_exhaustive()
    }
}
