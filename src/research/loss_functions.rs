use crate::{Classifier, SammeError};


/// Returns the fraction of entries in `dataset` that `f` misclassifies.
/// An empty dataset has loss `0`.
pub fn zero_one_loss<X, F>(dataset: &[(X, usize)], f: &F)
    -> Result<f64, SammeError>
    where F: Classifier<X>,
{
    if dataset.is_empty() {
        return Ok(0f64);
    }

    let n_sample = dataset.len() as f64;
    let mut n_miss = 0_usize;
    for (x, y) in dataset {
        let p = f.predict(x).map_err(SammeError::Learner)?;
        if p != *y { n_miss += 1; }
    }
    Ok(n_miss as f64 / n_sample)
}
