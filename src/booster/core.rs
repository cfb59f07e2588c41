//! Provides `Booster` trait.

use crate::SammeError;

use std::ops::ControlFlow;


/// The trait [`Booster`] defines the round-based framework of boosting.
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::preprocess`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster {
    /// The final hypothesis output by a boosting algorithm.
    type Output;

    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;

    /// Returns the information of boosting algorithm as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// A main function that runs boosting algorithm.
    fn run(&mut self) -> Result<Self::Output, SammeError> {
        self.preprocess()?;

        let _ = (1..).try_for_each(|iter| self.boost(iter));

        self.postprocess()
    }

    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    fn preprocess(&mut self) -> Result<(), SammeError>;

    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` while there is work left,
    /// `ControlFlow::Break(terminated_iter)` otherwise.
    fn boost(&mut self, iteration: usize) -> ControlFlow<usize>;

    /// Post-processing.
    fn postprocess(&mut self) -> Result<Self::Output, SammeError>;
}
