//! Defines `SAMME`, the multi-class AdaBoost of
//! [Zhu, Rosset, Zou, and Hastie. Multi-class AdaBoost](https://doi.org/10.4310/SII.2009.v2.n3.a8).
mod options;
mod ranking;
mod samme_algorithm;
mod samme_booster;

pub use options::DegeneratePolicy;
pub use samme_algorithm::{SammeTrainer, RoundRecord};
pub use samme_booster::Samme;
