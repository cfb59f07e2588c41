//! Provides the boosting framework and the SAMME booster.

mod core;
mod samme;


/// Booster trait
pub use self::core::Booster;

pub use self::samme::{
    Samme,
    SammeTrainer,
    RoundRecord,
    DegeneratePolicy,
};
