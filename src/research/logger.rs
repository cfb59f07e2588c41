use colored::Colorize;

use crate::{
    Booster,
    Classifier,
    SammeError,
    SammeTrainer,
    WeightedVote,
    RoundRecord,
    constants::DEFAULT_ROUND,
};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Round,Learner,RawMisses,WeightedError,Alpha,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows [`Logger`]
/// to evaluate the combined classifier after every round.
pub trait CurrentHypothesis {
    /// The combined classifier type.
    type Output;

    /// Returns the combined classifier at current state.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Struct `Logger` runs [`SammeTrainer`] round by round.
/// After each round it appends a CSV line
/// (classifier, raw misses, weighted error, confidence,
/// train/test loss of the current vote, and cumulative time)
/// to a file, and prints the same figures to stdout
/// every [`Logger::print_every`] rounds.
///
/// # Example
/// ```no_run
/// use samme::prelude::*;
/// use samme::research::{Logger, zero_one_loss};
///
/// let train = vec![(vec![0.0], 0), (vec![1.0], 1)];
/// let test  = vec![(vec![0.2], 0), (vec![0.9], 1)];
/// let pool  = vec![ThresholdStump::new(0, 0.5, 0, 1)];
///
/// let booster = Samme::new(pool.len(), 2).unwrap();
/// let trainer = booster.trainer(&train, pool).unwrap();
///
/// let f = Logger::new(trainer, zero_one_loss, &test)
///     .print_every(1)
///     .run("samme.csv")
///     .unwrap();
/// let booster = Samme::from(f);
/// ```
pub struct Logger<'a, X, H, G> {
    trainer: SammeTrainer<'a, X, H>,
    loss_func: G,
    test: &'a [(X, usize)],
    round: usize,
}


impl<'a, X, H, G> Logger<'a, X, H, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        trainer: SammeTrainer<'a, X, H>,
        loss_func: G,
        test: &'a [(X, usize)],
    ) -> Self
    {
        Self { trainer, loss_func, test, round: DEFAULT_ROUND, }
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `0` or `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }
}


impl<X, H, G> Logger<'_, X, H, G>
    where X: Sync,
          H: Classifier<X> + Clone + Sync,
          G: Fn(&[(X, usize)], &WeightedVote<H>) -> Result<f64, SammeError>,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "RAW".bold().magenta(),
            "WEIGHTED".bold().blue(),
            "".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "MISSES".bold().magenta(),
            "ERROR".bold().blue(),
            "ALPHA".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.trainer.name().bold().green(),
        );

        if let Some(info) = self.trainer.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }
        println!("{:=^FULL_WIDTH$}\n", "".bold());
    }


    /// Run SAMME with logging.
    /// Note that this method is almost the same as [`Booster::run`].
    /// This method measures running time per round.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> Result<WeightedVote<H>, SammeError>
    {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.trainer.preprocess()?;
        let round = self.round;
        let verbose = round != 0 && round != usize::MAX;
        if verbose {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        let trainer = &mut self.trainer;
        let loss_func = &self.loss_func;
        let test = self.test;

        // ---------------------------------------------------------------------
        // Boosting step
        let flow = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = trainer.boost(iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            time_acc += now.elapsed().as_millis();

            // Nothing happened in this round.
            if trainer.history().len() < iter {
                return ControlFlow::Break(Ok(iter - 1));
            }
            let record = trainer.history()[iter - 1];

            let hypothesis = trainer.current_hypothesis();
            let losses = loss_func(trainer.dataset(), &hypothesis)
                .and_then(|train| Ok((train, loss_func(test, &hypothesis)?)));
            let (train, test) = match losses {
                Ok(losses) => losses,
                Err(e) => return ControlFlow::Break(Err(e)),
            };

            // Write the results to `file`.
            let line = format!(
                "{},{},{},{},{},{train},{test},{time_acc}\n",
                record.round,
                record.learner,
                record.raw_misses,
                record.weighted_error,
                record.alpha,
            );
            if let Err(e) = file.write_all(line.as_bytes()) {
                return ControlFlow::Break(Err(e.into()));
            }

            if verbose && iter.checked_rem(round) == Some(0) {
                print_row("[LOG]".bold().magenta(), &record, train, test, time_acc);
            }

            match flow {
                ControlFlow::Continue(()) => ControlFlow::Continue(()),
                ControlFlow::Break(it) => {
                    if verbose {
                        print_row(
                            "[FIN]".bold().bright_green(),
                            &record, train, test, time_acc,
                        );
                        println!();
                    }
                    ControlFlow::Break(Ok(it))
                },
            }
        });

        if let ControlFlow::Break(Err(e)) = flow {
            return Err(e);
        }

        self.trainer.postprocess()
    }
}


fn print_row(
    tag: colored::ColoredString,
    record: &RoundRecord,
    train: f64,
    test: f64,
    time_acc: u128,
)
{
    println!(
        "{} {}\t{}\t{}\t{}\t{}\t{}\t{}",
        tag,
        format!("{:>WIDTH$}", record.round).red(),
        format!("{:>WIDTH$}", record.raw_misses).magenta(),
        format!("{:>WIDTH$.PREC_WIDTH$}", record.weighted_error).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", record.alpha).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
        time_format(time_acc).bold().cyan(),
    );
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(7), "  0.007s");
        assert_eq!(time_format(61_250), " 01m 01s");
        assert_eq!(time_format(3_725_000), " 01h 02m");
    }
}
