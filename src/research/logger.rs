use colored::Colorize;

use crate::{
    Sample,
    Booster,
    WeakLearner,
    common::ObjectiveFunction,
};

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const DEFAULT_ROUND: usize = 100;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const HEADER: &str = "ObjectiveValue,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use `Logger` to
/// log algorithm's behavior.
pub trait Research {
    /// The combined hypothesis at intermediate rounds.
    type Output;
    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Struct `Logger` provides a generic function that
/// logs objective value, train/test loss value, and running time
/// for each round of boosting.
/// The trace is written as CSV to a file;
/// every `print_every` rounds a line goes to the terminal too.
pub struct Logger<'a, B, W, F, G> {
    booster: B,
    weak_learner: W,
    objective_func: F,
    loss_func: G,
    train: &'a Sample,
    test: &'a Sample,
    round: usize,
}


impl<'a, B, W, F, G> Logger<'a, B, W, F, G> {
    /// Create a new instance of `Logger`.
    pub fn new(
        booster: B,
        weak_learner: W,
        objective_func: F,
        loss_func: G,
        train: &'a Sample,
        test: &'a Sample,
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            loss_func,
            objective_func,
            train,
            test,
            round: DEFAULT_ROUND,
        }
    }
}

impl<H, B, W, F, G, O, S> Logger<'_, B, W, F, G>
    where B: Booster<H, Output = O> + Research<Output = S>,
          W: WeakLearner<Hypothesis = H>,
          F: ObjectiveFunction<S>,
          G: Fn(&Sample, &S) -> f64,
{
    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "\n      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "ROUND".bold().red(),
            "OBJ.".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per round.
    #[inline(always)]
    pub fn run<P: AsRef<Path>>(&mut self, filename: P)
        -> std::io::Result<O>
    {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess();

        // Cumulative time
        let mut time_acc = 0;

        // ------------------------------------------------------------
        // Boosting step
        if self.round != usize::MAX { self.print_log_header(); }
        let _ = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            let time = now.elapsed().as_millis();

            // Update the cumulative time
            time_acc += time;

            let f = self.booster.current_hypothesis();
            let obj = self.objective_func.eval(self.train, &f);

            let train = (self.loss_func)(self.train, &f);
            let test = (self.loss_func)(self.test, &f);

            // Write the results to `file`.
            let line = format!("{obj},{train},{test},{time_acc}\n");
            file.write_all(line.as_bytes())
                .expect("Failed to write the log file");

            if self.round != usize::MAX && iter % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{iter:>WIDTH$}").red(),
                    format!("{obj:>WIDTH$.PREC_WIDTH$}").blue(),
                    format!("{train:>WIDTH$.PREC_WIDTH$}").green(),
                    format!("{test:>WIDTH$.PREC_WIDTH$}").yellow(),
                );
            }

            if flow.is_break() && self.round != usize::MAX {
                println!(
                    "{} {}\t\t{}\t{}\t{}\n",
                    "[FIN]".bold().bright_green(),
                    format!("{iter:>WIDTH$}").red(),
                    format!("{obj:>WIDTH$.PREC_WIDTH$}").bold().blue(),
                    format!("{train:>WIDTH$.PREC_WIDTH$}").bold().green(),
                    format!("{test:>WIDTH$.PREC_WIDTH$}").bold().yellow(),
                );
            }
            flow
        });

        let f = self.booster.postprocess();
        Ok(f)
    }
}
