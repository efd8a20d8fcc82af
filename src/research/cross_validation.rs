use rand::prelude::*;
use colored::Colorize;
use crate::Sample;

const WIDTH: usize = 9;

/// A k-fold generator of training/test sample pairs.
/// The rows are cut into `n_folds` equally sized test blocks
/// (any remainder stays in the training side of every fold);
/// iteration yields one `(train, test)` pair per fold.
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
/// use minilearn::CrossValidation;
///
/// let features = vec![
///     Feature::new("grade.A", vec![0.0, 1.0, 0.0, 1.0, 1.0]),
/// ];
/// let sample = Sample::from_columns(
///     features, vec![-1.0, 1.0, -1.0, 1.0, 1.0]
/// );
///
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let mut booster = AdaBoost::init(&train)
///         .num_rounds(10);
///     let weak_learner = DecisionTree::stump();
///     let f = booster.run(&weak_learner);
///
///     let train_loss = zero_one_loss(&train, &f);
///     let test_loss = zero_one_loss(&test, &f);
///     println!("[train: {train_loss}] [test: {test_loss}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    /// Panics when there are fewer rows than folds.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        let n_sample = self.sample.shape().0;
        assert!(
            (1..=n_sample).contains(&n_folds),
            "the number of folds must be in `1..={n_sample}`. \
             got {n_folds}.",
        );
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the training sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let fold_size = self.sample.shape().0 / self.n_folds;
        let (start, end) = (i * fold_size, (i + 1) * fold_size);
        self.sample.split(&self.ix, start, end)
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {train_size:>WIDTH$}]").bold().green(),
                format!("[TEST {test_size:>WIDTH$}]").bold().yellow(),
            );
        }

        Some(output)
    }
}
