use std::io;
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;
use super::feature_struct::Feature;


/// The name given to the constant-one column
/// prepended by [`Sample::with_intercept`].
pub(crate) const INTERCEPT_NAME: &str = "intercept";


/// Struct `Sample` holds a batch sample as named dense feature columns
/// and a target vector.
/// The linear models in this crate expect the intercept column
/// (all ones) at position `0`;
/// see [`Sample::with_intercept`].
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from in-memory feature columns
    /// and a target vector.
    /// Every column must have the same length as `target`.
    pub fn from_columns(features: Vec<Feature>, target: Vec<f64>) -> Self {
        let n_sample = target.len();
        let n_feature = features.len();

        for feature in &features {
            assert_eq!(
                feature.len(), n_sample,
                "Feature `{}` has {} values, expected {n_sample}",
                feature.name(), feature.len(),
            );
        }

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Self { name_to_index, features, target, n_sample, n_feature, }
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let (n_sample, n_feature) = data.shape();
        let target = target.f64()
            .expect("The target is not a dtype f64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .unwrap();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Prepend a constant-`1.0` column named `intercept`
    /// so that the linear models can fit a bias term.
    /// Existing column indices shift up by one.
    pub fn with_intercept(mut self) -> Self {
        let constant = Feature::new(
            INTERCEPT_NAME, vec![1.0; self.n_sample]
        );
        self.features.insert(0, constant);
        self.n_feature += 1;

        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        self
    }


    /// Returns the target values as a slice.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the feature column at index `j`.
    pub fn feature(&self, j: usize) -> &Feature {
        &self.features[j]
    }


    /// Returns the column index of the feature named `name`, if any.
    pub fn feature_index<S: AsRef<str>>(&self, name: S) -> Option<usize> {
        self.name_to_index.get(name.as_ref()).copied()
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns a new `Sample` consisting of the given rows,
    /// in the given order.
    pub fn subsample(&self, rows: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| {
                let values = rows.iter()
                    .map(|&i| feat[i])
                    .collect::<Vec<_>>();
                Feature::new(feat.name(), values)
            })
            .collect::<Vec<_>>();
        let target = rows.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<_>>();

        Self::from_columns(features, target)
    }


    /// Split the rows indexed by `ix` into a train/test pair,
    /// where the test part is `ix[start..end]`.
    /// Used by `CrossValidation`.
    pub(crate) fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let train_rows = ix[..start].iter()
            .chain(ix[end..].iter())
            .copied()
            .collect::<Vec<_>>();
        let test_rows = &ix[start..end];

        (self.subsample(&train_rows), self.subsample(test_rows))
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    /// Panics with a description of the first offending value otherwise.
    pub fn is_valid_binary_instance(&self) {
        assert_eq!(
            self.n_sample,
            self.target.len(),
            "The target length does not match the number of examples",
        );

        if let Some(y) = self.target.iter().find(|y| y.abs() != 1.0) {
            panic!(
                "Target values must be -1.0 or +1.0 for \
                 binary classification. Got {y}."
            );
        }
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("No feature named `{name}`"));
        &self.features[k]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn toy_sample() -> Sample {
        let features = vec![
            Feature::new("a", vec![0.0, 1.0, 0.0]),
            Feature::new("b", vec![2.0, 3.0, 4.0]),
        ];
        Sample::from_columns(features, vec![1.0, -1.0, 1.0])
    }

    #[test]
    fn intercept_goes_first() {
        let sample = toy_sample().with_intercept();
        assert_eq!(sample.shape(), (3, 3));
        assert_eq!(sample.feature_index("intercept"), Some(0));
        assert_eq!(sample.feature_index("a"), Some(1));
        assert!(sample.feature(0).iter().all(|x| *x == 1.0));
    }

    #[test]
    fn subsample_keeps_row_order() {
        let sample = toy_sample();
        let sub = sample.subsample(&[2, 0]);
        assert_eq!(sub.shape(), (2, 2));
        assert_eq!(sub.at(0), (vec![0.0, 4.0], 1.0));
        assert_eq!(sub.at(1), (vec![0.0, 2.0], 1.0));
    }

    #[test]
    #[should_panic]
    fn rejects_non_binary_target() {
        let features = vec![Feature::new("a", vec![0.0, 1.0])];
        let sample = Sample::from_columns(features, vec![1.0, 0.5]);
        sample.is_valid_binary_instance();
    }
}
