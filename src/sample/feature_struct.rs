use polars::prelude::*;
use std::ops::Index;
use std::slice::Iter;


/// A single named feature column, stored densely.
/// Sparse storage is not supported;
/// the algorithms in this crate scan whole columns anyway.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature name.
    pub(super) name: String,
    /// Feature values, one per example.
    pub(super) values: Vec<f64>,
}


impl Feature {
    /// Construct a feature column from a name and its values.
    pub fn new<T: ToString>(name: T, values: Vec<f64>) -> Self {
        Self { name: name.to_string(), values, }
    }


    /// Convert `polars::Series` into `Feature`.
    pub fn from_series(series: &Series) -> Self {
        let name = series.name().to_string();

        let values = series.f64()
            .expect("The series is not a dtype f64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .unwrap();

        Self { name, values, }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns an iterator over feature values.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.values.iter()
    }


    /// Returns the feature values as a slice.
    pub fn values(&self) -> &[f64] {
        &self.values[..]
    }


    /// Returns the number of examples in this feature.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if `self.len()` is equals to `0`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// The `2`-norm of this column,
    /// used to normalize features for coordinate descent.
    pub fn l2_norm(&self) -> f64 {
        self.values.iter()
            .map(|x| x * x)
            .sum::<f64>()
            .sqrt()
    }


    /// Returns `true` if every value in this column is `0` or `1`.
    /// The weighted decision tree only splits on such columns.
    pub fn is_binary(&self) -> bool {
        self.values.iter()
            .all(|x| *x == 0.0 || *x == 1.0)
    }
}


impl Index<usize> for Feature {
    type Output = f64;


    fn index(&self, idx: usize) -> &Self::Output {
        &self.values[idx]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l2_norm_of_3_4() {
        let feature = Feature::new("f", vec![3.0, 4.0]);
        assert_eq!(feature.l2_norm(), 5.0);
    }

    #[test]
    fn binary_column_detection() {
        let binary = Feature::new("b", vec![0.0, 1.0, 1.0, 0.0]);
        let real = Feature::new("r", vec![0.0, 0.5, 1.0]);
        assert!(binary.is_binary());
        assert!(!real.is_binary());
    }
}
