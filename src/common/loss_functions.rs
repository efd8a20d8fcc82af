//! Loss functions over a trained hypothesis and a sample.
use crate::{Sample, Classifier, Regressor};


/// The fraction of examples in `sample`
/// whose predicted label differs from the target.
#[inline]
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier,
{
    let n_sample = sample.shape().0 as f64;
    let target = sample.target();

    f.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(hx, &y)| if hx as f64 != y { 1.0 } else { 0.0 })
        .sum::<f64>()
        / n_sample
}


/// The fraction of examples in `sample`
/// whose predicted label equals the target.
#[inline]
pub fn accuracy<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier,
{
    1.0 - zero_one_loss(sample, f)
}


/// The total weight of misclassified examples
/// divided by the total weight,
/// for the given per-example weights `dist`.
#[inline]
pub fn weighted_loss<H>(sample: &Sample, dist: &[f64], f: &H) -> f64
    where H: Classifier,
{
    let target = sample.target();
    assert_eq!(dist.len(), target.len());

    let total = dist.iter().sum::<f64>();
    let mistakes = f.predict_all(sample)
        .into_iter()
        .zip(target)
        .zip(dist)
        .map(|((hx, &y), d)| if hx as f64 != y { *d } else { 0.0 })
        .sum::<f64>();

    mistakes / total
}


/// The residual sum of squares of a regressor on `sample`.
#[inline]
pub fn residual_sum_of_squares<R>(sample: &Sample, f: &R) -> f64
    where R: Regressor,
{
    let target = sample.target();

    f.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(fx, &y)| (y - fx).powi(2))
        .sum::<f64>()
}
