//! This file provides some common functions
//! such as inner-product calculation.
use rayon::prelude::*;


/// Compute the inner-product of the given two slices.
#[inline(always)]
pub fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    assert_eq!(
        v1.len(), v2.len(),
        "inner product of slices with lengths {} and {}",
        v1.len(), v2.len(),
    );
    v1.into_par_iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_product_small() {
        let v1 = [1.0, 2.0, 3.0];
        let v2 = [1.0, -1.0, 2.0];
        assert_eq!(inner_product(&v1, &v2), 5.0);
    }

    #[test]
    #[should_panic]
    fn inner_product_length_mismatch() {
        inner_product(&[1.0], &[1.0, 2.0]);
    }
}
