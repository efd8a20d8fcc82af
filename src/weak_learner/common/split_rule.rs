//! This file defines split rules for decision tree.
use serde::{Serialize, Deserialize};

use crate::Sample;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// The feature value is zero.
    Left,
    /// The feature value is non-zero.
    Right,
}


/// A splitting rule over a binary (0/1-valued) feature column.
/// Examples with feature value `0` go left,
/// everything else goes right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    pub(crate) feature: usize,
    pub(crate) name: String,
}


impl Splitter {
    #[inline]
    pub(crate) fn new(feature: usize, name: &str) -> Self {
        let name = name.to_string();
        Self { feature, name, }
    }


    /// Defines the splitting.
    #[inline]
    pub fn split(&self, sample: &Sample, row: usize) -> LR {
        let value = sample.feature(self.feature)[row];

        if value == 0.0 {
            LR::Left
        } else {
            LR::Right
        }
    }
}
