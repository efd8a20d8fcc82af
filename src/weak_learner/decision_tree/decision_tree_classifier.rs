//! Defines the classifier produced by [`DecisionTree`](super::DecisionTree).
use crate::{Classifier, Sample};
use super::node::Node;

use serde::{Serialize, Deserialize};

use std::fmt;


/// A trained weighted decision tree.
/// Classification is a deterministic root-to-leaf traversal:
/// at each branch the example's value at the splitting column
/// routes it left (`0`) or right (non-zero),
/// and the reached leaf's label is returned.
/// You can read/write this struct by `Serde` trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node,
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTreeClassifier {
    /// The number of nodes in this tree, branches and leaves included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }


    /// The number of branch nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.root.confidence(sample, row)
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "----------")?;
        writeln!(f, "# Decision Tree")?;
        self.root.write_indented(f, 0)?;
        write!(f, "----------")
    }
}
