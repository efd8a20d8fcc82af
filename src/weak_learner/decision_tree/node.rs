//! Defines the inner representation
//! of the Decision Tree class.
use crate::{Classifier, Sample};


use crate::weak_learner::common::{
    type_and_struct::*,
    split_rule::*,
};


use serde::{Serialize, Deserialize};

use std::fmt;


/// Enumeration of `BranchNode` and `LeafNode`.
/// A branch owns its two children outright,
/// so a tree is strictly tree-shaped; no sharing, no cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    pub(super) rule: Splitter,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


impl BranchNode {
    /// Returns the `BranchNode` from the given components.
    #[inline]
    pub(super) fn from_raw(
        rule: Splitter,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Self
    {
        Self { rule, left, right, }
    }
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) prediction: Prediction,
}


impl LeafNode {
    /// Returns a `LeafNode` that predicts the label
    /// given to this function.
    #[inline]
    pub(super) fn from_raw(prediction: Prediction) -> Self {
        Self { prediction }
    }
}


impl Node {
    /// Construct a leaf predicting the given label.
    #[inline]
    pub(super) fn leaf(prediction: Prediction) -> Self {
        Self::Leaf(LeafNode::from_raw(prediction))
    }


    /// Construct a branch from a rule and two subtrees.
    #[inline]
    pub(super) fn branch(rule: Splitter, left: Node, right: Node) -> Self {
        Self::Branch(BranchNode::from_raw(
            rule, Box::new(left), Box::new(right)
        ))
    }


    /// The number of nodes in this tree, branches and leaves included.
    pub fn node_count(&self) -> usize {
        match self {
            Node::Branch(b)
                => 1 + b.left.node_count() + b.right.node_count(),
            Node::Leaf(_) => 1,
        }
    }


    /// The number of branch nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Branch(b)
                => 1 + b.left.depth().max(b.right.depth()),
            Node::Leaf(_) => 0,
        }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn confidence(&self, _sample: &Sample, _row: usize) -> f64 {
        self.prediction.into()
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        match self.rule.split(sample, row) {
            LR::Left => self.left.confidence(sample, row),
            LR::Right => self.right.confidence(sample, row),
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        match self {
            Node::Branch(ref node) => node.confidence(sample, row),
            Node::Leaf(ref node) => node.confidence(sample, row),
        }
    }
}


impl Node {
    pub(super) fn write_indented(
        &self,
        f: &mut fmt::Formatter<'_>,
        depth: usize,
    ) -> fmt::Result
    {
        let pad = "    ".repeat(depth);
        match self {
            Node::Branch(b) => {
                writeln!(f, "{pad}[{name} == 0?]", name = b.rule.name)?;
                b.left.write_indented(f, depth + 1)?;
                b.right.write_indented(f, depth + 1)
            },
            Node::Leaf(l) => {
                writeln!(f, "{pad}(leaf, label: {})", l.prediction)
            },
        }
    }
}
