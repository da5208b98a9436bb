//! ID3 decision trees over categorical attributes.

/// Entropy and information gain.
pub mod entropy;
/// Choosing the attribute to split at.
pub mod split;
/// Defines the tree builder.
pub mod id3_tree;
/// Defines the tree produced by `Id3`.
pub mod decision_tree;

/// Defines the inner representations of `DecisionTree`.
mod node;
mod builder;


pub use builder::Id3Builder;
pub use decision_tree::DecisionTree;
pub use entropy::{entropy, gain, LabelCounts};
pub use id3_tree::Id3;
pub use node::{Branch, Leaf, LeafReason, Node, Split, Stats};
pub use split::{best_split, AttributeGain, ValueEntropy};
