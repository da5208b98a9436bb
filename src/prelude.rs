//! Exports the tree builder, the input table and the log types.
//!
pub use crate::table::{
    Column,
    Table,
    TableReader,
};


pub use crate::id3::{
    // Tree builder
    Id3,
    Id3Builder,


    // Grown tree
    DecisionTree,
    Node,
    Split,
    Branch,
    Leaf,
    LeafReason,
};


pub use crate::derivation::{
    Derivation,
    DerivationLog,
    LogStyle,
};


pub use crate::{build_tree, run};
