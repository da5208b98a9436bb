//! Defines the decision tree produced by `Id3`.
use serde::{Serialize, Deserialize};

use std::collections::HashMap;
use std::path::Path;
use std::fs::File;
use std::io::{self, prelude::*};

use super::node::*;
use crate::Table;


/// A decision tree grown by [`Id3`](super::Id3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    target: String,
    stats: Stats,
    root: Node,
}


impl DecisionTree {
    #[inline]
    pub(super) fn new<S: ToString>(target: S, stats: Stats, root: Node) -> Self {
        Self { target: target.to_string(), stats, root }
    }


    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the summary of the whole training table.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }


    /// Returns the name of the target column.
    pub fn target(&self) -> &str {
        &self.target
    }


    /// Returns the attribute the root splits at,
    /// or the class label if the root is a leaf.
    pub fn split_attribute(&self) -> &str {
        self.root.label()
    }


    /// Returns the number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    pub fn leaves(&self) -> usize {
        self.root.leaves()
    }


    /// Returns the DOT node and edge records of the tree,
    /// without the surrounding `digraph`.
    ///
    /// A node is identified by its name followed by the branch indices
    /// taken from the root, e.g., `"Humidity0"` or `"Yes01"`.
    pub fn dot_records(&self) -> Vec<String> {
        match &self.root {
            Node::Split(split) => {
                let mut records = Vec::new();
                split.dot_records("", &mut records);
                records
            },
            Node::Leaf(leaf) => {
                vec![node_record(leaf.label(), leaf.label())]
            },
        }
    }


    /// Returns the whole DOT graph.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph G {\n");
        for record in self.dot_records() {
            dot.push('\t');
            dot.push_str(&record);
            dot.push('\n');
        }
        dot.push('}');
        dot
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_dot().as_bytes())?;

        Ok(())
    }


    /// Predict the class of `row`, a map from column name to value.
    /// Returns `None` if `row` reaches a split with a value
    /// never seen in training, or lacks the split attribute.
    pub fn predict(&self, row: &HashMap<&str, &str>) -> Option<&str> {
        self.root.predict(row)
    }


    /// Predict the class of every row of `table`.
    pub fn predict_all(&self, table: &Table) -> Vec<Option<String>> {
        let n_row = table.shape().0;
        (0..n_row).map(|i| {
                let row = table.row(i);
                self.predict(&row).map(str::to_string)
            })
            .collect()
    }


    /// Serialize the tree, with the arithmetic of every split, into JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }


    /// Restore a tree from the output of `DecisionTree::to_json`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
