//! Defines the inner representation
//! of the ID3 decision tree.
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use super::entropy::LabelCounts;
use super::split::AttributeGain;
use crate::Table;


/// Summary of the partition a node was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// `|S|`
    pub n_row: usize,
    /// Remaining column names, the target included.
    pub columns: Vec<String>,
    /// Target counts over `S`.
    pub counts: LabelCounts,
    /// `Entropy(S)`
    pub entropy: f64,
}


impl Stats {
    /// Compute the summary of `table`.
    pub(crate) fn of(table: &Table) -> Self {
        let counts = LabelCounts::of(table.target());
        let entropy = counts.entropy();
        let columns = table.column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self { n_row: table.shape().0, columns, counts, entropy, }
    }
}


/// Why a leaf was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafReason {
    /// Only one target value remains.
    Pure,
    /// No attribute remains but the target values still differ,
    /// so the most frequent value is taken.
    Majority,
}


/// A node labeled with a class value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    pub(crate) label: String,
    pub(crate) reason: LeafReason,
}


impl Leaf {
    /// Returns a `Leaf` that predicts `label`.
    #[inline]
    pub(crate) fn new<S: ToString>(label: S, reason: LeafReason) -> Self {
        Self { label: label.to_string(), reason }
    }


    /// Returns the class label.
    pub fn label(&self) -> &str {
        &self.label
    }


    /// Returns the reason this leaf was created.
    pub fn reason(&self) -> LeafReason {
        self.reason
    }
}


/// An edge of a split node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub(crate) value: String,
    pub(crate) child: Node,
}


impl Branch {
    /// Returns the attribute value this branch is taken for.
    pub fn value(&self) -> &str {
        &self.value
    }


    /// Returns the child node.
    pub fn child(&self) -> &Node {
        &self.child
    }
}


/// A node that splits the examples at an attribute.
/// It keeps the arithmetic that led to the choice of the attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    pub(crate) attribute: String,
    pub(crate) stats: Stats,
    pub(crate) gains: Vec<AttributeGain>,
    pub(crate) branches: Vec<Branch>,
}


impl Split {
    /// Returns the split attribute.
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// Returns the summary of the partition this node splits.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }


    /// Returns the gain of every candidate attribute, in column order.
    pub fn gains(&self) -> &[AttributeGain] {
        &self.gains[..]
    }


    /// Returns the branches in first-seen order of the attribute values.
    pub fn branches(&self) -> &[Branch] {
        &self.branches[..]
    }


    /// Appends the DOT records of the subtree rooted at this node.
    /// `suffix` is the concatenation of the branch indices
    /// taken from the root to this node.
    pub(crate) fn dot_records(&self, suffix: &str, records: &mut Vec<String>) {
        let split_id = format!("{}{suffix}", self.attribute);

        for (i, branch) in self.branches.iter().enumerate() {
            let child_suffix = format!("{suffix}{i}");

            if let Node::Split(child) = &branch.child {
                child.dot_records(&child_suffix, records);
            }

            let child_name = branch.child.label();
            let child_id = format!("{child_name}{child_suffix}");

            records.push(node_record(&child_id, child_name));
            records.push(edge_record(&split_id, &child_id, &branch.value));
        }
    }
}


/// Enumeration of `Split` and `Leaf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have a child per attribute value.
    Split(Split),


    /// A node that have no child.
    Leaf(Leaf),
}


impl Node {
    /// Returns the display name of this node:
    /// the split attribute or the class label.
    pub fn label(&self) -> &str {
        match self {
            Node::Split(split) => split.attribute.as_str(),
            Node::Leaf(leaf) => leaf.label.as_str(),
        }
    }


    /// Returns the number of splits on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Split(split) => {
                1 + split.branches.iter()
                    .map(|branch| branch.child.depth())
                    .max()
                    .unwrap_or(0)
            },
            Node::Leaf(_) => 0,
        }
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn leaves(&self) -> usize {
        match self {
            Node::Split(split) => {
                split.branches.iter()
                    .map(|branch| branch.child.leaves())
                    .sum()
            },
            Node::Leaf(_) => 1,
        }
    }


    /// Follow the branches matching `row` down to a leaf.
    /// Returns `None` if `row` lacks a split attribute
    /// or holds a value never seen at that split.
    pub fn predict(&self, row: &HashMap<&str, &str>) -> Option<&str> {
        match self {
            Node::Split(split) => {
                let value = row.get(split.attribute.as_str())?;
                split.branches.iter()
                    .find(|branch| branch.value == *value)?
                    .child
                    .predict(row)
            },
            Node::Leaf(leaf) => Some(leaf.label.as_str()),
        }
    }
}


/// Escapes `"` and `\` so that `text` fits in a DOT string.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}


pub(crate) fn node_record(id: &str, name: &str) -> String {
    format!("\"{}\" [label=\"{}\"]", escape(id), escape(name))
}


pub(crate) fn edge_record(parent: &str, child: &str, value: &str) -> String {
    format!(
        "\"{}\" -> \"{}\" [label=\"{}\"]",
        escape(parent), escape(child), escape(value),
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str) -> Node {
        Node::Leaf(Leaf::new(label, LeafReason::Pure))
    }

    fn split(attribute: &str, branches: Vec<(&str, Node)>) -> Node {
        let stats = Stats {
            n_row: 0,
            columns: Vec::new(),
            counts: LabelCounts::new(Vec::<&str>::new()),
            entropy: 0f64,
        };
        let branches = branches.into_iter()
            .map(|(value, child)| Branch { value: value.to_string(), child })
            .collect();
        Node::Split(Split {
            attribute: attribute.to_string(),
            stats,
            gains: Vec::new(),
            branches,
        })
    }

    fn toy() -> Node {
        split("A", vec![
            ("x", leaf("Yes")),
            ("y", split("B", vec![("p", leaf("Yes")), ("q", leaf("No"))])),
        ])
    }

    #[test]
    fn test_depth_01() {
        let res = toy().depth();
        assert_eq!(2, res, "expected 2, got {res}.");
    }

    #[test]
    fn test_leaves_01() {
        let res = toy().leaves();
        assert_eq!(3, res, "expected 3, got {res}.");
    }

    #[test]
    fn test_dot_records_01() {
        let Node::Split(root) = toy() else { unreachable!() };
        let mut res = Vec::new();
        root.dot_records("", &mut res);

        let exp = vec![
            r#""Yes0" [label="Yes"]"#,
            r#""A" -> "Yes0" [label="x"]"#,
            r#""Yes10" [label="Yes"]"#,
            r#""B1" -> "Yes10" [label="p"]"#,
            r#""No11" [label="No"]"#,
            r#""B1" -> "No11" [label="q"]"#,
            r#""B1" [label="B"]"#,
            r#""A" -> "B1" [label="y"]"#,
        ];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_predict_01() {
        let tree = toy();
        let row = HashMap::from([("A", "y"), ("B", "q")]);
        let res = tree.predict(&row);
        assert_eq!(Some("No"), res, "expected Some(\"No\"), got {res:?}.");
    }

    #[test]
    fn test_predict_unseen_01() {
        let tree = toy();
        let row = HashMap::from([("A", "z")]);
        let res = tree.predict(&row);
        assert_eq!(None, res, "expected None, got {res:?}.");
    }

    #[test]
    fn test_escape_01() {
        let res = node_record("a\"b", "a\"b");
        let exp = r#""a\"b" [label="a\"b"]"#;
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }
}
