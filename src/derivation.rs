//! The step-by-step log of how a tree was derived.
//!
//! The log is produced by one walk over a finished [`DecisionTree`];
//! the wording of every line is delegated to a [`DerivationLog`],
//! chosen by [`LogStyle`].

/// Formatting helpers shared by the log styles.
mod format;
/// Totals only.
mod compact;
/// Totals plus the reasoning behind every step.
mod detailed;


pub use compact::CompactLog;
pub use detailed::DetailedLog;


use serde::{Serialize, Deserialize};

use std::fmt;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;

use crate::id3::{DecisionTree, Leaf, Node, Split, Stats};


/// Verbosity of the derivation log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogStyle {
    /// Formulas and their values only.
    Compact,
    /// Formulas, values and the reasoning behind every step.
    #[default]
    Detailed,
}


impl LogStyle {
    /// Returns `LogStyle::Compact` if `compact` holds,
    /// `LogStyle::Detailed` otherwise.
    pub fn from_compact(compact: bool) -> Self {
        if compact { Self::Compact } else { Self::Detailed }
    }


    /// Returns the log strategy of this style.
    pub fn logger(&self) -> Box<dyn DerivationLog> {
        match self {
            Self::Compact => Box::new(CompactLog),
            Self::Detailed => Box::new(DetailedLog),
        }
    }
}


impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compact => "Compact",
            Self::Detailed => "Detailed",
        };

        write!(f, "{name}")
    }
}


/// Implementing this trait defines the wording of a derivation log.
pub trait DerivationLog {
    /// Lines documenting the entropy/gain arithmetic at `split`
    /// and the child created for every branch.
    fn split_lines(&self, split: &Split) -> Vec<String>;


    /// Lines for a table that has no attribute left at the root,
    /// so that the whole tree is the single `leaf`.
    fn leaf_lines(&self, stats: &Stats, leaf: &Leaf) -> Vec<String>;


    /// The line that opens the log of the subtree rooted at `root`.
    fn subtree_marker(&self, root: &str) -> String;
}


/// The derivation log of a decision tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    lines: Vec<String>,
}


impl Derivation {
    /// Walk `tree` and collect the log lines in the given `style`.
    pub fn new(tree: &DecisionTree, style: LogStyle) -> Self {
        let logger = style.logger();

        let mut lines = Vec::new();
        match tree.root() {
            Node::Split(split) => {
                derive_split(split, logger.as_ref(), &mut lines);
            },
            Node::Leaf(leaf) => {
                lines = logger.leaf_lines(tree.stats(), leaf);
            },
        }

        Self { lines }
    }


    /// Returns the log lines.
    pub fn lines(&self) -> &[String] {
        &self.lines[..]
    }


    /// Returns the log lines, consuming `self`.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }


    /// Write the log to `path`, one line per line,
    /// with no trailing line break.
    pub fn write<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(self.to_string().as_bytes())?;
        Ok(())
    }
}


impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}


/// Appends the log of `split`, followed by the log of every subtree
/// in branch order, each opened by the subtree marker.
fn derive_split(
    split: &Split,
    logger: &dyn DerivationLog,
    lines: &mut Vec<String>,
)
{
    lines.append(&mut logger.split_lines(split));

    for branch in split.branches() {
        if let Node::Split(child) = branch.child() {
            lines.push(String::new());
            lines.push(String::new());
            lines.push(logger.subtree_marker(child.attribute()));
            derive_split(child, logger, lines);
        }
    }
}
