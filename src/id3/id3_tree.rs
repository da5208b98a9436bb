use crate::{summary, Derivation, LogStyle, Table};
use crate::common::checker;


use super::{
    node::*,
    split::*,
    entropy::LabelCounts,
    decision_tree::DecisionTree,
};


/// Grows a [`DecisionTree`] with the ID3 algorithm
/// and derives the log of the construction.
///
/// Construct it with [`Id3Builder`](super::Id3Builder).
///
/// # Example
///
/// ```no_run
/// use id3tree::{Id3Builder, TableReader};
///
/// let table = TableReader::default()
///     .file("play_tennis.csv")
///     .has_header(true)
///     .target("PlayTennis")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new().compact(true).build();
/// let tree = id3.fit(&table);
/// let log = id3.derive(&tree);
///
/// println!("{log}");
/// tree.to_dot_file("tree.dot").unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Id3 {
    style: LogStyle,
    verbose: bool,
}


impl Id3 {
    #[inline]
    pub(super) fn from_components(style: LogStyle, verbose: bool) -> Self {
        Self { style, verbose }
    }


    /// Returns the log style used by `Id3::derive`.
    pub fn log_style(&self) -> LogStyle {
        self.style
    }


    /// Grow the tree for `table`.
    /// The last column of `table` is the target.
    ///
    /// This method panics if `table` has no row or no column.
    pub fn fit(&self, table: &Table) -> DecisionTree {
        checker::check_table(table);

        if self.verbose {
            summary::print_table_stats(table, self.style);
        }

        let stats = Stats::of(table);
        let root = grow(table, stats.clone());
        let target = table.target().name();
        let tree = DecisionTree::new(target, stats, root);

        if self.verbose {
            summary::print_tree_stats(&tree);
        }

        tree
    }


    /// Collect the derivation log of `tree`.
    pub fn derive(&self, tree: &DecisionTree) -> Derivation {
        Derivation::new(tree, self.style)
    }


    /// Grow the tree for `table` and collect its derivation log.
    pub fn fit_and_derive(&self, table: &Table) -> (DecisionTree, Derivation) {
        let tree = self.fit(table);
        let derivation = self.derive(&tree);
        (tree, derivation)
    }
}


/// Grow the subtree for `table`, whose summary is `stats`.
///
/// Each branch value `a` of the chosen attribute ends in
/// - a leaf, if `S_a` has a single target value,
/// - a majority leaf, if the split attribute was the last one,
/// - otherwise the subtree grown on `S_a` without the split attribute.
fn grow(table: &Table, stats: Stats) -> Node {
    let gains = evaluate_all(table, stats.entropy);

    // Only the target column is left.
    let Some(best) = best_split(&gains) else {
        return Node::Leaf(vote(&stats.counts));
    };

    let n_column = table.shape().1;
    let column = &table.columns()[best];

    let branches = column.distinct()
        .into_iter()
        .map(|value| {
            let part = table.partition(best, value);
            let counts = LabelCounts::of(part.target());

            let child = if counts.is_pure() || n_column == 2 {
                Node::Leaf(vote(&counts))
            } else {
                let part = part.drop_column(best);
                let stats = Stats::of(&part);
                grow(&part, stats)
            };

            Branch { value: value.to_string(), child }
        })
        .collect::<Vec<_>>();

    Node::Split(Split {
        attribute: column.name().to_string(),
        stats,
        gains,
        branches,
    })
}


/// Returns the leaf for the given counts.
/// Ties between the most frequent labels go to the first one seen.
fn vote(counts: &LabelCounts) -> Leaf {
    let reason = if counts.is_pure() {
        LeafReason::Pure
    } else {
        LeafReason::Majority
    };
    let label = counts.majority().unwrap_or_default();

    Leaf::new(label, reason)
}
