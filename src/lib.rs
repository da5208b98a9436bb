#![warn(missing_docs)]

//!
//! A crate that grows decision trees with the ID3 algorithm
//! and explains how it did so.
//!
//! Given a table of categorical attributes whose last column is the
//! class label, [`Id3`] picks the attribute with the largest
//! information gain, partitions the rows by its values and recurses.
//! The grown [`DecisionTree`] keeps the arithmetic of every split,
//! so that two artifacts can be produced from it:
//!
//! - a [`Derivation`], the step-by-step log of the entropy and
//!     information gain calculations, in a compact or a detailed
//!     [`LogStyle`];
//! - a Graphviz DOT description of the tree.
//!
//! # Example
//! ```no_run
//! use id3tree::prelude::*;
//!
//! let table = TableReader::default()
//!     .file("play_tennis.csv")
//!     .has_header(true)
//!     .target("PlayTennis")
//!     .read()
//!     .unwrap();
//!
//! let (log, records) = build_tree(&table, true);
//! ```

pub mod table;
pub mod id3;
pub mod derivation;
pub mod prelude;

mod common;
mod summary;


use std::io;
use std::path::Path;


pub use table::{Column, Table, TableReader};

pub use id3::{
    DecisionTree,
    Id3,
    Id3Builder,
};

pub use derivation::{
    Derivation,
    DerivationLog,
    LogStyle,
};


/// File name of the derivation log written by [`run`].
pub const LOG_FILE: &str = "log.txt";
/// File name of the DOT graph written by [`run`].
pub const DOT_FILE: &str = "tree.dot";


/// Grow a tree for `table` and return
/// the pair of the derivation log lines and the DOT records.
/// If `compact` holds, the log only carries the formulas and values.
pub fn build_tree(table: &Table, compact: bool) -> (Vec<String>, Vec<String>) {
    let id3 = Id3Builder::new()
        .compact(compact)
        .build();
    let (tree, derivation) = id3.fit_and_derive(table);

    (derivation.into_lines(), tree.dot_records())
}


/// Grow a tree for `table` and write
/// the derivation log to `out_dir/log.txt` and
/// the DOT graph to `out_dir/tree.dot`.
/// Rendering the graph is left to Graphviz.
pub fn run<P>(table: &Table, compact: bool, out_dir: P)
    -> io::Result<DecisionTree>
    where P: AsRef<Path>
{
    let out_dir = out_dir.as_ref();
    let id3 = Id3Builder::new()
        .compact(compact)
        .build();
    let (tree, derivation) = id3.fit_and_derive(table);

    derivation.write(out_dir.join(LOG_FILE))?;
    tree.to_dot_file(out_dir.join(DOT_FILE))?;

    Ok(tree)
}
