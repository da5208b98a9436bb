//! Terminal summaries printed by `Id3` in verbose mode.
use colored::Colorize;

use crate::{DecisionTree, LogStyle, Table};

const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;


/// Print the shape of `table` and the settings before growing a tree.
pub(crate) fn print_table_stats(table: &Table, style: LogStyle) {
    let (n_row, n_column) = table.shape();
    let header = format!(
        "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
        "", "STATS".bold(), "",
    );
    println!(
        "\n{header}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
        "Rows".bold(),
        n_row.to_string().bold().green(),
        "Attributes".bold(),
        n_column.saturating_sub(1).to_string().bold().green(),
        "Target".bold(),
        table.target().name().bold().green(),
        "Log style".bold(),
        style.to_string().bold().green(),
    );
}


/// Print the shape of the grown tree.
pub(crate) fn print_tree_stats(tree: &DecisionTree) {
    println!(
        "\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
        {:=^FULL_WIDTH$}\n\
        ",
        "Root".bold(),
        tree.split_attribute().bold().yellow(),
        "Depth".bold(),
        tree.depth().to_string().bold().yellow(),
        "Leaves".bold(),
        tree.leaves().to_string().bold().yellow(),
        "".bold(),
    );
}
