use super::DerivationLog;
use super::format::*;
use crate::id3::{Leaf, Split, Stats};


/// Logs the formulas and their values, nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactLog;


impl CompactLog {
    fn general_lines(stats: &Stats, lines: &mut Vec<String>) {
        lines.push("General information:".to_string());
        lines.push(format!("\t|S| = {}", stats.n_row));
        lines.push(format!(
            "\tremaining columns: {}", column_list(&stats.columns)
        ));
        lines.push(format!(
            "Entropy(S) = {} = {}",
            entropy_terms(&stats.counts),
            round3(stats.entropy),
        ));
    }
}


impl DerivationLog for CompactLog {
    fn split_lines(&self, split: &Split) -> Vec<String> {
        let stats = split.stats();
        let mut lines = Vec::new();
        Self::general_lines(stats, &mut lines);

        lines.push("information gain calculation:".to_string());
        for gain in split.gains() {
            lines.push(format!("\t{}:", gain.attribute));
            for v in gain.values.iter() {
                lines.push(format!(
                    "\t\tEntropy(S_{}) = {} = {}",
                    v.value,
                    entropy_terms(&v.counts),
                    round3(v.entropy),
                ));
            }
            lines.push(format!(
                "\t\tGain(S,{}) = {} = {}",
                gain.attribute,
                gain_terms(gain, stats.n_row),
                round3(gain.gain),
            ));
        }
        lines.push(max_gain(split.gains(), split.attribute()));

        lines
    }


    fn leaf_lines(&self, stats: &Stats, leaf: &Leaf) -> Vec<String> {
        let mut lines = Vec::new();
        Self::general_lines(stats, &mut lines);
        lines.push(format!("no attribute left --> root = {}", leaf.label()));
        lines
    }


    fn subtree_marker(&self, root: &str) -> String {
        format!("root = {root}")
    }
}
