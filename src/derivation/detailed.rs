use super::DerivationLog;
use super::format::*;
use crate::id3::{LabelCounts, Leaf, LeafReason, Node, Split, Stats};


/// Logs every step of the derivation together with its reasoning.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedLog;


impl DetailedLog {
    fn general_lines(stats: &Stats, lines: &mut Vec<String>) {
        lines.push("General information:".to_string());
        lines.push(format!("\t|S| = {}", stats.n_row));
        lines.push(format!(
            "\tremaining columns: {}", column_list(&stats.columns)
        ));
        lines.push("Calculate the entropy of the subset:".to_string());
        count_lines(&stats.counts, "\t", lines);
        lines.push("\tCalculate the entropy:".to_string());
        lines.push(format!(
            "\t\tEntropy(S) = {} = {}",
            entropy_terms(&stats.counts),
            round3(stats.entropy),
        ));
    }


    fn gain_lines(split: &Split, lines: &mut Vec<String>) {
        let n_row = split.stats().n_row;

        lines.push("Calculate the information gain of all attributes:".to_string());
        for gain in split.gains() {
            lines.push(format!("\t{}:", gain.attribute));
            lines.push(
                "\t\tCalculate the entropy of all values of the attribute:"
                    .to_string()
            );
            for v in gain.values.iter() {
                lines.push(format!("\t\t\t{}:", v.value));
                count_lines(&v.counts, "\t\t\t\t", lines);
                lines.push("\t\t\t\tCalculate the entropy:".to_string());
                lines.push(format!(
                    "\t\t\t\t\tEntropy(S_{}) = {} = {}",
                    v.value,
                    entropy_terms(&v.counts),
                    round3(v.entropy),
                ));
            }
            lines.push(
                "\t\tCalculate the information gain for the attribute:"
                    .to_string()
            );
            lines.push(format!(
                "\t\t\tGain(S,{}) = {} = {}",
                gain.attribute,
                gain_terms(gain, n_row),
                round3(gain.gain),
            ));
        }
    }


    fn branch_lines(split: &Split, lines: &mut Vec<String>) {
        let attribute = split.attribute();

        lines.push("Create the subtree:".to_string());
        lines.push(format!("\tCreate the node {attribute}"));
        lines.push(format!(
            "\tCreate a child node for every value of {attribute}:"
        ));

        for branch in split.branches() {
            let child = branch.child().label();
            lines.push(format!("\t\t{}:", branch.value()));

            match branch.child() {
                Node::Leaf(leaf) if leaf.reason() == LeafReason::Pure => {
                    lines.push(format!(
                        "\t\t\tThere is only one target attribute value left \
                         (i. e. we have perfect entropy). \
                         --> Create {child} as the child node."
                    ));
                },
                Node::Leaf(_) => {
                    lines.push(
                        "\t\t\tThere is more than one target attribute value \
                         left but we have no more attributes for further splits."
                            .to_string()
                    );
                    lines.push(format!(
                        "\t\t\tChoose the target attribute value with \
                         the most occurrences as the child node. \
                         --> Create {child} as the child node."
                    ));
                },
                Node::Split(_) => {
                    lines.push(
                        "\t\t\tThere is more than one target attribute value \
                         left (i. e. we have no perfect entropy) \
                         and we can perform an additional split."
                            .to_string()
                    );
                    lines.push(format!(
                        "\t\t\tSplit at the attribute which leads to \
                         the highest information gain. \
                         --> Create {child} as the child node."
                    ));
                },
            }

            lines.push(format!(
                "\t\t\tCreate an edge from {attribute} to {child} \
                 with the label {}.",
                branch.value(),
            ));
        }
    }
}


/// Appends `Count the occurrence ...` followed by one line per label.
fn count_lines(counts: &LabelCounts, indent: &str, lines: &mut Vec<String>) {
    lines.push(format!(
        "{indent}Count the occurrence of each target attribute value:"
    ));
    for (label, count) in counts.iter() {
        lines.push(format!("{indent}\t{label}: {count}"));
    }
}


impl DerivationLog for DetailedLog {
    fn split_lines(&self, split: &Split) -> Vec<String> {
        let mut lines = Vec::new();
        Self::general_lines(split.stats(), &mut lines);
        Self::gain_lines(split, &mut lines);

        let attribute = split.attribute();
        lines.push("Determine the best attribute for splitting: ".to_string());
        lines.push(format!(
            "\t{} --> split at {attribute}",
            max_gain(split.gains(), attribute),
        ));

        Self::branch_lines(split, &mut lines);
        lines
    }


    fn leaf_lines(&self, stats: &Stats, leaf: &Leaf) -> Vec<String> {
        let mut lines = Vec::new();
        Self::general_lines(stats, &mut lines);

        let label = leaf.label();
        let line = match leaf.reason() {
            LeafReason::Pure => format!(
                "There are no attributes to split at \
                 and only one target attribute value is left. \
                 --> Create {label} as the root node."
            ),
            LeafReason::Majority => format!(
                "There are no attributes to split at. \
                 Choose the target attribute value with the most occurrences \
                 as the root node. --> Create {label} as the root node."
            ),
        };
        lines.push(line);
        lines
    }


    fn subtree_marker(&self, root: &str) -> String {
        format!(
            "This is the log for the creation of the subtree \
             with {root} as the root."
        )
    }
}
