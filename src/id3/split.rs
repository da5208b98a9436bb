use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use super::entropy::*;
use crate::Table;


/// The entropy of one part `S_a` of a candidate split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEntropy {
    /// Attribute value `a`.
    pub value: String,
    /// Target counts over `S_a`.
    pub counts: LabelCounts,
    /// `Entropy(S_a)`.
    pub entropy: f64,
}


/// Information gain of one candidate attribute,
/// together with the per-value entropies it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeGain {
    /// Attribute name.
    pub attribute: String,
    /// One entry per distinct value, in first-seen order.
    pub values: Vec<ValueEntropy>,
    /// `Gain(S, A)`.
    pub gain: f64,
}


impl AttributeGain {
    /// Evaluate the `attribute`-th column of `table`,
    /// where `entropy` is `Entropy(S)` of the whole table.
    pub fn evaluate(table: &Table, attribute: usize, entropy: f64) -> Self {
        let name = table.columns()[attribute].name().to_string();
        let n_row = table.shape().0;

        let parts = value_partitions(table, attribute);
        let gain = gain_from_parts(entropy, n_row, parts.iter().map(|(_, c)| c));

        let values = parts.into_iter()
            .map(|(value, counts)| {
                let entropy = counts.entropy();
                ValueEntropy { value: value.to_string(), counts, entropy }
            })
            .collect();

        Self { attribute: name, values, gain }
    }
}


/// Evaluate every attribute of `table`.
/// The gains are computed in parallel but returned in column order.
pub(crate) fn evaluate_all(table: &Table, entropy: f64)
    -> Vec<AttributeGain>
{
    let n_attribute = table.attributes().len();
    (0..n_attribute).into_par_iter()
        .map(|attribute| AttributeGain::evaluate(table, attribute, entropy))
        .collect()
}


/// Returns the index of the attribute with the maximal gain.
///
/// The scan goes from left to right and replaces the current best
/// only on a strictly greater gain, so the first attribute that reaches
/// the maximum wins a tie.
/// Returns `None` if `gains` is empty.
pub fn best_split(gains: &[AttributeGain]) -> Option<usize> {
    let mut best = None;
    let mut best_gain = f64::NEG_INFINITY;
    for (i, gain) in gains.iter().enumerate() {
        if gain.gain > best_gain {
            best = Some(i);
            best_gain = gain.gain;
        }
    }
    best
}
