use crate::id3::{AttributeGain, LabelCounts};


/// Rounds `x` to 3 decimals for display.
/// The shortest representation keeping a decimal point is used,
/// e.g., `0.94`, `1.0`.
pub(super) fn round3(x: f64) -> String {
    let x = (x * 1000f64).round() / 1000f64;
    format!("{x:?}")
}


/// Formats column names as `['A', 'B']`.
pub(super) fn column_list(columns: &[String]) -> String {
    let names = columns.iter()
        .map(|name| format!("'{name}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{names}]")
}


/// Formats the terms of the entropy formula,
/// `(c/n) * log_2(c/n) + ...`.
pub(super) fn entropy_terms(counts: &LabelCounts) -> String {
    let n = counts.total();
    counts.iter()
        .map(|(_, c)| format!("({c}/{n}) * log_2({c}/{n})"))
        .collect::<Vec<_>>()
        .join(" + ")
}


/// Formats the terms of the gain formula,
/// `(|S_a|/n) * Entropy(S_a) + ...`.
pub(super) fn gain_terms(gain: &AttributeGain, n: usize) -> String {
    gain.values.iter()
        .map(|v| {
            let k = v.counts.total();
            format!("({k}/{n}) * Entropy(S_{})", v.value)
        })
        .collect::<Vec<_>>()
        .join(" + ")
}


/// Formats `max{Gain(S,A), Gain(S,B), ...} = Gain(S,best)`.
pub(super) fn max_gain(gains: &[AttributeGain], best: &str) -> String {
    let candidates = gains.iter()
        .map(|g| format!("Gain(S,{})", g.attribute))
        .collect::<Vec<_>>()
        .join(", ");
    format!("max{{{candidates}}} = Gain(S,{best})")
}
