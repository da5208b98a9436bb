//! Entropy and information gain over categorical partitions.
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::{Column, Table};


/// Occurrence counts of the target values in a partition.
///
/// The values are ranked by count in descending order;
/// values with the same count keep the order of their first appearance.
/// This ranking decides the order of the terms in the entropy formula
/// and the label chosen by a majority vote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    ranked: Vec<(String, usize)>,
    total: usize,
}


impl LabelCounts {
    /// Count the given labels.
    pub fn new<'a, I>(labels: I) -> Self
        where I: IntoIterator<Item = &'a str>
    {
        let mut index = HashMap::<&str, usize>::new();
        let mut ranked = Vec::<(String, usize)>::new();
        let mut total = 0_usize;

        for label in labels {
            let k = *index.entry(label)
                .or_insert_with(|| {
                    ranked.push((label.to_string(), 0));
                    ranked.len() - 1
                });
            ranked[k].1 += 1;
            total += 1;
        }

        // `sort_by` is stable, so ties stay in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Self { ranked, total }
    }


    /// Count the cells of the given column.
    pub fn of(column: &Column) -> Self {
        Self::new(column.iter().map(String::as_str))
    }


    /// Returns the number of counted labels, i.e., `|S|`.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }


    /// Returns the number of distinct labels.
    #[inline]
    pub fn n_distinct(&self) -> usize {
        self.ranked.len()
    }


    /// Returns `true` if exactly one label occurs.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.ranked.len() == 1
    }


    /// Returns the ranked `(label, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.ranked.iter().map(|(label, count)| (label.as_str(), *count))
    }


    /// Returns the count of `label`.
    pub fn count(&self, label: &str) -> usize {
        self.ranked.iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }


    /// Returns the label with the most occurrences.
    /// Ties go to the label that appeared first.
    pub fn majority(&self) -> Option<&str> {
        self.ranked.first().map(|(label, _)| label.as_str())
    }


    /// Returns `Entropy(S) = - sum_v p_v log_2(p_v)`.
    /// Only labels that occur contribute,
    /// so no `log_2(0)` is ever evaluated.
    pub fn entropy(&self) -> f64 {
        let n = self.total as f64;
        self.ranked.iter()
            .fold(0f64, |entropy, &(_, count)| {
                let p = count as f64 / n;
                entropy - p * p.log2()
            })
    }
}


/// Returns the entropy of the given labels.
pub fn entropy<'a, I>(labels: I) -> f64
    where I: IntoIterator<Item = &'a str>
{
    LabelCounts::new(labels).entropy()
}


/// Splits the target column of `table` by the values of
/// the `attribute`-th column.
/// The parts follow the first-seen order of the attribute values.
pub(crate) fn value_partitions<'a>(table: &'a Table, attribute: usize)
    -> Vec<(&'a str, LabelCounts)>
{
    let column = &table.columns()[attribute];
    let target = table.target();

    column.distinct()
        .into_iter()
        .map(|value| {
            let labels = column.iter()
                .zip(target.iter())
                .filter(|(v, _)| *v == value)
                .map(|(_, y)| y.as_str());
            (value, LabelCounts::new(labels))
        })
        .collect()
}


/// Returns `Entropy(S) - sum_a (|S_a| / |S|) Entropy(S_a)`
/// for the given entropy of `S` and the counts of each part `S_a`.
pub(crate) fn gain_from_parts<'a, I>(entropy: f64, n: usize, parts: I) -> f64
    where I: IntoIterator<Item = &'a LabelCounts>
{
    let n = n as f64;
    let mut weighted = 0f64;
    for part in parts {
        weighted += (part.total() as f64 / n) * part.entropy();
    }
    entropy - weighted
}


/// Returns the information gain `Gain(S, A)` of splitting `table`
/// at its `attribute`-th column.
/// The result may be slightly negative because of rounding.
pub fn gain(table: &Table, attribute: usize) -> f64 {
    assert!(
        attribute + 1 < table.shape().1,
        "The target column cannot be used for splitting"
    );
    let entropy = LabelCounts::of(table.target()).entropy();
    let parts = value_partitions(table, attribute);

    gain_from_parts(entropy, table.shape().0, parts.iter().map(|(_, c)| c))
}


#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_counts_rank_01() {
        let counts = LabelCounts::new(["No", "Yes", "Yes", "No", "Yes"]);
        let res = counts.iter().collect::<Vec<_>>();
        let exp = vec![("Yes", 3), ("No", 2)];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_counts_rank_02() {
        // Ties keep the first-seen order.
        let counts = LabelCounts::new(["b", "a", "a", "b", "c"]);
        let res = counts.iter().collect::<Vec<_>>();
        let exp = vec![("b", 2), ("a", 2), ("c", 1)];
        assert_eq!(exp, res, "expected {exp:?}, got {res:?}.");
    }

    #[test]
    fn test_majority_01() {
        let counts = LabelCounts::new(["No", "Yes", "Yes", "Yes"]);
        let res = counts.majority();
        assert_eq!(Some("Yes"), res, "expected Some(\"Yes\"), got {res:?}.");
    }

    #[test]
    fn test_majority_02() {
        let counts = LabelCounts::new(["l", "h"]);
        let res = counts.majority();
        assert_eq!(Some("l"), res, "expected Some(\"l\"), got {res:?}.");
    }

    #[test]
    fn test_entropy_pure_01() {
        let res = entropy(["Yes", "Yes", "Yes"]);
        assert_eq!(0f64, res, "expected 0.0, got {res}.");
        assert!(res.is_sign_positive(), "got a negative zero.");
    }

    #[test]
    fn test_entropy_half_01() {
        let res = entropy(["Yes", "No", "No", "Yes"]);
        assert!((res - 1f64).abs() < TOLERANCE, "expected 1.0, got {res}.");
    }

    #[test]
    fn test_entropy_weather_01() {
        let labels = ["Yes"; 9].into_iter().chain(["No"; 5]);
        let res = entropy(labels);
        assert!((res - 0.940).abs() < 1e-3, "expected 0.940, got {res}.");
    }

    #[test]
    fn test_gain_01() {
        let table = Table::new(vec![
            Column::new("A", ["x", "x", "y", "y"]),
            Column::new("B", ["p", "q", "p", "q"]),
            Column::new("C", ["+", "+", "-", "-"]),
        ]).unwrap();

        let res = gain(&table, 0);
        assert!((res - 1f64).abs() < TOLERANCE, "expected 1.0, got {res}.");

        let res = gain(&table, 1);
        assert!(res.abs() < TOLERANCE, "expected 0.0, got {res}.");
    }

    #[test]
    fn test_gain_nonnegative_01() {
        let table = Table::new(vec![
            Column::new("A", ["x", "y", "z", "x", "y", "z", "x"]),
            Column::new("B", ["p", "p", "q", "q", "p", "q", "p"]),
            Column::new("C", ["+", "-", "+", "+", "-", "-", "+"]),
        ]).unwrap();

        for attribute in 0..2 {
            let res = gain(&table, attribute);
            assert!(res >= -TOLERANCE, "gain must be non-negative, got {res}.");
        }
    }

    #[test]
    #[should_panic(expected = "The target column cannot be used")]
    fn test_gain_target_01() {
        let table = Table::new(vec![
            Column::new("A", ["x"]),
            Column::new("C", ["+"]),
        ]).unwrap();
        gain(&table, 1);
    }
}
