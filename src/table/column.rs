use polars::prelude::{DataType, Series};

use std::io;
use std::ops::Index;
use std::slice::Iter;
use std::collections::HashSet;


/// A named column of categorical values.
/// Every cell is kept as a `String` and compared by exact equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub(super) name: String,
    /// Cell values, one per row.
    pub(super) values: Vec<String>,
}


impl Column {
    /// Construct a new column named `name` holding `values`.
    pub fn new<S, I, T>(name: S, values: I) -> Self
        where S: ToString,
              I: IntoIterator<Item = T>,
              T: ToString,
    {
        let name = name.to_string();
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect();
        Self { name, values }
    }


    /// Construct an empty column named `name`.
    pub(crate) fn empty<S: ToString>(name: S) -> Self {
        Self { name: name.to_string(), values: Vec::new() }
    }


    /// Convert `polars::Series` into `Column`.
    /// Each cell is cast to a string.
    /// A series holding a null cell is rejected
    /// since missing values are not supported.
    pub fn from_series(series: &Series) -> io::Result<Self> {
        let name = series.name().to_string();

        let series = series.cast(&DataType::Utf8)
            .map_err(invalid_data)?;
        let values = series.utf8()
            .map_err(invalid_data)?
            .into_iter()
            .map(|cell| cell.map(str::to_string))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("The column `{name}` has a missing value"),
                )
            })?;

        Ok(Self { name, values })
    }


    /// Get the column name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns a slice of the cell values.
    pub fn values(&self) -> &[String] {
        &self.values[..]
    }


    /// Returns an iterator over the cell values.
    pub fn iter(&self) -> Iter<'_, String> {
        self.values.iter()
    }


    /// Append a cell to this column.
    pub fn append<T: ToString>(&mut self, value: T) {
        self.values.push(value.to_string());
    }


    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the column has no cell.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Returns the distinct values in the order of
    /// their first appearance.
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.values.iter()
            .map(String::as_str)
            .filter(|v| seen.insert(*v))
            .collect()
    }


    /// Returns the number of distinct values.
    pub fn distinct_value_count(&self) -> usize {
        self.values.iter().collect::<HashSet<_>>().len()
    }


    /// Returns the row indices whose cell equals `value`.
    pub(crate) fn rows_with(&self, value: &str) -> Vec<usize> {
        self.values.iter()
            .enumerate()
            .filter_map(|(i, v)| (v == value).then_some(i))
            .collect()
    }


    /// Returns a new column holding the given rows, in the given order.
    pub(crate) fn select(&self, rows: &[usize]) -> Self {
        let values = rows.iter()
            .map(|&i| self.values[i].clone())
            .collect();
        Self { name: self.name.clone(), values }
    }
}


impl Index<usize> for Column {
    type Output = str;

    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}


pub(crate) fn invalid_data<E>(error: E) -> io::Error
    where E: Into<Box<dyn std::error::Error + Send + Sync>>
{
    io::Error::new(io::ErrorKind::InvalidData, error)
}
