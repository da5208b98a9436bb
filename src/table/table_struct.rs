use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::DataFrame;
use rayon::prelude::*;
use super::column::{Column, invalid_data};


/// Struct `Table` holds a categorical dataset column by column.
/// The last column is the target (class label);
/// every other column is an attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) columns: Vec<Column>,
    pub(super) n_row: usize,
}


impl Table {
    /// Construct a table from the given columns.
    /// The last column becomes the target.
    /// Returns an error if the columns differ in length
    /// or two columns share a name.
    pub fn new(columns: Vec<Column>) -> io::Result<Self> {
        let n_row = columns.first()
            .map(|column| column.len())
            .unwrap_or(0);

        if let Some(column) = columns.iter().find(|c| c.len() != n_row) {
            let message = format!(
                "The column `{name}` has {len} rows, expected {n_row}",
                name = column.name(),
                len = column.len(),
            );
            return Err(invalid_data(message));
        }

        let name_to_index = name_to_index(&columns);
        if name_to_index.len() != columns.len() {
            return Err(invalid_data("Column names must be unique"));
        }

        Ok(Self { name_to_index, columns, n_row, })
    }


    /// Convert `polars::DataFrame` into `Table`.
    /// Every column is cast to strings;
    /// the last column of `data` becomes the target.
    pub fn from_dataframe(data: &DataFrame) -> io::Result<Self> {
        let columns = data.get_columns()
            .par_iter()
            .map(Column::from_series)
            .collect::<io::Result<Vec<_>>>()?;

        Self::new(columns)
    }


    /// Read a CSV format file to `Table` type.
    /// Cells are split at `,` and trimmed.
    /// Without a header, the columns are named
    /// `Column [1]`, `Column [2]`, ...
    pub fn from_csv<P>(file: P, has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut columns = Vec::new();
        if has_header {
            if let Some(line) = lines.next() {
                columns = line?.split(',')
                    .map(|name| Column::empty(name.trim()))
                    .collect::<Vec<_>>();
            }
        }

        for (k, line) in lines.enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }

            let cells = line.split(',')
                .map(str::trim)
                .collect::<Vec<_>>();

            // Construct a dummy header from the first row.
            if columns.is_empty() {
                columns = (1..=cells.len())
                    .map(|i| Column::empty(format!("Column [{i}]")))
                    .collect();
            }

            if cells.len() != columns.len() {
                let message = format!(
                    "Row {row} has {got} cells, expected {expected}",
                    row = k + 1,
                    got = cells.len(),
                    expected = columns.len(),
                );
                return Err(invalid_data(message));
            }

            for (column, cell) in columns.iter_mut().zip(cells) {
                column.append(cell);
            }
        }

        Self::new(columns)
    }


    /// Move the column named `target` to the last position
    /// so that it is used as the target.
    /// This method panics if no such column exists.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.columns.iter()
            .position(|column| column.name() == target)
            .expect("The target class does not exist");

        let column = self.columns.remove(pos);
        self.columns.push(column);

        self.name_to_index = name_to_index(&self.columns);
        self
    }


    /// Returns the pair of the number of rows and
    /// the number of columns (the target included).
    pub fn shape(&self) -> (usize, usize) {
        (self.n_row, self.columns.len())
    }


    /// Returns `true` if the table has no row.
    pub fn is_empty(&self) -> bool {
        self.n_row == 0
    }


    /// Returns a slice of all columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns[..]
    }


    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter()
            .map(|column| column.name())
            .collect()
    }


    /// Returns the attribute columns, that is,
    /// every column but the last one.
    pub fn attributes(&self) -> &[Column] {
        let n_column = self.columns.len();
        &self.columns[..n_column.saturating_sub(1)]
    }


    /// Returns the target column.
    /// This method panics if the table has no column.
    pub fn target(&self) -> &Column {
        self.columns.last()
            .expect("The table has no column")
    }


    /// Returns the `row`-th example as a map
    /// from column name to cell value.
    pub fn row(&self, row: usize) -> HashMap<&str, &str> {
        self.columns.iter()
            .map(|column| (column.name(), &column[row]))
            .collect()
    }


    /// Returns the rows whose `column`-th cell equals `value`.
    /// All columns are kept.
    pub(crate) fn partition(&self, column: usize, value: &str) -> Self {
        let rows = self.columns[column].rows_with(value);
        let columns = self.columns.iter()
            .map(|column| column.select(&rows[..]))
            .collect::<Vec<_>>();

        Self {
            name_to_index: self.name_to_index.clone(),
            columns,
            n_row: rows.len(),
        }
    }


    /// Returns this table without the `column`-th column.
    pub(crate) fn drop_column(mut self, column: usize) -> Self {
        self.columns.remove(column);
        self.name_to_index = name_to_index(&self.columns);
        self
    }
}


fn name_to_index(columns: &[Column]) -> HashMap<String, usize> {
    columns.iter()
        .enumerate()
        .map(|(i, column)| (column.name().to_string(), i))
        .collect()
}


impl<S> Index<S> for Table
    where S: AsRef<str>
{
    type Output = Column;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("The column `{name}` does not exist"));
        &self.columns[k]
    }
}
