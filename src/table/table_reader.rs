use std::path::Path;
use std::io;

use super::table_struct::Table;


/// A struct that returns [`Table`].
/// Using this struct, one can read a CSV format file to [`Table`].
/// Other formats are not supported yet.
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use id3tree::TableReader;
/// let filename = "/path/to/csv/file.csv";
/// let table = TableReader::default()
///     .file(filename)
///     .has_header(true)
///     .target("PlayTennis")
///     .read()
///     .unwrap();
/// ```
pub struct TableReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> Default for TableReader<P, S> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
        }
    }
}


impl<P, S> TableReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> TableReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> TableReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for the class label.
    /// If not set, the last column of the file is the target.
    pub fn target(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> TableReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments,
    /// and returns `std::io::Result<Table>`.
    /// This method consumes `self.`
    pub fn read(self) -> io::Result<Table> {
        let file = self.file.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "The file name for csv is not set. Use `TableReader::file`.",
            )
        })?;

        let table = Table::from_csv(file, self.has_header)?;
        let table = match self.target {
            Some(target) => table.set_target(target),
            None => table,
        };
        Ok(table)
    }
}
