//! Struct `Table` represents a labeled, categorical dataset.

// Provides column struct.
pub(crate) mod column;
// Provides table struct.
pub(crate) mod table_struct;

// Provides a struct that reads a file.
pub(crate) mod table_reader;


pub use table_reader::TableReader;
pub use table_struct::Table;
pub use column::Column;
