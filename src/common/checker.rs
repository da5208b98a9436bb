//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Table;


/// Check whether the table can be handed to the tree builder.
#[inline(always)]
pub(crate) fn check_table(table: &Table)
{
    let (n_row, n_column) = table.shape();


    // The table must have the target column.
    assert!(n_column > 0, "The table has no column");


    // `Table::new` guarantees that all columns share the same length,
    // so we only need to check the number of rows.
    assert!(n_row > 0, "The table has no row");
}
