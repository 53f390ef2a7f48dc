//! Module providing pivot functionality

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::core::index::Index;
use crate::dataframe::DataFrame;
use crate::series::Series;

/// Structure for reshaping a long DataFrame into a wide one
#[derive(Debug)]
pub struct Pivot<'a> {
    /// Source DataFrame
    df: &'a DataFrame,

    /// Column whose values label the result rows
    index: &'a Series,

    /// Column whose values name the result columns
    columns: &'a Series,

    /// Column holding the cell values
    values: &'a Series,
}

impl<'a> Pivot<'a> {
    /// Create a new pivot; every named column must exist
    pub fn new(df: &'a DataFrame, index: &str, columns: &str, values: &str) -> Result<Self> {
        Ok(Pivot {
            df,
            index: df.get(index)?,
            columns: df.get(columns)?,
            values: df.get(values)?,
        })
    }

    /// Execute the pivot and generate a new DataFrame.
    ///
    /// Row labels and column names come out sorted ascending; combinations
    /// absent from the source are null.
    pub fn execute(&self) -> Result<DataFrame> {
        let mut cells: HashMap<(&Scalar, &Scalar), &Scalar> = HashMap::with_capacity(self.df.row_count());
        let mut row_labels: BTreeSet<&Scalar> = BTreeSet::new();
        let mut col_labels: BTreeSet<&Scalar> = BTreeSet::new();

        let rows = self.index.iter().zip(self.columns.iter()).zip(self.values.iter());
        for ((row, col), value) in rows {
            if cells.insert((row, col), value).is_some() {
                return Err(Error::InvalidInput(
                    "pivot index and column must be unique".to_string(),
                ));
            }
            row_labels.insert(row);
            col_labels.insert(col);
        }

        debug!(
            "pivot of {} rows into {}x{}",
            self.df.row_count(),
            row_labels.len(),
            col_labels.len()
        );

        let index: Index = row_labels.iter().map(|&label| label.clone()).collect();
        let mut result = DataFrame::new();
        for &col in &col_labels {
            let values: Vec<Scalar> = row_labels
                .iter()
                .map(|&row| cells.get(&(row, col)).map_or(Scalar::Null, |&v| v.clone()))
                .collect();
            result.add_column(col.clone(), Series::with_index(values, index.clone(), None)?)?;
        }
        result.with_index(index)
    }
}

/// DataFrame extension: pivot functionality
impl DataFrame {
    /// Reshape by the unique `(index, columns)` pairs.
    ///
    /// ```
    /// use tabrs::{record, DataFrame};
    ///
    /// let df = DataFrame::from_records(vec![
    ///     record! { "day" => 2, "kind" => "b", "n" => 20 },
    ///     record! { "day" => 1, "kind" => "a", "n" => 10 },
    /// ])
    /// .unwrap();
    /// let wide = df.pivot("day", "kind", "n").unwrap();
    /// assert_eq!(wide.column_names().len(), 2);
    /// assert_eq!(wide.row_count(), 2);
    /// ```
    pub fn pivot(&self, index: &str, columns: &str, values: &str) -> Result<DataFrame> {
        Pivot::new(self, index, columns, values)?.execute()
    }

    /// Aggregating pivot; not supported
    pub fn pivot_table(
        &self,
        _index: &str,
        _columns: &str,
        _values: &str,
        _aggfunc: &str,
    ) -> Result<DataFrame> {
        Err(Error::NotImplemented("pivot_table".to_string()))
    }
}
