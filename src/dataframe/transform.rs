use std::collections::HashMap;

use indexmap::IndexMap;

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::core::index::Index;
use crate::dataframe::base::DataFrame;
use crate::series::Series;

impl DataFrame {
    /// Rename the columns found in `mapping`; other columns pass through
    ///
    /// ```
    /// use tabrs::{record, DataFrame};
    ///
    /// let df = DataFrame::from_records(vec![record! { "a" => 1, "b" => 2 }]).unwrap();
    /// let renamed = df.rename([("a", "alpha")]).unwrap();
    /// assert!(renamed.contains_column("alpha"));
    /// assert!(renamed.contains_column("b"));
    /// ```
    pub fn rename<I, K, V>(&self, mapping: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Scalar>,
        V: Into<Scalar>,
    {
        let mapping: HashMap<Scalar, Scalar> = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut columns = IndexMap::with_capacity(self.column_count());
        for (name, series) in self.iter() {
            let (name, series) = match mapping.get(name) {
                Some(next) => (next.clone(), series.rename(next.clone())),
                None => (name.clone(), series.clone()),
            };
            if columns.contains_key(&name) {
                return Err(Error::DuplicateColumnName(name.to_string()));
            }
            columns.insert(name, series);
        }

        Ok(DataFrame::from_parts(columns, self.index().clone()))
    }

    /// Swap rows and columns.
    ///
    /// Row labels become column names, and the old column names label the
    /// rows of the result. A repeated row label yields one column that holds
    /// the last such row, placed where the label first appeared.
    pub fn transpose(&self) -> Result<DataFrame> {
        if self.row_count() == 0 {
            return Ok(DataFrame::new());
        }

        let labels: Index = self.column_names().into_iter().collect();
        let mut columns: IndexMap<Scalar, Series> = IndexMap::with_capacity(self.row_count());
        for (row, label) in self.index().iter().enumerate() {
            let values = self.row_series(row).to_vec();
            let series = Series::with_index(values, labels.clone(), None)?.rename(label.clone());
            columns.insert(label.clone(), series);
        }
        Ok(DataFrame::from_parts(columns, labels))
    }

    /// Move the row labels into a column and number the rows from zero.
    ///
    /// The labels land in a trailing column named `index`, or `level_N`
    /// for the first free `N` if `index` is taken. With `drop` they are
    /// discarded instead.
    pub fn reset_index(&self, drop: bool) -> Result<DataFrame> {
        let index = Index::range(self.row_count());
        let mut columns: IndexMap<Scalar, Series> = self
            .iter()
            .map(|(name, series)| {
                let mut series = series.clone();
                series.set_index(index.clone())?;
                Ok((name.clone(), series))
            })
            .collect::<Result<_>>()?;

        if !drop {
            let name = self.free_index_name();
            let labels = Series::from_parts(self.index().values().to_vec(), index.clone(), name.clone());
            columns.insert(name, labels);
        }

        Ok(DataFrame::from_parts(columns, index))
    }

    fn free_index_name(&self) -> Scalar {
        if !self.contains_column("index") {
            return Scalar::from("index");
        }
        (0..)
            .map(|i| Scalar::Str(format!("level_{}", i)))
            .find(|name| !self.contains_column(name.clone()))
            .unwrap_or_else(|| Scalar::from("index"))
    }
}
