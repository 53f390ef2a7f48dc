use std::fmt::{self, Display};
use std::ops::Range;

use indexmap::{IndexMap, IndexSet};

use crate::config;
use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::core::generic::NDFrame;
use crate::core::index::{Index, IndexTrait};
use crate::series::{Operand, Series};

/// One row of input data: column name to value, in column order
pub type Record = IndexMap<Scalar, Scalar>;

/// Build a [`Record`] from `key => value` pairs
///
/// ```
/// use tabrs::record;
///
/// let row = record! { "x" => 1, "y" => "a" };
/// assert_eq!(row.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::dataframe::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::dataframe::Record::new();
        $(
            record.insert(
                $crate::core::Scalar::from($key),
                $crate::core::Scalar::from($value),
            );
        )+
        record
    }};
}

/// Positional selector for [`DataFrame::iloc`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positions {
    /// A single position
    At(usize),
    /// Positions `[start, end)`
    Range(usize, usize),
}

impl From<usize> for Positions {
    fn from(position: usize) -> Self {
        Positions::At(position)
    }
}

impl From<(usize, usize)> for Positions {
    fn from((start, end): (usize, usize)) -> Self {
        Positions::Range(start, end)
    }
}

impl From<Range<usize>> for Positions {
    fn from(range: Range<usize>) -> Self {
        Positions::Range(range.start, range.end)
    }
}

/// DataFrame struct: ordered mapping of column name to Series
///
/// Every column shares the frame's row index; the index and the column
/// names are the only things that can change in place, through
/// [`DataFrame::set_index`] and [`DataFrame::set_columns`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFrame {
    columns: IndexMap<Scalar, Series>,
    index: Index,
}

impl DataFrame {
    /// Create a new empty DataFrame
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
            index: Index::range(0),
        }
    }

    /// Create a DataFrame from row records.
    ///
    /// Columns appear in the order their keys are first seen; a record
    /// lacking a column contributes a null.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let names: IndexSet<Scalar> = records
            .iter()
            .flat_map(|record| record.keys().cloned())
            .collect();
        let index = Index::range(records.len());

        let columns = names
            .into_iter()
            .map(|name| {
                let values = records
                    .iter()
                    .map(|record| record.get(&name).cloned().unwrap_or(Scalar::Null))
                    .collect();
                let series = Series::from_parts(values, index.clone(), name.clone());
                (name, series)
            })
            .collect();

        Ok(Self::from_parts(columns, index))
    }

    /// Create a DataFrame from named columns.
    ///
    /// The first column's index becomes the row index; every column must
    /// have the same length.
    pub fn from_series<K: Into<Scalar>>(columns: Vec<(K, Series)>) -> Result<Self> {
        let mut frame = DataFrame::new();
        for (name, series) in columns {
            frame.add_column(name, series)?;
        }
        Ok(frame)
    }

    /// Create a DataFrame from row-major values.
    ///
    /// Columns default to `0..width` and the index to `0..rows`.
    pub fn from_rows<V: Into<Scalar>>(
        rows: Vec<Vec<V>>,
        columns: Option<Vec<Scalar>>,
        index: Option<Index>,
    ) -> Result<Self> {
        let columns = columns.unwrap_or_else(|| {
            (0..rows.first().map_or(0, Vec::len))
                .map(Scalar::from)
                .collect()
        });
        let index = index.unwrap_or_else(|| Index::range(rows.len()));
        if index.len() != rows.len() {
            return Err(Error::index_mismatch(index.len(), rows.len()));
        }

        let mut data: Vec<Vec<Scalar>> = vec![Vec::with_capacity(rows.len()); columns.len()];
        for row in rows {
            if row.len() != columns.len() {
                return Err(Error::LengthMismatch {
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
            for (col, value) in data.iter_mut().zip(row) {
                col.push(value.into());
            }
        }

        let mut map = IndexMap::with_capacity(columns.len());
        for (name, values) in columns.into_iter().zip(data) {
            if map.contains_key(&name) {
                return Err(Error::DuplicateColumnName(name.to_string()));
            }
            let series = Series::from_parts(values, index.clone(), name.clone());
            map.insert(name, series);
        }

        Ok(Self::from_parts(map, index))
    }

    /// Columns already sharing `index`
    pub(crate) fn from_parts(columns: IndexMap<Scalar, Series>, index: Index) -> Self {
        Self { columns, index }
    }

    /// Replace the row index and return the frame
    pub fn with_index(mut self, index: Index) -> Result<Self> {
        self.set_index(index)?;
        Ok(self)
    }

    /// Add a column while building a DataFrame
    pub fn add_column(&mut self, name: impl Into<Scalar>, series: Series) -> Result<()> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name.to_string()));
        }

        let mut series = series.rename(name.clone());
        if self.columns.is_empty() {
            self.index = series.index().clone();
        } else {
            series.set_index(self.index.clone())?;
        }
        self.columns.insert(name, series);
        Ok(())
    }

    /// Get the number of rows in the DataFrame
    pub fn row_count(&self) -> usize {
        self.index.len()
    }

    /// Alias of [`DataFrame::row_count`]
    pub fn len(&self) -> usize {
        self.row_count()
    }

    /// Get the number of columns in the DataFrame
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when either axis is empty
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    /// Column names in order
    pub fn column_names(&self) -> Vec<Scalar> {
        self.columns.keys().cloned().collect()
    }

    /// Row labels
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Check if the DataFrame contains a column with the given name
    pub fn contains_column(&self, name: impl Into<Scalar>) -> bool {
        self.columns.contains_key(&name.into())
    }

    /// `(name, series)` pairs in column order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Scalar, Series> {
        self.columns.iter()
    }

    /// Get a column by name
    pub fn get(&self, name: impl Into<Scalar>) -> Result<&Series> {
        let name = name.into();
        self.columns
            .get(&name)
            .ok_or_else(|| Error::KeyNotFound(name.to_string()))
    }

    /// A new DataFrame holding only the named columns, in the order given
    pub fn get_columns<I, K>(&self, names: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = K>,
        K: Into<Scalar>,
    {
        let mut columns = IndexMap::new();
        for name in names {
            let name = name.into();
            let series = self.get(name.clone())?.clone();
            columns.insert(name, series);
        }
        Ok(Self::from_parts(columns, self.index.clone()))
    }

    /// Rename every column by position.
    ///
    /// The i-th name is bound to the i-th existing column regardless of
    /// its previous name.
    pub fn set_columns<K: Into<Scalar>>(&mut self, names: Vec<K>) -> Result<()> {
        if names.len() != self.columns.len() {
            return Err(Error::LengthMismatch {
                expected: self.columns.len(),
                actual: names.len(),
            });
        }

        let mut renamed = IndexMap::with_capacity(names.len());
        for (name, series) in names.into_iter().zip(self.columns.values()) {
            let name = name.into();
            if renamed.contains_key(&name) {
                return Err(Error::DuplicateColumnName(name.to_string()));
            }
            let series = series.rename(name.clone());
            renamed.insert(name, series);
        }

        self.columns = renamed;
        Ok(())
    }

    /// Replace the row index of the frame and of every column
    pub fn set_index(&mut self, index: Index) -> Result<()> {
        if !self.columns.is_empty() && index.len() != self.row_count() {
            return Err(Error::index_mismatch(index.len(), self.row_count()));
        }

        for series in self.columns.values_mut() {
            series.set_index(index.clone())?;
        }
        self.index = index;
        Ok(())
    }

    /// A new DataFrame with `series` stored under `name`.
    ///
    /// An existing column keeps its position; a new one is appended.
    pub fn set(&self, name: impl Into<Scalar>, series: Series) -> Result<DataFrame> {
        let name = name.into();
        let mut series = series.rename(name.clone());
        let mut frame = self.clone();

        if frame.columns.is_empty() {
            frame.index = series.index().clone();
        } else {
            series.set_index(frame.index.clone())?;
        }
        frame.columns.insert(name, series);
        Ok(frame)
    }

    /// Like [`DataFrame::set`] for plain values labeled by the frame's index
    pub fn set_values<V: Into<Scalar>>(
        &self,
        name: impl Into<Scalar>,
        values: Vec<V>,
    ) -> Result<DataFrame> {
        let series = if self.columns.is_empty() {
            Series::new(values, None)?
        } else {
            Series::with_index(values, self.index.clone(), None)?
        };
        self.set(name, series)
    }

    /// Independent duplicate of this DataFrame
    pub fn copy(&self) -> DataFrame {
        self.clone()
    }

    fn row_range(&self, rows: Positions) -> Result<Range<usize>> {
        let len = self.row_count();
        match rows {
            Positions::At(i) if i >= len => Err(Error::IndexOutOfBounds { index: i, size: len }),
            Positions::At(i) => Ok(i..i + 1),
            Positions::Range(start, end) => {
                let end = end.min(len);
                Ok(start.min(end)..end)
            }
        }
    }

    fn column_range(&self, cols: Positions) -> Result<Range<usize>> {
        let width = self.column_count();
        match cols {
            Positions::At(c) if c >= width => Err(Error::IndexOutOfBounds {
                index: c,
                size: width,
            }),
            Positions::At(c) => Ok(c..c + 1),
            Positions::Range(start, end) if end <= start => Err(Error::InvalidInput(format!(
                "column end position {} must be greater than start position {}",
                end, start
            ))),
            Positions::Range(_, end) if end > width => Err(Error::IndexOutOfBounds {
                index: end,
                size: width,
            }),
            Positions::Range(start, end) => Ok(start..end),
        }
    }

    /// Rows by position, all columns
    pub fn iloc(&self, rows: impl Into<Positions>) -> Result<DataFrame> {
        self.iloc_with(rows, Positions::Range(0, self.column_count()))
    }

    /// Rows and columns by position.
    ///
    /// Always returns a DataFrame, even for a single cell. Row ranges are
    /// clamped to the frame; a single row or any column selection outside
    /// the frame is an error.
    pub fn iloc_with(
        &self,
        rows: impl Into<Positions>,
        cols: impl Into<Positions>,
    ) -> Result<DataFrame> {
        let rows = self.row_range(rows.into())?;
        let cols = match cols.into() {
            // all columns of a frame without any
            Positions::Range(0, 0) if self.column_count() == 0 => 0..0,
            other => self.column_range(other)?,
        };

        let index = self.index.slice(rows.clone());
        let columns = self
            .columns
            .iter()
            .skip(cols.start)
            .take(cols.len())
            .map(|(name, series)| {
                let mut column = series.iloc_range(rows.start, rows.end);
                column.set_index(index.clone())?;
                Ok((name.clone(), column))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        Ok(Self::from_parts(columns, index))
    }

    /// First `n` rows
    pub fn head(&self, n: usize) -> Result<DataFrame> {
        self.iloc(0..n)
    }

    /// Last `n` rows
    pub fn tail(&self, n: usize) -> Result<DataFrame> {
        let len = self.row_count();
        self.iloc(len.saturating_sub(n)..len)
    }

    /// Iterate over `(position, row)` pairs
    pub fn iterrows(&self) -> impl Iterator<Item = (usize, Row<'_>)> {
        (0..self.row_count()).map(move |position| {
            (
                position,
                Row {
                    frame: self,
                    position,
                },
            )
        })
    }

    /// Row-major copy of the cells
    pub fn values(&self) -> Vec<Vec<Scalar>> {
        (0..self.row_count())
            .map(|row| {
                self.columns
                    .values()
                    .map(|series| series.values()[row].clone())
                    .collect()
            })
            .collect()
    }

    /// Keep the rows whose mask entry is exactly `true`
    pub fn filter<'a>(&self, mask: impl Into<Operand<'a>>) -> Result<DataFrame> {
        let mask = mask.into().one_dimensional("filter")?;
        if let Operand::Scalar(_) = mask {
            return Err(Error::Type(
                "filter mask must be a sequence or Series".to_string(),
            ));
        }
        mask.check_len(self.row_count())?;

        let positions: Vec<usize> = (0..self.row_count())
            .filter(|&i| matches!(mask.at(i), Scalar::Bool(true)))
            .collect();
        self.take_rows(&positions)
    }

    /// Rows at the given positions, in order
    pub(crate) fn take_rows(&self, positions: &[usize]) -> Result<DataFrame> {
        let index = self.index.take(positions)?;
        let columns = self
            .columns
            .iter()
            .map(|(name, series)| {
                let mut column = series.take(positions)?;
                column.set_index(index.clone())?;
                Ok((name.clone(), column))
            })
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(Self::from_parts(columns, index))
    }

    /// Evaluate `predicate` cell by cell.
    ///
    /// A DataFrame operand must have the same shape and is matched column
    /// by column position, not by name. Any other operand is applied to
    /// every column.
    pub fn where_<'a, F>(&self, other: impl Into<Operand<'a>>, predicate: F) -> Result<DataFrame>
    where
        F: Fn(&Scalar, &Scalar) -> bool,
    {
        let other = other.into();
        let mut columns = IndexMap::with_capacity(self.column_count());

        match other {
            Operand::Frame(frame) => {
                if frame.shape() != self.shape() {
                    return Err(Error::ShapeMismatch {
                        expected: self.shape(),
                        actual: frame.shape(),
                    });
                }
                for ((name, series), (_, theirs)) in self.columns.iter().zip(frame.iter()) {
                    columns.insert(name.clone(), series.where_(theirs, &predicate)?);
                }
            }
            operand => {
                operand.check_len(self.row_count())?;
                for (name, series) in &self.columns {
                    columns.insert(name.clone(), series.where_(operand.clone(), &predicate)?);
                }
            }
        }

        Ok(Self::from_parts(columns, self.index.clone()))
    }

    pub fn eq<'a>(&self, other: impl Into<Operand<'a>>) -> Result<DataFrame> {
        self.where_(other, |a, b| a.strict_eq(b))
    }

    pub fn gt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<DataFrame> {
        self.where_(other, |a, b| a.compare(b) == Some(std::cmp::Ordering::Greater))
    }

    pub fn gte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<DataFrame> {
        self.where_(other, |a, b| {
            matches!(
                a.compare(b),
                Some(std::cmp::Ordering::Greater | std::cmp::Ordering::Equal)
            )
        })
    }

    pub fn lt<'a>(&self, other: impl Into<Operand<'a>>) -> Result<DataFrame> {
        self.where_(other, |a, b| a.compare(b) == Some(std::cmp::Ordering::Less))
    }

    pub fn lte<'a>(&self, other: impl Into<Operand<'a>>) -> Result<DataFrame> {
        self.where_(other, |a, b| {
            matches!(
                a.compare(b),
                Some(std::cmp::Ordering::Less | std::cmp::Ordering::Equal)
            )
        })
    }

    /// Concatenate `other` below this DataFrame
    pub fn append(&self, other: &DataFrame, ignore_index: bool) -> Result<DataFrame> {
        crate::reshape::concat_frames(
            &[self, other],
            crate::reshape::ConcatOptions {
                ignore_index,
                ..Default::default()
            },
        )
    }
}

/// Borrowed view of one DataFrame row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    frame: &'a DataFrame,
    position: usize,
}

impl<'a> Row<'a> {
    /// Cell in the named column
    pub fn get(&self, column: impl Into<Scalar>) -> Option<&'a Scalar> {
        self.frame
            .columns
            .get(&column.into())
            .map(|series| &series.values()[self.position])
    }

    /// Row label
    pub fn label(&self) -> &'a Scalar {
        &self.frame.index.values()[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&'a Scalar, &'a Scalar)> + 'a {
        let position = self.position;
        self.frame
            .columns
            .iter()
            .map(move |(name, series)| (name, &series.values()[position]))
    }

    /// Owned record of the row
    pub fn to_record(&self) -> Record {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl NDFrame for DataFrame {
    fn axes(&self) -> Vec<Index> {
        vec![self.index.clone(), self.columns.keys().cloned().collect()]
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = config::current().display;

        let mut header = String::from("\t|");
        for name in self.columns.keys() {
            header.push_str(&format!("  {}  |", name));
        }
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", "-".repeat(header.len()))?;

        for (position, label) in self.index.iter().enumerate().take(settings.max_rows) {
            write!(f, "{}\t|", label)?;
            for series in self.columns.values() {
                write!(f, "  {}  |", settings.format_value(&series.values()[position]))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
