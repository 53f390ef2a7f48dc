use std::fmt::{self, Display};

use indexmap::IndexSet;

use crate::config;
use crate::core::data_value::Scalar;
use crate::core::dtype::{array_to_dtype, DType};
use crate::core::error::{Error, Result};
use crate::core::generic::NDFrame;
use crate::core::index::{Index, IndexTrait};
use crate::series::operand::Operand;

/// Series struct: one-dimensional labeled data
///
/// Values may be of any [`Scalar`] kind; the dtype is inferred once at
/// construction. Every transforming method returns a new Series, the only
/// in-place updates being [`Series::set_index`] and [`Series::set_name`].
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// The values in the Series
    values: Vec<Scalar>,
    /// Labels, parallel to `values`
    index: Index,
    /// The name of the Series (string or number)
    name: Scalar,
    /// Inferred element type
    dtype: DType,
}

impl Series {
    /// Create a new Series with the default `0..len` index
    pub fn new<V: Into<Scalar>>(data: Vec<V>, name: Option<String>) -> Result<Self> {
        let values: Vec<Scalar> = data.into_iter().map(Into::into).collect();
        let index = Index::range(values.len());
        Ok(Self::from_parts(values, index, series_name(name)))
    }

    /// Create a new Series with explicit labels
    ///
    /// # Arguments
    /// * `data` - The values
    /// * `index` - One label per value
    /// * `name` - Optional name
    pub fn with_index<V: Into<Scalar>>(
        data: Vec<V>,
        index: Index,
        name: Option<String>,
    ) -> Result<Self> {
        let values: Vec<Scalar> = data.into_iter().map(Into::into).collect();
        if index.len() != values.len() {
            return Err(Error::index_mismatch(index.len(), values.len()));
        }
        Ok(Self::from_parts(values, index, series_name(name)))
    }

    /// Wrap a single value into a one-element Series
    pub fn from_scalar(value: impl Into<Scalar>, name: Option<String>) -> Result<Self> {
        Self::new(vec![value.into()], name)
    }

    /// Assemble a Series from parts already known to be consistent
    pub(crate) fn from_parts(values: Vec<Scalar>, index: Index, name: Scalar) -> Self {
        debug_assert_eq!(values.len(), index.len());
        let dtype = array_to_dtype(&values);
        Self {
            values,
            index,
            name,
            dtype,
        }
    }

    /// Same name and index, new values
    pub(crate) fn with_values(&self, values: Vec<Scalar>) -> Self {
        Self::from_parts(values, self.index.clone(), self.name.clone())
    }

    /// Get the length of the Series
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the Series is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a reference to the values in the Series
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    /// Convert Series to Vec
    pub fn to_vec(&self) -> Vec<Scalar> {
        self.values.clone()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub fn name(&self) -> &Scalar {
        &self.name
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.values.iter()
    }

    /// Replace the index. Fails if the length differs from the values.
    pub fn set_index(&mut self, index: Index) -> Result<()> {
        if index.len() != self.values.len() {
            return Err(Error::index_mismatch(index.len(), self.values.len()));
        }
        self.index = index;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<Scalar>) {
        self.name = name.into();
    }

    /// Return a copy of the Series under a new name
    pub fn rename(&self, name: impl Into<Scalar>) -> Series {
        Self::from_parts(self.values.clone(), self.index.clone(), name.into())
    }

    /// Independent duplicate of this Series
    pub fn copy(&self) -> Series {
        self.clone()
    }

    /// Value at a position
    pub fn iloc(&self, position: usize) -> Option<&Scalar> {
        self.values.get(position)
    }

    /// Sub-Series over positions `[start, end)`
    pub fn iloc_range(&self, start: usize, end: usize) -> Series {
        let end = end.min(self.len());
        let start = start.min(end);
        Self::from_parts(
            self.values[start..end].to_vec(),
            self.index.slice(start..end),
            self.name.clone(),
        )
    }

    /// Values and labels at the given positions
    pub(crate) fn take(&self, positions: &[usize]) -> Result<Series> {
        let index = self.index.take(positions)?;
        let values = positions.iter().map(|&p| self.values[p].clone()).collect();
        Ok(Self::from_parts(values, index, self.name.clone()))
    }

    /// First `n` values
    pub fn head(&self, n: usize) -> Series {
        self.iloc_range(0, n)
    }

    /// Last `n` values
    pub fn tail(&self, n: usize) -> Series {
        self.iloc_range(self.len().saturating_sub(n), self.len())
    }

    /// Apply `func(value, position)` to every value
    pub fn map<F>(&self, func: F) -> Series
    where
        F: Fn(&Scalar, usize) -> Scalar,
    {
        self.with_values(
            self.values
                .iter()
                .enumerate()
                .map(|(i, v)| func(v, i))
                .collect(),
        )
    }

    /// Like [`Series::map`] but stops at the first error
    pub fn try_map<F>(&self, func: F) -> Result<Series>
    where
        F: Fn(&Scalar, usize) -> Result<Scalar>,
    {
        let values = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| func(v, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.with_values(values))
    }

    pub fn for_each<F>(&self, mut func: F)
    where
        F: FnMut(&Scalar, usize),
    {
        self.values.iter().enumerate().for_each(|(i, v)| func(v, i));
    }

    /// Convert to another dtype.
    ///
    /// Converting to int floors numeric values; converting to float widens
    /// them. Object columns cannot be converted.
    pub fn astype(&self, dtype: DType) -> Result<Series> {
        if dtype == self.dtype {
            return Ok(self.clone());
        }

        match dtype {
            DType::Int | DType::Float => {
                if self.dtype == DType::Object {
                    return Err(Error::UnsupportedConversion {
                        from: self.dtype.to_string(),
                        to: dtype.to_string(),
                    });
                }
                Ok(self.map(|v, _| convert_numeric(v, dtype)))
            }
            other => Err(Error::Type(format!("Invalid dtype {}", other))),
        }
    }

    /// Distinct values in first-occurrence order
    pub fn unique(&self) -> Vec<Scalar> {
        self.values
            .iter()
            .cloned()
            .collect::<IndexSet<Scalar>>()
            .into_iter()
            .collect()
    }

    /// Keep the values whose mask entry is exactly `true`
    pub fn filter<'a>(&self, mask: impl Into<Operand<'a>>) -> Result<Series> {
        let mask = mask.into().one_dimensional("filter")?;
        if let Operand::Scalar(_) = mask {
            return Err(Error::Type(
                "filter mask must be a sequence or Series".to_string(),
            ));
        }
        mask.check_len(self.len())?;

        let positions: Vec<usize> = (0..self.len())
            .filter(|&i| matches!(mask.at(i), Scalar::Bool(true)))
            .collect();
        self.take(&positions)
    }

    /// Sort by value, keeping the labels with their values.
    ///
    /// The sort is stable: equal values keep their original relative order
    /// in both directions.
    pub fn sort_values(&self, ascending: bool) -> Series {
        let mut positions: Vec<usize> = (0..self.len()).collect();
        if ascending {
            positions.sort_by(|&a, &b| self.values[a].cmp(&self.values[b]));
        } else {
            positions.sort_by(|&a, &b| self.values[b].cmp(&self.values[a]));
        }

        let values = positions.iter().map(|&p| self.values[p].clone()).collect();
        let index = positions.iter().map(|&p| self.index.values()[p].clone()).collect();
        Self::from_parts(values, index, self.name.clone())
    }

    /// Concatenate `other` after this Series
    pub fn append(&self, other: &Series, ignore_index: bool) -> Result<Series> {
        crate::reshape::concat_series(&[self, other], ignore_index)
    }
}

// Unnamed Series carry an empty string name
fn series_name(name: Option<String>) -> Scalar {
    Scalar::Str(name.unwrap_or_default())
}

fn convert_numeric(value: &Scalar, dtype: DType) -> Scalar {
    let number = match value {
        Scalar::DateTime(dt) => Some(dt.and_utc().timestamp_millis() as f64),
        other => other.as_f64(),
    };
    match (number, dtype) {
        (None, _) => value.clone(),
        (Some(n), DType::Int) if n.is_finite() => Scalar::Int(n.floor() as i64),
        (Some(n), _) => Scalar::Float(n),
    }
}

impl NDFrame for Series {
    fn axes(&self) -> Vec<Index> {
        vec![self.index.clone()]
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = config::current().display;
        for (label, value) in self.index.iter().zip(&self.values).take(settings.max_rows) {
            writeln!(f, "{}\t{}", label, settings.format_value(value))?;
        }
        write!(f, "Name: {}, dtype: {}", self.name, self.dtype)
    }
}
