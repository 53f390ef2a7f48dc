use std::fmt::Debug;
use std::ops::Range;
use std::sync::Arc;

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};

/// Trait defining common operations for indexes
pub trait IndexTrait: Debug + Clone + Send + Sync {
    /// Returns the length of the index
    fn len(&self) -> usize;

    /// Returns whether the index is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the position of the first occurrence of a label
    fn get_position(&self, label: &Scalar) -> Option<usize>;

    /// Gets the label at a specified position
    fn get_value(&self, position: usize) -> Result<Scalar>;

    /// Gets all labels in order
    fn get_values(&self) -> Vec<Scalar>;
}

/// Ordered, immutable sequence of labels.
///
/// Labels need not be unique (concatenating without `ignore_index` repeats
/// them). The backing buffer is shared between clones, so handing the same
/// index to every column of a frame is cheap.
#[derive(Debug, Clone)]
pub struct Index {
    values: Arc<[Scalar]>,
    name: Option<String>,
}

impl Index {
    /// Creates a new index from labels
    pub fn new<V: Into<Scalar>>(values: Vec<V>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            name: None,
        }
    }

    /// Creates the default `0..len` index
    pub fn range(len: usize) -> Self {
        Self {
            values: (0..len).map(Scalar::from).collect(),
            name: None,
        }
    }

    /// Creates an index with a name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the name of the index
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Label at a position, if any
    pub fn get(&self, position: usize) -> Option<&Scalar> {
        self.values.get(position)
    }

    /// Labels as a slice
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.values.iter()
    }

    /// Sub-index over `[start, end)`, clamped to the index bounds
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = range.end.min(self.values.len());
        let start = range.start.min(end);
        Self {
            values: self.values[start..end].into(),
            name: self.name.clone(),
        }
    }

    /// Labels at the given positions, in the order given
    pub fn take(&self, positions: &[usize]) -> Result<Self> {
        let values = positions
            .iter()
            .map(|&p| self.get_value(p))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            values: values.into(),
            name: self.name.clone(),
        })
    }

    /// This index followed by `other`
    pub fn concat(&self, other: &Index) -> Self {
        let values: Vec<Scalar> = self.values.iter().chain(other.values.iter()).cloned().collect();
        Self {
            values: values.into(),
            name: self.name.clone(),
        }
    }

    /// Whether both indexes share the same backing buffer
    pub fn ptr_eq(&self, other: &Index) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

impl IndexTrait for Index {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn get_position(&self, label: &Scalar) -> Option<usize> {
        self.values.iter().position(|v| v == label)
    }

    fn get_value(&self, position: usize) -> Result<Scalar> {
        self.values
            .get(position)
            .cloned()
            .ok_or(Error::IndexOutOfBounds {
                index: position,
                size: self.values.len(),
            })
    }

    fn get_values(&self) -> Vec<Scalar> {
        self.values.to_vec()
    }
}

impl Default for Index {
    fn default() -> Self {
        Index::range(0)
    }
}

/// Indexes compare by label values; names are ignored
impl PartialEq for Index {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.values == other.values
    }
}

impl<V: Into<Scalar>> FromIterator<V> for Index {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
            name: None,
        }
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_is_clamped() {
        let idx = Index::range(4);
        assert_eq!(idx.slice(2..10).get_values(), vec![Scalar::Int(2), Scalar::Int(3)]);
        assert!(idx.slice(6..8).is_empty());
    }

    #[test]
    fn test_clone_shares_buffer() {
        let idx = Index::new(vec!["a", "b"]);
        let copy = idx.clone();
        assert!(idx.ptr_eq(&copy));
        assert_eq!(idx, Index::new(vec!["a", "b"]));
    }
}
