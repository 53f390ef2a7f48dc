use std::convert::TryFrom;

use crate::core::error::{Error, Result};
use crate::core::index::{Index, IndexTrait};

/// Axis for reductions and cumulative operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Operate down each column
    #[default]
    Column = 0,
    /// Operate across each row
    Row = 1,
}

impl Axis {
    pub fn new(axis: usize) -> Result<Self> {
        match axis {
            0 => Ok(Axis::Column),
            1 => Ok(Axis::Row),
            other => Err(Error::InvalidAxis(other)),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = Error;

    fn try_from(axis: usize) -> Result<Self> {
        Axis::new(axis)
    }
}

/// Axis bookkeeping shared by Series and DataFrame
pub trait NDFrame {
    /// Labels of every axis, in axis order
    fn axes(&self) -> Vec<Index>;

    /// Length of every axis
    fn shape(&self) -> Vec<usize> {
        self.axes().iter().map(|axis| axis.len()).collect()
    }

    /// Number of axes
    fn ndim(&self) -> usize {
        self.axes().len()
    }

    /// Labels of axis `n`
    fn axis(&self, n: usize) -> Result<Index> {
        self.axes().into_iter().nth(n).ok_or(Error::InvalidAxis(n))
    }
}
