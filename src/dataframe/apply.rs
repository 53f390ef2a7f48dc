use indexmap::IndexMap;
use log::debug;

use crate::core::data_value::Scalar;
use crate::core::error::Result;
use crate::core::generic::Axis;
use crate::core::index::Index;
use crate::dataframe::base::DataFrame;
use crate::series::functions::{cumulative, CumulativeOp};
use crate::series::window::positive_periods;
use crate::series::Series;

/// Apply functionality for DataFrames
pub trait ApplyExt {
    /// Reduce each column (`Axis::Column`) or each row (`Axis::Row`) to one value
    fn apply<F>(&self, f: F, axis: Axis, result_name: Option<String>) -> Result<Series>
    where
        F: Fn(&Series) -> Result<Scalar>;

    /// Apply a function to each element
    fn applymap<F>(&self, f: F) -> Result<DataFrame>
    where
        F: Fn(&Scalar) -> Result<Scalar>;
}

impl ApplyExt for DataFrame {
    fn apply<F>(&self, f: F, axis: Axis, result_name: Option<String>) -> Result<Series>
    where
        F: Fn(&Series) -> Result<Scalar>,
    {
        match axis {
            Axis::Column => {
                let results = self
                    .iter()
                    .map(|(_, series)| f(series))
                    .collect::<Result<Vec<_>>>()?;
                let labels: Index = self.column_names().into_iter().collect();
                Series::with_index(results, labels, result_name)
            }
            Axis::Row => {
                let results = (0..self.row_count())
                    .map(|row| f(&self.row_series(row)))
                    .collect::<Result<Vec<_>>>()?;
                Series::with_index(results, self.index().clone(), result_name)
            }
        }
    }

    fn applymap<F>(&self, f: F) -> Result<DataFrame>
    where
        F: Fn(&Scalar) -> Result<Scalar>,
    {
        let columns = self
            .iter()
            .map(|(name, series)| Ok((name.clone(), series.try_map(|v, _| f(v))?)))
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(DataFrame::from_parts(columns, self.index().clone()))
    }
}

impl DataFrame {
    /// One row as a Series labeled by column names
    pub(crate) fn row_series(&self, row: usize) -> Series {
        let values = self
            .iter()
            .map(|(_, series)| series.values()[row].clone())
            .collect();
        let labels: Index = self.column_names().into_iter().collect();
        Series::from_parts(values, labels, self.index().values()[row].clone())
    }

    fn reduce<F>(&self, axis: usize, f: F) -> Result<Series>
    where
        F: Fn(&Series) -> Result<f64>,
    {
        self.apply(|series| f(series).map(Scalar::Float), Axis::new(axis)?, None)
    }

    /// Sum of each column (axis 0) or each row (axis 1)
    pub fn sum(&self, axis: usize) -> Result<Series> {
        self.reduce(axis, Series::sum)
    }

    /// Mean of each column (axis 0) or each row (axis 1)
    pub fn mean(&self, axis: usize) -> Result<Series> {
        self.reduce(axis, Series::mean)
    }

    /// Sample standard deviation along an axis
    pub fn std(&self, axis: usize) -> Result<Series> {
        self.reduce(axis, Series::std)
    }

    /// Sample variance along an axis.
    ///
    /// Row variances are measured around the row means.
    pub fn variance(&self, axis: usize) -> Result<Series> {
        self.reduce(axis, Series::variance)
    }

    /// Evaluate `func` on every pair of columns.
    ///
    /// Only the upper triangle is computed; the lower triangle mirrors it.
    fn pairwise<F>(&self, func: F) -> Result<DataFrame>
    where
        F: Fn(&Series, &Series) -> Result<f64>,
    {
        let names = self.column_names();
        let width = names.len();
        debug!("pairwise reduction over {} columns", width);

        let columns: Vec<&Series> = self.iter().map(|(_, series)| series).collect();
        let mut matrix = vec![vec![Scalar::Null; width]; width];
        for i in 0..width {
            for j in i..width {
                let value = Scalar::Float(func(columns[i], columns[j])?);
                matrix[j][i] = value.clone();
                matrix[i][j] = value;
            }
        }

        let index: Index = names.iter().cloned().collect();
        DataFrame::from_rows(matrix, Some(names), Some(index))
    }

    /// Covariance matrix of the columns
    pub fn cov(&self) -> Result<DataFrame> {
        self.pairwise(|a, b| a.cov(b))
    }

    /// Correlation matrix of the columns; the diagonal is exactly 1
    pub fn corr(&self) -> Result<DataFrame> {
        self.pairwise(|a, b| {
            if std::ptr::eq(a, b) {
                Ok(1.0)
            } else {
                a.corr(b)
            }
        })
    }

    fn lagged<F, G>(&self, periods: i64, axis: usize, down: F, across: G) -> Result<DataFrame>
    where
        F: Fn(&Series) -> Result<Series>,
        G: Fn(&Series, &Series) -> Result<Series>,
    {
        let lag = positive_periods(periods)?;
        let columns = match Axis::new(axis)? {
            Axis::Column => self
                .iter()
                .map(|(name, series)| Ok((name.clone(), down(series)?)))
                .collect::<Result<IndexMap<_, _>>>()?,
            Axis::Row => {
                let all: Vec<(&Scalar, &Series)> = self.iter().collect();
                all.iter()
                    .enumerate()
                    .map(|(k, (name, series))| {
                        let column = if k < lag {
                            series.with_values(vec![Scalar::Null; series.len()])
                        } else {
                            across(series, all[k - lag].1)?
                        };
                        Ok(((*name).clone(), column))
                    })
                    .collect::<Result<IndexMap<_, _>>>()?
            }
        };
        Ok(DataFrame::from_parts(columns, self.index().clone()))
    }

    /// Difference with the value `periods` rows above (axis 0) or
    /// `periods` columns to the left (axis 1)
    pub fn diff(&self, periods: i64, axis: usize) -> Result<DataFrame> {
        self.lagged(
            periods,
            axis,
            |series| series.diff(periods),
            |current, previous| current.sub(previous),
        )
    }

    /// Fractional change relative to `periods` rows above (axis 0) or
    /// `periods` columns to the left (axis 1)
    pub fn pct_change(&self, periods: i64, axis: usize) -> Result<DataFrame> {
        self.lagged(
            periods,
            axis,
            |series| series.pct_change(periods),
            |current, previous| current.div(previous)?.sub(1),
        )
    }

    fn cumulative(&self, op: CumulativeOp, axis: usize) -> Result<DataFrame> {
        match Axis::new(axis)? {
            Axis::Column => {
                let columns = self
                    .iter()
                    .map(|(name, series)| Ok((name.clone(), series.cumulative_op(op)?)))
                    .collect::<Result<IndexMap<_, _>>>()?;
                Ok(DataFrame::from_parts(columns, self.index().clone()))
            }
            Axis::Row => {
                let rows = self
                    .values()
                    .iter()
                    .map(|row| cumulative(row, op))
                    .collect::<Result<Vec<_>>>()?;
                DataFrame::from_rows(rows, Some(self.column_names()), Some(self.index().clone()))
            }
        }
    }

    pub fn cumsum(&self, axis: usize) -> Result<DataFrame> {
        self.cumulative(CumulativeOp::Sum, axis)
    }

    pub fn cummul(&self, axis: usize) -> Result<DataFrame> {
        self.cumulative(CumulativeOp::Mul, axis)
    }

    pub fn cummax(&self, axis: usize) -> Result<DataFrame> {
        self.cumulative(CumulativeOp::Max, axis)
    }

    pub fn cummin(&self, axis: usize) -> Result<DataFrame> {
        self.cumulative(CumulativeOp::Min, axis)
    }
}
