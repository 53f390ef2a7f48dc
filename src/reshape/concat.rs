use indexmap::IndexMap;
use log::debug;

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::core::generic::Axis;
use crate::core::index::Index;
use crate::dataframe::DataFrame;
use crate::series::Series;

/// Options for [`concat`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConcatOptions {
    /// Discard the input indexes and number the result `0..n`
    pub ignore_index: bool,
    /// 0 stacks rows, 1 places DataFrames side by side
    pub axis: usize,
}

/// Borrowed input to [`concat`]
#[derive(Debug, Clone, Copy)]
pub enum NDObject<'a> {
    Series(&'a Series),
    Frame(&'a DataFrame),
}

impl<'a> From<&'a Series> for NDObject<'a> {
    fn from(series: &'a Series) -> Self {
        NDObject::Series(series)
    }
}

impl<'a> From<&'a DataFrame> for NDObject<'a> {
    fn from(frame: &'a DataFrame) -> Self {
        NDObject::Frame(frame)
    }
}

/// Result of [`concat`]; same kind as the inputs
#[derive(Debug, Clone, PartialEq)]
pub enum Concatenated {
    Series(Series),
    Frame(DataFrame),
}

impl Concatenated {
    pub fn into_series(self) -> Result<Series> {
        match self {
            Concatenated::Series(series) => Ok(series),
            Concatenated::Frame(_) => Err(Error::Type("concat produced a DataFrame".to_string())),
        }
    }

    pub fn into_frame(self) -> Result<DataFrame> {
        match self {
            Concatenated::Frame(frame) => Ok(frame),
            Concatenated::Series(_) => Err(Error::Type("concat produced a Series".to_string())),
        }
    }
}

/// Concatenate Series or DataFrames.
///
/// The kind of the first object decides the kind of the result; every other
/// object must be of the same kind.
///
/// ```
/// use tabrs::{concat, ConcatOptions, Series};
///
/// let a = Series::new(vec![1, 2], None).unwrap();
/// let b = Series::new(vec![3, 4], None).unwrap();
/// let joined = concat(&[(&a).into(), (&b).into()], ConcatOptions::default())
///     .unwrap()
///     .into_series()
///     .unwrap();
/// assert_eq!(joined.len(), 4);
/// ```
pub fn concat(objs: &[NDObject<'_>], options: ConcatOptions) -> Result<Concatenated> {
    Axis::new(options.axis)?;
    match objs.first() {
        None => Err(Error::InvalidInput("No objects to concatenate".to_string())),
        Some(NDObject::Series(_)) => {
            let series = objs
                .iter()
                .map(|obj| match obj {
                    NDObject::Series(s) => Ok(*s),
                    NDObject::Frame(_) => Err(Error::Type("Objects must all be Series".to_string())),
                })
                .collect::<Result<Vec<_>>>()?;
            concat_series(&series, options.ignore_index).map(Concatenated::Series)
        }
        Some(NDObject::Frame(_)) => {
            let frames = objs
                .iter()
                .map(|obj| match obj {
                    NDObject::Frame(f) => Ok(*f),
                    NDObject::Series(_) => Err(Error::Type("Objects must all be DataFrame".to_string())),
                })
                .collect::<Result<Vec<_>>>()?;
            concat_frames(&frames, options).map(Concatenated::Frame)
        }
    }
}

/// Values end to end; indexes too unless `ignore_index`.
///
/// The result takes the first Series' name.
pub fn concat_series(objs: &[&Series], ignore_index: bool) -> Result<Series> {
    let first = objs
        .first()
        .ok_or_else(|| Error::InvalidInput("No objects to concatenate".to_string()))?;

    let total = objs.iter().map(|s| s.len()).sum();
    let mut values = Vec::with_capacity(total);
    for series in objs {
        values.extend_from_slice(series.values());
    }

    let index = if ignore_index {
        Index::range(total)
    } else {
        let labels: Vec<Scalar> = objs
            .iter()
            .flat_map(|s| s.index().iter().cloned())
            .collect();
        Index::new(labels)
    };

    Series::with_index(values, index, None).map(|s| s.rename(first.name().clone()))
}

fn nan_series(len: usize, index: Index) -> Result<Series> {
    Series::with_index(vec![Scalar::Float(f64::NAN); len], index, None)
}

/// Concatenate DataFrames along rows (axis 0) or columns (axis 1).
///
/// Along rows, a column missing from a frame is padded with NaN for that
/// frame's rows, and a column first seen in a later frame is padded with
/// NaN for every row accumulated before it. Along columns, a name already
/// present is suffixed `.x`; a further clash on the same name replaces the
/// earlier `.x` column.
pub fn concat_frames(objs: &[&DataFrame], options: ConcatOptions) -> Result<DataFrame> {
    let axis = Axis::new(options.axis)?;
    match objs {
        [] => return Err(Error::InvalidInput("No objects to concatenate".to_string())),
        [only] => return Ok((*only).clone()),
        _ => {}
    }
    debug!("concatenating {} frames along axis {}", objs.len(), options.axis);

    let mut columns: IndexMap<Scalar, Series> = IndexMap::new();
    match axis {
        // side by side
        Axis::Row => {
            for frame in objs {
                for (name, series) in frame.iter() {
                    if columns.contains_key(name) {
                        let renamed = Scalar::Str(format!("{}.x", name));
                        columns.insert(renamed.clone(), series.rename(renamed));
                    } else {
                        columns.insert(name.clone(), series.clone());
                    }
                }
            }
        }
        // stacked rows
        Axis::Column => {
            for frame in objs {
                let prior = columns.values().next().map(|s| (s.len(), s.index().clone()));

                for (name, series) in columns.iter_mut() {
                    let incoming = match frame.get(name.clone()) {
                        Ok(column) => column.clone(),
                        Err(_) => nan_series(frame.row_count(), frame.index().clone())?
                            .rename(name.clone()),
                    };
                    *series = concat_series(&[&*series, &incoming], options.ignore_index)?;
                }

                for (name, series) in frame.iter() {
                    if columns.contains_key(name) {
                        continue;
                    }
                    let column = match &prior {
                        None => series.clone(),
                        Some((len, index)) => {
                            let padding = nan_series(*len, index.clone())?.rename(name.clone());
                            concat_series(&[&padding, series], options.ignore_index)?
                        }
                    };
                    columns.insert(name.clone(), column);
                }
            }
        }
    }

    let frame = DataFrame::from_series(columns.into_iter().collect())?;
    debug!(
        "concat produced {} rows and {} columns",
        frame.row_count(),
        frame.column_count()
    );
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_new_column_is_padded_for_prior_rows() {
        let df1 = DataFrame::from_records(vec![record! { "a" => 1 }, record! { "a" => 2 }]).unwrap();
        let df2 = DataFrame::from_records(vec![record! { "a" => 3, "b" => 4 }]).unwrap();
        let out = concat_frames(&[&df1, &df2], ConcatOptions::default()).unwrap();

        let b = out.get("b").unwrap();
        assert_eq!(b.len(), 3);
        assert!(b.values()[0].is_nan());
        assert!(b.values()[1].is_nan());
        assert_eq!(b.values()[2], Scalar::Int(4));
    }
}
