use std::str::FromStr;

use log::debug;

use crate::core::data_value::Scalar;
use crate::core::error::{Error, Result};
use crate::dataframe::base::{DataFrame, Record, Row};

/// Enum for join types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinType {
    /// Inner join (only rows that match in both tables)
    #[default]
    Inner,
    /// Outer join (all rows from both tables)
    Outer,
}

impl FromStr for JoinType {
    type Err = Error;

    fn from_str(how: &str) -> Result<Self> {
        match how {
            "inner" => Ok(JoinType::Inner),
            "outer" => Ok(JoinType::Outer),
            other => Err(Error::Merge(format!("{} not a supported merge type", other))),
        }
    }
}

/// Join functionality for DataFrames
pub trait JoinExt {
    /// Merge with `other` on the given key columns.
    ///
    /// # Arguments
    /// * `other` - The right-hand frame
    /// * `on` - Key columns; `None` uses every column the two frames share
    /// * `how` - `"inner"` or `"outer"`
    fn merge(&self, other: &Self, on: Option<&[&str]>, how: &str) -> Result<Self>
    where
        Self: Sized;

    /// Merge with an already parsed join type
    fn join(&self, other: &Self, on: Option<&[&str]>, join_type: JoinType) -> Result<Self>
    where
        Self: Sized;
}

impl JoinExt for DataFrame {
    fn merge(&self, other: &Self, on: Option<&[&str]>, how: &str) -> Result<Self> {
        self.join(other, on, how.parse()?)
    }

    fn join(&self, other: &Self, on: Option<&[&str]>, join_type: JoinType) -> Result<Self> {
        let on: Option<Vec<Scalar>> = on.map(|keys| keys.iter().map(|&k| Scalar::from(k)).collect());
        merge_frames(self, other, on.as_deref(), join_type)
    }
}

/// Output layout of a merge: key columns, then each side's renamed
/// non-key columns
struct MergeColumns {
    on: Vec<Scalar>,
    left: Vec<(Scalar, Scalar)>,
    right: Vec<(Scalar, Scalar)>,
}

impl MergeColumns {
    fn new(left: &DataFrame, right: &DataFrame, on: Vec<Scalar>) -> Self {
        let left_cols: Vec<Scalar> = non_key_columns(left, &on);
        let right_cols: Vec<Scalar> = non_key_columns(right, &on);

        let rename = |cols: &[Scalar], other: &[Scalar], suffix: &str| {
            cols.iter()
                .map(|col| {
                    let output = if other.contains(col) {
                        Scalar::Str(format!("{}{}", col, suffix))
                    } else {
                        col.clone()
                    };
                    (col.clone(), output)
                })
                .collect::<Vec<_>>()
        };

        Self {
            left: rename(&left_cols, &right_cols, "_x"),
            right: rename(&right_cols, &left_cols, "_y"),
            on,
        }
    }

    fn keys_match(&self, row1: &Row<'_>, row2: &Row<'_>) -> bool {
        self.on.iter().all(|key| match (row1.get(key.clone()), row2.get(key.clone())) {
            (Some(a), Some(b)) => a.strict_eq(b),
            _ => false,
        })
    }

    /// Output record for a row of either side; a missing side is null
    fn record(&self, key_row: &Row<'_>, left: Option<&Row<'_>>, right: Option<&Row<'_>>) -> Record {
        let mut record = Record::with_capacity(self.on.len() + self.left.len() + self.right.len());
        for key in &self.on {
            record.insert(key.clone(), cell(Some(key_row), key));
        }
        for (col, output) in &self.left {
            record.insert(output.clone(), cell(left, col));
        }
        for (col, output) in &self.right {
            record.insert(output.clone(), cell(right, col));
        }
        record
    }
}

fn cell(row: Option<&Row<'_>>, column: &Scalar) -> Scalar {
    row.and_then(|r| r.get(column.clone()))
        .cloned()
        .unwrap_or(Scalar::Null)
}

fn non_key_columns(frame: &DataFrame, on: &[Scalar]) -> Vec<Scalar> {
    frame
        .column_names()
        .into_iter()
        .filter(|col| !on.contains(col))
        .collect()
}

/// Relational merge of two DataFrames.
///
/// Rows are paired by a nested loop over `left` then `right`, matching when
/// every key column is strictly equal. Non-key columns present on both
/// sides are suffixed `_x` (left) and `_y` (right). An outer merge then
/// appends the unmatched left rows followed by the unmatched right rows,
/// padded with nulls.
pub fn merge_frames(
    left: &DataFrame,
    right: &DataFrame,
    on: Option<&[Scalar]>,
    how: JoinType,
) -> Result<DataFrame> {
    let on: Vec<Scalar> = match on {
        None => {
            let shared: Vec<Scalar> = left
                .column_names()
                .into_iter()
                .filter(|col| right.contains_column(col.clone()))
                .collect();
            if shared.is_empty() {
                return Err(Error::Merge("No common keys".to_string()));
            }
            shared
        }
        Some(keys) => {
            for key in keys {
                if !left.contains_column(key.clone()) || !right.contains_column(key.clone()) {
                    return Err(Error::KeyNotFound(key.to_string()));
                }
            }
            keys.to_vec()
        }
    };

    debug!(
        "{:?} merge of {}x{} and {}x{} frames on {} key(s)",
        how,
        left.row_count(),
        left.column_count(),
        right.row_count(),
        right.column_count(),
        on.len()
    );

    let layout = MergeColumns::new(left, right, on);
    let mut records = Vec::new();
    let mut matched_left = vec![false; left.row_count()];
    let mut matched_right = vec![false; right.row_count()];

    for (i, row1) in left.iterrows() {
        for (j, row2) in right.iterrows() {
            if layout.keys_match(&row1, &row2) {
                records.push(layout.record(&row1, Some(&row1), Some(&row2)));
                matched_left[i] = true;
                matched_right[j] = true;
            }
        }
    }

    if how == JoinType::Outer {
        for (i, row1) in left.iterrows() {
            if !matched_left[i] {
                records.push(layout.record(&row1, Some(&row1), None));
            }
        }
        for (j, row2) in right.iterrows() {
            if !matched_right[j] {
                records.push(layout.record(&row2, None, Some(&row2)));
            }
        }
    }

    debug!("merge produced {} rows", records.len());
    DataFrame::from_records(records)
}
