// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart input: rows of `(name, percentage)` and the host adapter boundary.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// One bar's worth of input.
#[derive(Clone, Debug, PartialEq)]
pub struct DataRow {
    /// Category name. Not required to be unique.
    pub name: String,
    /// Bar value, nominally `0..=100` but not clamped.
    pub percentage: f64,
}

impl DataRow {
    /// Creates a row.
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
        }
    }
}

/// An ordered sequence of rows. Order fixes the vertical stacking of bars.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<DataRow>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset from rows, keeping their order.
    pub fn from_rows(rows: impl IntoIterator<Item = DataRow>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
        }
    }

    /// Appends a row.
    pub fn push(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Rows in order.
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the largest percentage, ignoring `NaN`. `None` for an empty dataset.
    pub fn max_percentage(&self) -> Option<f64> {
        self.rows
            .iter()
            .map(|r| r.percentage)
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// Adapts a host categorical view: category `i` pairs with value `i`.
    ///
    /// Every value must be a finite number and every category must name something;
    /// anything else is rejected here so the renderer never sees untyped input.
    pub fn from_categorical(view: &CategoricalView) -> Result<Self, DatasetError> {
        if view.categories.len() != view.values.len() {
            return Err(DatasetError::LengthMismatch {
                categories: view.categories.len(),
                values: view.values.len(),
            });
        }
        let mut rows = Vec::with_capacity(view.categories.len());
        for (row, (category, value)) in view.categories.iter().zip(&view.values).enumerate() {
            let name = category
                .as_name()
                .ok_or(DatasetError::MissingCategory { row })?;
            let percentage = match value {
                HostValue::Number(v) if v.is_finite() => *v,
                _ => return Err(DatasetError::NonNumericValue { row, name }),
            };
            rows.push(DataRow { name, percentage });
        }
        Ok(Self { rows })
    }
}

impl FromIterator<DataRow> for Dataset {
    fn from_iter<T: IntoIterator<Item = DataRow>>(iter: T) -> Self {
        Self::from_rows(iter)
    }
}

/// A loosely typed cell as delivered by a host data source.
#[derive(Clone, Debug, PartialEq)]
pub enum HostValue {
    /// Text.
    Text(String),
    /// A number.
    Number(f64),
    /// A boolean.
    Bool(bool),
    /// No value.
    Null,
}

impl HostValue {
    fn as_name(&self) -> Option<String> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(s.clone()),
            Self::Number(v) => Some(format!("{v}")),
            Self::Bool(b) => Some(format!("{b}")),
            Self::Text(_) | Self::Null => None,
        }
    }
}

/// A host's single-category, single-measure data view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoricalView {
    /// Category cells.
    pub categories: Vec<HostValue>,
    /// Measure cells, aligned with `categories`.
    pub values: Vec<HostValue>,
}

/// Errors returned when adapting host data into a [`Dataset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetError {
    /// Category and value columns differ in length.
    LengthMismatch {
        /// Number of category cells.
        categories: usize,
        /// Number of value cells.
        values: usize,
    },
    /// A category cell is null or empty.
    MissingCategory {
        /// Row index.
        row: usize,
    },
    /// A value cell is not a finite number.
    NonNumericValue {
        /// Row index.
        row: usize,
        /// Category name of the offending row.
        name: String,
    },
}

impl core::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::LengthMismatch { categories, values } => write!(
                f,
                "category column has {categories} rows but value column has {values}"
            ),
            Self::MissingCategory { row } => write!(f, "row {row} has no category"),
            Self::NonNumericValue { row, name } => {
                write!(f, "row {row} ({name}) has a non-numeric value")
            }
        }
    }
}

impl core::error::Error for DatasetError {}
