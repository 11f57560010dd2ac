// File: crates/chart-labels/src/dataset.rs
// Summary: Read-only dataset traits for x/y and x/y/z items, plus an in-memory implementation.

use crate::error::{LabelError, Result};

/// Indexed access to series of (x, y) items.
/// Accessors return `None` for out-of-range indices or missing values.
pub trait XyDataset {
    fn series_count(&self) -> usize;
    fn series_key(&self, series: usize) -> Option<&str>;
    fn item_count(&self, series: usize) -> usize;
    fn x_value(&self, series: usize, item: usize) -> Option<f64>;
    fn y_value(&self, series: usize, item: usize) -> Option<f64>;
}

/// Adds a z value to every item.
pub trait XyzDataset: XyDataset {
    fn z_value(&self, series: usize, item: usize) -> Option<f64>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct XyzSeries {
    pub key: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
}

impl XyzSeries {
    /// Try to construct a series enforcing equal-length value arrays.
    pub fn try_new(key: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>, zs: Vec<f64>) -> Result<Self> {
        let key = key.into();
        if xs.len() != ys.len() || xs.len() != zs.len() {
            return Err(LabelError::invalid_argument(format!(
                "series {key:?}: x/y/z lengths differ ({}, {}, {})",
                xs.len(),
                ys.len(),
                zs.len()
            )));
        }
        Ok(Self { key, xs, ys, zs })
    }

    pub fn from_points(key: impl Into<String>, points: &[(f64, f64, f64)]) -> Self {
        Self {
            key: key.into(),
            xs: points.iter().map(|p| p.0).collect(),
            ys: points.iter().map(|p| p.1).collect(),
            zs: points.iter().map(|p| p.2).collect(),
        }
    }

    pub fn len(&self) -> usize { self.xs.len() }
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }
}

/// Series held in insertion order; keys are unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultXyzDataset {
    series: Vec<XyzSeries>,
}

impl DefaultXyzDataset {
    pub fn new() -> Self { Self::default() }

    /// Add a series, or replace the data of the series with the same key.
    pub fn add_series(&mut self, key: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>, zs: Vec<f64>) -> Result<()> {
        let series = XyzSeries::try_new(key, xs, ys, zs)?;
        self.insert(series);
        Ok(())
    }

    pub fn with_points(mut self, key: impl Into<String>, points: &[(f64, f64, f64)]) -> Self {
        self.insert(XyzSeries::from_points(key, points));
        self
    }

    /// Remove the series with `key`; returns whether one was present.
    pub fn remove_series(&mut self, key: &str) -> bool {
        match self.series_index(key) {
            Some(i) => {
                self.series.remove(i);
                tracing::debug!(key, index = i, "removed series");
                true
            }
            None => false,
        }
    }

    pub fn series_index(&self, key: &str) -> Option<usize> {
        self.series.iter().position(|s| s.key == key)
    }

    pub fn series(&self, index: usize) -> Option<&XyzSeries> {
        self.series.get(index)
    }

    fn insert(&mut self, series: XyzSeries) {
        match self.series_index(&series.key) {
            Some(i) => {
                tracing::debug!(key = %series.key, index = i, items = series.len(), "replaced series");
                self.series[i] = series;
            }
            None => {
                tracing::debug!(key = %series.key, index = self.series.len(), items = series.len(), "added series");
                self.series.push(series);
            }
        }
    }
}

impl XyDataset for DefaultXyzDataset {
    fn series_count(&self) -> usize { self.series.len() }

    fn series_key(&self, series: usize) -> Option<&str> {
        self.series.get(series).map(|s| s.key.as_str())
    }

    fn item_count(&self, series: usize) -> usize {
        self.series.get(series).map_or(0, XyzSeries::len)
    }

    fn x_value(&self, series: usize, item: usize) -> Option<f64> {
        self.series.get(series)?.xs.get(item).copied()
    }

    fn y_value(&self, series: usize, item: usize) -> Option<f64> {
        self.series.get(series)?.ys.get(item).copied()
    }
}

impl XyzDataset for DefaultXyzDataset {
    fn z_value(&self, series: usize, item: usize) -> Option<f64> {
        self.series.get(series)?.zs.get(item).copied()
    }
}
