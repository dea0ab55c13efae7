//! KPI Snapshot
//!
//! The parsed result of one dashboard fetch cycle: a mapping from metric
//! name to either a scalar or a chart-ready label/value structure.

use std::collections::HashMap;

use serde::Deserialize;

/// Parallel label/value arrays backing one chart slot.
///
/// Invariant: consumers only ever see series where `labels` and `values`
/// line up and are non-empty; everything else reads as "no data".
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn is_valid(&self) -> bool {
        !self.labels.is_empty() && self.labels.len() == self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value in the series, never below zero.
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0_f64, f64::max)
    }
}

/// One fetch result, immutable once parsed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct KpiSnapshot {
    fields: HashMap<String, serde_json::Value>,
}

impl KpiSnapshot {
    /// Parse a raw RPC body. Anything that is not a JSON object yields the
    /// empty (placeholder) snapshot.
    pub fn from_value(body: serde_json::Value) -> Self {
        serde_json::from_value(body).unwrap_or_default()
    }

    /// Numeric metric, if present and actually numeric.
    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(serde_json::Value::as_f64)
    }

    /// Numeric metric with the zeroed placeholder fallback used before the
    /// first fetch completes.
    pub fn scalar_or_zero(&self, name: &str) -> f64 {
        self.scalar(name).unwrap_or(0.0)
    }

    /// Chart series for `name`. Missing keys, malformed structures and
    /// mismatched label/value lengths all read as `None`, never as errors.
    pub fn series(&self, name: &str) -> Option<ChartSeries> {
        let series: ChartSeries =
            serde_json::from_value(self.fields.get(name)?.clone()).ok()?;
        series.is_valid().then_some(series)
    }

    /// Embedded application-level error, if the backend reported one.
    pub fn error(&self) -> Option<&str> {
        self.fields.get("error").and_then(serde_json::Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of top-level metrics in the snapshot.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
