use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::SignalError;

///
/// Running totals for the bases of one bin. Every covered base is
/// counted once, so a signal record spanning `n` bases of the bin
/// contributes with weight `n`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinAccumulator {
    pub covered: u64,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for BinAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BinAccumulator {
    pub fn new() -> Self {
        BinAccumulator {
            covered: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add `bases` bases carrying `value`. NaN values leave the bin uncovered.
    pub fn add(&mut self, value: f64, bases: u32) {
        if bases == 0 || value.is_nan() {
            return;
        }
        self.covered += bases as u64;
        self.sum += value * bases as f64;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn is_empty(&self) -> bool {
        self.covered == 0
    }
}

///
/// How the bases inside one bin are collapsed into a single value.
///
/// Chosen once when the run is configured and passed by value into the
/// aggregation.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinReducer {
    #[default]
    Mean,
    Max,
    Min,
    Sum,
}

impl BinReducer {
    ///
    /// Reduce an accumulated bin. A bin without any covered base
    /// yields `fill`.
    ///
    pub fn reduce(&self, acc: &BinAccumulator, fill: f64) -> f64 {
        if acc.is_empty() {
            return fill;
        }
        match self {
            BinReducer::Mean => acc.sum / acc.covered as f64,
            BinReducer::Sum => acc.sum,
            BinReducer::Max => acc.max,
            BinReducer::Min => acc.min,
        }
    }

    ///
    /// Reduce base-pair resolution values directly. NaN entries are
    /// undefined bases; if none are defined the result is NaN.
    ///
    pub fn reduce_values(&self, values: &[f64]) -> f64 {
        let mut acc = BinAccumulator::new();
        for v in values {
            acc.add(*v, 1);
        }
        self.reduce(&acc, f64::NAN)
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinReducer::Mean => "mean",
            BinReducer::Max => "max",
            BinReducer::Min => "min",
            BinReducer::Sum => "sum",
        }
    }
}

impl FromStr for BinReducer {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(BinReducer::Mean),
            "max" => Ok(BinReducer::Max),
            "min" => Ok(BinReducer::Min),
            "sum" => Ok(BinReducer::Sum),
            _ => Err(SignalError::UnknownReducer(s.to_string())),
        }
    }
}

impl Display for BinReducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
