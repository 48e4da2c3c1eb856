use crate::consts::{DEFAULT_BIN_OVERLAP, DEFAULT_BIN_SIZE, DEFAULT_THRESHOLD};
use crate::errors::SignalError;
use crate::reducer::BinReducer;

///
/// Immutable settings for one run: how regions are binned, how bins
/// are reduced and the cutoff used for `fraction_above`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryParams {
    pub bin_size: u32,
    /// Neighbouring bins added on each side of a bin, in units of `bin_size`.
    pub bin_overlap: u32,
    pub reducer: BinReducer,
    pub threshold: f64,
    /// Value given to bins without any covered base.
    pub fill: f64,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            bin_size: DEFAULT_BIN_SIZE,
            bin_overlap: DEFAULT_BIN_OVERLAP,
            reducer: BinReducer::default(),
            threshold: DEFAULT_THRESHOLD,
            fill: f64::NAN,
        }
    }
}

impl QueryParams {
    pub fn new(
        bin_size: u32,
        bin_overlap: u32,
        reducer: BinReducer,
        threshold: f64,
    ) -> Result<Self, SignalError> {
        if bin_size == 0 {
            return Err(SignalError::InvalidBinSize);
        }
        Ok(QueryParams {
            bin_size,
            bin_overlap,
            reducer,
            threshold,
            fill: f64::NAN,
        })
    }

    pub fn with_fill(self, fill: f64) -> Self {
        QueryParams { fill, ..self }
    }
}
