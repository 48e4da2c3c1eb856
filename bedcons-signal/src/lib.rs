//! # Region signal summaries
//!
//! For every region of a [`RegionSet`](bedcons_core::models::RegionSet) the signal
//! track is sliced into fixed-size bins, each bin is reduced to one value by a
//! [`BinReducer`], and the per-bin vector is summarized as mean, median and the
//! fraction of bins at or above a threshold.
//!
//! ```no_run
//! use bedcons_core::models::RegionSet;
//! use bedcons_signal::{QueryParams, open_signal, summarize_regions};
//!
//! let regions = RegionSet::try_from("peaks.bed").unwrap();
//! let mut signal = open_signal("phyloP.bw").unwrap();
//! let params = QueryParams::default();
//!
//! let table = summarize_regions(&regions, signal.as_mut(), &params);
//! println!("{} regions failed", table.failures());
//! ```
pub mod aggregate;
pub mod bins;
pub mod consts;
pub mod errors;
pub mod params;
pub mod reducer;
pub mod source;
pub mod statistics;

// re-exports
pub use aggregate::*;
pub use bins::BinLayout;
pub use errors::*;
pub use params::QueryParams;
pub use reducer::{BinAccumulator, BinReducer};
pub use source::*;
