//! # Input/Output utilities for bedcons.
//!
//! Writes a [`SummaryTable`](bedcons_signal::SummaryTable) as the
//! tab-separated `chrom start end name score strand mean median percentgt`
//! table.
//!
pub mod consts;
pub mod error;
pub mod table;

// re-expose core functions
pub use consts::*;
pub use error::*;
pub use table::*;
