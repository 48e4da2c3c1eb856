//! # bedcons-core
//!
//! Models shared by the bedcons crates: stranded BED6 regions and the
//! ordered [`RegionSet`](models::RegionSet) they are parsed into.
//!
//! ```no_run
//! use bedcons_core::models::RegionSet;
//!
//! let regions = RegionSet::try_from("peaks.bed").unwrap();
//! println!("{}", regions);
//! ```
pub mod errors;
pub mod models;
pub mod utils;
