//! Queryable signal tracks.
//!
//! A [SignalSource] hands out the raw piecewise-constant records of a
//! chromosome range; binning and reduction on top of that is shared by
//! every implementation through [SignalSource::query_bins].
pub mod bedgraph;
pub mod bigwig;
pub mod memory;

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

use bedcons_core::utils::inner_extension;

use crate::bins::BinLayout;
use crate::errors::SignalError;
use crate::params::QueryParams;

pub use self::bedgraph::BedGraphSource;
pub use self::bigwig::BigWigSource;
pub use self::memory::InMemorySignal;

/// One run of constant signal over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalRecord {
    pub start: u32,
    pub end: u32,
    pub value: f64,
}

pub trait SignalSource {
    /// Length of `chrom`, or `None` when the track does not know it.
    fn chrom_length(&self, chrom: &str) -> Option<u32>;

    /// Records overlapping `[start, end)` on `chrom`.
    fn records(&mut self, chrom: &str, start: u32, end: u32)
    -> Result<Vec<SignalRecord>, SignalError>;

    ///
    /// Binned range query: the reduced value of every bin tiling
    /// `[start, end)`, using the bin size, overlap, reducer and fill
    /// value of `params`.
    ///
    /// Fails when the chromosome is missing from the track or the
    /// range runs past its end.
    ///
    fn query_bins(
        &mut self,
        chrom: &str,
        start: u32,
        end: u32,
        params: &QueryParams,
    ) -> Result<Vec<f64>, SignalError> {
        if params.bin_size == 0 {
            return Err(SignalError::InvalidBinSize);
        }

        let length = self
            .chrom_length(chrom)
            .ok_or_else(|| SignalError::UnknownChromosome(chrom.to_string()))?;

        if start > end || end > length {
            return Err(SignalError::OutOfBounds {
                chrom: chrom.to_string(),
                start,
                end,
                length,
            });
        }

        let layout = BinLayout::new(start, end, params.bin_size, params.bin_overlap, length);
        if layout.is_empty() {
            return Ok(Vec::new());
        }

        let (span_start, span_end) = layout.span();
        let records = self.records(chrom, span_start, span_end)?;
        debug!(
            "{}:{}-{}: {} records into {} bins",
            chrom,
            start,
            end,
            records.len(),
            layout.len()
        );

        Ok(layout.reduce(&records, params.reducer, params.fill))
    }
}

impl<S: SignalSource + ?Sized> SignalSource for Box<S> {
    fn chrom_length(&self, chrom: &str) -> Option<u32> {
        (**self).chrom_length(chrom)
    }

    fn records(
        &mut self,
        chrom: &str,
        start: u32,
        end: u32,
    ) -> Result<Vec<SignalRecord>, SignalError> {
        (**self).records(chrom, start, end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalFormat {
    BigWig,
    BedGraph,
}

///
/// Guess the track format from the file name. Anything that is not
/// obviously a bedGraph is treated as bigWig.
///
pub fn detect_format(path: &Path) -> SignalFormat {
    match inner_extension(path).as_deref() {
        Some("bedgraph") | Some("bg") | Some("bdg") => SignalFormat::BedGraph,
        _ => SignalFormat::BigWig,
    }
}

///
/// Open a signal track once for the duration of a run.
///
/// # Arguments
/// - path: bigWig file, or a (optionally gzipped) bedGraph file
///
pub fn open_signal<P: AsRef<Path>>(path: P) -> Result<Box<dyn SignalSource>, SignalError> {
    open_signal_with_chrom_sizes(path, &HashMap::new())
}

///
/// Like [open_signal], with chromosome lengths for tracks that do not
/// carry their own. A bigWig always uses the lengths stored in its header.
///
pub fn open_signal_with_chrom_sizes<P: AsRef<Path>>(
    path: P,
    chrom_sizes: &HashMap<String, u32>,
) -> Result<Box<dyn SignalSource>, SignalError> {
    let path = path.as_ref();
    match detect_format(path) {
        SignalFormat::BigWig => {
            if !chrom_sizes.is_empty() {
                info!("Ignoring chrom sizes, {} has its own", path.display());
            }
            Ok(Box::new(BigWigSource::open(path)?))
        }
        SignalFormat::BedGraph => Ok(Box::new(
            BedGraphSource::open(path)?.with_chrom_sizes(chrom_sizes),
        )),
    }
}
