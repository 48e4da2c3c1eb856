use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};

use bedcons_core::models::{Region, RegionSet};

use crate::errors::{SignalError, StatisticsError};
use crate::params::QueryParams;
use crate::source::SignalSource;
use crate::statistics::{fraction_at_or_above, mean, median};

///
/// Interval-level summary of a region's bin vector.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalSummary {
    pub mean: f64,
    pub median: f64,
    pub fraction_above: f64,
    /// Number of bins the statistics were computed from.
    pub bins: usize,
}

impl SignalSummary {
    /// The value reported for regions whose query failed.
    pub fn zero() -> Self {
        SignalSummary {
            mean: 0.0,
            median: 0.0,
            fraction_above: 0.0,
            bins: 0,
        }
    }

    ///
    /// Summarize a bin vector.
    ///
    /// An empty vector has no mean or median (both NaN) and a
    /// `fraction_above` of `0.0`.
    ///
    pub fn from_bins(bins: &[f64], threshold: f64) -> Self {
        match (
            mean(bins),
            median(bins),
            fraction_at_or_above(bins, threshold),
        ) {
            (Ok(mean), Ok(median), Ok(fraction_above)) => SignalSummary {
                mean,
                median,
                fraction_above,
                bins: bins.len(),
            },
            _ => SignalSummary {
                mean: f64::NAN,
                median: f64::NAN,
                fraction_above: 0.0,
                bins: 0,
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bins == 0
    }
}

///
/// What happened to one region during a run.
///
#[derive(Debug, Clone, PartialEq)]
pub enum RegionOutcome {
    Summarized(SignalSummary),
    /// The signal query failed; the reason is kept for reporting.
    Failed(String),
}

impl RegionOutcome {
    /// The summary to report; failed regions report [SignalSummary::zero].
    pub fn summary(&self) -> SignalSummary {
        match self {
            RegionOutcome::Summarized(summary) => *summary,
            RegionOutcome::Failed(_) => SignalSummary::zero(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RegionOutcome::Failed(_))
    }
}

///
/// Query the bins of one region and summarize them.
///
/// # Arguments
/// - region: the region to summarize
/// - source: signal track to query
/// - params: binning, reducer and threshold of the run
///
pub fn aggregate<S: SignalSource + ?Sized>(
    region: &Region,
    source: &mut S,
    params: &QueryParams,
) -> Result<SignalSummary, SignalError> {
    let bins = source.query_bins(&region.chr, region.start, region.end, params)?;

    let summary = SignalSummary::from_bins(&bins, params.threshold);
    if summary.is_empty() {
        warn!(
            "{} ({}): {}, no bins to summarize",
            region.locus(),
            region.name,
            StatisticsError::EmptyInput
        );
    }
    Ok(summary)
}

///
/// Regions of a run paired with their outcome, in input order.
///
#[derive(Debug, Clone, Default)]
pub struct SummaryTable {
    pub rows: Vec<(Region, RegionOutcome)>,
}

impl SummaryTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.rows.iter().filter(|(_, o)| o.is_failed()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Region, RegionOutcome)> {
        self.rows.iter()
    }
}

///
/// Summarize every region of `regions`, one after the other.
///
/// A failed query is logged and recorded as [RegionOutcome::Failed];
/// it never stops the run.
///
pub fn summarize_regions<S: SignalSource + ?Sized>(
    regions: &RegionSet,
    source: &mut S,
    params: &QueryParams,
) -> SummaryTable {
    summarize_regions_with_progress(regions, source, params, ProgressBar::hidden())
}

pub fn summarize_regions_with_progress<S: SignalSource + ?Sized>(
    regions: &RegionSet,
    source: &mut S,
    params: &QueryParams,
    bar: ProgressBar,
) -> SummaryTable {
    bar.set_length(regions.len() as u64);

    let mut rows = Vec::with_capacity(regions.len());
    for region in regions {
        let outcome = match aggregate(region, source, params) {
            Ok(summary) => RegionOutcome::Summarized(summary),
            Err(err) => {
                warn!("{} ({}): {}", region.locus(), region.name, err);
                RegionOutcome::Failed(err.to_string())
            }
        };
        rows.push((region.clone(), outcome));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let table = SummaryTable { rows };
    info!(
        "Summarized {} regions ({} failed)",
        table.len(),
        table.failures()
    );
    table
}

///
/// A terminal progress bar for [summarize_regions_with_progress].
///
pub fn region_progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
    {
        bar.set_style(style.progress_chars("##-"));
    }
    bar
}
