use std::collections::HashMap;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::ProgressBar;
use log::info;

use bedcons_core::models::RegionSet;
use bedcons_core::utils::get_chrom_sizes;
use bedcons_io::TableWrite;
use bedcons_signal::{
    SummaryTable, open_signal_with_chrom_sizes, region_progress_bar,
    summarize_regions_with_progress,
};

use super::config::SummarizeConfig;

pub fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let config = SummarizeConfig::from_matches(matches)?;
    summarize(&config)?;
    Ok(())
}

///
/// Load the regions, open the signal track once, summarize every region
/// and write the table.
///
pub fn summarize(config: &SummarizeConfig) -> Result<SummaryTable> {
    let regions = RegionSet::try_from(config.bedfile.as_path())
        .with_context(|| format!("Failed to load BED file {}", config.bedfile.display()))?;
    info!(
        "Loaded {} on {} chromosomes from {}",
        regions,
        regions.iter_chroms().count(),
        config.bedfile.display()
    );

    let chrom_sizes = match &config.chrom_sizes {
        Some(path) => get_chrom_sizes(path)
            .with_context(|| format!("Failed to load chrom sizes {}", path.display()))?,
        None => HashMap::new(),
    };

    let mut signal = open_signal_with_chrom_sizes(&config.signal, &chrom_sizes)
        .with_context(|| format!("Failed to open signal track {}", config.signal.display()))?;

    info!(
        "Summarizing with bin size {}, bin overlap {}, {} reducer, minimum score {}",
        config.params.bin_size, config.params.bin_overlap, config.params.reducer, config.params.threshold
    );

    let bar = match config.progress {
        true => region_progress_bar(),
        false => ProgressBar::hidden(),
    };
    let table = summarize_regions_with_progress(&regions, signal.as_mut(), &config.params, bar);

    table
        .write_table(&config.outfile, config.header)
        .with_context(|| format!("Failed to write output file {}", config.outfile.display()))?;

    info!(
        "Output written to {} ({} regions, {} failed queries)",
        config.outfile.display(),
        table.len(),
        table.failures()
    );

    Ok(table)
}
