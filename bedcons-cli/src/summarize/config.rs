use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;

use bedcons_signal::{BinReducer, QueryParams};

///
/// Everything `summarize` needs, taken from the command line once and
/// passed down explicitly.
///
#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    pub bedfile: PathBuf,
    pub signal: PathBuf,
    pub chrom_sizes: Option<PathBuf>,
    pub outfile: PathBuf,
    pub params: QueryParams,
    pub header: bool,
    pub progress: bool,
}

fn required_path(matches: &ArgMatches, name: &str) -> Result<PathBuf> {
    let value = matches
        .get_one::<String>(name)
        .with_context(|| format!("--{} is required", name))?;
    if value.trim().is_empty() {
        bail!("--{} must not be empty", name);
    }
    Ok(PathBuf::from(value))
}

impl SummarizeConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let bedfile = required_path(matches, "bedfile")?;
        let signal = required_path(matches, "bigwig")?;
        let outfile = required_path(matches, "outfile")?;
        let chrom_sizes = match matches.get_one::<String>("chromsizes") {
            Some(_) => Some(required_path(matches, "chromsizes")?),
            None => None,
        };

        let threshold = *matches
            .get_one::<f64>("minscore")
            .context("--minscore is required")?;
        if !threshold.is_finite() {
            bail!("--minscore must be a finite number, got {}", threshold);
        }

        let bin_size = *matches
            .get_one::<u32>("binsize")
            .context("--binsize is required")?;
        let bin_overlap = *matches
            .get_one::<u32>("binoverlap")
            .context("--binoverlap is required")?;

        let reducer = matches
            .get_one::<String>("reducer")
            .context("--reducer is required")?;
        let reducer = BinReducer::from_str(reducer)?;

        let params = QueryParams::new(bin_size, bin_overlap, reducer, threshold)
            .context("--binsize must be greater than 0")?;

        let header = matches.get_one::<bool>("header").copied().unwrap_or(true);
        let progress = !matches.get_flag("no-progress");

        Ok(SummarizeConfig {
            bedfile,
            signal,
            chrom_sizes,
            outfile,
            params,
            header,
            progress,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::summarize::cli::create_summarize_cli;

    fn config_from(args: &[&str]) -> Result<SummarizeConfig> {
        let mut argv = vec!["summarize"];
        argv.extend_from_slice(args);
        let matches = create_summarize_cli().try_get_matches_from(argv)?;
        SummarizeConfig::from_matches(&matches)
    }

    const PATHS: [&str; 6] = [
        "--bedfile", "peaks.bed", "--bigwig", "cons.bw", "--outfile", "out.tsv",
    ];

    #[rstest]
    fn test_defaults() {
        let config = config_from(&PATHS).unwrap();

        assert_eq!(config.bedfile, PathBuf::from("peaks.bed"));
        assert_eq!(config.signal, PathBuf::from("cons.bw"));
        assert_eq!(config.outfile, PathBuf::from("out.tsv"));
        assert_eq!(config.chrom_sizes, None);
        assert_eq!(config.params.bin_size, 50);
        assert_eq!(config.params.bin_overlap, 0);
        assert_eq!(config.params.threshold, 0.5);
        assert_eq!(config.params.reducer, BinReducer::Mean);
        assert!(config.header);
        assert!(config.progress);
    }

    #[rstest]
    fn test_overrides() {
        let mut args = PATHS.to_vec();
        args.extend([
            "--minscore", "0.9", "--binsize", "10", "--binoverlap", "1", "--reducer", "max",
            "--header=false", "--no-progress", "--chromsizes", "hg38.chrom.sizes",
        ]);
        let config = config_from(&args).unwrap();

        assert_eq!(config.chrom_sizes, Some(PathBuf::from("hg38.chrom.sizes")));

        assert_eq!(config.params.threshold, 0.9);
        assert_eq!(config.params.bin_size, 10);
        assert_eq!(config.params.bin_overlap, 1);
        assert_eq!(config.params.reducer, BinReducer::Max);
        assert!(!config.header);
        assert!(!config.progress);
    }

    #[rstest]
    #[case(&["--bigwig", "cons.bw", "--outfile", "out.tsv"])]
    #[case(&["--bedfile", "peaks.bed", "--outfile", "out.tsv"])]
    #[case(&["--bedfile", "peaks.bed", "--bigwig", "cons.bw"])]
    fn test_missing_paths(#[case] args: &[&str]) {
        assert!(config_from(args).is_err());
    }

    #[rstest]
    fn test_empty_path() {
        let result = config_from(&["--bedfile", "", "--bigwig", "cons.bw", "--outfile", "o"]);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("--binsize", "0")]
    #[case("--binsize", "-5")]
    #[case("--minscore", "NaN")]
    #[case("--minscore", "abc")]
    #[case("--reducer", "median")]
    #[case("--chromsizes", "")]
    fn test_invalid_values(#[case] flag: &str, #[case] value: &str) {
        let mut args = PATHS.to_vec();
        args.extend([flag, value]);
        assert!(config_from(&args).is_err());
    }
}
