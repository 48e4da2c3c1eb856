use clap::{Arg, ArgAction, Command, value_parser};

use bedcons_signal::consts::DEFAULT_REDUCER;

pub const SUMMARIZE_CMD: &str = "summarize";

pub fn create_summarize_cli() -> Command {
    Command::new(SUMMARIZE_CMD)
        .about("Annotate each BED6 region with the mean, median and fraction of bins at or above --minscore of a signal track.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("bedfile")
                .long("bedfile")
                .required(true)
                .help("BED6 file with regions to summarize the signal over (may be gzipped)"),
        )
        .arg(
            Arg::new("bigwig")
                .long("bigwig")
                .required(true)
                .help("bigWig file with the signal (a bedGraph file is accepted too)"),
        )
        .arg(
            Arg::new("chromsizes")
                .long("chromsizes")
                .help("Chromosome sizes for a bedGraph signal; regions past the end then fail instead of getting empty bins"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .required(true)
                .help("Output table"),
        )
        .arg(
            Arg::new("minscore")
                .long("minscore")
                .value_parser(value_parser!(f64))
                .default_value("0.5")
                .help("The percentgt column is the fraction of bins with a value greater than or equal to this score"),
        )
        .arg(
            Arg::new("binsize")
                .long("binsize")
                .value_parser(value_parser!(u32))
                .default_value("50")
                .help("Bin size to summarize the signal over"),
        )
        .arg(
            Arg::new("binoverlap")
                .long("binoverlap")
                .value_parser(value_parser!(u32))
                .default_value("0")
                .help("Number of neighbouring bins added on each side of a bin"),
        )
        .arg(
            Arg::new("reducer")
                .long("reducer")
                .value_parser(["mean", "max", "min", "sum"])
                .default_value(DEFAULT_REDUCER)
                .help("How the bases of one bin are reduced to a single value"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .value_parser(value_parser!(bool))
                .num_args(0..=1)
                .default_value("true")
                .default_missing_value("true")
                .help("Print the column header line"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Do not show a progress bar"),
        )
}
