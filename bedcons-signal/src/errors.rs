use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Chromosome not found in signal track: {0}")]
    UnknownChromosome(String),

    #[error("Range {chrom}:{start}-{end} is outside of the signal track (chromosome length {length})")]
    OutOfBounds {
        chrom: String,
        start: u32,
        end: u32,
        length: u32,
    },

    #[error("Bin size must be greater than 0")]
    InvalidBinSize,

    #[error("Unknown bin reducer: {0}. Expected one of mean, max, min, sum")]
    UnknownReducer(String),

    #[error("Can't open signal track {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Error reading signal track: {0}")]
    Read(String),

    #[error("Error parsing signal track: {0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Conditions raised by the vector statistics in [crate::statistics].
#[derive(Error, Debug, PartialEq)]
pub enum StatisticsError {
    #[error("Input must not be empty")]
    EmptyInput,
}
