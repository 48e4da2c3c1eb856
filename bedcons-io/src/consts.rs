pub const TABLE_COLUMNS: [&str; 9] = [
    "chrom",
    "start",
    "end",
    "name",
    "score",
    "strand",
    "mean",
    "median",
    "percentgt",
];

/// Decimal places of the mean, median and percentgt columns.
pub const FLOAT_PRECISION: usize = 6;
