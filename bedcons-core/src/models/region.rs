use std::fmt::{self, Display};

use super::strand::Strand;

///
/// Region struct, one BED6 line: a named, stranded, half-open
/// `[start, end)` interval.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub name: String,
    pub score: i64,
    pub strand: Strand,
}

impl Region {
    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Get the BED6 line of the Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.chr, self.start, self.end, self.name, self.score, self.strand
        )
    }

    /// `chr:start-end`, used when reporting on a region.
    pub fn locus(&self) -> String {
        format!("{}:{}-{}", self.chr, self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
