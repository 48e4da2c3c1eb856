use std::collections::HashSet;
use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::errors::RegionSetError;
use crate::models::{Region, Strand};
use crate::utils::get_dynamic_reader;

/// Number of leading columns every BED6 line must carry.
pub const BED6_FIELDS: usize = 6;

///
/// RegionSet struct, the ordered representation of a BED6 file.
///
/// Regions are kept in file order; duplicates are preserved.
///
#[derive(Clone, Debug, Default)]
pub struct RegionSet {
    pub regions: Vec<Region>,
    pub header: Option<String>,
    pub path: Option<PathBuf>,
}

pub struct RegionSetIterator<'a> {
    region_set: &'a RegionSet,
    index: usize,
}

fn is_header_line(line: &str, first_field: &str) -> bool {
    first_field == "track" || first_field == "browser" || line.starts_with('#')
}

///
/// A leading column header such as `chrom start end name score strand`.
///
/// Only literal column names qualify, a data line with a bad start
/// coordinate is not a header.
///
fn is_column_header(fields: &[&str]) -> bool {
    fn named(field: &str, names: &[&str]) -> bool {
        names.iter().any(|n| field.eq_ignore_ascii_case(n))
    }

    match fields {
        [_, start, ..] if named(*start, &["start", "chromStart"]) => true,
        [chrom, start, end, ..] => {
            named(*chrom, &["chrom", "chr"])
                && start.parse::<u32>().is_err()
                && end.parse::<u32>().is_err()
        }
        _ => false,
    }
}

///
/// Parse the whitespace separated fields of one BED6 line.
///
/// Coordinates must parse, the score falls back to `0`.
///
fn parse_bed6_fields(fields: &[&str], line_number: usize) -> Result<Region, RegionSetError> {
    if fields.len() < BED6_FIELDS {
        return Err(RegionSetError::RegionParseError(format!(
            "line {}: BED file must have at least {} columns, found {}",
            line_number,
            BED6_FIELDS,
            fields.len()
        )));
    }

    let start: u32 = fields[1].parse().map_err(|_| {
        RegionSetError::RegionParseError(format!(
            "line {}: error in parsing start position: {:?}",
            line_number, fields[1]
        ))
    })?;
    let end: u32 = fields[2].parse().map_err(|_| {
        RegionSetError::RegionParseError(format!(
            "line {}: error in parsing end position: {:?}",
            line_number, fields[2]
        ))
    })?;
    if end < start {
        return Err(RegionSetError::RegionParseError(format!(
            "line {}: end ({}) is smaller than start ({})",
            line_number, end, start
        )));
    }

    let score = match fields[4].parse::<i64>() {
        Ok(score) => score,
        Err(_) => {
            debug!(
                "line {}: score {:?} is not an integer, using 0",
                line_number, fields[4]
            );
            0
        }
    };

    Ok(Region {
        chr: fields[0].to_owned(),
        start,
        end,
        name: fields[3].to_owned(),
        score,
        strand: Strand::from_field(fields[5]),
    })
}

impl RegionSet {
    ///
    /// Read a [RegionSet] from any buffered reader of BED6 text.
    ///
    /// Header lines (`track`, `browser`, `#...`) and a leading column
    /// header are kept in `header`. Blank lines are skipped.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RegionSetError> {
        let mut regions: Vec<Region> = Vec::new();
        let mut header: String = String::new();
        let mut first_line: bool = true;

        for (idx, line) in reader.lines().enumerate() {
            let string_line = line?;
            let fields: Vec<&str> = string_line.split_whitespace().collect();

            if fields.is_empty() {
                continue;
            }

            if is_header_line(&string_line, fields[0]) {
                if !header.is_empty() {
                    header.push('\n');
                }
                header.push_str(&string_line);
                first_line = false;
                continue;
            }

            // Handling column headers like `chrom start end name ...` without #
            if first_line {
                first_line = false;
                if is_column_header(&fields) {
                    header.push_str(&string_line);
                    continue;
                }
            }

            regions.push(parse_bed6_fields(&fields, idx + 1)?);
        }

        Ok(RegionSet {
            regions,
            header: match header.is_empty() {
                true => None,
                false => Some(header),
            },
            path: None,
        })
    }

    ///
    /// Iterate unique chromosomes in order of first appearance
    ///
    pub fn iter_chroms(&self) -> impl Iterator<Item = &String> {
        let mut seen: HashSet<&String> = HashSet::new();
        self.regions
            .iter()
            .map(|r| &r.chr)
            .filter(move |chr| seen.insert(*chr))
    }

    ///
    /// Get number of regions in RegionSet
    ///
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    ///
    /// Is regionSet empty?
    ///
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl TryFrom<&Path> for RegionSet {
    type Error = anyhow::Error;

    ///
    /// Create a new [RegionSet] from a BED6 file.
    ///
    /// # Arguments:
    /// - value: path to bed file on disk, optionally gzipped.
    fn try_from(value: &Path) -> Result<Self> {
        if !value.is_file() {
            return Err(RegionSetError::FileReadError(value.display().to_string()).into());
        }

        let reader = get_dynamic_reader(value)?;
        let mut rs = RegionSet::from_reader(reader)
            .with_context(|| format!("Failed to parse BED file: {}", value.display()))?;
        rs.path = Some(value.to_owned());

        Ok(rs)
    }
}

impl TryFrom<&str> for RegionSet {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        RegionSet::try_from(Path::new(value))
    }
}

impl TryFrom<String> for RegionSet {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        RegionSet::try_from(Path::new(&value))
    }
}

impl TryFrom<PathBuf> for RegionSet {
    type Error = anyhow::Error;

    fn try_from(value: PathBuf) -> Result<Self> {
        RegionSet::try_from(value.as_path())
    }
}

impl From<Vec<Region>> for RegionSet {
    fn from(regions: Vec<Region>) -> Self {
        RegionSet {
            regions,
            header: None,
            path: None,
        }
    }
}

impl<'a> Iterator for RegionSetIterator<'a> {
    type Item = &'a Region;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.region_set.regions.len() {
            let region = &self.region_set.regions[self.index];
            self.index += 1;
            Some(region)
        } else {
            None
        }
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a Region;
    type IntoIter = RegionSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        RegionSetIterator {
            region_set: self,
            index: 0,
        }
    }
}

impl Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionSet with {} regions.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data")
            .join(file_name)
    }

    fn parse(text: &str) -> Result<RegionSet, RegionSetError> {
        RegionSet::from_reader(Cursor::new(text))
    }

    #[rstest]
    fn test_open_from_path() {
        let file_path = get_test_path("peaks.bed");
        let region_set = RegionSet::try_from(file_path.as_path()).unwrap();

        assert_eq!(region_set.len(), 5);
        assert_eq!(region_set.path.unwrap(), file_path);
        assert!(region_set.header.unwrap().starts_with("track"));
    }

    #[rstest]
    fn test_open_from_string() {
        let file_path = get_test_path("peaks.bed");
        assert!(RegionSet::try_from(file_path.to_str().unwrap()).is_ok());
    }

    #[rstest]
    fn test_open_missing_file() {
        let result = RegionSet::try_from("no/such/file.bed");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_keeps_input_order_and_duplicates() {
        let rs = parse("chr2\t5\t10\tb\t1\t+\nchr1\t0\t5\ta\t2\t-\nchr2\t5\t10\tb\t1\t+\n").unwrap();

        let names: Vec<&str> = rs.regions.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "b"]);
        assert_eq!(rs.iter_chroms().collect::<Vec<_>>(), vec!["chr2", "chr1"]);
    }

    #[rstest]
    fn test_whitespace_separated_fields() {
        let rs = parse("chr1  100 200   peakA 800 +\n").unwrap();
        assert_eq!(rs.regions[0].as_string(), "chr1\t100\t200\tpeakA\t800\t+");
    }

    #[rstest]
    fn test_skips_track_browser_comment_and_blank_lines() {
        let rs = parse("track name=x\nbrowser position chr1\n# note\n\nchr1\t1\t2\tn\t0\t.\n").unwrap();

        assert_eq!(rs.len(), 1);
        assert_eq!(
            rs.header.unwrap(),
            "track name=x\nbrowser position chr1\n# note"
        );
    }

    #[rstest]
    #[case("chrom\tstart\tend\tname\tscore\tstrand\n")]
    #[case("chr\tchromStart\tchromEnd\tname\tscore\tstrand\n")]
    #[case("seqname\tstart\tend\tid\tscore\tstrand\n")]
    fn test_column_header_line(#[case] column_header: &str) {
        let rs = parse(&format!("{}chr1\t1\t2\tn\t0\t.\n", column_header)).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs.header.unwrap(), column_header.trim_end());
    }

    #[rstest]
    #[case("chr1\t1e3\t2000\tpeakA\t800\t+\n")]
    #[case("chr1\t-5\t2000\tpeakA\t800\t+\n")]
    #[case("chr1\t4294967296\t4294967300\tpeakA\t800\t+\n")]
    #[case("chr1\t100\t200\n")]
    fn test_malformed_first_line_is_fatal(#[case] first: &str) {
        let result = parse(&format!("{}chr1\t1\t2\tn\t0\t+\n", first));
        let err = result.unwrap_err();
        assert!(matches!(err, RegionSetError::RegionParseError(_)));
        assert!(err.to_string().contains("line 1"));
    }

    #[rstest]
    fn test_unparsable_score_defaults_to_zero() {
        let rs = parse("chr1\t1\t2\tn\tNA\t+\n").unwrap();
        assert_eq!(rs.regions[0].score, 0);
    }

    #[rstest]
    fn test_unknown_and_literal_strands() {
        let rs = parse("chr1\t1\t2\ta\t0\t.\nchr1\t1\t2\tb\t0\t*\n").unwrap();
        assert_eq!(rs.regions[0].strand, Strand::Unknown);
        assert_eq!(rs.regions[1].strand, Strand::Other('*'));
    }

    #[rstest]
    #[case("chr1\t1\t2\tn\t0\n")]
    #[case("chr1\t1\t2\n")]
    #[case("chr1\t1\tx\tn\t0\t+\n")]
    #[case("chr1\t-5\t2\tn\t0\t+\n")]
    #[case("chr1\t20\t10\tn\t0\t+\n")]
    fn test_malformed_lines_are_fatal(#[case] text: &str) {
        let first_ok = format!("chr1\t0\t1\tok\t0\t+\n{}", text);
        let result = parse(&first_ok);
        assert!(matches!(result, Err(RegionSetError::RegionParseError(_))));
    }

    #[rstest]
    fn test_error_names_line_number() {
        let err = parse("chr1\t0\t1\tok\t0\t+\nchr1\t1\t2\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[rstest]
    fn test_zero_length_region_is_valid() {
        let rs = parse("chr1\t0\t0\tempty\t0\t+\n").unwrap();
        assert_eq!(rs.regions[0].width(), 0);
    }

    #[rstest]
    fn test_empty_input() {
        let rs = parse("").unwrap();
        assert!(rs.is_empty());
        assert_eq!(rs.to_string(), "RegionSet with 0 regions.");
    }

    #[rstest]
    fn test_iterate() {
        let rs = parse("chr1\t1\t2\ta\t0\t+\nchr1\t3\t4\tb\t0\t+\n").unwrap();
        assert_eq!((&rs).into_iter().count(), 2);
    }
}
