use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use log::info;

use bedcons_core::utils::get_dynamic_reader;

use crate::errors::SignalError;
use crate::source::memory::InMemorySignal;
use crate::source::{SignalRecord, SignalSource};

///
/// A bedGraph file (`chrom start end value`) loaded fully into memory.
///
/// Chromosomes are open-ended unless a chrom sizes map is given with
/// [BedGraphSource::with_chrom_sizes]: a region reaching past the last
/// run gets uncovered bins instead of failing.
///
#[derive(Debug, Clone)]
pub struct BedGraphSource {
    signal: InMemorySignal,
}

fn parse_error(line_number: usize, msg: &str, line: &str) -> SignalError {
    SignalError::Parse(format!("bedGraph line {}: {}: {:?}", line_number, msg, line))
}

impl BedGraphSource {
    ///
    /// Open a bedGraph file, optionally gzipped.
    ///
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SignalError> {
        let path = path.as_ref();
        let reader = get_dynamic_reader(path).map_err(|e| SignalError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let source = Self::from_reader(reader)?;
        info!(
            "Loaded {} bedGraph records from {}",
            source.signal.n_records(),
            path.display()
        );
        Ok(source)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, SignalError> {
        let mut signal = InMemorySignal::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty()
                || fields[0] == "track"
                || fields[0] == "browser"
                || line.starts_with('#')
            {
                continue;
            }
            if fields.len() < 4 {
                return Err(parse_error(idx + 1, "expected 4 columns", &line));
            }

            let start: u32 = fields[1]
                .parse()
                .map_err(|_| parse_error(idx + 1, "invalid start", &line))?;
            let end: u32 = fields[2]
                .parse()
                .map_err(|_| parse_error(idx + 1, "invalid end", &line))?;
            let value: f64 = fields[3]
                .parse()
                .map_err(|_| parse_error(idx + 1, "invalid value", &line))?;

            signal.push(fields[0], start, end, value);
        }

        Ok(BedGraphSource { signal })
    }

    pub fn with_chrom_sizes(mut self, chrom_sizes: &HashMap<String, u32>) -> Self {
        for (chrom, length) in chrom_sizes {
            self.signal.set_chrom_length(chrom, *length);
        }
        self
    }
}

impl SignalSource for BedGraphSource {
    fn chrom_length(&self, chrom: &str) -> Option<u32> {
        self.signal.chrom_length(chrom)
    }

    fn records(
        &mut self,
        chrom: &str,
        start: u32,
        end: u32,
    ) -> Result<Vec<SignalRecord>, SignalError> {
        self.signal.records(chrom, start, end)
    }
}
