use std::collections::HashMap;

use crate::errors::SignalError;
use crate::source::{SignalRecord, SignalSource};

///
/// A signal track held in memory as per-chromosome lists of runs.
///
/// Runs of one chromosome are expected not to overlap each other, as in
/// a bedGraph file. They may be pushed in any order.
///
/// A chromosome without a declared length is open-ended: bases past its
/// last run are uncovered, never out of bounds.
///
#[derive(Debug, Clone, Default)]
pub struct InMemorySignal {
    records: HashMap<String, Vec<SignalRecord>>,
    chrom_lengths: HashMap<String, u32>,
    sorted: bool,
}

impl InMemorySignal {
    pub fn new() -> Self {
        InMemorySignal {
            records: HashMap::new(),
            chrom_lengths: HashMap::new(),
            sorted: true,
        }
    }

    pub fn push(&mut self, chrom: &str, start: u32, end: u32, value: f64) {
        self.records
            .entry(chrom.to_string())
            .or_default()
            .push(SignalRecord { start, end, value });
        self.sorted = false;
    }

    /// Declare the length of a chromosome, e.g. from a chrom sizes file.
    pub fn set_chrom_length(&mut self, chrom: &str, length: u32) {
        self.chrom_lengths.insert(chrom.to_string(), length);
    }

    pub fn n_records(&self) -> usize {
        self.records.values().map(|r| r.len()).sum()
    }

    fn sort(&mut self) {
        if self.sorted {
            return;
        }
        for runs in self.records.values_mut() {
            runs.sort_by_key(|r| (r.start, r.end));
        }
        self.sorted = true;
    }
}

impl SignalSource for InMemorySignal {
    fn chrom_length(&self, chrom: &str) -> Option<u32> {
        if let Some(length) = self.chrom_lengths.get(chrom) {
            return Some(*length);
        }
        self.records.get(chrom).map(|_| u32::MAX)
    }

    fn records(
        &mut self,
        chrom: &str,
        start: u32,
        end: u32,
    ) -> Result<Vec<SignalRecord>, SignalError> {
        self.sort();

        let Some(runs) = self.records.get(chrom) else {
            return Ok(Vec::new());
        };

        // non-overlapping runs sorted by start are sorted by end too
        let first = runs.partition_point(|r| r.end <= start);
        Ok(runs[first..]
            .iter()
            .take_while(|r| r.start < end)
            .copied()
            .collect())
    }
}
