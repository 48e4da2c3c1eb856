use std::collections::HashMap;
use std::path::Path;

use bigtools::BigWigRead;
use bigtools::utils::reopen::ReopenableFile;
use log::info;

use crate::errors::SignalError;
use crate::source::{SignalRecord, SignalSource};

///
/// A bigWig file opened once and queried by range.
///
pub struct BigWigSource {
    reader: BigWigRead<ReopenableFile>,
    chrom_sizes: HashMap<String, u32>,
}

impl BigWigSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SignalError> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().into_owned();

        let reader = BigWigRead::open_file(&path_str).map_err(|e| SignalError::Open {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let chrom_sizes: HashMap<String, u32> = reader
            .chroms()
            .iter()
            .map(|c| (c.name.clone(), c.length))
            .collect();

        info!(
            "Opened bigWig {} with {} chromosomes",
            path.display(),
            chrom_sizes.len()
        );

        Ok(BigWigSource {
            reader,
            chrom_sizes,
        })
    }
}

impl SignalSource for BigWigSource {
    fn chrom_length(&self, chrom: &str) -> Option<u32> {
        self.chrom_sizes.get(chrom).copied()
    }

    fn records(
        &mut self,
        chrom: &str,
        start: u32,
        end: u32,
    ) -> Result<Vec<SignalRecord>, SignalError> {
        let values = self
            .reader
            .get_interval(chrom, start, end)
            .map_err(|e| SignalError::Read(format!("{}:{}-{}: {}", chrom, start, end, e)))?;

        let mut records = Vec::new();
        for value in values {
            let value = value.map_err(|e| SignalError::Read(e.to_string()))?;
            records.push(SignalRecord {
                start: value.start,
                end: value.end,
                value: value.value as f64,
            });
        }
        Ok(records)
    }
}
