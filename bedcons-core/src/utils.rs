use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Parse a chrom sizes file (`name<whitespace>length` per line).
///
/// Blank lines and `#` comments are skipped.
///
pub fn read_chrom_sizes<R: BufRead>(reader: R) -> Result<HashMap<String, u32>> {
    let mut chrom_sizes: HashMap<String, u32> = HashMap::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() || line.starts_with('#') {
            continue;
        }
        if fields.len() < 2 {
            bail!("chrom sizes line {} has fewer than 2 fields: {:?}", idx + 1, line);
        }
        let length: u32 = fields[1].parse().with_context(|| {
            format!("chrom sizes line {}: cannot parse length {:?}", idx + 1, fields[1])
        })?;
        chrom_sizes.insert(fields[0].to_string(), length);
    }

    Ok(chrom_sizes)
}

///
/// Read a chrom sizes file from disk, optionally gzipped.
///
pub fn get_chrom_sizes<T: AsRef<Path>>(path: T) -> Result<HashMap<String, u32>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    read_chrom_sizes(reader).with_context(|| format!("Failed to read chrom sizes: {:?}", path))
}

///
/// Strip a trailing `.gz` and return the remaining extension, lowercased.
/// `signal.bedGraph.gz` gives `bedgraph`.
///
pub fn inner_extension(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let base = file_name.strip_suffix(".gz").unwrap_or(file_name);
    Path::new(base)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
