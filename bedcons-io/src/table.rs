use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use bedcons_signal::SummaryTable;

use crate::consts::{FLOAT_PRECISION, TABLE_COLUMNS};
use crate::error::{Result, TableWriteError};

pub trait TableWrite {
    ///
    /// Render the table into one tab-separated string.
    ///
    /// # Arguments
    /// - header: start with the column header line
    fn render_table(&self, header: bool) -> String;

    ///
    /// Write the table to any writer in one call.
    ///
    fn write_to<W: Write>(&self, writer: &mut W, header: bool) -> Result<()> {
        writer.write_all(self.render_table(header).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    ///
    /// Write the table to disk. The file only appears at `path` once
    /// it has been written completely.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - header: start with the column header line
    fn write_table<T: AsRef<Path>>(&self, path: T, header: bool) -> Result<()>;
}

impl TableWrite for SummaryTable {
    fn render_table(&self, header: bool) -> String {
        let mut buffer = String::new();

        if header {
            buffer.push_str(&TABLE_COLUMNS.join("\t"));
            buffer.push('\n');
        }

        for (region, outcome) in self.iter() {
            let summary = outcome.summary();
            // writing into a String cannot fail
            let _ = writeln!(
                buffer,
                "{}\t{:.prec$}\t{:.prec$}\t{:.prec$}",
                region.as_string(),
                summary.mean,
                summary.median,
                summary.fraction_above,
                prec = FLOAT_PRECISION
            );
        }

        buffer
    }

    fn write_table<T: AsRef<Path>>(&self, path: T, header: bool) -> Result<()> {
        let path = path.as_ref();

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut file = NamedTempFile::new_in(parent)?;
        self.write_to(&mut file, header)?;
        file.persist(path).map_err(|e| TableWriteError::Persist {
            path: path.display().to_string(),
            source: e.error,
        })?;

        info!("Wrote {} rows to {}", self.len(), path.display());
        Ok(())
    }
}
