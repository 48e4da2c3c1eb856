use crate::reducer::{BinAccumulator, BinReducer};
use crate::source::SignalRecord;

///
/// Number of bins of `bin_size` needed to tile `[start, end)`.
/// The last bin may be shorter than `bin_size`.
///
pub fn bin_count(start: u32, end: u32, bin_size: u32) -> usize {
    if end <= start || bin_size == 0 {
        return 0;
    }
    (end - start).div_ceil(bin_size) as usize
}

///
/// Fixed-size tiling of one query range on a chromosome.
///
/// Bin `i` nominally spans `[start + i * bin_size, start + (i + 1) * bin_size)`
/// cut at `end`. With `overlap = k` every bin is widened by `k * bin_size`
/// bases on both sides, clamped to `[0, chrom_length)`.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinLayout {
    pub start: u32,
    pub end: u32,
    pub bin_size: u32,
    pub overlap: u32,
    pub chrom_length: u32,
}

impl BinLayout {
    pub fn new(start: u32, end: u32, bin_size: u32, overlap: u32, chrom_length: u32) -> Self {
        BinLayout {
            start,
            end,
            bin_size,
            overlap,
            chrom_length,
        }
    }

    pub fn len(&self) -> usize {
        bin_count(self.start, self.end, self.bin_size)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn flank(&self) -> u64 {
        self.overlap as u64 * self.bin_size as u64
    }

    /// Bases covered by bin `i`, after widening and clamping.
    pub fn window(&self, i: usize) -> (u32, u32) {
        let flank = self.flank();
        let nominal_start = self.start as u64 + i as u64 * self.bin_size as u64;
        let nominal_end = (nominal_start + self.bin_size as u64).min(self.end as u64);

        let start = nominal_start.saturating_sub(flank);
        let end = (nominal_end + flank).min(self.chrom_length.max(self.end) as u64);
        (start as u32, end as u32)
    }

    /// The range that has to be read from the signal track to fill every bin.
    pub fn span(&self) -> (u32, u32) {
        if self.is_empty() {
            return (self.start, self.end);
        }
        let (first, _) = self.window(0);
        let (_, last) = self.window(self.len() - 1);
        (first, last)
    }

    ///
    /// Reduce the records of the signal track into one value per bin.
    ///
    /// Records are expected to be the piecewise-constant runs of the
    /// track; their order does not matter.
    ///
    pub fn reduce(&self, records: &[SignalRecord], reducer: BinReducer, fill: f64) -> Vec<f64> {
        let n = self.len();
        let mut bins = vec![BinAccumulator::new(); n];
        if n == 0 {
            return Vec::new();
        }

        let bin_size = self.bin_size as i64;
        let flank = self.flank() as i64;
        let origin = self.start as i64;

        for record in records {
            if record.end <= record.start {
                continue;
            }
            // candidate bins, widened by one on each side; the exact
            // intersection below decides
            let lo = (record.start as i64 - origin - flank).div_euclid(bin_size) - 1;
            let hi = (record.end as i64 - origin + flank).div_euclid(bin_size) + 1;
            let lo = lo.max(0) as usize;
            let hi = (hi.min(n as i64 - 1)).max(-1);
            if hi < 0 {
                continue;
            }

            for (i, bin) in bins.iter_mut().enumerate().take(hi as usize + 1).skip(lo) {
                let (ws, we) = self.window(i);
                let s = ws.max(record.start);
                let e = we.min(record.end);
                if e > s {
                    bin.add(record.value, e - s);
                }
            }
        }

        bins.iter().map(|acc| reducer.reduce(acc, fill)).collect()
    }
}
