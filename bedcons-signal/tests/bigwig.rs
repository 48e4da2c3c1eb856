use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use bigtools::beddata::BedParserStreamingIterator;
use bigtools::{BigWigWrite, InputSortType};
use pretty_assertions::assert_eq;
use rstest::*;
use tokio::runtime;

use bedcons_core::models::RegionSet;
use bedcons_signal::{
    BigWigSource, QueryParams, RegionOutcome, SignalError, SignalSource, open_signal,
    summarize_regions,
};

fn write_bigwig(dir: &Path, bedgraph: &str, chrom_sizes: HashMap<String, u32>) -> PathBuf {
    let bedgraph_path = dir.join("signal.bedGraph");
    let mut file = File::create(&bedgraph_path).unwrap();
    file.write_all(bedgraph.as_bytes()).unwrap();
    drop(file);

    let bigwig_path = dir.join("signal.bw");
    let mut outb = BigWigWrite::create_file(bigwig_path.to_str().unwrap().to_string(), chrom_sizes)
        .unwrap();
    outb.options.channel_size = 0;
    let runtime = runtime::Builder::new_current_thread().build().unwrap();

    let allow_out_of_order_chroms = !matches!(outb.options.input_sort_type, InputSortType::ALL);
    let mut reader = BufReader::new(File::open(&bedgraph_path).unwrap());
    let vals = BedParserStreamingIterator::from_bedgraph_file(&mut reader, allow_out_of_order_chroms);
    outb.write(vals, runtime).unwrap();

    bigwig_path
}

#[fixture]
fn bigwig_dir() -> tempfile::TempDir {
    let tempdir = tempfile::tempdir().unwrap();
    write_bigwig(
        tempdir.path(),
        "chr1\t100\t200\t1\nchr1\t300\t400\t0.25\nchr2\t0\t10\t1\n",
        HashMap::from([("chr1".to_string(), 1000), ("chr2".to_string(), 500)]),
    );
    tempdir
}

#[rstest]
fn test_bigwig_chrom_sizes(bigwig_dir: tempfile::TempDir) {
    let source = BigWigSource::open(bigwig_dir.path().join("signal.bw")).unwrap();

    assert_eq!(source.chrom_length("chr1"), Some(1000));
    assert_eq!(source.chrom_length("chr2"), Some(500));
    assert_eq!(source.chrom_length("chr3"), None);
}

#[rstest]
fn test_bigwig_query_bins(bigwig_dir: tempfile::TempDir) {
    let mut source = BigWigSource::open(bigwig_dir.path().join("signal.bw")).unwrap();
    let params = QueryParams::default();

    assert_eq!(source.query_bins("chr1", 100, 200, &params).unwrap(), vec![1.0, 1.0]);

    let bins = source.query_bins("chr1", 150, 350, &params).unwrap();
    assert_eq!(bins[0], 1.0);
    assert!(bins[1].is_nan());
    assert!(bins[2].is_nan());
    assert_eq!(bins[3], 0.25);
}

#[rstest]
fn test_bigwig_errors(bigwig_dir: tempfile::TempDir) {
    let mut source = open_signal(bigwig_dir.path().join("signal.bw")).unwrap();
    let params = QueryParams::default();

    assert!(matches!(
        source.query_bins("chrX", 0, 10, &params),
        Err(SignalError::UnknownChromosome(_))
    ));
    assert!(matches!(
        source.query_bins("chr2", 400, 600, &params),
        Err(SignalError::OutOfBounds { .. })
    ));

    // the last base of chr2 is still in bounds
    let bins = source.query_bins("chr2", 450, 500, &params).unwrap();
    assert_eq!(bins.len(), 1);
    assert!(bins[0].is_nan());
}

#[rstest]
fn test_bigwig_summarize(bigwig_dir: tempfile::TempDir) {
    let bed = "chr1  100  200  peakA  800  +\nchrX\t0\t10\tnowhere\t1\t-\nchr1\t300\t400\tpeakB\t5\t.\n";
    let regions = RegionSet::from_reader(bed.as_bytes()).unwrap();
    let mut source = open_signal(bigwig_dir.path().join("signal.bw")).unwrap();

    let table = summarize_regions(&regions, source.as_mut(), &QueryParams::default());

    assert_eq!(table.len(), 3);
    let peak_a = table.rows[0].1.summary();
    assert_eq!((peak_a.mean, peak_a.median, peak_a.fraction_above), (1.0, 1.0, 1.0));
    assert!(matches!(table.rows[1].1, RegionOutcome::Failed(_)));
    let peak_b = table.rows[2].1.summary();
    assert_eq!((peak_b.mean, peak_b.median, peak_b.fraction_above), (0.25, 0.25, 0.0));
}

#[rstest]
fn test_open_missing_bigwig() {
    assert!(matches!(
        BigWigSource::open("no/such/file.bw"),
        Err(SignalError::Open { .. })
    ));
}
