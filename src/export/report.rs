//! Interval report writing.
//!
//! Optional CSV listing of every detected bad interval (with its source
//! tag) and every clean interval, for auditing what the extractor
//! excluded and why.

use std::path::Path;

use crate::error::{Error, Result};
use crate::intervals::{Interval, TaggedInterval};

/// Write the interval report as CSV.
///
/// # Errors
///
/// Returns [`Error::ReportWrite`] when the file cannot be written.
pub fn write_report(
    path: &Path,
    bad: &[TaggedInterval],
    clean: &[Interval],
    sample_rate: f64,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    let map_err = |e: csv::Error| Error::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    };

    writer
        .write_record(["kind", "source", "start_sample", "end_sample", "start_secs", "end_secs"])
        .map_err(map_err)?;

    for t in bad {
        writer
            .write_record(row("bad", &t.source.to_string(), t.interval, sample_rate))
            .map_err(map_err)?;
    }
    for &iv in clean {
        writer
            .write_record(row("clean", "", iv, sample_rate))
            .map_err(map_err)?;
    }

    writer.flush().map_err(|e| Error::ReportWrite {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    Ok(())
}

fn row(kind: &str, source: &str, iv: Interval, sample_rate: f64) -> [String; 6] {
    #[allow(clippy::cast_precision_loss)]
    let to_secs = |s: usize| format!("{:.3}", s as f64 / sample_rate);
    [
        kind.to_string(),
        source.to_string(),
        iv.start.to_string(),
        iv.end.to_string(),
        to_secs(iv.start),
        to_secs(iv.end),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::intervals::IntervalSource;

    #[test]
    fn test_report_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.intervals.csv");

        let bad = vec![TaggedInterval::new(
            Interval::new(0, 500).unwrap(),
            IntervalSource::LeadingExclusion,
        )];
        let clean = vec![Interval::new(500, 1000).unwrap()];

        write_report(&path, &bad, &clean, 500.0).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("bad,leading-exclusion,0,500,0.000,1.000"));
        assert!(lines[2].starts_with("clean,,500,1000,1.000,2.000"));
    }
}
