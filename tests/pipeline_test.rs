//! End-to-end pipeline test on a synthetic EDF recording.

use std::f64::consts::PI;
use std::path::Path;

use edfplus::{EdfReader, EdfWriter, SignalParam};
use edfslice::config::Config;
use edfslice::pipeline::process_file;

const SAMPLE_RATE: usize = 256;
const DURATION_SECS: usize = 60;

fn eeg_signal(label: &str) -> SignalParam {
    SignalParam {
        label: label.to_string(),
        samples_in_file: 0,
        physical_max: 200.0,
        physical_min: -200.0,
        digital_max: 32767,
        digital_min: -32768,
        samples_per_record: SAMPLE_RATE as i32,
        physical_dimension: "uV".to_string(),
        prefilter: String::new(),
        transducer: "AgAgCl".to_string(),
    }
}

/// Write a 60s two-channel recording with a photic stimulation run
/// annotated at [40, 50) seconds.
fn write_synthetic_edf(path: &Path) {
    let mut writer = EdfWriter::create(path).expect("create EDF");
    writer
        .set_patient_info("T001", "X", "01-JAN-2000", "Synthetic")
        .expect("patient info");
    writer.add_signal(eeg_signal("EEG F3")).expect("signal");
    writer.add_signal(eeg_signal("EEG F4")).expect("signal");

    // Annotations must be added before the records that cover them.
    writer
        .add_annotation(40.0, Some(5.0), "5 Hz")
        .expect("annotation");
    writer
        .add_annotation(45.0, Some(5.0), "10 Hz")
        .expect("annotation");

    for second in 0..DURATION_SECS {
        let record: Vec<Vec<f64>> = (0..2)
            .map(|ch| {
                (0..SAMPLE_RATE)
                    .map(|i| {
                        let t = (second * SAMPLE_RATE + i) as f64 / SAMPLE_RATE as f64;
                        50.0 * (2.0 * PI * (10.0 + ch as f64) * t).sin()
                    })
                    .collect()
            })
            .collect();
        writer.write_samples(&record).expect("write record");
    }
    writer.finalize().expect("finalize");
}

fn test_config() -> Config {
    let mut config = Config::default();
    config.extraction.target_frequency = SAMPLE_RATE as f64;
    config.extraction.band_low_hz = 0.5;
    config.extraction.band_high_hz = 55.0;
    config.extraction.segment_length_secs = 2.0;
    config.extraction.segment_count = 3;
    config.detection.leading_exclusion_secs = 5.0;
    config.detection.flat_min_duration_secs = 1.0;
    config
}

#[test]
fn test_process_file_extracts_requested_segments() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("scan.edf");
    let out_dir = dir.path().join("out");
    write_synthetic_edf(&input);

    let result = process_file(&input, &out_dir, &test_config(), false).expect("process");
    assert_eq!(result.segments_written, 3);
    assert!(result.is_complete());

    // Bad time is [0, 5) and [40, 50); three 2s windows fit at 5, 7, 9.
    for n in 1..=3 {
        let path = out_dir.join(format!("scan_{n}.edf"));
        assert!(path.exists(), "missing {}", path.display());

        let reader = EdfReader::open(&path).expect("reopen segment");
        let header = reader.header();
        assert_eq!(header.signals.len(), 2);
        let duration_secs = header.file_duration as f64 / 10_000_000.0;
        assert!((duration_secs - 2.0).abs() < 1e-6, "duration {duration_secs}");
    }
    assert!(!out_dir.join("scan_4.edf").exists());
}

#[test]
fn test_process_file_partial_when_clean_time_short() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("scan.edf");
    let out_dir = dir.path().join("out");
    write_synthetic_edf(&input);

    let mut config = test_config();
    config.extraction.segment_count = 25;

    let result = process_file(&input, &out_dir, &config, false).expect("process");
    // Clean time is [5, 40) + [50, 60): 17 + 5 two-second windows.
    assert_eq!(result.segments_written, 22);
    assert!(!result.is_complete());
}

#[test]
fn test_process_file_writes_interval_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("scan.edf");
    let out_dir = dir.path().join("out");
    write_synthetic_edf(&input);

    process_file(&input, &out_dir, &test_config(), true).expect("process");

    let report = std::fs::read_to_string(out_dir.join("scan.intervals.csv")).expect("report");
    assert!(report.contains("leading-exclusion"));
    assert!(report.contains("procedure"));
    assert!(report.contains("clean"));
}

#[test]
fn test_process_file_rejects_missing_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = process_file(
        &dir.path().join("missing.edf"),
        dir.path(),
        &test_config(),
        false,
    );
    assert!(result.is_err());
}
