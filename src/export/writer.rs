//! EDF segment writing via the edfplus crate.

use std::path::Path;

use edfplus::{EdfWriter, SignalParam};
use tracing::debug;

use crate::edf::Recording;
use crate::error::{Error, Result};
use crate::intervals::Interval;

/// Write one segment of a recording to a new EDF file.
///
/// All channels are carried over with their original header parameters;
/// only the sample range changes. The last data record is zero-padded
/// when the segment length is not a whole number of records.
///
/// # Errors
///
/// Returns [`Error::EdfWrite`] when the file cannot be created or written.
pub fn write_segment(path: &Path, recording: &Recording, interval: Interval) -> Result<()> {
    #[allow(clippy::cast_possible_truncation)]
    let samples_per_record = recording.sample_rate.round() as i32;
    let record_len = usize::try_from(samples_per_record).unwrap_or(1).max(1);

    let mut writer = EdfWriter::create(path).map_err(|e| Error::EdfWrite {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    // Source patient identity is not carried through extraction; segments
    // are de-identified.
    writer
        .set_patient_info("X", "X", "01-JAN-2000", "X")
        .map_err(|e| Error::EdfWrite {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    for channel in &recording.channels {
        let signal = SignalParam {
            label: channel.label.clone(),
            samples_in_file: 0,
            physical_max: channel.physical_max,
            physical_min: channel.physical_min,
            digital_max: channel.digital_max,
            digital_min: channel.digital_min,
            samples_per_record,
            physical_dimension: channel.physical_dimension.clone(),
            prefilter: channel.prefilter.clone(),
            transducer: channel.transducer.clone(),
        };
        writer.add_signal(signal).map_err(|e| Error::EdfWrite {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
    }

    let n_records = interval.len().div_ceil(record_len);
    debug!(
        "writing {} record(s) of {} sample(s) to {}",
        n_records,
        record_len,
        path.display()
    );

    for r in 0..n_records {
        let rec_start = interval.start + r * record_len;
        let rec_end = (rec_start + record_len).min(interval.end);

        let record: Vec<Vec<f64>> = (0..recording.n_channels())
            .map(|ch| {
                let mut samples: Vec<f64> = (rec_start..rec_end)
                    .map(|t| recording.data[[ch, t]])
                    .collect();
                samples.resize(record_len, 0.0);
                samples
            })
            .collect();

        writer.write_samples(&record).map_err(|e| Error::EdfWrite {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
    }

    writer.finalize().map_err(|e| Error::EdfWrite {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    Ok(())
}
