//! Error types for edfslice.

/// Result type alias for edfslice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for edfslice.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Extraction parameters are invalid.
    #[error("invalid parameters: {message}")]
    InvalidParameters {
        /// Description of the parameter failure.
        message: String,
    },

    /// Recording cannot be processed.
    #[error("invalid recording: {reason}")]
    InvalidRecording {
        /// Description of why the recording is unusable.
        reason: String,
    },

    /// No valid EDF files found.
    #[error("no valid EDF files found in the provided paths")]
    NoInputFiles,

    /// Failed to read an EDF file.
    #[error("failed to read EDF file '{path}'")]
    EdfRead {
        /// Path to the EDF file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to write an EDF file.
    #[error("failed to write EDF file '{path}'")]
    EdfWrite {
        /// Path to the EDF file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to resample signal data.
    #[error("failed to resample signal: {reason}")]
    Resample {
        /// Description of the resampling failure.
        reason: String,
    },

    /// Failed to design or apply the band-pass filter.
    #[error("failed to filter signal: {reason}")]
    Filter {
        /// Description of the filtering failure.
        reason: String,
    },

    /// Failed to create output directory.
    #[error("failed to create output directory '{path}'")]
    OutputDirCreateFailed {
        /// Path to the output directory.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the interval report.
    #[error("failed to write interval report '{path}'")]
    ReportWrite {
        /// Path to the report file.
        path: std::path::PathBuf,
        /// Underlying CSV error.
        #[source]
        source: csv::Error,
    },
}
