use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("train_ratio + test_ratio must equal 1.0, got {sum}")]
    SplitRatio { sum: f64 },

    #[error("spectrogram shape {rows}x{cols} does not match the {expected_rows}x{expected_cols} derived from the audio framing")]
    ShapeMismatch {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        expected_cols: usize,
    },

    #[error("clip_length_samples is {actual} but sample_rate_hz and clip_duration_ms imply {expected}")]
    ClipLengthMismatch { actual: usize, expected: usize },

    #[error("{labels} labels declared for {classes} classes")]
    LabelCount { labels: usize, classes: usize },

    #[error("{field} must not be empty")]
    EmptyPath { field: &'static str },

    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}
