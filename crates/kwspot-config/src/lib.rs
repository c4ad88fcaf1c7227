pub mod config;
pub mod constants;
pub mod dataset;
pub mod error;
pub mod settings;

// Core exports - grouped and sorted alphabetically
pub use config::{
    AudioConfig, AugmentConfig, KwsConfig, OptimizerConfig, SpectrogramShape, TrainingConfig,
};
pub use constants::{
    CLIP_LENGTH_SAMPLES, FEATURE_BIN_COUNT, SAMPLE_RATE_HZ, SPECTROGRAM_COLS, SPECTROGRAM_ROWS,
};
pub use dataset::{DatasetConfig, DatasetSource, SplitConfig};
pub use error::ConfigError;
