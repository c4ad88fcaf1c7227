use serde::{Deserialize, Serialize};

use super::constants::{
    BACKGROUND_FREQUENCY, BACKGROUND_VOLUME_RANGE, BATCH_SIZE, CATEGORY_LABELS,
    CLIP_DURATION_MS, CLIP_LENGTH_SAMPLES, FEATURE_BIN_COUNT, LEARNING_RATE_DECAY_EPOCH,
    NOISE_FLOOR, NUMBER_OF_CLASSES, SAMPLE_RATE_HZ, START_LEARNING_RATE, STRIDE_SIZE_MS,
    TIME_SHIFT_MS, WINDOW_SIZE_MS,
};
use super::dataset::DatasetConfig;
use super::error::ConfigError;

/// Audio framing parameters shared by training and evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub sample_rate_hz: u32,
    pub clip_duration_ms: u32,
    pub clip_length_samples: usize,
    pub window_size_ms: u32,
    pub stride_size_ms: u32,
    pub feature_bin_count: usize,
    pub noise_floor: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            clip_duration_ms: CLIP_DURATION_MS,
            clip_length_samples: CLIP_LENGTH_SAMPLES,
            window_size_ms: WINDOW_SIZE_MS,
            stride_size_ms: STRIDE_SIZE_MS,
            feature_bin_count: FEATURE_BIN_COUNT,
            noise_floor: NOISE_FLOOR,
        }
    }
}

impl AudioConfig {
    pub fn window_size_samples(&self) -> usize {
        (self.sample_rate_hz as usize * self.window_size_ms as usize) / 1000
    }

    pub fn stride_size_samples(&self) -> usize {
        (self.sample_rate_hz as usize * self.stride_size_ms as usize) / 1000
    }

    /// Number of analysis windows that fit in one clip.
    ///
    /// A clip shorter than one window yields no frames.
    pub fn frame_count(&self) -> usize {
        if self.stride_size_ms == 0 || self.clip_duration_ms < self.window_size_ms {
            return 0;
        }
        ((self.clip_duration_ms - self.window_size_ms) / self.stride_size_ms) as usize + 1
    }
}

/// Noise-mixing and time-shift augmentation applied to training samples.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    pub background_frequency: f32,
    pub background_volume_range: f32,
    pub time_shift_ms: f32,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            background_frequency: BACKGROUND_FREQUENCY,
            background_volume_range: BACKGROUND_VOLUME_RANGE,
            time_shift_ms: TIME_SHIFT_MS,
        }
    }
}

/// Shape of the spectrogram fed to the model.
///
/// Rows and cols are fully determined by the audio framing. An explicit
/// shape that disagrees with the framing is rejected by `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrogramShape {
    pub rows: usize,
    pub cols: usize,
}

impl SpectrogramShape {
    pub fn derive(audio: &AudioConfig) -> Self {
        Self {
            rows: audio.frame_count(),
            cols: audio.feature_bin_count,
        }
    }

    pub fn element_count(&self) -> usize {
        self.rows * self.cols
    }
}

impl Default for SpectrogramShape {
    fn default() -> Self {
        Self::derive(&AudioConfig::default())
    }
}

/// Learning-rate schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    pub start_learning_rate: f64,
    /// Epoch at which the rate begins decaying exponentially
    pub decay_start_epoch: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            start_learning_rate: START_LEARNING_RATE,
            decay_start_epoch: LEARNING_RATE_DECAY_EPOCH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub batch_size: usize,
    pub num_classes: usize,
    pub labels: Vec<String>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            num_classes: NUMBER_OF_CLASSES,
            labels: CATEGORY_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The full pipeline configuration.
///
/// Built once at process start and passed by reference to whatever needs
/// it. Nothing here is mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KwsConfig {
    pub audio: AudioConfig,
    pub augment: AugmentConfig,
    pub spectrogram: SpectrogramShape,
    pub optimizer: OptimizerConfig,
    pub training: TrainingConfig,
    pub dataset: DatasetConfig,
}

impl Default for KwsConfig {
    fn default() -> Self {
        Self {
            audio: AudioConfig::default(),
            augment: AugmentConfig::default(),
            spectrogram: SpectrogramShape::default(),
            optimizer: OptimizerConfig::default(),
            training: TrainingConfig::default(),
            dataset: DatasetConfig::default(),
        }
    }
}

impl KwsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_audio()?;
        self.validate_augment()?;
        self.validate_spectrogram()?;
        self.validate_optimizer()?;
        self.validate_training()?;
        self.validate_dataset()?;
        tracing::debug!("configuration validated");
        Ok(())
    }

    fn validate_audio(&self) -> Result<(), ConfigError> {
        let audio = &self.audio;
        positive("audio.sample_rate_hz", audio.sample_rate_hz as f64)?;
        positive("audio.clip_duration_ms", audio.clip_duration_ms as f64)?;
        positive("audio.clip_length_samples", audio.clip_length_samples as f64)?;
        positive("audio.window_size_ms", audio.window_size_ms as f64)?;
        positive("audio.stride_size_ms", audio.stride_size_ms as f64)?;
        positive("audio.feature_bin_count", audio.feature_bin_count as f64)?;
        positive("audio.noise_floor", audio.noise_floor as f64)?;

        let expected =
            (audio.sample_rate_hz as usize * audio.clip_duration_ms as usize) / 1000;
        if audio.clip_length_samples != expected {
            return Err(ConfigError::ClipLengthMismatch {
                actual: audio.clip_length_samples,
                expected,
            });
        }
        positive("audio.frame_count", audio.frame_count() as f64)?;
        Ok(())
    }

    fn validate_augment(&self) -> Result<(), ConfigError> {
        let augment = &self.augment;
        fraction("augment.background_frequency", augment.background_frequency as f64)?;
        fraction("augment.background_volume_range", augment.background_volume_range as f64)?;
        positive("augment.time_shift_ms", augment.time_shift_ms as f64)?;
        Ok(())
    }

    fn validate_spectrogram(&self) -> Result<(), ConfigError> {
        let expected = SpectrogramShape::derive(&self.audio);
        if self.spectrogram != expected {
            return Err(ConfigError::ShapeMismatch {
                rows: self.spectrogram.rows,
                cols: self.spectrogram.cols,
                expected_rows: expected.rows,
                expected_cols: expected.cols,
            });
        }
        Ok(())
    }

    fn validate_optimizer(&self) -> Result<(), ConfigError> {
        positive("optimizer.start_learning_rate", self.optimizer.start_learning_rate)?;
        positive("optimizer.decay_start_epoch", self.optimizer.decay_start_epoch as f64)?;
        Ok(())
    }

    fn validate_training(&self) -> Result<(), ConfigError> {
        let training = &self.training;
        positive("training.batch_size", training.batch_size as f64)?;
        positive("training.num_classes", training.num_classes as f64)?;
        if training.labels.len() != training.num_classes {
            return Err(ConfigError::LabelCount {
                labels: training.labels.len(),
                classes: training.num_classes,
            });
        }
        Ok(())
    }

    fn validate_dataset(&self) -> Result<(), ConfigError> {
        let dataset = &self.dataset;
        positive("dataset.split.train_ratio", dataset.split.train_ratio)?;
        positive("dataset.split.test_ratio", dataset.split.test_ratio)?;
        let sum = dataset.split.train_ratio + dataset.split.test_ratio;
        if (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::SplitRatio { sum });
        }
        if dataset.noise_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { field: "dataset.noise_dir" });
        }
        if dataset.dataset_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath { field: "dataset.dataset_dir" });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::OutOfRange { field, value });
    }
    Ok(())
}
