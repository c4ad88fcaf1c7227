//! Audio framing and model-shape constants for the KWS pipeline
//!
//! These values are fixed by the trained model. If any framing parameter
//! changes, every derived constant below changes with it.

/// Standard sample rate for all audio processing (Hz)
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Duration of one training/inference clip (ms)
pub const CLIP_DURATION_MS: u32 = 1_000;

/// Target waveform length of one clip (samples, derived)
/// At 16 kHz a 1000 ms clip is 16000 samples.
pub const CLIP_LENGTH_SAMPLES: usize =
    (SAMPLE_RATE_HZ as usize * CLIP_DURATION_MS as usize) / 1000;

/// Analysis window size (ms)
pub const WINDOW_SIZE_MS: u32 = 30;

/// Analysis window stride (ms)
pub const STRIDE_SIZE_MS: u32 = 20;

/// Spectral feature bins per analysis window
pub const FEATURE_BIN_COUNT: usize = 40;

/// Analysis window size (samples, derived)
pub const WINDOW_SIZE_SAMPLES: usize =
    (SAMPLE_RATE_HZ as usize * WINDOW_SIZE_MS as usize) / 1000;

/// Analysis window stride (samples, derived)
pub const STRIDE_SIZE_SAMPLES: usize =
    (SAMPLE_RATE_HZ as usize * STRIDE_SIZE_MS as usize) / 1000;

/// Spectrogram time frames per clip (derived)
/// floor((1000 - 30) / 20) + 1 = 49 windows fit in one clip.
pub const SPECTROGRAM_ROWS: usize =
    ((CLIP_DURATION_MS - WINDOW_SIZE_MS) / STRIDE_SIZE_MS) as usize + 1;

/// Spectrogram feature bins per frame (derived)
pub const SPECTROGRAM_COLS: usize = FEATURE_BIN_COUNT;

/// Total elements in one spectrogram (derived)
pub const SPECTROGRAM_ELEMENT_COUNT: usize = SPECTROGRAM_ROWS * SPECTROGRAM_COLS;

/// Probability of mixing background noise into a training sample
pub const BACKGROUND_FREQUENCY: f32 = 0.8;

/// Peak volume of mixed-in background noise (fraction of full scale)
pub const BACKGROUND_VOLUME_RANGE: f32 = 0.1;

/// Random time-shift bound applied during augmentation (ms)
pub const TIME_SHIFT_MS: f32 = 100.0;

/// Amplitude threshold below which a clip is treated as silence
pub const NOISE_FLOOR: f32 = 0.1;

/// Initial learning rate
pub const START_LEARNING_RATE: f64 = 0.001;

/// Epoch at which the learning rate starts decaying exponentially
pub const LEARNING_RATE_DECAY_EPOCH: u32 = 10;

/// Output classes of the model
pub const NUMBER_OF_CLASSES: usize = 4;

/// Category labels, index-aligned with the model output layer
pub const CATEGORY_LABELS: [&str; NUMBER_OF_CLASSES] = ["go", "stop", "silence", "unknown"];

/// Fraction of the dataset used for training
pub const TRAIN_RATIO: f64 = 0.7;

/// Fraction of the dataset used for testing
/// No validation fraction is reserved. A three-way split has to be
/// carved out of the train fraction downstream.
pub const TEST_RATIO: f64 = 0.3;

/// Samples per training batch
pub const BATCH_SIZE: usize = 8;
