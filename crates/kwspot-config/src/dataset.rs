use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::constants::{TEST_RATIO, TRAIN_RATIO};

/// Folder holding background-noise clips used for augmentation
pub const NOISE_FOLDER_PATH: &str = "noise_clips";

/// Primary dataset folder
pub const DATASET_FOLDER_PATH: &str = "dataset";

/// Pete Warden speech-commands corpus
pub const PETE_WARDEN_PATH: &str = "../dataset/Pete_Warden_dataset";

/// Self-recorded keyword corpus
pub const MY_VOICE_WORDS_PATH: &str = "../dataset/My_voice_dataset";

/// Arabic keyword corpus
pub const ARABIC_WORDS_PATH: &str = "../dataset/archive/dataset/dataset";

/// Source corpus a training run reads its samples from.
///
/// Only the locations live here. Walking the folders, merging corpora,
/// and label discovery belong to the data-loading side of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatasetSource {
    Primary,
    PeteWarden,
    MyVoice,
    ArabicWords,
}

impl DatasetSource {
    pub fn path(&self) -> &'static str {
        match self {
            DatasetSource::Primary => DATASET_FOLDER_PATH,
            DatasetSource::PeteWarden => PETE_WARDEN_PATH,
            DatasetSource::MyVoice => MY_VOICE_WORDS_PATH,
            DatasetSource::ArabicWords => ARABIC_WORDS_PATH,
        }
    }

    pub fn all() -> [DatasetSource; 4] {
        [
            DatasetSource::Primary,
            DatasetSource::PeteWarden,
            DatasetSource::MyVoice,
            DatasetSource::ArabicWords,
        ]
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::Primary
    }
}

impl std::fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetSource::Primary => write!(f, "primary"),
            DatasetSource::PeteWarden => write!(f, "pete-warden"),
            DatasetSource::MyVoice => write!(f, "my-voice"),
            DatasetSource::ArabicWords => write!(f, "arabic-words"),
        }
    }
}

/// Train/test split of the dataset.
///
/// The two fractions cover the whole dataset. No validation fraction is
/// reserved here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub train_ratio: f64,
    pub test_ratio: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_ratio: TRAIN_RATIO,
            test_ratio: TEST_RATIO,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub noise_dir: PathBuf,
    pub dataset_dir: PathBuf,
    pub source: DatasetSource,
    pub split: SplitConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            noise_dir: PathBuf::from(NOISE_FOLDER_PATH),
            dataset_dir: PathBuf::from(DATASET_FOLDER_PATH),
            source: DatasetSource::default(),
            split: SplitConfig::default(),
        }
    }
}
