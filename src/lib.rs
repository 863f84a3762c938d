//! Dataset adapters for hyperspectral image super-resolution.
//!
//! Reads paired sample triplets -- low-resolution multispectral (`ms`),
//! bicubic-upsampled multispectral (`lms`) and ground truth (`gt`) -- from
//! MATLAB `.mat` containers and exposes them as indexable sequences of
//! channel-first `f32` tensors.
//!
//! Two adapters implement the same [`TripletDataset`] contract:
//! - [`MatFolderDataset`]: one `.mat` file per sample, loaded lazily on
//!   access, with optional 8-way geometric augmentation.
//! - [`MatStackDataset`]: one container holding a stacked batch of samples,
//!   loaded eagerly at construction and sliced on access.
//!
//! # Example
//!
//! ```ignore
//! use candle_core::Device;
//! use hypersr_data::{MatFolderDataset, TripletDataset};
//!
//! let dataset = MatFolderDataset::new("data/test", true, Device::Cpu)?;
//! let (ms, lms, gt) = dataset.get(0)?;
//! ```

use std::path::PathBuf;

pub mod augment;
pub mod config;
pub mod data;
pub mod mat;

// Re-export commonly used items
pub use augment::AugMode;
pub use config::DataConfig;
pub use data::{MatFolderDataset, MatStackDataset, Triplet, TripletDataset};

/// Library error types
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Candle error: {0}")]
    Candle(#[from] candle_core::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed MAT-file {path}: {message}")]
    MatFormat { path: PathBuf, message: String },

    #[error("Field '{field}' not found in {path}")]
    MissingField { field: String, path: PathBuf },

    #[error("Shape error: {0}")]
    Shape(String),

    #[error("Invalid augmentation mode {0}, expected 0..8")]
    InvalidAugMode(usize),

    #[error("Index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DataError>;
