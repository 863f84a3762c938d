/// Directory-backed triplet dataset
///
/// Scans a directory for per-sample `.mat` files at construction and loads
/// each sample from disk on access. With augmentation enabled every file is
/// exposed eight times, once per geometric mode.
use std::fs;
use std::path::{Path, PathBuf};

use candle_core::Device;

use crate::augment::{AugMode, NUM_MODES};
use crate::config::DataConfig;
use crate::data::{check_index, hwc_to_chw_tensor, Triplet, TripletDataset};
use crate::mat;
use crate::Result;

/// Case-sensitive suffix identifying sample files.
const MAT_SUFFIX: &str = ".mat";

/// Lazily-loaded dataset of one `.mat` file per sample.
///
/// Holds only file paths; every access re-reads the file, decodes the three
/// fields, augments and converts. Nothing is cached, so repeated access to
/// the same index pays the full cost each time.
#[derive(Debug)]
pub struct MatFolderDataset {
    files: Vec<PathBuf>,
    factor: usize,
    device: Device,
}

impl MatFolderDataset {
    /// Scan `dir` for `.mat` files.
    ///
    /// Entries are sorted by name so sample order is deterministic across
    /// filesystems; the name-based ms/gt pairing convention relies on it.
    pub fn new<P: AsRef<Path>>(dir: P, augment: bool, device: Device) -> Result<Self> {
        let dir = dir.as_ref();

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let named_mat = path
                .file_name()
                .map_or(false, |name| name.to_string_lossy().ends_with(MAT_SUFFIX));
            if named_mat && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        let factor = if augment { NUM_MODES } else { 1 };

        if files.is_empty() {
            log::warn!("no {} files found in {}", MAT_SUFFIX, dir.display());
        } else {
            log::info!(
                "discovered {} sample files in {} (augmentation factor {})",
                files.len(),
                dir.display(),
                factor
            );
        }

        Ok(Self {
            files,
            factor,
            device,
        })
    }

    /// Build from a [`DataConfig`], using its `data_dir` and `augment` flag.
    pub fn from_config(config: &DataConfig, device: Device) -> Result<Self> {
        config.validate()?;
        Self::new(&config.data_dir, config.augment, device)
    }

    /// Paths backing the dataset, in access order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Apparent count multiplier (8 with augmentation, else 1).
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Read one file, augment all three fields with `mode` and convert.
    fn load(&self, file_index: usize, mode: AugMode) -> Result<Triplet> {
        let path = &self.files[file_index];
        let container = mat::open(path)?;

        let ms = mat::as_hwc(
            mat::FIELD_MS,
            path,
            mat::field_f32(&container, path, mat::FIELD_MS)?,
        )?;
        let lms = mat::as_hwc(
            mat::FIELD_LMS,
            path,
            mat::field_f32(&container, path, mat::FIELD_LMS)?,
        )?;
        let gt = mat::as_hwc(
            mat::FIELD_GT,
            path,
            mat::field_f32(&container, path, mat::FIELD_GT)?,
        )?;

        // Same mode on all three keeps pixel correspondence.
        let ms = mode.apply(&ms);
        let lms = mode.apply(&lms);
        let gt = mode.apply(&gt);

        Ok((
            hwc_to_chw_tensor(ms, &self.device)?,
            hwc_to_chw_tensor(lms, &self.device)?,
            hwc_to_chw_tensor(gt, &self.device)?,
        ))
    }
}

impl TripletDataset for MatFolderDataset {
    fn len(&self) -> usize {
        self.files.len() * self.factor
    }

    fn get(&self, index: usize) -> Result<Triplet> {
        check_index(index, self.len())?;
        let file_index = index / self.factor;
        let mode = AugMode::from_index(index % self.factor)?;
        self.load(file_index, mode)
    }
}
