/// Monolithic-file triplet dataset
///
/// Loads one `.mat` container holding stacked N x H x W x C batches of
/// ms/lms/gt at construction; access slices the in-memory arrays. No
/// augmentation is applied on this path.
use std::path::Path;

use candle_core::{Device, Tensor};
use ndarray::{Array4, Axis};

use crate::config::DataConfig;
use crate::data::{check_index, hwc_to_chw_tensor, hwc_to_dchw_tensor, Triplet, TripletDataset};
use crate::mat;
use crate::{DataError, Result};

/// Eagerly-loaded dataset backed by three stacked sample arrays.
///
/// The arrays are read-only after construction; every access copies its
/// slice, so returned tensors never alias the stored data.
#[derive(Debug)]
pub struct MatStackDataset {
    ms: Array4<f32>,
    lms: Array4<f32>,
    gt: Array4<f32>,
    volumetric: bool,
    device: Device,
}

impl MatStackDataset {
    /// Load the stacked container at `path`. Samples come out `(C, H, W)`.
    pub fn new<P: AsRef<Path>>(path: P, device: Device) -> Result<Self> {
        Self::load(path.as_ref(), device, false)
    }

    /// Like [`MatStackDataset::new`], but samples come out `(1, C, H, W)`
    /// with a leading singleton depth axis, for 3-D convolution consumers.
    pub fn with_volumetric<P: AsRef<Path>>(path: P, device: Device) -> Result<Self> {
        Self::load(path.as_ref(), device, true)
    }

    /// Build from a [`DataConfig`], using its `stack_file` and `volumetric`
    /// flag. Fails if no stack file is configured.
    pub fn from_config(config: &DataConfig, device: Device) -> Result<Self> {
        config.validate()?;
        let path = config.stack_file.as_ref().ok_or_else(|| {
            DataError::Config("stack_file is required for the monolithic loader".to_string())
        })?;
        Self::load(path, device, config.volumetric)
    }

    fn load(path: &Path, device: Device, volumetric: bool) -> Result<Self> {
        let container = mat::open(path)?;

        let ms = mat::as_nhwc(
            mat::FIELD_MS,
            path,
            mat::field_f32(&container, path, mat::FIELD_MS)?,
        )?;
        let lms = mat::as_nhwc(
            mat::FIELD_LMS,
            path,
            mat::field_f32(&container, path, mat::FIELD_LMS)?,
        )?;
        let gt = mat::as_nhwc(
            mat::FIELD_GT,
            path,
            mat::field_f32(&container, path, mat::FIELD_GT)?,
        )?;

        log::info!(
            "loaded sample stack from {}: gt shape {:?}",
            path.display(),
            gt.shape()
        );

        let mut dataset = Self::from_arrays(ms, lms, gt, device)?;
        dataset.volumetric = volumetric;
        Ok(dataset)
    }

    /// Build directly from in-memory N x H x W x C stacks.
    ///
    /// The three leading axes must agree; a mismatch would otherwise
    /// surface as an opaque slicing panic deep inside an access call.
    pub fn from_arrays(
        ms: Array4<f32>,
        lms: Array4<f32>,
        gt: Array4<f32>,
        device: Device,
    ) -> Result<Self> {
        let n = gt.len_of(Axis(0));
        if ms.len_of(Axis(0)) != n || lms.len_of(Axis(0)) != n {
            return Err(DataError::Shape(format!(
                "sample stacks disagree on leading axis: ms {}, ms_bicubic {}, gt {}",
                ms.len_of(Axis(0)),
                lms.len_of(Axis(0)),
                n
            )));
        }

        Ok(Self {
            ms,
            lms,
            gt,
            volumetric: false,
            device,
        })
    }

    /// Whether samples carry the leading singleton depth axis.
    pub fn is_volumetric(&self) -> bool {
        self.volumetric
    }

    fn slice_sample(&self, stack: &Array4<f32>, index: usize) -> Result<Tensor> {
        // Copy the slice out of the stack before conversion.
        let sample = stack.index_axis(Axis(0), index).to_owned();
        if self.volumetric {
            hwc_to_dchw_tensor(sample, &self.device)
        } else {
            hwc_to_chw_tensor(sample, &self.device)
        }
    }
}

impl TripletDataset for MatStackDataset {
    fn len(&self) -> usize {
        self.gt.len_of(Axis(0))
    }

    fn get(&self, index: usize) -> Result<Triplet> {
        check_index(index, self.len())?;
        Ok((
            self.slice_sample(&self.ms, index)?,
            self.slice_sample(&self.lms, index)?,
            self.slice_sample(&self.gt, index)?,
        ))
    }
}
