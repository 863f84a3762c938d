/// Dataset adapters over MAT-file sample triplets
pub mod mat_folder;
pub mod mat_stack;

pub use mat_folder::MatFolderDataset;
pub use mat_stack::MatStackDataset;

use candle_core::{Device, Tensor};
use ndarray::{Array3, Axis};

use crate::{DataError, Result};

/// A sample triplet: (ms, lms, gt), each a channel-first `f32` tensor.
pub type Triplet = (Tensor, Tensor, Tensor);

/// Indexable dataset of (ms, lms, gt) tensor triplets.
///
/// Both adapters expose this contract; a surrounding iteration/batching
/// layer is expected to drive it.
pub trait TripletDataset {
    /// Number of accessible samples.
    fn len(&self) -> usize;

    /// Check if empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load the sample at `index`.
    fn get(&self, index: usize) -> Result<Triplet>;
}

/// Fail with an index error unless `index` is within `[0, len)`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(DataError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// Permute an H x W x C image to channel-first and materialize it as a tensor.
///
/// The permuted view is copied into a fresh standard-layout buffer, so the
/// returned tensor never aliases the input's storage.
pub(crate) fn hwc_to_chw_tensor(image: Array3<f32>, device: &Device) -> Result<Tensor> {
    let (h, w, c) = image.dim();
    let chw = image.permuted_axes([2, 0, 1]);
    let data: Vec<f32> = chw.iter().copied().collect();
    Ok(Tensor::from_vec(data, (c, h, w), device)?)
}

/// Volumetric variant: insert a leading singleton depth axis, then permute
/// to (1, C, H, W) for 3-D convolution consumers.
pub(crate) fn hwc_to_dchw_tensor(image: Array3<f32>, device: &Device) -> Result<Tensor> {
    let (h, w, c) = image.dim();
    let dchw = image.insert_axis(Axis(0)).permuted_axes([0, 3, 1, 2]);
    let data: Vec<f32> = dchw.iter().copied().collect();
    Ok(Tensor::from_vec(data, (1, c, h, w), device)?)
}
