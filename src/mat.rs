/// MAT-file access layer
///
/// Thin wrapper over the `matfile` parser: opens a Level 5 container, pulls
/// named numeric fields and converts them to `f32` ndarrays. MATLAB stores
/// elements column-major; arrays are built with that order respected so
/// logical indexing matches the source data.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::{Array3, Array4, ArrayD, IxDyn, ShapeBuilder};

use crate::{DataError, Result};

/// Low-resolution multispectral field name.
pub const FIELD_MS: &str = "ms";
/// Upsampled multispectral field name (the "lms" input).
pub const FIELD_LMS: &str = "ms_bicubic";
/// Ground-truth field name.
pub const FIELD_GT: &str = "gt";

/// Parse the container at `path`.
///
/// I/O failures surface as-is; parse failures carry the path.
pub fn open<P: AsRef<Path>>(path: P) -> Result<matfile::MatFile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    matfile::MatFile::parse(BufReader::new(file)).map_err(|e| DataError::MatFormat {
        path: path.to_path_buf(),
        message: format!("{:?}", e),
    })
}

/// Extract the named field as an `f32` array of dynamic rank.
pub fn field_f32(container: &matfile::MatFile, path: &Path, field: &str) -> Result<ArrayD<f32>> {
    let array = container
        .find_by_name(field)
        .ok_or_else(|| DataError::MissingField {
            field: field.to_string(),
            path: path.to_path_buf(),
        })?;

    let shape: Vec<usize> = array.size().to_vec();
    let data = numeric_to_f32(array.data());

    ArrayD::from_shape_vec(IxDyn(&shape).f(), data).map_err(|e| {
        DataError::Shape(format!(
            "field '{}' in {}: {}",
            field,
            path.display(),
            e
        ))
    })
}

/// Interpret a field as a single H x W x C image.
pub fn as_hwc(field: &str, path: &Path, array: ArrayD<f32>) -> Result<Array3<f32>> {
    let shape = array.shape().to_vec();
    array.into_dimensionality::<ndarray::Ix3>().map_err(|_| {
        DataError::Shape(format!(
            "field '{}' in {}: expected 3 dimensions (H, W, C), got {:?}",
            field,
            path.display(),
            shape
        ))
    })
}

/// Interpret a field as an N x H x W x C sample stack.
pub fn as_nhwc(field: &str, path: &Path, array: ArrayD<f32>) -> Result<Array4<f32>> {
    let shape = array.shape().to_vec();
    array.into_dimensionality::<ndarray::Ix4>().map_err(|_| {
        DataError::Shape(format!(
            "field '{}' in {}: expected 4 dimensions (N, H, W, C), got {:?}",
            field,
            path.display(),
            shape
        ))
    })
}

/// Widen or narrow any numeric element type to `f32`.
fn numeric_to_f32(data: &matfile::NumericData) -> Vec<f32> {
    use matfile::NumericData as N;
    match data {
        N::Single { real, .. } => real.clone(),
        N::Double { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::Int8 { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::UInt8 { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::Int16 { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::UInt16 { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::Int32 { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::UInt32 { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::Int64 { real, .. } => real.iter().map(|&v| v as f32).collect(),
        N::UInt64 { real, .. } => real.iter().map(|&v| v as f32).collect(),
    }
}
