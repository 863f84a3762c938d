/// Minimal MATLAB Level 5 writer for test fixtures.
///
/// Emits an uncompressed little-endian container holding single-precision
/// arrays, which is all the surface the loaders under test consume.
use std::path::Path;

use ndarray::{Array3, Array4};

const MI_INT8: u32 = 1;
const MI_INT32: u32 = 5;
const MI_UINT32: u32 = 6;
const MI_SINGLE: u32 = 7;
const MI_MATRIX: u32 = 14;
const MX_SINGLE_CLASS: u32 = 7;

/// Append one tagged data element, padding the payload to 8 bytes.
fn element(out: &mut Vec<u8>, ty: u32, payload: &[u8]) {
    out.extend_from_slice(&ty.to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    let pad = (8 - payload.len() % 8) % 8;
    out.extend(std::iter::repeat(0u8).take(pad));
}

/// Serialize one named single-precision array (column-major `data`) as a
/// miMATRIX element.
fn matrix_element(name: &str, dims: &[i32], data: &[f32]) -> Vec<u8> {
    assert_eq!(
        dims.iter().product::<i32>() as usize,
        data.len(),
        "fixture dims do not match data length"
    );

    let mut body = Vec::new();

    // Array flags: class in the low byte, no complex/global/logical bits.
    let mut flags = Vec::new();
    flags.extend_from_slice(&MX_SINGLE_CLASS.to_le_bytes());
    flags.extend_from_slice(&0u32.to_le_bytes());
    element(&mut body, MI_UINT32, &flags);

    let mut dim_bytes = Vec::new();
    for &d in dims {
        dim_bytes.extend_from_slice(&d.to_le_bytes());
    }
    element(&mut body, MI_INT32, &dim_bytes);

    element(&mut body, MI_INT8, name.as_bytes());

    let mut value_bytes = Vec::new();
    for &v in data {
        value_bytes.extend_from_slice(&v.to_le_bytes());
    }
    element(&mut body, MI_SINGLE, &value_bytes);

    let mut out = Vec::new();
    out.extend_from_slice(&MI_MATRIX.to_le_bytes());
    out.extend_from_slice(&(body.len() as u32).to_le_bytes());
    out.extend_from_slice(&body);
    out
}

/// Write a `.mat` file with the given named arrays.
///
/// `data` must be in MATLAB's column-major element order.
pub fn write_mat<P: AsRef<Path>>(path: P, arrays: &[(&str, Vec<i32>, Vec<f32>)]) {
    let mut out = Vec::new();

    let mut header = [b' '; 128];
    let text = b"MATLAB 5.0 MAT-file, hypersr-data test fixture";
    header[..text.len()].copy_from_slice(text);
    header[116..124].copy_from_slice(&[0u8; 8]); // no subsystem data
    header[124] = 0x00; // version 0x0100
    header[125] = 0x01;
    header[126] = b'I'; // little-endian indicator
    header[127] = b'M';
    out.extend_from_slice(&header);

    for (name, dims, data) in arrays {
        out.extend_from_slice(&matrix_element(name, dims, data));
    }

    std::fs::write(path, out).expect("write fixture");
}

/// Column-major element order of an H x W x C array.
pub fn col_major3(array: &Array3<f32>) -> (Vec<i32>, Vec<f32>) {
    let dims = array.shape().iter().map(|&d| d as i32).collect();
    let data = array.view().reversed_axes().iter().copied().collect();
    (dims, data)
}

/// Column-major element order of an N x H x W x C array.
pub fn col_major4(array: &Array4<f32>) -> (Vec<i32>, Vec<f32>) {
    let dims = array.shape().iter().map(|&d| d as i32).collect();
    let data = array.view().reversed_axes().iter().copied().collect();
    (dims, data)
}

/// H x W x C array with every element distinct.
pub fn coded_image(h: usize, w: usize, c: usize, base: f32) -> Array3<f32> {
    Array3::from_shape_fn((h, w, c), |(i, j, k)| base + (100 * i + 10 * j + k) as f32)
}

/// N x H x W x C stack with every element distinct.
pub fn coded_stack(n: usize, h: usize, w: usize, c: usize, base: f32) -> Array4<f32> {
    Array4::from_shape_fn((n, h, w, c), |(s, i, j, k)| {
        base + (1000 * s + 100 * i + 10 * j + k) as f32
    })
}

/// Write a per-sample fixture file with the three conventional fields.
pub fn write_triplet<P: AsRef<Path>>(
    path: P,
    ms: &Array3<f32>,
    lms: &Array3<f32>,
    gt: &Array3<f32>,
) {
    let (ms_dims, ms_data) = col_major3(ms);
    let (lms_dims, lms_data) = col_major3(lms);
    let (gt_dims, gt_data) = col_major3(gt);
    write_mat(
        path,
        &[
            ("ms", ms_dims, ms_data),
            ("ms_bicubic", lms_dims, lms_data),
            ("gt", gt_dims, gt_data),
        ],
    );
}
