/// Geometric augmentation for image arrays
///
/// Eight fixed transforms (identity, up-down flips, quarter-turn rotations)
/// acting on the spatial axes of an H x W x C array, channels untouched.
/// Applying the same mode to each array of a sample keeps pixel
/// correspondence across ms/lms/gt.
use ndarray::{Array3, Axis};

use crate::{DataError, Result};

/// Number of distinct augmentation modes.
pub const NUM_MODES: usize = 8;

/// One of the eight fixed geometric transforms.
///
/// Rotations are counter-clockwise in the (H, W) plane. The discriminant is
/// the mode index used by augmented datasets (`index % 8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugMode {
    Identity,
    FlipUd,
    Rot90,
    Rot90FlipUd,
    Rot180,
    Rot180FlipUd,
    Rot270,
    Rot270FlipUd,
}

impl AugMode {
    /// All modes in index order.
    pub const ALL: [AugMode; NUM_MODES] = [
        AugMode::Identity,
        AugMode::FlipUd,
        AugMode::Rot90,
        AugMode::Rot90FlipUd,
        AugMode::Rot180,
        AugMode::Rot180FlipUd,
        AugMode::Rot270,
        AugMode::Rot270FlipUd,
    ];

    /// Map an integer mode to its transform.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(DataError::InvalidAugMode(index))
    }

    /// The mode index this transform is selected by.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Apply the transform to an H x W x C array.
    ///
    /// Deterministic and shape-preserving in rank; quarter turns swap the
    /// spatial extents, so a (H, W, C) input comes out (W, H, C).
    pub fn apply(self, image: &Array3<f32>) -> Array3<f32> {
        let (quarter_turns, flip) = match self {
            AugMode::Identity => (0, false),
            AugMode::FlipUd => (0, true),
            AugMode::Rot90 => (1, false),
            AugMode::Rot90FlipUd => (1, true),
            AugMode::Rot180 => (2, false),
            AugMode::Rot180FlipUd => (2, true),
            AugMode::Rot270 => (3, false),
            AugMode::Rot270FlipUd => (3, true),
        };

        let mut out = rot90(image, quarter_turns);
        if flip {
            out.invert_axis(Axis(0));
        }
        out
    }
}

/// Rotate 90 degrees counter-clockwise `k` times in the (H, W) plane.
fn rot90(image: &Array3<f32>, k: usize) -> Array3<f32> {
    let mut out = image.clone();
    for _ in 0..k {
        // One quarter turn: transpose the spatial axes, then flip rows.
        let mut turned = out.permuted_axes([1, 0, 2]);
        turned.invert_axis(Axis(0));
        out = turned;
    }
    out
}
