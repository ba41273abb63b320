use thiserror::Error;

use crate::Float;

/// Fatal configuration and input errors of the descriptor pipeline.
///
/// A keypoint whose patch would leave the image is not an error; it is
/// reported through `DescriptorComputation::skipped_indices`.
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("patch size must be an odd integer >= 3, got {0}")]
    InvalidPatchSize(usize),

    #[error("image {width}x{height} is too small for patch size {patch_size}")]
    ImageTooSmallForPatch {
        width: usize,
        height: usize,
        patch_size: usize,
    },

    #[error("sampling pattern requires positive dimensions and point count, got {width}x{height} with {count} points")]
    InvalidPatternConfiguration {
        width: usize,
        height: usize,
        count: usize,
    },

    #[error("sampling pattern sigma factor must be positive, got {0}")]
    InvalidSigmaFactor(Float),

    #[error("descriptor length must be positive")]
    InvalidDescriptorLength,

    #[error("smoothing sigma must be positive, got {0}")]
    InvalidSmoothingSigma(Float),

    #[error("crop of {width}x{height} at (row: {row}, column: {column}) exceeds image bounds {image_width}x{image_height}")]
    CropOutOfBounds {
        row: usize,
        column: usize,
        width: usize,
        height: usize,
        image_width: usize,
        image_height: usize,
    },

    #[error("sampling pattern generated for a {pattern_width}x{pattern_height} patch does not fit a {patch_width}x{patch_height} patch")]
    PatternPatchMismatch {
        pattern_width: usize,
        pattern_height: usize,
        patch_width: usize,
        patch_height: usize,
    },

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
