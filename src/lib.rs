extern crate rayon;

use rayon::prelude::*;

use self::descriptor::patch_extractor::{extract_patch, validate_patch_size};
use self::descriptor::sampling_pattern::SamplingPattern;
use self::descriptor::BriefDescriptor;
use self::error::DescriptorError;
use self::features::KeyPoint;
use self::image::Image;
use self::runtime_parameters::DescriptorRuntimeParameters;

pub mod descriptor;
pub mod error;
pub mod features;
pub mod image;
pub mod matching;
pub mod runtime_parameters;
pub mod visualize;

pub use self::matching::match_descriptors;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

/// Result of a descriptor batch over one keypoint list.
///
/// `descriptors` is index-aligned with `surviving_indices`: descriptor `i`
/// belongs to `keypoints[surviving_indices[i]]`. Keypoints whose patch would
/// leave the image are reported in `skipped_indices` and produce no
/// descriptor.
#[derive(Debug, Clone)]
pub struct DescriptorComputation {
    pub descriptors: Vec<BriefDescriptor>,
    pub surviving_indices: Vec<usize>,
    pub skipped_indices: Vec<usize>,
}

/// Computes rotation-invariant BRIEF descriptors for the given keypoints.
///
/// The image is smoothed once, the sampling pattern is generated once from
/// the seeded distribution parameters, and every keypoint is then processed
/// independently: the oriented patch around it is extracted, rotated back to
/// the canonical frame and encoded against the shared pattern. Border skips
/// are per-keypoint outcomes, not failures.
pub fn compute_descriptors(image: &Image, keypoints: &Vec<KeyPoint>, runtime_parameters: &DescriptorRuntimeParameters) -> Result<DescriptorComputation, DescriptorError> {
    if runtime_parameters.descriptor_length == 0 {
        return Err(DescriptorError::InvalidDescriptorLength);
    }
    validate_patch_size(image, runtime_parameters.patch_size)?;
    if runtime_parameters.smoothing.sigma <= 0.0 {
        return Err(DescriptorError::InvalidSmoothingSigma(runtime_parameters.smoothing.sigma));
    }

    let sampling_pattern = SamplingPattern::generate(
        runtime_parameters.patch_size,
        runtime_parameters.patch_size,
        2 * runtime_parameters.descriptor_length,
        &runtime_parameters.point_distribution,
    )?;

    let smoothing_size = runtime_parameters.smoothing.size.min(image.width()).min(image.height());
    let smoothed = image.gaussian_blur(runtime_parameters.smoothing.sigma, smoothing_size);

    let outcomes = keypoints
        .par_iter()
        .map(|keypoint| match extract_patch(&smoothed, keypoint, runtime_parameters)? {
            Some(patch) => Ok(Some(BriefDescriptor::encode(&patch, &sampling_pattern)?)),
            None => Ok(None),
        })
        .collect::<Result<Vec<Option<BriefDescriptor>>, DescriptorError>>()?;

    let mut descriptors = Vec::<BriefDescriptor>::with_capacity(keypoints.len());
    let mut surviving_indices = Vec::<usize>::with_capacity(keypoints.len());
    let mut skipped_indices = Vec::<usize>::new();

    for (keypoint_idx, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Some(descriptor) => {
                descriptors.push(descriptor);
                surviving_indices.push(keypoint_idx);
            }
            None => {
                log::debug!("keypoint {} skipped: oriented patch too close to image border", keypoint_idx);
                skipped_indices.push(keypoint_idx);
            }
        }
    }

    log::debug!(
        "computed {} descriptors, skipped {} of {} keypoints",
        descriptors.len(),
        skipped_indices.len(),
        keypoints.len()
    );

    Ok(DescriptorComputation {
        descriptors,
        surviving_indices,
        skipped_indices,
    })
}
