use serde::{Serialize, Deserialize};

use crate::error::DescriptorError;
use crate::image::Interpolation;
use crate::Float;

pub const DEFAULT_SAMPLING_PATTERN_SEED: u64 = 0x0DDB1A5ECBAD5EED;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingParameters {
    pub sigma: Float,
    /// Kernel window size; clamped to the image dimensions at use.
    pub size: usize
}

impl Default for SmoothingParameters {
    fn default() -> SmoothingParameters {
        SmoothingParameters {
            sigma: (2.0 as Float).sqrt(),
            size: 9
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PointDistributionParameters {
    /// Explicit RNG seed; identical seeds reproduce identical patterns, which
    /// descriptors of two images must share to be comparable.
    pub seed: u64,
    /// Standard deviation of the sampling Gaussian as a fraction of the
    /// patch extent.
    pub sigma_factor: Float
}

impl Default for PointDistributionParameters {
    fn default() -> PointDistributionParameters {
        PointDistributionParameters {
            seed: DEFAULT_SAMPLING_PATTERN_SEED,
            sigma_factor: 0.2
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherParameters {
    /// Discard matches above this Hamming distance.
    pub max_distance: Option<u64>,
    /// Best/second-best distance ratio; the best distance must fall strictly
    /// below `ratio * second_best` for the match to survive.
    pub ratio: Option<Float>,
    /// Keep a match only if the nearest neighbor relation holds both ways.
    pub cross_check: bool
}

impl Default for MatcherParameters {
    fn default() -> MatcherParameters {
        MatcherParameters {
            max_distance: None,
            ratio: None,
            cross_check: false
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorRuntimeParameters {
    /// Side of the canonical patch, odd and >= 3.
    pub patch_size: usize,
    pub descriptor_length: usize,
    pub smoothing: SmoothingParameters,
    pub point_distribution: PointDistributionParameters,
    pub interpolation: Interpolation,
    /// Whether a patch touching the image boundary only at a corner still
    /// counts as inside. Off by default.
    pub allow_corners: bool,
    pub matcher: MatcherParameters
}

impl Default for DescriptorRuntimeParameters {
    fn default() -> DescriptorRuntimeParameters {
        DescriptorRuntimeParameters {
            patch_size: 31,
            descriptor_length: 256,
            smoothing: SmoothingParameters::default(),
            point_distribution: PointDistributionParameters::default(),
            interpolation: Interpolation::Nearest,
            allow_corners: false,
            matcher: MatcherParameters::default()
        }
    }
}

impl DescriptorRuntimeParameters {
    pub fn from_yaml(serialized: &str) -> Result<DescriptorRuntimeParameters, DescriptorError> {
        Ok(serde_yaml::from_str(serialized)?)
    }

    pub fn to_yaml(&self) -> Result<String, DescriptorError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
