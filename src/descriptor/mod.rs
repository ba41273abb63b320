use crate::error::DescriptorError;
use crate::image::Image;
use self::bit_vector::BitVector;
use self::sampling_pattern::SamplingPattern;

pub mod bit_vector;
pub mod patch_extractor;
pub mod sampling_pattern;

/// Binary descriptor of one keypoint: a fixed-length vector of pairwise
/// intensity comparisons over the canonical patch.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefDescriptor {
    bit_vector: BitVector
}

impl BriefDescriptor {

    /// Encodes a canonical patch against a sampling pattern of `2·L` points.
    /// Bit `i` is set iff the intensity at point `i` is strictly below the
    /// intensity at point `i+L`; the comparison direction is fixed so that
    /// Hamming distances between descriptors are meaningful.
    pub fn encode(patch: &Image, sampling_pattern: &SamplingPattern) -> Result<BriefDescriptor, DescriptorError> {
        if patch.width() < sampling_pattern.patch_width() || patch.height() < sampling_pattern.patch_height() {
            return Err(DescriptorError::PatternPatchMismatch {
                pattern_width: sampling_pattern.patch_width(),
                pattern_height: sampling_pattern.patch_height(),
                patch_width: patch.width(),
                patch_height: patch.height()
            });
        }

        let pair_count = sampling_pattern.pair_count();
        let points = sampling_pattern.points();
        let mut bit_vector = BitVector::zeros(pair_count);

        for i in 0..pair_count {
            let intensity_a = patch.intensity(&points[i]);
            let intensity_b = patch.intensity(&points[i + pair_count]);

            if intensity_a < intensity_b {
                bit_vector.set(i);
            }
        }

        Ok(BriefDescriptor { bit_vector })
    }

    /// Builds a descriptor from explicit bit values, e.g. for matcher tests.
    ///
    /// Panics when `bits` is empty; a descriptor has at least one bit.
    pub fn from_bits(bits: &[bool]) -> BriefDescriptor {
        assert!(!bits.is_empty());
        let mut bit_vector = BitVector::zeros(bits.len());
        for (i, bit) in bits.iter().enumerate() {
            if *bit {
                bit_vector.set(i);
            }
        }

        BriefDescriptor { bit_vector }
    }

    pub fn len(&self) -> usize {
        self.bit_vector.len()
    }

    pub fn bit(&self, bit_idx: usize) -> bool {
        self.bit_vector.get(bit_idx)
    }

    pub fn hamming_distance(&self, other: &BriefDescriptor) -> u64 {
        self.bit_vector.hamming_distance(&other.bit_vector)
    }
}
