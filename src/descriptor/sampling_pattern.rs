extern crate rand;
extern crate rand_distr;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::error::DescriptorError;
use crate::features::geometry::point::Point;
use crate::runtime_parameters::PointDistributionParameters;
use crate::Float;

/// Ordered set of patch coordinates defining the descriptor bit comparisons.
///
/// For a pattern of `2·L` points, point `i` and point `i+L` form the
/// comparison pair of bit `i`. Coordinates are absolute within the generating
/// patch, so the pattern is reusable for every keypoint of a run; identical
/// parameters always regenerate the identical pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingPattern {
    points: Vec<Point<usize>>,
    patch_width: usize,
    patch_height: usize
}

impl SamplingPattern {

    /// Draws `count` points from a bivariate Gaussian centered on the patch,
    /// re-sampling any draw that rounds outside [0, width-1] x [0, height-1].
    /// The RNG is seeded from the distribution parameters, never from the
    /// environment, so patterns are reproducible across processes.
    pub fn generate(patch_width: usize, patch_height: usize, count: usize, distribution_parameters: &PointDistributionParameters) -> Result<SamplingPattern, DescriptorError> {
        if patch_width == 0 || patch_height == 0 || count == 0 {
            return Err(DescriptorError::InvalidPatternConfiguration {
                width: patch_width,
                height: patch_height,
                count
            });
        }
        if distribution_parameters.sigma_factor <= 0.0 {
            return Err(DescriptorError::InvalidSigmaFactor(distribution_parameters.sigma_factor));
        }

        let center_row = (patch_height - 1) as Float / 2.0;
        let center_column = (patch_width - 1) as Float / 2.0;
        let row_distribution = Normal::new(center_row, distribution_parameters.sigma_factor * patch_height as Float)
            .map_err(|_| DescriptorError::InvalidSigmaFactor(distribution_parameters.sigma_factor))?;
        let column_distribution = Normal::new(center_column, distribution_parameters.sigma_factor * patch_width as Float)
            .map_err(|_| DescriptorError::InvalidSigmaFactor(distribution_parameters.sigma_factor))?;

        let mut sampling_rng = SmallRng::seed_from_u64(distribution_parameters.seed);
        let mut points = Vec::<Point<usize>>::with_capacity(count);

        for _ in 0..count {
            points.push(SamplingPattern::sample_point(
                &mut sampling_rng,
                &row_distribution,
                &column_distribution,
                patch_width,
                patch_height
            ));
        }

        Ok(SamplingPattern { points, patch_width, patch_height })
    }

    /// Builds a pattern from explicit points, e.g. to share a pattern between
    /// runs. All points must lie within the patch and the count must be even.
    pub fn from_points(points: Vec<Point<usize>>, patch_width: usize, patch_height: usize) -> Result<SamplingPattern, DescriptorError> {
        let in_bounds = points.iter().all(|p| p.row < patch_height && p.column < patch_width);
        if points.is_empty() || points.len() % 2 != 0 || !in_bounds {
            return Err(DescriptorError::InvalidPatternConfiguration {
                width: patch_width,
                height: patch_height,
                count: points.len()
            });
        }

        Ok(SamplingPattern { points, patch_width, patch_height })
    }

    pub fn points(&self) -> &Vec<Point<usize>> {
        &self.points
    }

    pub fn pair_count(&self) -> usize {
        self.points.len() / 2
    }

    pub fn patch_width(&self) -> usize {
        self.patch_width
    }

    pub fn patch_height(&self) -> usize {
        self.patch_height
    }

    fn sample_point(sampling_rng: &mut SmallRng, row_distribution: &Normal<Float>, column_distribution: &Normal<Float>, patch_width: usize, patch_height: usize) -> Point<usize> {
        loop {
            let row = row_distribution.sample(sampling_rng).round();
            let column = column_distribution.sample(sampling_rng).round();

            if row >= 0.0 && column >= 0.0 && (row as usize) < patch_height && (column as usize) < patch_width {
                return Point::new(row as usize, column as usize);
            }
        }
    }
}
