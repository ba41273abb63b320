use crate::{Float, float};
use float::consts::PI;
use super::kernel::Kernel;

pub struct GaussKernel {
    kernel: Vec<Float>,
    normalizing_constant: Float
}

impl GaussKernel {
    fn sample(mean: Float, std: Float, x: Float) -> Float {
        let exponent = (-0.5 * ((x - mean) / std).powi(2)).exp();
        let factor = 1.0 / (std * (2.0 * PI).sqrt());
        factor * exponent
    }

    pub fn new(mean: Float, std: Float, half_width: usize) -> GaussKernel {
        let start = -(half_width as isize);
        let end_inclusive = half_width as isize;
        let kernel = (start..=end_inclusive)
            .map(|x| GaussKernel::sample(mean, std, x as Float))
            .collect::<Vec<Float>>();
        let normalizing_constant = kernel.iter().sum();

        GaussKernel {
            kernel,
            normalizing_constant
        }
    }
}

impl Kernel for GaussKernel {
    fn kernel(&self) -> &Vec<Float> {
        &self.kernel
    }

    fn normalizing_constant(&self) -> Float {
        self.normalizing_constant
    }
}
