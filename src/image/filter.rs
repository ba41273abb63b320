extern crate nalgebra as na;

use na::DMatrix;

use crate::Float;
use super::Image;
use super::kernel::Kernel;

/// Separable filter: one horizontal pass followed by one vertical pass.
/// Borders are handled by edge replication, so the two passes commute.
pub fn filter_separable<K: Kernel>(image: &Image, filter: &K) -> Image {
    let horizontal = filter_pass(&image.buffer, filter, true);
    let buffer = filter_pass(&horizontal, filter, false);

    Image {
        buffer,
        original_encoding: image.original_encoding
    }
}

fn filter_pass<K: Kernel>(buffer: &DMatrix<Float>, filter: &K, horizontal: bool) -> DMatrix<Float> {
    let rows = buffer.nrows();
    let cols = buffer.ncols();
    let half_width = filter.half_width() as isize;
    let weights = filter.kernel();
    let normalizing_constant = filter.normalizing_constant();

    DMatrix::<Float>::from_fn(rows, cols, |r, c| {
        let mut accumulator = 0.0;
        for (tap_idx, weight) in weights.iter().enumerate() {
            let offset = tap_idx as isize - half_width;
            let (sample_r, sample_c) = match horizontal {
                true => (r as isize, c as isize + offset),
                false => (r as isize + offset, c as isize)
            };
            let sample_r = sample_r.max(0).min(rows as isize - 1) as usize;
            let sample_c = sample_c.max(0).min(cols as isize - 1) as usize;
            accumulator += weight * buffer[(sample_r, sample_c)];
        }
        accumulator / normalizing_constant
    })
}
