use crate::error::DescriptorError;
use crate::features::geometry::point::Point;
use crate::features::KeyPoint;
use crate::image::Image;
use crate::runtime_parameters::DescriptorRuntimeParameters;
use crate::{Float, float};

/// Width of the smallest odd-sized square that covers a `patch_size` square
/// rotated by the given angle. The decrement to odd width guarantees an exact
/// pixel center for the rotation. A zero patch size yields zero.
pub fn rotated_crop_width(patch_size: usize, angle_degrees: Float) -> usize {
    let theta = angle_degrees * float::consts::PI / 180.0;
    let raw_width = (patch_size as Float * (theta.cos().abs() + theta.sin().abs())).floor() as usize;

    match raw_width % 2 {
        1 => raw_width,
        _ => raw_width.saturating_sub(1)
    }
}

/// Checks that the square of the given half-width centered on `origin` lies
/// inside the image. With `allow_corners` disabled, a square touching the
/// image boundary in both axes at once (corner contact) counts as too close.
pub fn check_border_distance(image: &Image, origin: &Point<usize>, distance: usize, allow_corners: bool) -> bool {
    let rows = image.height() as isize;
    let cols = image.width() as isize;
    let d = distance as isize;

    let top = origin.row as isize - d;
    let left = origin.column as isize - d;
    let bottom = origin.row as isize + d;
    let right = origin.column as isize + d;

    if top < 0 || left < 0 || bottom > rows - 1 || right > cols - 1 {
        return false;
    }

    if !allow_corners {
        let touches_row_edge = top == 0 || bottom == rows - 1;
        let touches_column_edge = left == 0 || right == cols - 1;
        if touches_row_edge && touches_column_edge {
            return false;
        }
    }

    true
}

pub fn validate_patch_size(image: &Image, patch_size: usize) -> Result<(), DescriptorError> {
    if patch_size < 3 || patch_size % 2 == 0 {
        return Err(DescriptorError::InvalidPatchSize(patch_size));
    }
    if image.width() < patch_size || image.height() < patch_size {
        return Err(DescriptorError::ImageTooSmallForPatch {
            width: image.width(),
            height: image.height(),
            patch_size
        });
    }
    Ok(())
}

/// Extracts the canonically oriented patch around a keypoint, or `None` when
/// the rotated bounding square would leave the image.
///
/// The bounding square is cropped from the pre-smoothed input, rotated by the
/// negated keypoint angle about its own center and re-cropped to
/// `patch_size`. Rotating only the bounding square keeps the cost independent
/// of the full image size.
pub fn extract_patch(image: &Image, keypoint: &KeyPoint, runtime_parameters: &DescriptorRuntimeParameters) -> Result<Option<Image>, DescriptorError> {
    validate_patch_size(image, runtime_parameters.patch_size)?;

    let crop_width = rotated_crop_width(runtime_parameters.patch_size, keypoint.angle);
    let border_distance = (crop_width - 1) / 2;

    if !check_border_distance(image, &keypoint.origin, border_distance, runtime_parameters.allow_corners) {
        return Ok(None);
    }

    let cropped = image.extract_square(&keypoint.origin, crop_width)?;

    let crop_center = Point::new(border_distance, border_distance);
    let rotated = cropped.rotate(-keypoint.angle, &crop_center.to_float(), runtime_parameters.interpolation);
    let patch = rotated.extract_square(&crop_center, runtime_parameters.patch_size)?;

    Ok(Some(patch))
}
