use crate::features::KeyPoint;
use crate::image::Image;
use crate::image::image_encoding::ImageEncoding;
use crate::matching::Match;

pub fn draw_square(image: &mut Image, row: usize, column: usize, side_length: usize) -> () {
    let rows = image.buffer.nrows();
    let cols = image.buffer.ncols();

    if row + side_length >= rows || column + side_length >= cols {
        return;
    }

    for i in (column as isize - side_length as isize).max(0) as usize..column + side_length + 1 {
        image.buffer[(row + side_length, i)] = 255.0;
        if row >= side_length {
            image.buffer[(row - side_length, i)] = 255.0;
        }
    }

    for j in (row as isize - side_length as isize).max(0) as usize..row + side_length + 1 {
        image.buffer[(j, column + side_length)] = 255.0;
        if column >= side_length {
            image.buffer[(j, column - side_length)] = 255.0;
        }
    }
}

/// Renders both images side by side and marks the matched keypoints.
/// The keypoint lists must be the surviving keypoints the descriptor sets
/// were computed from, in the same order.
pub fn display_matches(image_a: &Image, image_b: &Image, keypoints_a: &Vec<KeyPoint>, keypoints_b: &Vec<KeyPoint>, matches: &Vec<Match>) -> Image {
    assert_eq!(image_a.buffer.nrows(), image_b.buffer.nrows());

    let height = image_a.buffer.nrows();
    let width_a = image_a.buffer.ncols();
    let width = width_a + image_b.buffer.ncols();

    let mut target_image = Image::empty(width, height, ImageEncoding::U8);

    for x in 0..image_a.buffer.ncols() {
        for y in 0..height {
            target_image.buffer[(y, x)] = image_a.buffer[(y, x)];
        }
    }
    for x in 0..image_b.buffer.ncols() {
        for y in 0..height {
            target_image.buffer[(y, x + width_a)] = image_b.buffer[(y, x)];
        }
    }

    for m in matches {
        let keypoint_a = &keypoints_a[m.index_a];
        let keypoint_b = &keypoints_b[m.index_b];

        draw_square(&mut target_image, keypoint_a.origin.row, keypoint_a.origin.column, 1);
        draw_square(&mut target_image, keypoint_b.origin.row, width_a + keypoint_b.origin.column, 1);
    }

    target_image
}
