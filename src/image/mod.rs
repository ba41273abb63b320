extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{DynamicImage, GrayImage, Luma, Pixel};
use na::{DMatrix, Matrix2};
use serde::{Serialize, Deserialize};

use crate::error::DescriptorError;
use crate::features::geometry::point::Point;
use crate::{Float, float};
use self::gauss_kernel::GaussKernel;
use self::image_encoding::ImageEncoding;

pub mod filter;
pub mod gauss_kernel;
pub mod image_encoding;
pub mod kernel;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Interpolation {
    Nearest,
    Bilinear
}

/// Single-channel image backed by a row/column matrix of intensities.
#[derive(Debug, Clone)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn empty(width: usize, height: usize, image_encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::zeros(height, width);
        Image { buffer, original_encoding: image_encoding }
    }

    pub fn from_matrix(matrix: &DMatrix<Float>, original_encoding: ImageEncoding, normalize: bool) -> Image {
        let mut buffer = matrix.clone();

        if normalize {
            let max = buffer.amax();
            if max > 0.0 {
                for elem in buffer.iter_mut() {
                    *elem = *elem / max;
                }
            }
        }

        Image { buffer, original_encoding }
    }

    pub fn from_gray_image(image: &GrayImage, normalize: bool) -> Image {
        let (width, height) = image.dimensions();
        let mut vec_column_major = Vec::<Float>::with_capacity((width * height) as usize);
        for x in 0..width {
            for y in 0..height {
                let pixel_value = image.get_pixel(x, y).channels()[0];
                vec_column_major.push(pixel_value as Float);
            }
        }
        let matrix = DMatrix::<Float>::from_vec(height as usize, width as usize, vec_column_major);

        Image::from_matrix(&matrix, ImageEncoding::U8, normalize)
    }

    pub fn to_image(&self) -> GrayImage {
        let (rows, cols) = self.buffer.shape();

        let mut gray_image = DynamicImage::new_luma8(cols as u32, rows as u32).to_luma8();
        let max = self.buffer.max();
        let min = self.buffer.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = self.buffer[(r, c)];
                let pixel_value = self.original_encoding.normalize_to_gray(max, min, val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }

    pub fn intensity(&self, point: &Point<usize>) -> Float {
        self.buffer[(point.row, point.column)]
    }

    /// Crop with a top-left origin. The requested window must lie entirely
    /// inside the image.
    pub fn crop(&self, origin: &Point<usize>, width: usize, height: usize) -> Result<Image, DescriptorError> {
        let rows = self.buffer.nrows();
        let cols = self.buffer.ncols();

        if width == 0 || height == 0 || origin.row + height > rows || origin.column + width > cols {
            return Err(DescriptorError::CropOutOfBounds {
                row: origin.row,
                column: origin.column,
                width,
                height,
                image_width: cols,
                image_height: rows
            });
        }

        let buffer = DMatrix::<Float>::from_fn(height, width, |r, c| self.buffer[(origin.row + r, origin.column + c)]);

        Ok(Image { buffer, original_encoding: self.original_encoding })
    }

    /// Crop of an odd-width square centered on the given pixel.
    pub fn extract_square(&self, center: &Point<usize>, width: usize) -> Result<Image, DescriptorError> {
        let half_width = (width - 1) / 2;
        let out_of_bounds = DescriptorError::CropOutOfBounds {
            row: center.row,
            column: center.column,
            width,
            height: width,
            image_width: self.buffer.ncols(),
            image_height: self.buffer.nrows()
        };

        let top = match center.row.checked_sub(half_width) {
            Some(top) => top,
            None => return Err(out_of_bounds)
        };
        let left = match center.column.checked_sub(half_width) {
            Some(left) => left,
            None => return Err(out_of_bounds)
        };

        self.crop(&Point::new(top, left), width, width)
    }

    /// Rotates the image content about `center`. Positive angles turn the
    /// content clockwise in row-down coordinates, matching the keypoint angle
    /// convention. Samples falling outside the source are filled with 0.
    pub fn rotate(&self, angle_degrees: Float, center: &Point<Float>, interpolation: Interpolation) -> Image {
        let theta = angle_degrees * float::consts::PI / 180.0;
        let rotation = Matrix2::new(theta.cos(), -theta.sin(),
                                    theta.sin(), theta.cos());

        let rows = self.buffer.nrows();
        let cols = self.buffer.ncols();

        let buffer = DMatrix::<Float>::from_fn(rows, cols, |r, c| {
            let delta_row = r as Float - center.row;
            let delta_column = c as Float - center.column;
            let source_row = rotation[(0, 0)] * delta_row + rotation[(0, 1)] * delta_column + center.row;
            let source_column = rotation[(1, 0)] * delta_row + rotation[(1, 1)] * delta_column + center.column;

            match interpolation {
                Interpolation::Nearest => self.sample_nearest(source_row, source_column),
                Interpolation::Bilinear => self.sample_bilinear(source_row, source_column)
            }
        });

        Image { buffer, original_encoding: self.original_encoding }
    }

    /// Smooths with a normalized separable Gaussian of the given window size.
    pub fn gaussian_blur(&self, sigma: Float, size: usize) -> Image {
        let half_width = match size {
            0 | 1 => return self.clone(),
            size => (size - 1) / 2
        };
        let kernel = GaussKernel::new(0.0, sigma, half_width);
        filter::filter_separable(self, &kernel)
    }

    fn sample_nearest(&self, row: Float, column: Float) -> Float {
        let rows = self.buffer.nrows();
        let cols = self.buffer.ncols();
        let r = row.round();
        let c = column.round();

        if r < 0.0 || c < 0.0 || r as usize >= rows || c as usize >= cols {
            return 0.0;
        }
        self.buffer[(r as usize, c as usize)]
    }

    fn sample_bilinear(&self, row: Float, column: Float) -> Float {
        let rows = self.buffer.nrows();
        let cols = self.buffer.ncols();

        if row < 0.0 || column < 0.0 || row > (rows - 1) as Float || column > (cols - 1) as Float {
            return 0.0;
        }

        let r0 = row.trunc() as usize;
        let c0 = column.trunc() as usize;
        let r1 = (r0 + 1).min(rows - 1);
        let c1 = (c0 + 1).min(cols - 1);
        let fr = row - r0 as Float;
        let fc = column - c0 as Float;

        (1.0 - fr) * (1.0 - fc) * self.buffer[(r0, c0)]
            + (1.0 - fr) * fc * self.buffer[(r0, c1)]
            + fr * (1.0 - fc) * self.buffer[(r1, c0)]
            + fr * fc * self.buffer[(r1, c1)]
    }
}
