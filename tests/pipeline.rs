use nalgebra as na;

use na::DMatrix;
use rbrief::compute_descriptors;
use rbrief::descriptor::patch_extractor::extract_patch;
use rbrief::descriptor::sampling_pattern::SamplingPattern;
use rbrief::descriptor::BriefDescriptor;
use rbrief::error::DescriptorError;
use rbrief::features::geometry::point::Point;
use rbrief::features::KeyPoint;
use rbrief::image::image_encoding::ImageEncoding;
use rbrief::image::{Image, Interpolation};
use rbrief::runtime_parameters::DescriptorRuntimeParameters;
use rbrief::Float;

fn noise_image(height: usize, width: usize) -> Image {
    let matrix = DMatrix::<Float>::from_fn(height, width, |r, c| {
        ((r.wrapping_mul(2654435761) ^ c.wrapping_mul(40503)) % 251) as Float
    });
    Image::from_matrix(&matrix, ImageEncoding::F64, false)
}

fn bright_square_image() -> Image {
    let matrix = DMatrix::<Float>::from_fn(64, 64, |r, c| {
        if (20..30).contains(&r) && (20..30).contains(&c) {
            200.0
        } else {
            40.0
        }
    });
    Image::from_matrix(&matrix, ImageEncoding::F64, false)
}

#[test]
fn test_descriptor_and_index_invariants() {
    let image = noise_image(100, 100);
    let keypoints = vec![
        KeyPoint::new(0, 0, 0.0),
        KeyPoint::new(50, 50, 33.0),
        KeyPoint::new(30, 70, 290.0),
        KeyPoint::new(99, 99, 120.0),
    ];
    let runtime_parameters = DescriptorRuntimeParameters {
        descriptor_length: 128,
        ..DescriptorRuntimeParameters::default()
    };

    let computation = compute_descriptors(&image, &keypoints, &runtime_parameters).unwrap();

    assert_eq!(computation.descriptors.len(), computation.surviving_indices.len());
    assert!(computation.surviving_indices.len() <= keypoints.len());
    for descriptor in &computation.descriptors {
        assert_eq!(descriptor.len(), 128);
    }

    let mut all_indices = computation.surviving_indices.clone();
    all_indices.extend(&computation.skipped_indices);
    all_indices.sort_unstable();
    assert_eq!(all_indices, (0..keypoints.len()).collect::<Vec<usize>>());
}

#[test]
fn test_border_keypoint_is_excluded_from_parallel_arrays() {
    let image = noise_image(100, 100);
    let keypoints = vec![KeyPoint::new(0, 0, 0.0), KeyPoint::new(50, 50, 0.0)];

    let computation = compute_descriptors(&image, &keypoints, &DescriptorRuntimeParameters::default()).unwrap();

    assert_eq!(computation.skipped_indices, vec![0]);
    assert_eq!(computation.surviving_indices, vec![1]);
    assert_eq!(computation.descriptors.len(), 1);
}

#[test]
fn test_quarter_turn_rotation_invariance() {
    let image = noise_image(65, 65);
    let center = Point::new(32.0 as Float, 32.0 as Float);
    let rotated_image = image.rotate(90.0, &center, Interpolation::Nearest);

    let runtime_parameters = DescriptorRuntimeParameters {
        descriptor_length: 128,
        ..DescriptorRuntimeParameters::default()
    };

    let upright = compute_descriptors(&image, &vec![KeyPoint::new(32, 32, 0.0)], &runtime_parameters).unwrap();
    let turned = compute_descriptors(&rotated_image, &vec![KeyPoint::new(32, 32, 90.0)], &runtime_parameters).unwrap();

    assert_eq!(upright.descriptors.len(), 1);
    assert_eq!(turned.descriptors.len(), 1);

    let distance = upright.descriptors[0].hamming_distance(&turned.descriptors[0]);
    assert!(distance <= 2, "expected near-zero distance, got {}", distance);
}

#[test]
fn test_bright_square_regression() {
    let image = bright_square_image();
    let smoothed = image.gaussian_blur((2.0 as Float).sqrt(), 9);

    let runtime_parameters = DescriptorRuntimeParameters {
        patch_size: 9,
        descriptor_length: 8,
        ..DescriptorRuntimeParameters::default()
    };
    let patch = extract_patch(&smoothed, &KeyPoint::new(25, 25, 0.0), &runtime_parameters)
        .unwrap()
        .unwrap();

    // Pairs 0..4 compare the patch corners against its center, pairs 4..8 the
    // reverse. Smoothing pulls the corners below the all-bright center, so
    // the descriptor is fully determined by the intensity layout.
    let corners = [Point::new(0, 0), Point::new(0, 8), Point::new(8, 0), Point::new(8, 8)];
    let center = Point::new(4, 4);
    let mut points = Vec::<Point<usize>>::new();
    points.extend(&corners);
    points.extend(&[center; 4]);
    points.extend(&[center; 4]);
    points.extend(&corners);
    let pattern = SamplingPattern::from_points(points, 9, 9).unwrap();

    let descriptor = BriefDescriptor::encode(&patch, &pattern).unwrap();

    let expected = [true, true, true, true, false, false, false, false];
    for (i, bit) in expected.iter().enumerate() {
        assert_eq!(descriptor.bit(i), *bit, "bit {}", i);
    }
}

#[test]
fn test_bright_square_full_pipeline() {
    let image = bright_square_image();
    let runtime_parameters = DescriptorRuntimeParameters {
        patch_size: 9,
        descriptor_length: 8,
        ..DescriptorRuntimeParameters::default()
    };

    let computation = compute_descriptors(&image, &vec![KeyPoint::new(25, 25, 0.0)], &runtime_parameters).unwrap();

    assert_eq!(computation.surviving_indices, vec![0]);
    assert_eq!(computation.descriptors[0].len(), 8);
}

#[test]
fn test_encode_rejects_patch_smaller_than_pattern() {
    let points = vec![
        Point::new(0, 0),
        Point::new(8, 8),
        Point::new(4, 4),
        Point::new(0, 8),
    ];
    let pattern = SamplingPattern::from_points(points, 9, 9).unwrap();
    let patch = noise_image(7, 7);

    assert!(matches!(
        BriefDescriptor::encode(&patch, &pattern),
        Err(DescriptorError::PatternPatchMismatch { .. })
    ));
}

#[test]
fn test_invalid_batch_configuration_is_fatal() {
    let image = noise_image(64, 64);
    let keypoints = vec![KeyPoint::new(32, 32, 0.0)];

    let zero_length = DescriptorRuntimeParameters {
        descriptor_length: 0,
        ..DescriptorRuntimeParameters::default()
    };
    assert!(matches!(
        compute_descriptors(&image, &keypoints, &zero_length),
        Err(DescriptorError::InvalidDescriptorLength)
    ));

    let mut negative_sigma = DescriptorRuntimeParameters::default();
    negative_sigma.smoothing.sigma = -1.0;
    assert!(matches!(
        compute_descriptors(&image, &keypoints, &negative_sigma),
        Err(DescriptorError::InvalidSmoothingSigma(_))
    ));
}

#[test]
fn test_runtime_parameters_yaml_roundtrip() {
    let runtime_parameters = DescriptorRuntimeParameters {
        patch_size: 15,
        descriptor_length: 128,
        interpolation: Interpolation::Bilinear,
        allow_corners: true,
        ..DescriptorRuntimeParameters::default()
    };

    let serialized = runtime_parameters.to_yaml().unwrap();
    let deserialized = DescriptorRuntimeParameters::from_yaml(&serialized).unwrap();

    assert_eq!(deserialized.patch_size, 15);
    assert_eq!(deserialized.descriptor_length, 128);
    assert_eq!(deserialized.interpolation, Interpolation::Bilinear);
    assert!(deserialized.allow_corners);
}
