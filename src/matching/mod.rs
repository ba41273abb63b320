extern crate rayon;

use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::descriptor::BriefDescriptor;
use crate::runtime_parameters::MatcherParameters;
use crate::Float;

/// Correspondence between two descriptor sets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub index_a: usize,
    pub index_b: usize,
    pub distance: u64
}

/// Matches every descriptor of `descriptors_a` against its Hamming-nearest
/// neighbor in `descriptors_b`. Ties are broken towards the lowest index.
///
/// With `cross_check` enabled a match survives only if the nearest neighbor
/// of the matched B descriptor is the original A descriptor again;
/// `max_distance` and the best/second-best `ratio` additionally discard weak
/// matches. The result is ordered by `index_a`. A-shards are evaluated in
/// parallel over the read-only descriptor slices.
pub fn match_descriptors(descriptors_a: &Vec<BriefDescriptor>, descriptors_b: &Vec<BriefDescriptor>, matcher_parameters: &MatcherParameters) -> Vec<Match> {
    descriptors_a
        .par_iter()
        .enumerate()
        .filter_map(|(index_a, descriptor_a)| {
            let ((index_b, distance), second_distance) = nearest_two_in(descriptor_a, descriptors_b)?;

            if let Some(max_distance) = matcher_parameters.max_distance {
                if distance > max_distance {
                    return None;
                }
            }

            if let (Some(ratio), Some(second_distance)) = (matcher_parameters.ratio, second_distance) {
                if distance as Float >= ratio * second_distance as Float {
                    return None;
                }
            }

            if matcher_parameters.cross_check {
                let ((back_index, _), _) = nearest_two_in(&descriptors_b[index_b], descriptors_a)?;
                if back_index != index_a {
                    return None;
                }
            }

            Some(Match { index_a, index_b, distance })
        })
        .collect::<Vec<Match>>()
}

fn nearest_two_in(descriptor: &BriefDescriptor, other_descriptors: &Vec<BriefDescriptor>) -> Option<((usize, u64), Option<u64>)> {
    let mut best: Option<(usize, u64)> = None;
    let mut second_distance: Option<u64> = None;

    for (idx, other) in other_descriptors.iter().enumerate() {
        let distance = descriptor.hamming_distance(other);
        match best {
            None => best = Some((idx, distance)),
            Some((_, best_distance)) if distance < best_distance => {
                second_distance = Some(best_distance);
                best = Some((idx, distance));
            }
            _ => {
                second_distance = match second_distance {
                    None => Some(distance),
                    Some(second) if distance < second => Some(distance),
                    second => second
                };
            }
        }
    }

    best.map(|best| (best, second_distance))
}
