use rbrief::descriptor::BriefDescriptor;
use rbrief::matching::{match_descriptors, Match};
use rbrief::runtime_parameters::MatcherParameters;

fn descriptor(bits: &[u8]) -> BriefDescriptor {
    let bools = bits.iter().map(|b| *b != 0).collect::<Vec<bool>>();
    BriefDescriptor::from_bits(&bools)
}

#[test]
#[should_panic]
fn test_descriptor_requires_at_least_one_bit() {
    descriptor(&[]);
}

#[test]
fn test_self_matching_with_cross_check_is_identity() {
    let descriptors = vec![
        descriptor(&[0, 0, 0, 0]),
        descriptor(&[1, 0, 0, 0]),
        descriptor(&[1, 1, 0, 0]),
        descriptor(&[1, 1, 1, 0]),
    ];
    let parameters = MatcherParameters {
        cross_check: true,
        ..MatcherParameters::default()
    };

    let matches = match_descriptors(&descriptors, &descriptors, &parameters);

    assert_eq!(matches.len(), descriptors.len());
    for (i, m) in matches.iter().enumerate() {
        assert_eq!(m.index_a, i);
        assert_eq!(m.index_b, i);
        assert_eq!(m.distance, 0);
    }
}

#[test]
fn test_ties_break_towards_lowest_index() {
    let descriptors_a = vec![descriptor(&[0, 0])];
    let descriptors_b = vec![descriptor(&[1, 0]), descriptor(&[0, 1])];

    let matches = match_descriptors(&descriptors_a, &descriptors_b, &MatcherParameters::default());

    assert_eq!(matches, vec![Match { index_a: 0, index_b: 0, distance: 1 }]);
}

#[test]
fn test_max_distance_discards_weak_matches() {
    let descriptors_a = vec![descriptor(&[1, 1, 1, 1]), descriptor(&[1, 1, 0, 0])];
    let descriptors_b = vec![descriptor(&[1, 1, 0, 0])];
    let parameters = MatcherParameters {
        max_distance: Some(1),
        ..MatcherParameters::default()
    };

    let matches = match_descriptors(&descriptors_a, &descriptors_b, &parameters);

    assert_eq!(matches, vec![Match { index_a: 1, index_b: 0, distance: 0 }]);
}

#[test]
fn test_ratio_filter_requires_a_distinctive_best_match() {
    let descriptors_a = vec![descriptor(&[1, 1, 1, 1, 0, 0, 0, 0])];
    // best and second best both at distance 1: 1 >= 0.6 * 1, rejected
    let ambiguous = vec![
        descriptor(&[1, 1, 1, 0, 0, 0, 0, 0]),
        descriptor(&[1, 1, 1, 1, 1, 0, 0, 0]),
    ];
    // best at distance 1, second best at distance 7: 1 < 0.6 * 7, kept
    let distinctive = vec![
        descriptor(&[1, 1, 1, 0, 0, 0, 0, 0]),
        descriptor(&[0, 0, 0, 0, 1, 1, 1, 0]),
    ];
    let parameters = MatcherParameters {
        ratio: Some(0.6),
        ..MatcherParameters::default()
    };

    assert!(match_descriptors(&descriptors_a, &ambiguous, &parameters).is_empty());
    assert_eq!(
        match_descriptors(&descriptors_a, &distinctive, &parameters),
        vec![Match { index_a: 0, index_b: 0, distance: 1 }]
    );
}

#[test]
fn test_cross_check_rejects_asymmetric_matches() {
    let descriptors_a = vec![descriptor(&[1, 0, 0, 0]), descriptor(&[1, 1, 0, 0])];
    let descriptors_b = vec![descriptor(&[1, 1, 0, 0])];

    let without_cross_check = match_descriptors(&descriptors_a, &descriptors_b, &MatcherParameters::default());
    assert_eq!(without_cross_check.len(), 2);

    let parameters = MatcherParameters {
        cross_check: true,
        ..MatcherParameters::default()
    };
    let matches = match_descriptors(&descriptors_a, &descriptors_b, &parameters);

    assert_eq!(matches, vec![Match { index_a: 1, index_b: 0, distance: 0 }]);
}

#[test]
fn test_result_is_ordered_by_first_index() {
    let descriptors_a = vec![
        descriptor(&[1, 1, 0, 0]),
        descriptor(&[0, 0, 1, 1]),
        descriptor(&[1, 0, 1, 0]),
    ];
    let descriptors_b = descriptors_a.clone();

    let matches = match_descriptors(&descriptors_a, &descriptors_b, &MatcherParameters::default());

    let indices = matches.iter().map(|m| m.index_a).collect::<Vec<usize>>();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_empty_target_set_yields_no_matches() {
    let descriptors_a = vec![descriptor(&[1, 0])];
    let descriptors_b = Vec::<BriefDescriptor>::new();

    let matches = match_descriptors(&descriptors_a, &descriptors_b, &MatcherParameters::default());

    assert!(matches.is_empty());
}
