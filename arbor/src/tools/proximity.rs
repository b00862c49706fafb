//! Distance from a coding region to the repeat regions of its record.
//!
//! The distance is directional rather than a geometric gap: when the coding
//! region starts after a repeat, the repeat end is subtracted from the coding
//! start; otherwise the coding end is subtracted from the repeat start.
//! Overlapping intervals therefore yield negative distances, and the coding
//! end is never looked at in the first branch. Downstream thresholds were
//! tuned against exactly this formula.

use crate::data_structs::coords::Interval;
use crate::data_structs::typedef::PosType;

/// Directional distance between a coding region and a single repeat.
pub fn repeat_distance(
    coding: &Interval,
    repeat: &Interval,
) -> PosType {
    if coding.start() > repeat.start() {
        coding.start() - repeat.end()
    }
    else {
        repeat.start() - coding.end()
    }
}

/// Minimum [`repeat_distance`] over `repeats`, `+inf` if there are none.
pub fn distance_to_nearest_repeat(
    coding: &Interval,
    repeats: &[Interval],
) -> f64 {
    repeats
        .iter()
        .map(|repeat| repeat_distance(coding, repeat))
        .min()
        .map(|distance| distance as f64)
        .unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Interval::new(0, 10))]
    #[case(Interval::new(1_000, 5_000))]
    fn test_no_repeats_is_infinite(#[case] coding: Interval) {
        assert_eq!(distance_to_nearest_repeat(&coding, &[]), f64::INFINITY);
    }

    #[rstest]
    // Coding region downstream of the repeat.
    #[case(Interval::new(100, 200), Interval::new(0, 50), 50)]
    // Coding region upstream of the repeat.
    #[case(Interval::new(0, 50), Interval::new(100, 200), 50)]
    // Same start falls into the upstream branch.
    #[case(Interval::new(100, 200), Interval::new(100, 150), -100)]
    // Overlap from the right goes negative.
    #[case(Interval::new(120, 400), Interval::new(100, 300), -180)]
    // Coding region containing the repeat.
    #[case(Interval::new(0, 1_000), Interval::new(400, 500), -600)]
    fn test_repeat_distance(
        #[case] coding: Interval,
        #[case] repeat: Interval,
        #[case] expected: PosType,
    ) {
        assert_eq!(repeat_distance(&coding, &repeat), expected);
        assert_eq!(
            distance_to_nearest_repeat(&coding, &[repeat]),
            expected as f64
        );
    }

    #[test]
    fn test_minimum_over_repeats() {
        let coding = Interval::new(10_000, 11_000);
        let repeats = [
            Interval::new(0, 500),
            Interval::new(12_000, 12_500),
            Interval::new(9_000, 9_800),
            Interval::new(50_000, 51_000),
        ];
        assert_eq!(distance_to_nearest_repeat(&coding, &repeats), 200.0);
    }

    #[test]
    fn test_not_a_geometric_gap() {
        // A repeat fully downstream but starting before the coding start
        // is measured from its end, not its nearest edge.
        let coding = Interval::new(500, 600);
        let repeat = Interval::new(400, 10_000);
        assert_eq!(distance_to_nearest_repeat(&coding, &[repeat]), -9_500.0);
    }
}
