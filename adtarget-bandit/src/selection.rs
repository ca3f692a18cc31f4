//! Pure arm-selection functions.

use rand::seq::SliceRandom;
use rand::Rng;

use adtarget_core::models::BanditArms;
use adtarget_core::segment::Segment;

/// ε clamped to [0, 1]. NaN counts as 0 (never explore).
pub fn clamp_epsilon(epsilon: f64) -> f64 {
    if epsilon.is_nan() {
        0.0
    } else {
        epsilon.clamp(0.0, 1.0)
    }
}

/// Whether this draw explores.
pub fn should_explore<R: Rng + ?Sized>(epsilon: f64, rng: &mut R) -> bool {
    rng.gen::<f64>() < clamp_epsilon(epsilon)
}

/// A uniformly random subset of `eligible`, at most `max_segments` long.
pub fn explore<R: Rng + ?Sized>(eligible: &[Segment], max_segments: usize, rng: &mut R) -> Vec<Segment> {
    eligible
        .choose_multiple(rng, max_segments)
        .cloned()
        .collect()
}

/// The `max_segments` eligible arms with the highest mean reward.
///
/// Arms without statistics are worth 0.0. Equal values keep eligible order.
pub fn exploit(eligible: &[Segment], arms: &BanditArms, max_segments: usize) -> Vec<Segment> {
    let mut valued: Vec<(&Segment, f64)> = eligible
        .iter()
        .map(|segment| {
            let value = arms.get(segment).map_or(0.0, |stats| stats.value());
            (segment, value)
        })
        .collect();
    valued.sort_by(|a, b| b.1.total_cmp(&a.1));
    valued
        .into_iter()
        .take(max_segments)
        .map(|(segment, _)| segment.clone())
        .collect()
}
