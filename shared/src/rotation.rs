use rand::Rng;

use crate::constants::SpinTuning;

/// Angular width of one slice.
pub fn slice_angle(slice_count: usize) -> f64 {
    360.0 / slice_count.max(1) as f64
}

/// Clockwise angle from the wheel's zero orientation to the center of the
/// given slice.
pub fn winner_center(slice_count: usize, winner_index: usize) -> f64 {
    let angle = slice_angle(slice_count);
    winner_index as f64 * angle + angle / 2.0
}

/// Folds any rotation into [0, 360).
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

/// How far (in degrees, [0, 180]) the winner's center sits from the fixed
/// top pointer at the given rotation. Zero means the pointer is dead on the
/// center.
pub fn pointer_offset(rotation: f64, slice_count: usize, winner_index: usize) -> f64 {
    let off = normalize_degrees(winner_center(slice_count, winner_index) + rotation);
    off.min(360.0 - off)
}

/// Plans the rotation for one spin: from wherever the wheel currently
/// rests, add 6-8 full turns plus exactly the forward delta that parks the
/// winner's center under the pointer. The result is always strictly greater
/// than `current_rotation`, so the wheel never runs backwards.
pub fn plan_rotation<R: Rng>(
    slice_count: usize,
    winner_index: usize,
    current_rotation: f64,
    tuning: &SpinTuning,
    rng: &mut R,
) -> f64 {
    let center = winner_center(slice_count, winner_index);
    let residual = normalize_degrees(current_rotation);
    let delta = normalize_degrees(360.0 - normalize_degrees(center + residual));
    let turns = rng.gen_range(tuning.min_full_turns..=tuning.max_full_turns);
    current_rotation + f64::from(turns) * 360.0 + delta
}
