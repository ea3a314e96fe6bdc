// Easing used for the spin: fast launch, hard deceleration into the stop.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Rotation to display `elapsed_ms` into a spin from `start` to `target`.
/// Monotonically increasing in elapsed time and exactly `target` once the
/// duration has passed; the curve in between is presentation only.
pub fn rotation_at(start: f64, target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    start + (target - start) * ease_out_cubic(progress)
}
