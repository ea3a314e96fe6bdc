use crate::constants::SpinTuning;

// The audible side of a spin is best-effort: the widget plays a short tick
// on a fixed cadence while the wheel turns and one sustained cue spanning
// the whole spin. Producing the audio is the render layer's job; everything
// here is a pure function of elapsed time so the sequencer never depends on
// an audio subsystem being present.

/// How many ticks should have sounded `elapsed_ms` into a spin. The cadence
/// is fixed and the tick train cuts off before the wheel crawls to a stop.
pub fn ticks_due(elapsed_ms: u32, tuning: &SpinTuning) -> u32 {
    if tuning.tick_interval_ms == 0 {
        return 0;
    }
    (elapsed_ms / tuning.tick_interval_ms).min(tuning.max_ticks)
}

/// Length of the sustained cue emitted when a spin starts. It spans the
/// spin, so its completion doubles as the "audio done" signal the sequencer
/// waits on before settling.
pub fn sustained_ms(tuning: &SpinTuning) -> u32 {
    tuning.spin_duration_ms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_cadence() {
        let tuning = SpinTuning::default();
        assert_eq!(ticks_due(0, &tuning), 0);
        assert_eq!(ticks_due(119, &tuning), 0);
        assert_eq!(ticks_due(120, &tuning), 1);
        assert_eq!(ticks_due(1200, &tuning), 10);
    }

    #[test]
    fn test_tick_train_is_capped() {
        let tuning = SpinTuning::default();
        assert_eq!(ticks_due(tuning.spin_duration_ms, &tuning), tuning.max_ticks);
        assert_eq!(ticks_due(u32::MAX, &tuning), tuning.max_ticks);
    }

    #[test]
    fn test_sustained_cue_spans_the_spin() {
        let tuning = SpinTuning::default();
        assert_eq!(sustained_ms(&tuning), tuning.spin_duration_ms);
    }
}
