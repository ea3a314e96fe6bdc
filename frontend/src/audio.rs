use web_sys::{AudioContext, OscillatorType};

/// Best-effort sound for the wheel. Construction may fail (no audio
/// subsystem, autoplay policy) and every playback call may fail; both are
/// swallowed so the widget runs identically in a silent environment. The
/// completion signal for the sustained cue is the caller's job — it is a
/// plain timeout, not tied to actual audio output.
pub struct CueEmitter {
    ctx: Option<AudioContext>,
}

impl CueEmitter {
    pub fn new() -> Self {
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::debug!("audio context unavailable, cues disabled");
        }
        Self { ctx }
    }

    pub fn is_available(&self) -> bool {
        self.ctx.is_some()
    }

    /// Short blip on the tick cadence while the wheel turns.
    pub fn play_tick(&self) {
        let Some(ctx) = &self.ctx else { return };
        let (Ok(osc), Ok(gain)) = (ctx.create_oscillator(), ctx.create_gain()) else {
            return;
        };
        let now = ctx.current_time();

        osc.set_type(OscillatorType::Triangle);
        osc.frequency().set_value(1100.0);
        gain.gain().set_value(0.05);
        let _ = gain.gain().exponential_ramp_to_value_at_time(0.0001, now + 0.08);

        let _ = osc.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&ctx.destination());
        let _ = osc.start();
        let _ = osc.stop_with_when(now + 0.09);
    }

    /// Descending whoosh spanning the whole spin.
    pub fn play_sustained(&self, duration_ms: u32) {
        let Some(ctx) = &self.ctx else { return };
        let (Ok(osc), Ok(gain)) = (ctx.create_oscillator(), ctx.create_gain()) else {
            return;
        };
        let now = ctx.current_time();
        let duration = f64::from(duration_ms) / 1000.0;

        osc.set_type(OscillatorType::Sawtooth);
        let _ = osc.frequency().set_value_at_time(220.0, now);
        let _ = osc
            .frequency()
            .exponential_ramp_to_value_at_time(60.0, now + duration * 0.9);
        let _ = gain.gain().set_value_at_time(0.0001, now);
        let _ = gain.gain().exponential_ramp_to_value_at_time(0.2, now + 0.2);
        let _ = gain
            .gain()
            .exponential_ramp_to_value_at_time(0.0001, now + duration);

        let _ = osc.connect_with_audio_node(&gain);
        let _ = gain.connect_with_audio_node(&ctx.destination());
        let _ = osc.start();
        let _ = osc.stop_with_when(now + duration);
    }

    /// Two-note chime when the wheel lands, spread over the celebration
    /// window.
    pub fn play_celebration(&self, duration_ms: u32) {
        let Some(ctx) = &self.ctx else { return };
        let now = ctx.current_time();
        let duration = f64::from(duration_ms) / 1000.0;
        let note = duration / 3.0;
        for (offset, freq) in [(0.0, 660.0), (note, 880.0)] {
            let (Ok(osc), Ok(gain)) = (ctx.create_oscillator(), ctx.create_gain()) else {
                return;
            };
            osc.set_type(OscillatorType::Triangle);
            let _ = osc.frequency().set_value_at_time(freq, now + offset);
            let _ = gain.gain().set_value_at_time(0.08, now + offset);
            let _ = gain
                .gain()
                .exponential_ramp_to_value_at_time(0.0001, now + offset + note);

            let _ = osc.connect_with_audio_node(&gain);
            let _ = gain.connect_with_audio_node(&ctx.destination());
            let _ = osc.start_with_when(now + offset);
            let _ = osc.stop_with_when(now + offset + note);
        }
    }
}

impl Default for CueEmitter {
    fn default() -> Self {
        Self::new()
    }
}
