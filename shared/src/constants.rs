use serde::{Serialize, Deserialize};

// Spin presentation defaults
pub const SPIN_DURATION_MS: u32 = 3800;   // Duration of the spin animation
pub const SETTLE_DELAY_MS: u32 = 1000;    // Pause between the wheel stopping and the outcome opening
pub const CELEBRATION_MS: u32 = 1000;     // Length of the celebration cue played when the wheel settles
pub const MIN_FULL_TURNS: u32 = 6;        // Minimum number of full rotations per spin
pub const MAX_FULL_TURNS: u32 = 8;        // Maximum number of full rotations per spin
pub const TICK_INTERVAL_MS: u32 = 120;    // Cadence of the tick cue while spinning
pub const MAX_TICKS: u32 = 22;            // Tick cue stops after this many ticks
pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;  // Countdowns advance once per second

// Document defaults and editor limits
pub const DEFAULT_SLICE_COUNT: usize = 6;
pub const DEFAULT_TIMER_SECONDS: u32 = 15;
pub const TIMER_MIN_SECONDS: u32 = 3;
pub const TIMER_MAX_SECONDS: u32 = 300;

pub const SLICE_PALETTE: [&str; 8] = [
    "#ad1a1a",
    "#b44700",
    "#b48a00",
    "#2a7e4f",
    "#2663ad",
    "#7a2aad",
    "#ad2564",
    "#5a5a5a",
];

/// Timing knobs for the spin presentation. Product-tunable; the defaults
/// are the values the widget ships with.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinTuning {
    pub spin_duration_ms: u32,
    pub settle_delay_ms: u32,
    pub celebration_ms: u32,
    pub min_full_turns: u32,
    pub max_full_turns: u32,
    pub tick_interval_ms: u32,
    pub max_ticks: u32,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            spin_duration_ms: SPIN_DURATION_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            celebration_ms: CELEBRATION_MS,
            min_full_turns: MIN_FULL_TURNS,
            max_full_turns: MAX_FULL_TURNS,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_ticks: MAX_TICKS,
        }
    }
}
