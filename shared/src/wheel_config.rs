use std::collections::HashSet;

use rand::Rng;
use serde::{Serialize, Deserialize};
use validator::ValidationError;

use crate::constants::{
    DEFAULT_SLICE_COUNT, DEFAULT_TIMER_SECONDS, SLICE_PALETTE, TIMER_MAX_SECONDS,
    TIMER_MIN_SECONDS,
};

/// One sector of the wheel. Identity is the `id`; geometry comes from the
/// slice's position in `WheelSettings::slices`. Session view-state (whether
/// a slice has already been shown) is tracked separately and never stored
/// here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    pub id: String,
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub outcome_text: Option<String>,
    #[serde(default)]
    pub outcome_image_url: Option<String>,
    #[serde(default)]
    pub outcome_font_size: Option<u32>,
    #[serde(default)]
    pub outcome_image_scale: Option<f64>,
    /// Per-outcome countdown, independent of the global one.
    #[serde(default)]
    pub timer_seconds: Option<u32>,
    #[serde(default)]
    pub modal_heading: Option<String>,
    #[serde(default)]
    pub same_heading_as_label: Option<bool>,
}

impl Slice {
    /// Heading shown when this slice wins: the custom modal heading unless
    /// the slice asks to reuse its wheel label.
    pub fn heading(&self) -> &str {
        if self.same_heading_as_label.unwrap_or(true) {
            return &self.label;
        }
        match &self.modal_heading {
            Some(h) if !h.is_empty() => h,
            _ => &self.label,
        }
    }

    /// Per-outcome countdown length, if the slice declares one.
    pub fn outcome_timer(&self) -> Option<u32> {
        self.timer_seconds.filter(|&s| s > 0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundMode {
    Image,
    Gradient,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BgGradient {
    pub from: String,
    pub to: String,
    pub angle: f64,
}

impl Default for BgGradient {
    fn default() -> Self {
        Self {
            from: "#020617".to_string(),
            to: "#1e293b".to_string(),
            angle: 45.0,
        }
    }
}

fn default_background_mode() -> BackgroundMode {
    BackgroundMode::Image
}

/// A wheel configuration document as the editor stores it. The engine only
/// ever reads this; the document may be replaced between spins but is
/// immutable for the duration of one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WheelSettings {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default = "default_background_mode")]
    pub background_mode: BackgroundMode,
    #[serde(default)]
    pub background_url: Option<String>,
    #[serde(default)]
    pub bg_gradient: Option<BgGradient>,
    pub allow_repeats: bool,
    pub timer_enabled: bool,
    pub timer_seconds: u32,
    #[serde(default)]
    pub timer_minutes: u32,
    pub slices: Vec<Slice>,
}

impl WheelSettings {
    /// Full global countdown length. The editor stores minutes and seconds
    /// as separate fields.
    pub fn global_timer_seconds(&self) -> u32 {
        self.timer_minutes * 60 + self.timer_seconds
    }
}

/// Random opaque slice id, matching the short base-36 ids the editor
/// generates.
pub fn slice_id<R: Rng>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..7)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn make_slice<R: Rng>(n: usize, rng: &mut R) -> Slice {
    Slice {
        id: slice_id(rng),
        label: format!("Item {}", n),
        color: SLICE_PALETTE[(n - 1) % SLICE_PALETTE.len()].to_string(),
        icon_url: None,
        outcome_text: None,
        outcome_image_url: None,
        outcome_font_size: None,
        outcome_image_scale: None,
        timer_seconds: None,
        modal_heading: None,
        same_heading_as_label: Some(true),
    }
}

/// The document a brand-new wheel starts from: six palette-colored slices,
/// repeats allowed, no countdown.
pub fn default_settings(title: Option<&str>) -> WheelSettings {
    let mut rng = rand::thread_rng();
    let slices = (1..=DEFAULT_SLICE_COUNT)
        .map(|n| make_slice(n, &mut rng))
        .collect();

    WheelSettings {
        title: match title.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => "New Spin Game".to_string(),
        },
        subtitle: Some("Add a subtitle".to_string()),
        footer: None,
        background_mode: BackgroundMode::Image,
        background_url: None,
        bg_gradient: Some(BgGradient::default()),
        allow_repeats: true,
        timer_enabled: false,
        timer_seconds: DEFAULT_TIMER_SECONDS,
        timer_minutes: 0,
        slices,
    }
}

pub fn validate_slice(slice: &Slice) -> Result<(), ValidationError> {
    if slice.id.is_empty() {
        return Err(ValidationError::new("empty_slice_id"));
    }
    if slice.label.trim().is_empty() {
        return Err(ValidationError::new("empty_slice_label"));
    }
    Ok(())
}

pub fn validate_settings(settings: &WheelSettings) -> Result<(), ValidationError> {
    if settings.slices.is_empty() {
        return Err(ValidationError::new("no_slices"));
    }
    let mut seen = HashSet::new();
    for slice in &settings.slices {
        validate_slice(slice)?;
        if !seen.insert(slice.id.as_str()) {
            return Err(ValidationError::new("duplicate_slice_id"));
        }
    }
    if settings.timer_enabled {
        let total = settings.global_timer_seconds();
        if !(TIMER_MIN_SECONDS..=TIMER_MAX_SECONDS).contains(&total) {
            return Err(ValidationError::new("timer_out_of_range"));
        }
    }
    Ok(())
}
