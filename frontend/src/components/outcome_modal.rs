use shared::wheel_config::Slice;
use yew::prelude::*;

use crate::config::get_asset_url;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OutcomeModalProps {
    pub slice: Slice,
    pub global_countdown: Option<u32>,
    pub global_total: u32,
    pub outcome_countdown: Option<u32>,
    pub outcome_total: u32,
    /// True while another spin is possible; flips the button label.
    pub can_spin_again: bool,
    pub on_close: Callback<()>,
}

#[function_component(OutcomeModal)]
pub fn outcome_modal(props: &OutcomeModalProps) -> Html {
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_BACKDROP}>
            <div class={styles::MODAL_PANEL}>
                <h2 class="text-3xl font-bold mb-4 text-center">{ props.slice.heading() }</h2>

                if let Some(url) = &props.slice.outcome_image_url {
                    if !url.is_empty() {
                        <img
                            src={get_asset_url(url)}
                            class="mb-4 rounded-xl"
                            style={format!(
                                "max-height: 45vh; transform: scale({});",
                                props.slice.outcome_image_scale.unwrap_or(0.6)
                            )}
                            alt=""
                        />
                    }
                }

                if let Some(text) = &props.slice.outcome_text {
                    if !text.is_empty() {
                        <p
                            class="mb-4 text-center"
                            style={format!(
                                "font-size: {}px;",
                                props.slice.outcome_font_size.unwrap_or(20)
                            )}
                        >
                            { text }
                        </p>
                    }
                }

                <div class="flex gap-6">
                    if let Some(seconds) = props.global_countdown {
                        <CountdownRing seconds={seconds} total={props.global_total} />
                    }
                    if let Some(seconds) = props.outcome_countdown {
                        <CountdownRing seconds={seconds} total={props.outcome_total} />
                    }
                </div>

                <button onclick={on_close} class={styles::MODAL_BUTTON}>
                    { if props.can_spin_again { "Spin Again" } else { "Finish" } }
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CountdownRingProps {
    seconds: u32,
    total: u32,
}

/// Circular countdown: the ring empties as the seconds run out. Reaching
/// zero just leaves an empty ring on screen; nothing closes by itself.
#[function_component(CountdownRing)]
fn countdown_ring(props: &CountdownRingProps) -> Html {
    const CIRCUMFERENCE: f64 = 289.0;
    let total = props.total.max(1);
    let offset = (1.0 - f64::from(props.seconds) / f64::from(total)) * CIRCUMFERENCE;

    html! {
        <div class="relative mt-2">
            <div class="relative w-24 h-24 rounded-full bg-black/50 backdrop-blur-md flex items-center justify-center text-3xl font-bold text-pink-600 shadow-[0_0_30px_rgba(255,255,255,0.2)] animate-pulse">
                { props.seconds }
                <svg class="absolute inset-0" viewBox="0 0 100 100">
                    <circle cx="50" cy="50" r="46" fill="none" stroke="rgba(0,0,0,0.15)" stroke-width="6" />
                    <circle
                        cx="50" cy="50" r="46" fill="none" stroke="currentColor" stroke-width="6"
                        stroke-dasharray={CIRCUMFERENCE.to_string()}
                        stroke-dashoffset={offset.to_string()}
                    />
                </svg>
            </div>
        </div>
    }
}
