use shared::wheel_config::default_settings;
use yew::prelude::*;

use crate::components::WheelWidget;
use crate::styles;

/// Demo wheel on the default document, shown when no game slug is given.
#[function_component(Home)]
pub fn home() -> Html {
    let settings = use_state(|| default_settings(Some("Spin Challenge")));

    html! {
        <div
            class={styles::VIEWER_SHELL}
            style="background-image: linear-gradient(45deg, #020617, #1e293b);"
        >
            <div class={styles::VIEWER_COLUMN}>
                <div class={styles::TITLE_CARD}>
                    <h1 class={styles::TEXT_H1}>{ &settings.title }</h1>
                    <p class={styles::TEXT_SUBTITLE}>
                        { "Spin the wheel and see where it lands." }
                    </p>
                </div>

                <div class="flex-1 flex items-center justify-center">
                    <div class={styles::WHEEL_CARD}>
                        <WheelWidget settings={(*settings).clone()} />
                    </div>
                </div>
            </div>
        </div>
    }
}
