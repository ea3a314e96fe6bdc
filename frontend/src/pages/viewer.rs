use gloo::net::http::Request;
use shared::wheel_config::{validate_settings, BackgroundMode, WheelSettings};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::WheelWidget;
use crate::config::{get_api_base_url, get_asset_url};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ViewerProps {
    pub slug: String,
}

/// Full-screen player for one stored wheel document.
#[function_component(Viewer)]
pub fn viewer(props: &ViewerProps) -> Html {
    let settings = use_state(|| None::<WheelSettings>);
    let error_message = use_state(|| None::<String>);

    {
        let settings = settings.clone();
        let error_message = error_message.clone();
        let slug = props.slug.clone();

        use_effect_with(props.slug.clone(), move |_| {
            spawn_local(async move {
                match fetch_settings(&slug).await {
                    Ok(loaded) => {
                        if let Err(e) = validate_settings(&loaded) {
                            log::warn!("wheel document failed validation: {:?}", e);
                        }
                        settings.set(Some(loaded));
                    }
                    Err(err) => error_message.set(Some(err)),
                }
            });
            || ()
        });
    }

    let on_event = Callback::from(|event: shared::engine::EngineEvent| {
        log::info!("wheel event: {:?}", event);
    });

    match (&*settings, &*error_message) {
        (Some(settings), _) => html! {
            <div class={styles::VIEWER_SHELL} style={background_style(settings)}>
                <div class={styles::VIEWER_SCRIM} />
                <div class={styles::VIEWER_COLUMN}>
                    <div class={styles::TITLE_CARD}>
                        <h1 class={styles::TEXT_H1}>{ &settings.title }</h1>
                        if let Some(subtitle) = &settings.subtitle {
                            if !subtitle.is_empty() {
                                <p class={styles::TEXT_SUBTITLE}>{ subtitle }</p>
                            }
                        }
                    </div>

                    <div class="flex-1 flex items-center justify-center">
                        <div class={styles::WHEEL_CARD}>
                            <WheelWidget settings={settings.clone()} on_event={on_event} />
                        </div>
                    </div>

                    if let Some(footer) = &settings.footer {
                        if !footer.is_empty() {
                            <div class="pt-2">
                                <div class={styles::FOOTER_BAR}>{ footer }</div>
                            </div>
                        }
                    }
                </div>
            </div>
        },
        (None, Some(err)) => html! {
            <div class={styles::CONTAINER_CENTERED}>
                <p class={styles::TEXT_ERROR}>{ err }</p>
            </div>
        },
        (None, None) => html! {
            <div class={styles::CONTAINER_CENTERED}>
                <p class="opacity-70">{ "Loading…" }</p>
            </div>
        },
    }
}

async fn fetch_settings(slug: &str) -> Result<WheelSettings, String> {
    let url = format!("{}/games/{}", get_api_base_url(), slug);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;
    if !response.ok() {
        return Err(format!("Could not load this wheel ({})", response.status()));
    }
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Bad response: {:?}", e))?;

    // Stored documents wrap the settings; tolerate both shapes.
    let doc = value.get("settings").cloned().unwrap_or(value);
    serde_json::from_value(doc).map_err(|e| format!("Malformed wheel document: {}", e))
}

fn background_style(settings: &WheelSettings) -> String {
    match settings.background_mode {
        BackgroundMode::Gradient => {
            let g = settings.bg_gradient.clone().unwrap_or_default();
            format!(
                "background-image: linear-gradient({}deg, {}, {}); background-size: cover; background-position: center;",
                g.angle, g.from, g.to
            )
        }
        BackgroundMode::Image => match &settings.background_url {
            Some(url) if !url.is_empty() => format!(
                "background-image: url({}); background-size: cover; background-position: center;",
                get_asset_url(url)
            ),
            _ => String::new(),
        },
    }
}
