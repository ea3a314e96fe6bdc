pub mod audio;
pub mod components;
pub mod config;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{home::Home, viewer::Viewer};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/game/:slug")]
    Viewer { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Viewer { slug } => html! { <Viewer slug={slug} /> },
        Route::NotFound => html! {
            <div class={styles::CONTAINER_CENTERED}>
                <p class={styles::TEXT_H2}>{ "This wheel does not exist." }</p>
            </div>
        },
    }
}
