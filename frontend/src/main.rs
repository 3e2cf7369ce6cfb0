use log::info;
use yew::prelude::*;

mod animation;
mod config;
mod feed;
mod navigation;
mod router;
mod scramble;
mod styles;
mod timer;
mod visibility;

mod components {
    pub mod footer;
    pub mod nav;
    pub mod scramble_text;
    pub mod scroll_to_top;
}
mod pages {
    pub mod about;
    pub mod assessment;
    pub mod faq;
    pub mod hero;
    pub mod home;
    pub mod insights;
    pub mod legal;
    pub mod method;
    pub mod problem;
    pub mod process;
    pub mod qualification;
}

use pages::{
    home::Home,
    legal::{PrivacyPolicy, TermsOfService},
};
use router::{use_route, View};

fn render(view: View) -> Html {
    match view {
        View::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        View::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        View::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let route = use_route();

    html! {
        <>
            <style>{styles::SITE_CSS}</style>
            { render(route.view()) }
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
