use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod animation;
mod config;
mod content;
mod tracking {
    pub mod browser;
    pub mod error;
    pub mod hooks;
    pub mod scroll;
    pub mod section;
    pub mod subscription;
    pub mod visibility;
    #[cfg(test)]
    pub mod fakes;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav;
    pub mod projects;
    pub mod styles;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::styles::PortfolioStyles;
use pages::{home::Home, not_found::NotFound};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <PortfolioStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
