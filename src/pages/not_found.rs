use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1 class="text-gradient">{"404"}</h1>
            <p class="muted-text">{"There's nothing here."}</p>
            <Link<Route> to={Route::Home} classes="hero-cta">
                {"Back to the portfolio"}
            </Link<Route>>
        </div>
    }
}
