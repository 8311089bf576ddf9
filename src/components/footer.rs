use chrono::{Datelike, Local};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub note: AttrValue,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{format!("© {} {}", year, props.note)}</p>
        </footer>
    }
}
