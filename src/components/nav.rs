use log::error;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::tracking::browser::scroll_to_section;
use crate::tracking::scroll::ScrollOffset;
use crate::tracking::section::SectionId;

/// Smooth-scrolls to `section`, logging instead of failing when the page can't.
pub fn jump_to(section: SectionId) {
    if let Err(err) = scroll_to_section(section) {
        error!("Could not scroll to #{}: {}", section, err);
    }
}

pub fn jump_callback(section: SectionId) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        jump_to(section);
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: AttrValue,
    pub offset: ScrollOffset,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, offset } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let scrolled = offset.is_past(config::NAV_SCROLLED_AFTER);

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo text-gradient" onclick={jump_callback(SectionId::Home)}>
                    {brand.to_string()}
                </button>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        for SectionId::ALL.into_iter().map(|section| {
                            let menu_open = menu_open.clone();
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                menu_open.set(false);
                                jump_to(section);
                            });
                            html! {
                                <button key={section.dom_id()} class="nav-link" onclick={onclick}>
                                    {section.nav_label()}
                                </button>
                            }
                        })
                    }
                </div>
            </div>
        </nav>
    }
}
