use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, nav::Nav, projects::Projects,
};
use crate::config;
use crate::content::Portfolio;
use crate::tracking::hooks::{use_scroll_offset, use_section_visibility};
use crate::tracking::section::SectionId;

/// The whole single-page portfolio. Owns the scroll and visibility state and
/// hands each section only the piece it renders from.
#[function_component(Home)]
pub fn home() -> Html {
    let content = use_memo(
        |_| match Portfolio::load() {
            Ok(portfolio) => {
                info!("Loaded portfolio content with {} projects", portfolio.projects.len());
                Some(Rc::new(portfolio))
            }
            Err(err) => {
                error!("Failed to load portfolio content: {}", err);
                None
            }
        },
        (),
    );
    let offset = use_scroll_offset();
    let visibility = use_section_visibility(&config::ANIMATED_SECTIONS, config::visibility_config());

    let portfolio: Option<Rc<Portfolio>> = (*content).clone();
    let title = portfolio
        .as_ref()
        .map(|portfolio| portfolio.site_title.clone())
        .unwrap_or_else(|| "Portfolio".to_string());
    use_title(title);

    let Some(content) = portfolio else {
        return html! {
            <div class="not-found">
                <h1>{"Something went wrong"}</h1>
                <p class="muted-text">{"This portfolio could not be loaded. Please try again later."}</p>
            </div>
        };
    };

    html! {
        <div class="portfolio-page">
            <Nav brand={content.brand.clone()} offset={offset} />
            <Hero offset={offset} headline={content.headline.clone()} tagline={content.tagline.clone()} />
            <About content={content.clone()} revealed={visibility.is_revealed(SectionId::About)} />
            <Projects content={content.clone()} revealed={visibility.is_revealed(SectionId::Portfolio)} />
            <Contact content={content.clone()} revealed={visibility.is_revealed(SectionId::Contact)} />
            <Footer note={content.footer_note.clone()} />
        </div>
    }
}
