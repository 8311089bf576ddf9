use yew::prelude::*;

use crate::animation::{delay_style, FADE_IN_UP, PARALLAX_FLOAT};
use crate::components::nav::jump_callback;
use crate::config;
use crate::tracking::scroll::{ParallaxFactor, ScrollOffset};
use crate::tracking::section::SectionId;

/// Decorative circles drifting over the hero: (extra classes, animation delay).
const FLOATERS: [(&str, &str); 4] = [
    ("floater floater-a blur", "0s"),
    ("floater floater-b", "2s"),
    ("floater floater-c blur", "4s"),
    ("floater floater-d", "1s"),
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub offset: ScrollOffset,
    pub headline: Vec<String>,
    pub tagline: AttrValue,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let back = props.offset.translate_y(ParallaxFactor::new(config::HERO_BACK_PARALLAX));
    let front = props.offset.translate_y(ParallaxFactor::new(config::HERO_FRONT_PARALLAX));

    // First line is the accent line, the rest render with the gradient
    let (accent, rest) = match props.headline.split_first() {
        Some((first, rest)) => (first.clone(), rest.join(" ")),
        None => (String::new(), String::new()),
    };

    html! {
        <section id={SectionId::Home.dom_id()} class="hero">
            <div class="hero-layer hero-layer-back" style={format!("transform: {};", back)}></div>
            <div class="hero-layer hero-layer-front" style={format!("transform: {};", front)}></div>

            {
                for FLOATERS.iter().map(|(class, delay)| html! {
                    <div class={classes!(PARALLAX_FLOAT, class.to_string())} style={delay_style(delay)}></div>
                })
            }

            <div class="hero-content">
                <div class={FADE_IN_UP}>
                    <h1 class="hero-title">
                        <span class="hero-accent animate-text-glow">{accent}</span>
                        <span class="text-gradient">{rest}</span>
                    </h1>
                    <p class="hero-subtitle">{props.tagline.to_string()}</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={jump_callback(SectionId::Portfolio)}>
                            {"View My Work"}<span class="cta-arrow">{" →"}</span>
                        </button>
                        <button class="hero-cta outline" onclick={jump_callback(SectionId::Contact)}>
                            {"Get In Touch"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
