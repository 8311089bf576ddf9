use std::rc::Rc;

use yew::prelude::*;

use crate::animation::{delay_style, reveal_class, FADE_IN_LEFT, FADE_IN_RIGHT, PARALLAX_FLOAT};
use crate::content::Portfolio;
use crate::tracking::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: Rc<Portfolio>,
    pub revealed: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let content = &props.content;

    html! {
        <section id={SectionId::About.dom_id()} class="about-section muted" data-animate="true">
            <div class="section-inner about-grid">
                <div class={classes!("reveal", reveal_class(props.revealed, FADE_IN_LEFT))}>
                    <h2>{"About Me"}</h2>
                    { for content.about.iter().map(|paragraph| html! { <p class="lead">{paragraph}</p> }) }

                    <div class="focus-grid">
                        {
                            for content.focus_areas.iter().map(|area| html! {
                                <div class="focus-card hover-lift">
                                    <span class="focus-glyph">{area.kind.glyph()}</span>
                                    <div>
                                        <h3>{&area.title}</h3>
                                        <p class="muted-text">{&area.detail}</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>

                    <div class="badge-row">
                        { for content.skills.iter().map(|skill| html! { <span key={skill.clone()} class="badge">{skill}</span> }) }
                    </div>

                    {
                        if let Some(resume) = &content.resume_url {
                            html! {
                                <a href={resume.clone()} class="outline-button hover-lift" download="true">
                                    {"⤓ Download Resume"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class={classes!("reveal", "portrait-column", "delay-300", reveal_class(props.revealed, FADE_IN_RIGHT))}>
                    <div class="portrait-frame hover-lift">
                        <img src={content.portrait.clone()} alt="Professional portrait" loading="lazy" />
                    </div>
                    <div class={classes!(PARALLAX_FLOAT, "portrait-orb", "orb-top", "blur")}></div>
                    <div class={classes!(PARALLAX_FLOAT, "portrait-orb", "orb-bottom")} style={delay_style("3s")}></div>
                </div>
            </div>
        </section>
    }
}
