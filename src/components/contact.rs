use std::rc::Rc;

use yew::prelude::*;

use crate::animation::{delay_style, reveal_class, stagger_delay, FADE_IN_UP, SCALE_IN};
use crate::config;
use crate::content::Portfolio;
use crate::tracking::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub content: Rc<Portfolio>,
    pub revealed: bool,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let revealed = props.revealed;
    let start_project = props.content.primary_email().unwrap_or("#").to_string();

    html! {
        <section id={SectionId::Contact.dom_id()} class="contact-section muted" data-animate="true">
            <div class="section-inner narrow">
                <div class={classes!("reveal", reveal_class(revealed, FADE_IN_UP))}>
                    <h2>{"Let's Work Together"}</h2>
                    <p class="section-intro">
                        {"Ready to bring your ideas to life? I'd love to hear about your project and explore how we can create something amazing together."}
                    </p>

                    <div class="contact-grid">
                        {
                            for props.content.contacts.iter().enumerate().map(|(index, contact)| {
                                let delay = stagger_delay(index, config::CONTACT_STAGGER_SECS);
                                html! {
                                    <a key={contact.link.clone()} href={contact.link.clone()} target="_blank" rel="noopener noreferrer">
                                        <div class={classes!("card", "contact-card", "hover-lift", reveal_class(revealed, SCALE_IN))}
                                             style={delay_style(&delay)}>
                                            <span class="contact-glyph">{contact.kind.glyph()}</span>
                                            <h3>{contact.kind.title()}</h3>
                                            <p class="muted-text">{&contact.value}</p>
                                        </div>
                                    </a>
                                }
                            })
                        }
                    </div>

                    <a href={start_project} class="hero-cta">
                        {"Start a Project"}<span class="cta-arrow">{" →"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
