use std::rc::Rc;

use yew::prelude::*;

use crate::animation::{delay_style, reveal_class, stagger_delay, FADE_IN_UP, SCALE_IN};
use crate::config;
use crate::content::{Portfolio, Project};
use crate::tracking::section::SectionId;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
    pub revealed: bool,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let ProjectCardProps { project, index, revealed } = props;
    let delay = stagger_delay(*index, config::PROJECT_STAGGER_SECS);

    let view_button = match project.external_link() {
        Some(link) => html! {
            <a href={link.to_string()} target="_blank" rel="noopener noreferrer">
                <span class="card-button">{"↗ View Project"}</span>
            </a>
        },
        None => html! {
            <span class="card-button disabled">{"Coming soon"}</span>
        },
    };

    html! {
        <div class={classes!("card", "project-card", "hover-lift", reveal_class(*revealed, SCALE_IN))}
             style={delay_style(&delay)}>
            <div class="card-media">
                <img src={project.image_src().to_string()} alt={project.title.clone()} loading="lazy" />
                <div class="card-overlay">
                    {view_button}
                </div>
            </div>
            <div class="card-body">
                <h3>{&project.title}</h3>
                <p class="muted-text">{&project.description}</p>
                <div class="badge-row">
                    { for project.tags.iter().map(|tag| html! { <span key={tag.clone()} class="badge outline">{tag}</span> }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub content: Rc<Portfolio>,
    pub revealed: bool,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let revealed = props.revealed;

    html! {
        <section id={SectionId::Portfolio.dom_id()} class="portfolio-section" data-animate="true">
            <div class="section-inner">
                <div class={classes!("section-header", "reveal", reveal_class(revealed, FADE_IN_UP))}>
                    <h2>{"Featured Work"}</h2>
                    <p class="section-intro">
                        {"A selection of projects that showcase my design and development skills across various industries and technologies"}
                    </p>
                </div>

                <div class="project-grid">
                    {
                        for props.content.projects.iter().enumerate().map(|(index, project)| html! {
                            <ProjectCard key={index} project={project.clone()} index={index} revealed={revealed} />
                        })
                    }
                </div>
            </div>
        </section>
    }
}
