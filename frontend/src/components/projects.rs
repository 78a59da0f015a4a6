use yew::prelude::*;

use super::SectionProps;
use crate::content::PROJECTS;
use crate::variant::{reveal_classes, stagger_style};

#[function_component(Projects)]
pub fn projects(props: &SectionProps) -> Html {
    let reveal = props.variant.reveal();
    let step = props.variant.stagger_ms() * 2;

    html! {
        <section id="projekte" class="section dark">
            <div class="container">
                <div class={reveal_classes(reveal, props.revealed)}>
                    <span class="section-eyebrow">{"Portfolio"}</span>
                    <h2 class="section-title">
                        {"Unsere besten "}<span class="accent-text">{"Projekte"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Jedes Projekt ist einzigartig. Eine Auswahl unserer beeindruckendsten Renovierungen."}
                    </p>
                </div>

                <div class="card-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <figure
                            key={project.title}
                            class={classes!("project-card", reveal_classes(reveal, props.revealed))}
                            style={stagger_style(index, step)}
                        >
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <figcaption class="project-caption">
                                <span class="section-eyebrow">{project.kind}</span>
                                <h3>{project.title}</h3>
                                <p>{"📍 "}{project.location}</p>
                            </figcaption>
                        </figure>
                    }) }
                </div>
            </div>
        </section>
    }
}
