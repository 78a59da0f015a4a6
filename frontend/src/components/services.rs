use yew::prelude::*;

use super::SectionProps;
use crate::content::SERVICES;
use crate::variant::{reveal_classes, stagger_style};

#[function_component(Services)]
pub fn services(props: &SectionProps) -> Html {
    let reveal = props.variant.reveal();
    let step = props.variant.stagger_ms();

    html! {
        <section id="dienstleistungen" class="section muted">
            <div class="container">
                <div class={reveal_classes(reveal, props.revealed)}>
                    <span class="section-eyebrow">{"Was wir bieten"}</span>
                    <h2 class="section-title">
                        {"Umbau "}<span class="accent-text">{"& Modernisierung"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Schweizer Qualitätsstandards mit modernsten Techniken und Premium-Materialien."}
                    </p>
                </div>

                <div class="card-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <article
                            key={service.title}
                            class={classes!("card", service.dark.then_some("dark"), reveal_classes(reveal, props.revealed))}
                            style={stagger_style(index, step)}
                        >
                            <div class="card-icon" aria-hidden="true">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                            <ul class="feature-list">
                                { for service.features.iter().map(|feature| html! { <li>{*feature}</li> }) }
                            </ul>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
