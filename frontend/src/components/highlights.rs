use yew::prelude::*;

use super::SectionProps;
use crate::content::{HERO_IMAGE, HIGHLIGHTS};
use crate::variant::{reveal_classes, stagger_style};

/// The "why us" block: trust arguments next to a satisfaction badge.
#[function_component(Highlights)]
pub fn highlights(props: &SectionProps) -> Html {
    let reveal = props.variant.reveal();
    let step = props.variant.stagger_ms();

    html! {
        <section id="ueber-uns" class="section">
            <div class="container contact-grid">
                <div class={reveal_classes(reveal, props.revealed)}>
                    <span class="section-eyebrow">{"Warum wir?"}</span>
                    <h2 class="section-title">
                        {"Vertrauen durch "}<span class="accent-text">{"Qualität"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Seit über 15 Jahren sind wir Ihr zuverlässiger Partner für Premium-Renovierungen in der Schweiz. Unser zertifiziertes Team verbindet Schweizer Handwerkskunst mit modernster Technik."}
                    </p>
                    <div class="card-grid">
                        { for HIGHLIGHTS.iter().enumerate().map(|(index, item)| html! {
                            <div
                                key={item.title}
                                class={classes!("card", reveal_classes(reveal, props.revealed))}
                                style={stagger_style(index, step)}
                            >
                                <div class="card-icon" aria-hidden="true">{item.icon}</div>
                                <strong>{item.title}</strong>
                                <p>{item.description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("hero-image", reveal_classes(reveal, props.revealed))}>
                    <img src={HERO_IMAGE} alt="Qualität" loading="lazy" />
                    <div class="card dark">
                        <div class="stat-value">{"98%"}</div>
                        <div>{"Kundenzufriedenheit"}</div>
                        <small>{"Basierend auf 500+ Projekten"}</small>
                    </div>
                </div>
            </div>
        </section>
    }
}
