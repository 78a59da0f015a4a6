use yew::prelude::*;

use super::SectionProps;
use crate::content::PROCESS_STEPS;
use crate::variant::{reveal_classes, stagger_style};

#[function_component(Process)]
pub fn process(props: &SectionProps) -> Html {
    let reveal = props.variant.reveal();
    // Steps land a little slower than cards so the timeline reads left to right.
    let step = props.variant.stagger_ms() * 2;

    html! {
        <section id="prozess" class="section">
            <div class="container">
                <div class={reveal_classes(reveal, props.revealed)}>
                    <span class="section-eyebrow">{"Wie wir arbeiten"}</span>
                    <h2 class="section-title">{"Unser "}<span class="accent-text">{"Prozess"}</span></h2>
                    <p class="section-lead">
                        {"Von der ersten Idee bis zur fertigen Renovierung: transparent, termingerecht und in Schweizer Qualität."}
                    </p>
                </div>

                <ol class="card-grid process-steps">
                    { for PROCESS_STEPS.iter().enumerate().map(|(index, item)| html! {
                        <li
                            key={item.step}
                            class={classes!("card", reveal_classes(reveal, props.revealed))}
                            style={stagger_style(index, step)}
                        >
                            <div class="card-icon" aria-hidden="true">{item.icon}</div>
                            <div class="section-eyebrow">{item.step}</div>
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </li>
                    }) }
                </ol>
            </div>
        </section>
    }
}
