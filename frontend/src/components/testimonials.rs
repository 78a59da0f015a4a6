use yew::prelude::*;

use super::SectionProps;
use crate::content::TESTIMONIALS;
use crate::variant::{reveal_classes, stagger_style};

const FIVE_STARS: &str = "★★★★★";

fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[function_component(Testimonials)]
pub fn testimonials(props: &SectionProps) -> Html {
    let reveal = props.variant.reveal();
    let step = props.variant.stagger_ms() * 2;

    html! {
        <section id="testimonials" class="section muted">
            <div class="container">
                <div class={reveal_classes(reveal, props.revealed)}>
                    <span class="section-eyebrow">{"Bewertungen"}</span>
                    <h2 class="section-title">
                        {"Was unsere "}<span class="accent-text">{"Kunden"}</span>{" sagen"}
                    </h2>
                    <p>
                        <span class="stars" aria-hidden="true">{FIVE_STARS}</span>
                        {" 5.0 Durchschnittsbewertung"}
                    </p>
                </div>

                <div class="card-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <blockquote
                            key={testimonial.name}
                            class={classes!("card", reveal_classes(reveal, props.revealed))}
                            style={stagger_style(index, step)}
                        >
                            <div class="stars" aria-label="5 von 5 Sternen">{FIVE_STARS}</div>
                            <p>{"“"}{testimonial.content}{"”"}</p>
                            <footer>
                                <span class={classes!("avatar", testimonial.accent)}>{initial(testimonial.name)}</span>
                                <strong>{testimonial.name}</strong>
                                <div class="hero-stat-label">{testimonial.role}</div>
                            </footer>
                        </blockquote>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::initial;

    #[test]
    fn avatar_initial_handles_umlauts_and_empty_names() {
        assert_eq!(initial("Maria Müller"), "M");
        assert_eq!(initial("Ümit"), "Ü");
        assert_eq!(initial(""), "");
    }
}
