use yew::prelude::*;

use crate::behavior::navigation::{CONTACT_SECTION, PROJECTS_SECTION};
use crate::content::{HERO_IMAGE, HERO_STATS};
use crate::variant::Variant;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub variant: Variant,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let copy = props.variant.copy();

    let to_contact = props.on_navigate.reform(|_: MouseEvent| CONTACT_SECTION);
    let to_projects = props.on_navigate.reform(|_: MouseEvent| PROJECTS_SECTION);

    html! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-text">
                    <span class="hero-badge">{copy.badge}</span>
                    <h1>
                        {copy.headline_lead}{" "}
                        <span class="accent-text">{copy.headline_accent}</span>
                        <br />
                        {copy.headline_tail}
                    </h1>
                    <p class="hero-subtitle">{copy.subtitle}</p>
                    <div class="hero-actions">
                        <button class="pill-button" onclick={to_contact}>
                            {copy.primary_cta}{" →"}
                        </button>
                        <button class="pill-button outline" onclick={to_projects}>
                            {copy.secondary_cta}
                        </button>
                    </div>
                    <div class="hero-stats">
                        { for HERO_STATS.iter().map(|stat| html! {
                            <div key={stat.label}>
                                <div class="hero-stat-value">{stat.value}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="hero-image">
                    <img
                        src={HERO_IMAGE}
                        alt="Premium Renovation"
                    />
                </div>
            </div>
        </section>
    }
}
