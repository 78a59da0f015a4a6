use yew::prelude::*;

use crate::behavior::navigation::CONTACT_SECTION;
use crate::config;
use crate::links;
use crate::variant::Variant;

#[derive(Properties, PartialEq)]
pub struct CtaBannerProps {
    pub variant: Variant,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(CtaBanner)]
pub fn cta_banner(props: &CtaBannerProps) -> Html {
    let copy = props.variant.copy();
    let to_contact = props.on_navigate.reform(|_: MouseEvent| CONTACT_SECTION);

    html! {
        <section class="cta-banner">
            <div class="container">
                <h2 class="section-title">
                    {copy.banner_title}{" "}<span class="accent-text">{copy.banner_accent}</span>
                </h2>
                <p class="hero-subtitle" style="margin: 0 auto 2rem;">{copy.banner_text}</p>
                <div class="hero-actions" style="justify-content: center;">
                    <button class="pill-button" onclick={to_contact}>{copy.banner_cta}{" →"}</button>
                    <a class="pill-button outline" href={links::tel_href(config::MOBILE_NUMBER)}>
                        {"📞 "}{config::MOBILE_DISPLAY}
                    </a>
                </div>
            </div>
        </section>
    }
}
