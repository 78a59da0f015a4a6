use yew::prelude::*;

use crate::behavior::ui_flags::LegalDocument;
use crate::config;
use crate::content::{FOOTER_COMPANY_LINKS, FOOTER_SERVICES};
use crate::links;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<&'static str>,
    pub on_open_legal: Callback<LegalDocument>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let link_to = |section_id: &'static str, label: &'static str| {
        let onclick = props.on_navigate.reform(move |_: MouseEvent| section_id);
        html! {
            <li key={label}><button class="footer-link" {onclick}>{label}</button></li>
        }
    };
    let open_terms = props.on_open_legal.reform(|_: MouseEvent| LegalDocument::Terms);
    let open_privacy = props.on_open_legal.reform(|_: MouseEvent| LegalDocument::Privacy);

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <strong class="header-logo">{config::COMPANY_NAME}</strong>
                    <p>
                        {format!("Premium-Renovierungen mit garantierter Schweizer Qualität. Präzision und Exzellenz seit {}.", config::FOUNDED_YEAR)}
                    </p>
                </div>
                <div>
                    <h4>{"Dienstleistungen"}</h4>
                    <ul class="feature-list">
                        { for FOOTER_SERVICES.iter().map(|item| link_to("dienstleistungen", item)) }
                    </ul>
                </div>
                <div>
                    <h4>{"Unternehmen"}</h4>
                    <ul class="feature-list">
                        { for FOOTER_COMPANY_LINKS.iter().map(|(label, id)| link_to(id, label)) }
                    </ul>
                </div>
                <div>
                    <h4>{"Kontakt"}</h4>
                    <ul class="feature-list">
                        <li><a class="footer-link" href={links::tel_href(config::PHONE_NUMBER)}>{config::PHONE_DISPLAY}</a></li>
                        <li><a class="footer-link" href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a></li>
                        <li>{config::STREET}<br />{format!("{} {}, {}", config::POSTAL_CODE, config::LOCALITY, config::COUNTRY)}</li>
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">
                <p>{format!("© 2026 {}. Alle Rechte vorbehalten.", config::COMPANY_NAME)}</p>
                <div>
                    <button class="footer-link" onclick={open_terms}>{"AGB"}</button>
                    {" · "}
                    <button class="footer-link" onclick={open_privacy}>{"Datenschutz"}</button>
                </div>
                <p>{"Einige Bilder stammen von Freepik"}</p>
            </div>
        </footer>
    }
}
