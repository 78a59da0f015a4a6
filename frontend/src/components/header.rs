use yew::prelude::*;

use crate::behavior::navigation::{CONTACT_SECTION, NAV_ITEMS};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub quote_label: AttrValue,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_menu: Callback<()>,
    pub on_logo: Callback<()>,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps {
        scrolled,
        menu_open,
        quote_label,
        on_navigate,
        on_toggle_menu,
        on_logo,
    } = props;

    let nav_button = |section_id: &'static str, label: &'static str| {
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section_id);
        });
        html! {
            <button class="nav-link" {onclick}>{label}</button>
        }
    };

    let quote_button = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(CONTACT_SECTION))
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let logo_click = on_logo.reform(|_: MouseEvent| ());

    html! {
        <header class={classes!("site-header", scrolled.then_some("scrolled"))}>
            <div class="container header-bar">
                <button class="header-logo" onclick={logo_click} aria-label="Nach oben">
                    {config::COMPANY_NAME}
                </button>

                <nav class="header-nav">
                    { for NAV_ITEMS.iter().map(|item| nav_button(item.section_id, item.label)) }
                </nav>

                <button class="pill-button header-quote" onclick={quote_button.clone()}>
                    {quote_label.clone()}
                </button>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Menü"
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", menu_open.then_some("open"))}>
                { for NAV_ITEMS.iter().map(|item| nav_button(item.section_id, item.label)) }
                <div class="container">
                    <button class="pill-button" onclick={quote_button}>
                        {quote_label.clone()}
                    </button>
                </div>
            </div>
        </header>
    }
}
