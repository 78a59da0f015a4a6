use log::{info, warn};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::use_event_with_window;

use crate::behavior::navigation::{navigation_callback, scroll_to_top_callback};
use crate::behavior::scroll::use_scroll_state;
use crate::behavior::ui_flags::{LegalDocument, UiAction, UiFlags};
use crate::behavior::visibility::{use_section_visibility, ObserverOptions};
use crate::components::contact::Contact;
use crate::components::cta_banner::CtaBanner;
use crate::components::footer::Footer;
use crate::components::header::SiteHeader;
use crate::components::hero::Hero;
use crate::components::highlights::Highlights;
use crate::components::legal_modal::LegalModal;
use crate::components::marquee::Marquee;
use crate::components::process::Process;
use crate::components::progress_bar::ProgressBar;
use crate::components::projects::Projects;
use crate::components::services::Services;
use crate::components::stats::StatsBand;
use crate::components::testimonials::Testimonials;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::config;
use crate::content::ANIMATED_SECTIONS;
use crate::dom;
use crate::inquiry::ContactRequest;
use crate::metadata::use_page_metadata;
use crate::styles::LANDING_CSS;
use crate::variant::Variant;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: Variant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let variant = props.variant;

    use_page_metadata(variant.metadata());

    // Switching editions starts from the top.
    use_effect_with_deps(
        |_| {
            if let Ok(window) = dom::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        variant,
    );

    let scroll = use_scroll_state(config::HEADER_SCROLL_THRESHOLD_PX);
    let visibility = use_section_visibility(ANIMATED_SECTIONS, ObserverOptions::default());
    let flags = use_reducer_eq(UiFlags::default);

    let on_navigate = navigation_callback(flags.clone());
    let on_logo = scroll_to_top_callback(flags.clone());

    let on_toggle_menu = {
        let flags = flags.clone();
        Callback::from(move |_: ()| flags.dispatch(UiAction::ToggleMenu))
    };
    let on_open_legal = {
        let flags = flags.clone();
        Callback::from(move |document: LegalDocument| flags.dispatch(UiAction::Open(document)))
    };
    let on_close_legal = |document: LegalDocument| {
        let flags = flags.clone();
        Callback::from(move |_: ()| flags.dispatch(UiAction::Close(document)))
    };

    {
        let flags = flags.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && flags.any_modal_open() {
                flags.dispatch(UiAction::CloseModals);
            }
        });
    }

    let on_submit = Callback::from(|request: ContactRequest| {
        info!("Preparing inquiry from {}", request.name);
        let opened = dom::window().and_then(|window| {
            window
                .location()
                .set_href(&request.mailto_href())
                .map_err(dom::DomError::from)
        });
        if let Err(err) = opened {
            warn!("Could not open mail draft: {}", err);
        }
    });

    let copy = variant.copy();
    let section = |id: &str| visibility.contains(id);

    html! {
        <>
            <style>{LANDING_CSS}</style>
            <div class={classes!("landing", variant.theme_class())}>
                <ProgressBar scroll={scroll} />
                <SiteHeader
                    scrolled={scroll.is_past_threshold}
                    menu_open={flags.menu_open}
                    quote_label={copy.quote_cta}
                    on_navigate={on_navigate.clone()}
                    on_toggle_menu={on_toggle_menu}
                    on_logo={on_logo}
                />
                <main>
                    <Hero variant={variant} on_navigate={on_navigate.clone()} />
                    <Marquee />
                    <Services variant={variant} revealed={section("dienstleistungen")} />
                    <StatsBand />
                    <Process variant={variant} revealed={section("prozess")} />
                    <Projects variant={variant} revealed={section("projekte")} />
                    <Highlights variant={variant} revealed={section("ueber-uns")} />
                    <Testimonials variant={variant} revealed={section("testimonials")} />
                    <CtaBanner variant={variant} on_navigate={on_navigate.clone()} />
                    <Contact
                        variant={variant}
                        revealed={section("kontakt")}
                        endpoint={config::get_contact_endpoint().map(AttrValue::from)}
                        on_submit={on_submit}
                    />
                </main>
                <Footer on_navigate={on_navigate} on_open_legal={on_open_legal} />
                <WhatsAppButton />
                <LegalModal
                    document={LegalDocument::Terms}
                    open={flags.terms_open}
                    on_close={on_close_legal(LegalDocument::Terms)}
                />
                <LegalModal
                    document={LegalDocument::Privacy}
                    open={flags.privacy_open}
                    on_close={on_close_legal(LegalDocument::Privacy)}
                />
            </div>
        </>
    }
}
