use yew::prelude::*;

use crate::links;

/// Floating chat shortcut with a prefilled greeting.
#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    html! {
        <a
            class="whatsapp-fab"
            href={links::company_whatsapp_link()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Per WhatsApp schreiben"
        >
            {"💬"}
        </a>
    }
}
