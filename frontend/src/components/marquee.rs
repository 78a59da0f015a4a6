use yew::prelude::*;

use crate::content::MARQUEE_ITEMS;

#[function_component(Marquee)]
pub fn marquee() -> Html {
    // The track holds the list twice so the -50% keyframe loops seamlessly.
    let items = MARQUEE_ITEMS.iter().chain(MARQUEE_ITEMS.iter());

    html! {
        <div class="marquee" aria-hidden="true">
            <div class="marquee-track">
                { for items.map(|text| html! { <span class="marquee-item">{*text}</span> }) }
            </div>
        </div>
    }
}
