use yew::prelude::*;

use crate::behavior::scroll::ScrollState;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub scroll: ScrollState,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percentage = format!("{:.0}", props.scroll.percentage);

    html! {
        <div
            class="scroll-progress"
            role="progressbar"
            aria-label="Lesefortschritt"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow={percentage}
        >
            <div class="scroll-progress-fill" style={props.scroll.progress_style()}></div>
        </div>
    }
}
