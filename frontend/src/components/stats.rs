use yew::prelude::*;

use crate::behavior::counter::use_animated_counter;
use crate::behavior::visibility::use_in_view;
use crate::config;
use crate::content::{StatCounter, STAT_COUNTERS};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: StatCounter,
    pub active: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let StatCounter { target, duration_ms, suffix, label, icon } = props.stat;
    let value = use_animated_counter(target, duration_ms, props.active);

    html! {
        <div class="stat-card">
            <div class="card-icon" aria-hidden="true">{icon}</div>
            <div class="stat-value">{value}{suffix}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

/// Dark band of counters that start once a third of it is on screen.
#[function_component(StatsBand)]
pub fn stats_band() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), config::STATS_VISIBILITY_THRESHOLD);

    html! {
        <section class="stats-band" ref={node}>
            <div class="container stats-grid">
                { for STAT_COUNTERS.iter().map(|stat| html! {
                    <StatCard key={stat.label} stat={*stat} active={in_view} />
                }) }
            </div>
        </section>
    }
}
