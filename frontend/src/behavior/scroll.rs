use log::warn;
use yew::prelude::*;

use crate::dom::{self, ScrollMetrics, WindowListener};

/// Scroll completion and the header style switch, recomputed on every scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub percentage: f64,
    pub is_past_threshold: bool,
}

impl ScrollState {
    pub fn compute(offset: f64, document_height: f64, viewport_height: f64, threshold: f64) -> Self {
        let scrollable = document_height - viewport_height;
        let percentage = if scrollable > 0.0 {
            offset / scrollable * 100.0
        } else {
            0.0
        };

        Self {
            // NaN can sneak in from a detached document; treat it as the top.
            percentage: if percentage.is_nan() { 0.0 } else { percentage.clamp(0.0, 100.0) },
            is_past_threshold: offset > threshold,
        }
    }

    pub fn from_metrics(metrics: ScrollMetrics, threshold: f64) -> Self {
        Self::compute(
            metrics.offset,
            metrics.document_height,
            metrics.viewport_height,
            threshold,
        )
    }

    pub fn progress_style(&self) -> String {
        format!("width: {:.2}%;", self.percentage)
    }
}

/// Tracks window scrolling for the lifetime of the calling component.
#[hook]
pub fn use_scroll_state(threshold: f64) -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let update = move || match dom::scroll_metrics() {
                    Ok(metrics) => state.set(ScrollState::from_metrics(metrics, threshold)),
                    Err(err) => warn!("Scroll tracking skipped: {}", err),
                };

                // Initial check so a reload mid-page starts with the right header.
                update();

                let listeners: Vec<WindowListener> = ["scroll", "resize"]
                    .into_iter()
                    .filter_map(|event| match WindowListener::passive(event, update.clone()) {
                        Ok(listener) => Some(listener),
                        Err(err) => {
                            warn!("Failed to listen for {}: {}", event, err);
                            None
                        }
                    })
                    .collect();

                move || drop(listeners)
            },
            threshold,
        );
    }

    *state
}
