use std::collections::BTreeSet;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, DomError};

/// Section ids that have entered the viewport at least once. Only ever grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    revealed: BTreeSet<String>,
}

impl VisibilitySet {
    pub fn contains(&self, section_id: &str) -> bool {
        self.revealed.contains(section_id)
    }

    /// Returns `true` only the first time an id is revealed.
    pub fn reveal(&mut self, section_id: impl Into<String>) -> bool {
        self.revealed.insert(section_id.into())
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

pub enum VisibilityAction {
    Reveal(String),
    RevealAll(Vec<String>),
}

impl Reducible for VisibilitySet {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let pending: Vec<String> = match action {
            VisibilityAction::Reveal(id) => vec![id],
            VisibilityAction::RevealAll(ids) => ids,
        };
        if pending.iter().all(|id| self.contains(id)) {
            return self;
        }

        let mut next = (*self).clone();
        for id in pending {
            if next.reveal(id.clone()) {
                debug!("Section revealed: {}", id);
            }
        }
        Rc::new(next)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: config::SECTION_VISIBILITY_THRESHOLD,
            root_margin: config::SECTION_ROOT_MARGIN,
        }
    }
}

/// An IntersectionObserver subscription. Every observed element is reported
/// once on entry and then unobserved; dropping the guard disconnects the rest.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportObserver {
    pub fn new(options: &ObserverOptions, mut on_enter: impl FnMut(Element) + 'static) -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    on_enter(target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_sections(
    section_ids: &[&'static str],
    options: &ObserverOptions,
    visibility: UseReducerHandle<VisibilitySet>,
) -> Result<ViewportObserver, DomError> {
    let document = dom::document()?;
    let observer = ViewportObserver::new(options, move |element| {
        visibility.dispatch(VisibilityAction::Reveal(element.id()));
    })?;

    for id in section_ids {
        match document.get_element_by_id(id) {
            Some(element) => observer.observe(&element),
            None => warn!("Animated section #{} is not in the document", id),
        }
    }
    Ok(observer)
}

/// Latches every listed section id once it scrolls into view.
#[hook]
pub fn use_section_visibility(
    section_ids: &'static [&'static str],
    options: ObserverOptions,
) -> UseReducerHandle<VisibilitySet> {
    let visibility = use_reducer_eq(VisibilitySet::default);

    {
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |options| {
                let observer = match observe_sections(section_ids, options, visibility.clone()) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        warn!("Viewport observer unavailable, revealing all sections: {}", err);
                        visibility.dispatch(VisibilityAction::RevealAll(
                            section_ids.iter().map(|id| id.to_string()).collect(),
                        ));
                        None
                    }
                };
                move || drop(observer)
            },
            options,
        );
    }

    visibility
}

/// One-way latch for a single node: false until it first enters the viewport.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |threshold| {
                let options = ObserverOptions {
                    threshold: *threshold,
                    root_margin: "0px",
                };
                let observer = node.cast::<Element>().and_then(|element| {
                    let setter = in_view.clone();
                    match ViewportObserver::new(&options, move |_| setter.set(true)) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Some(observer)
                        }
                        Err(err) => {
                            warn!("Viewport observer unavailable: {}", err);
                            in_view.set(true);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            threshold,
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Rc<VisibilitySet>, action: VisibilityAction) -> Rc<VisibilitySet> {
        state.reduce(action)
    }

    #[test]
    fn unseen_sections_are_absent() {
        let set = VisibilitySet::default();
        assert!(!set.contains("projekte"));
        assert!(set.is_empty());
    }

    #[test]
    fn reveal_latches_once() {
        let mut set = VisibilitySet::default();
        assert!(set.reveal("kontakt"));
        assert!(!set.reveal("kontakt"));
        assert!(set.contains("kontakt"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn repeated_notifications_keep_the_same_state() {
        let state = dispatch(Rc::default(), VisibilityAction::Reveal("prozess".into()));
        let again = dispatch(state.clone(), VisibilityAction::Reveal("prozess".into()));

        // Unchanged state hands back the same allocation so nothing re-renders.
        assert!(Rc::ptr_eq(&state, &again));
        assert!(again.contains("prozess"));
    }

    #[test]
    fn set_only_grows_across_scroll_back_and_forth() {
        let sequence = ["dienstleistungen", "prozess", "dienstleistungen", "projekte", "prozess"];
        let mut state: Rc<VisibilitySet> = Rc::default();
        let mut sizes = Vec::new();
        for id in sequence {
            state = dispatch(state, VisibilityAction::Reveal(id.to_string()));
            sizes.push(state.len());
        }
        assert_eq!(sizes, vec![1, 2, 2, 3, 3]);
        assert!(sequence.iter().all(|id| state.contains(id)));
    }

    #[test]
    fn reveal_all_fills_in_missing_ids() {
        let state = dispatch(Rc::default(), VisibilityAction::Reveal("kontakt".into()));
        let all = dispatch(
            state,
            VisibilityAction::RevealAll(vec!["kontakt".into(), "testimonials".into()]),
        );
        assert_eq!(all.len(), 2);
        assert!(all.contains("testimonials"));
    }

    #[test]
    fn default_options_match_section_config() {
        let options = ObserverOptions::default();
        assert_eq!(options.threshold, 0.08);
        assert_eq!(options.root_margin, "0px 0px -40px 0px");
    }
}
