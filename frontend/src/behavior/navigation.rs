use log::{info, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::behavior::ui_flags::{UiAction, UiFlags};
use crate::config;
use crate::dom::{self, DomError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub section_id: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dienstleistungen", section_id: "dienstleistungen" },
    NavItem { label: "Projekte", section_id: "projekte" },
    NavItem { label: "Über Uns", section_id: "ueber-uns" },
    NavItem { label: "Kontakt", section_id: "kontakt" },
];

pub const CONTACT_SECTION: &str = "kontakt";
pub const PROJECTS_SECTION: &str = "projekte";

/// Document offset that puts an element's top edge just under the fixed header.
pub fn scroll_target(element_top: f64, scroll_offset: f64, header_offset: f64) -> f64 {
    (element_top + scroll_offset - header_offset).max(0.0)
}

fn smooth_scroll(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Scroll offset that lines a section up under the header, `None` when the id
/// is not rendered.
pub fn section_target(section_id: &str) -> Result<Option<f64>, DomError> {
    let window = dom::window()?;
    let Some(section) = window
        .document()
        .ok_or(DomError::NoDocument)?
        .get_element_by_id(section_id)
    else {
        return Ok(None);
    };

    let element_top = section.get_bounding_client_rect().top();
    Ok(Some(scroll_target(element_top, window.scroll_y()?, config::HEADER_HEIGHT_PX)))
}

/// Smooth-scrolls to a section. `Ok(false)` means the id is not rendered.
pub fn navigate_to(section_id: &str) -> Result<bool, DomError> {
    match section_target(section_id)? {
        Some(top) => {
            smooth_scroll(top)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Logs how a navigation went. The menu closes whatever the outcome.
pub fn after_navigation(section_id: &str, outcome: Result<bool, DomError>) -> UiAction {
    match outcome {
        Ok(true) => info!("Navigating to #{}", section_id),
        Ok(false) => warn!("No section with id #{}", section_id),
        Err(err) => warn!("Navigation to #{} failed: {}", section_id, err),
    }
    UiAction::CloseMenu
}

pub fn scroll_to_top() -> Result<(), DomError> {
    smooth_scroll(0.0)
}

/// Section navigation that also folds the mobile menu away.
pub fn navigation_callback(flags: UseReducerHandle<UiFlags>) -> Callback<&'static str> {
    Callback::from(move |section_id: &'static str| {
        flags.dispatch(after_navigation(section_id, navigate_to(section_id)));
    })
}

pub fn scroll_to_top_callback(flags: UseReducerHandle<UiFlags>) -> Callback<()> {
    Callback::from(move |_| {
        if let Err(err) = scroll_to_top() {
            warn!("Scroll to top failed: {}", err);
        }
        flags.dispatch(UiAction::CloseMenu);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_sits_below_the_header() {
        // Section 1800px down the page while the viewport is at the top.
        assert_eq!(scroll_target(1800.0, 0.0, 72.0), 1728.0);
        // Same section after the user already scrolled 1000px.
        assert_eq!(scroll_target(800.0, 1000.0, 72.0), 1728.0);
    }

    #[test]
    fn target_never_goes_above_the_page() {
        assert_eq!(scroll_target(20.0, 0.0, 72.0), 0.0);
        assert_eq!(scroll_target(-300.0, 100.0, 72.0), 0.0);
    }

    #[test]
    fn menu_entries_point_at_known_sections() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|item| item.section_id).collect();
        assert_eq!(ids, vec!["dienstleistungen", "projekte", "ueber-uns", "kontakt"]);
        assert!(ids.contains(&CONTACT_SECTION));
        assert!(ids.contains(&PROJECTS_SECTION));
    }

    #[test]
    fn navigation_always_closes_the_menu() {
        let open = UiFlags::default().apply(UiAction::ToggleMenu);
        assert!(open.menu_open);

        let outcomes = [Ok(true), Ok(false), Err(DomError::NoWindow)];
        for outcome in outcomes {
            let action = after_navigation(CONTACT_SECTION, outcome);
            assert_eq!(action, UiAction::CloseMenu);
            assert!(!open.apply(action).menu_open);
        }
    }

    #[test]
    fn navigation_leaves_modals_alone() {
        let flags = UiFlags::default()
            .apply(UiAction::ToggleMenu)
            .apply(UiAction::Open(crate::behavior::ui_flags::LegalDocument::Terms));
        let after = flags.apply(after_navigation("kontakt", Ok(true)));
        assert!(!after.menu_open);
        assert!(after.terms_open);
    }
}
