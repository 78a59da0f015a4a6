use std::rc::Rc;

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDocument {
    Terms,
    Privacy,
}

/// Independent toggles for the mobile menu and the two legal overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiFlags {
    pub menu_open: bool,
    pub terms_open: bool,
    pub privacy_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    ToggleMenu,
    CloseMenu,
    Open(LegalDocument),
    Close(LegalDocument),
    CloseModals,
}

impl UiFlags {
    pub fn is_open(&self, document: LegalDocument) -> bool {
        match document {
            LegalDocument::Terms => self.terms_open,
            LegalDocument::Privacy => self.privacy_open,
        }
    }

    pub fn any_modal_open(&self) -> bool {
        self.terms_open || self.privacy_open
    }

    fn set_modal(&mut self, document: LegalDocument, open: bool) {
        match document {
            LegalDocument::Terms => self.terms_open = open,
            LegalDocument::Privacy => self.privacy_open = open,
        }
    }

    pub fn apply(mut self, action: UiAction) -> Self {
        match action {
            UiAction::ToggleMenu => self.menu_open = !self.menu_open,
            UiAction::CloseMenu => self.menu_open = false,
            UiAction::Open(document) => self.set_modal(document, true),
            UiAction::Close(document) => self.set_modal(document, false),
            UiAction::CloseModals => {
                self.terms_open = false;
                self.privacy_open = false;
            }
        }
        self
    }
}

impl Reducible for UiFlags {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_terms_leaves_privacy_alone() {
        let flags = UiFlags { privacy_open: true, ..UiFlags::default() };
        let opened = flags.apply(UiAction::Open(LegalDocument::Terms));
        assert!(opened.terms_open);
        assert!(opened.privacy_open);

        let closed = opened.apply(UiAction::Close(LegalDocument::Terms));
        assert!(!closed.terms_open);
        assert!(closed.privacy_open);
    }

    #[test]
    fn modals_do_not_touch_the_menu() {
        let flags = UiFlags::default()
            .apply(UiAction::ToggleMenu)
            .apply(UiAction::Open(LegalDocument::Privacy));
        assert!(flags.menu_open);
        assert!(flags.is_open(LegalDocument::Privacy));
        assert!(!flags.is_open(LegalDocument::Terms));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let open = UiFlags::default().apply(UiAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!open.apply(UiAction::ToggleMenu).menu_open);
        assert!(!open.apply(UiAction::CloseMenu).menu_open);
        assert!(!UiFlags::default().apply(UiAction::CloseMenu).menu_open);
    }

    #[test]
    fn escape_closes_every_modal() {
        let flags = UiFlags::default()
            .apply(UiAction::Open(LegalDocument::Terms))
            .apply(UiAction::Open(LegalDocument::Privacy))
            .apply(UiAction::ToggleMenu);
        assert!(flags.any_modal_open());

        let closed = flags.apply(UiAction::CloseModals);
        assert!(!closed.any_modal_open());
        assert!(closed.menu_open);
    }
}
