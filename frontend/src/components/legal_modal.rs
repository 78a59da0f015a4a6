use yew::prelude::*;

use crate::behavior::ui_flags::LegalDocument;
use crate::content::{self, LegalSection};

fn document_text(document: LegalDocument) -> (&'static str, &'static [LegalSection], &'static str) {
    match document {
        LegalDocument::Terms => (content::TERMS_TITLE, content::TERMS, content::TERMS_FOOTNOTE),
        LegalDocument::Privacy => (content::PRIVACY_TITLE, content::PRIVACY, content::PRIVACY_FOOTNOTE),
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    pub document: LegalDocument,
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(LegalModal)]
pub fn legal_modal(props: &LegalModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let (title, sections, footnote) = document_text(props.document);
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="legal-modal" role="dialog" aria-modal="true" aria-label={title}>
            <div class="legal-modal-backdrop" onclick={close.clone()}></div>
            <div class="legal-modal-box">
                <div class="legal-modal-header">
                    <h2>{title}</h2>
                    <button class="legal-modal-close" aria-label="Schliessen" onclick={close}>{"✕"}</button>
                </div>
                { for sections.iter().map(|section| html! {
                    <div key={section.title}>
                        <h3>{section.title}</h3>
                        <p>{section.content}</p>
                    </div>
                }) }
                <p class="legal-footnote">{footnote}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_document_has_its_own_text() {
        let (terms_title, terms, _) = document_text(LegalDocument::Terms);
        let (privacy_title, privacy, _) = document_text(LegalDocument::Privacy);
        assert!(terms_title.contains("AGB"));
        assert_eq!(privacy_title, "Datenschutzerklärung");
        assert_ne!(terms.len(), privacy.len());
    }
}
