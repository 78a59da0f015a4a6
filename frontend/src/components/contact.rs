use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::CONTACT_CHANNELS;
use crate::inquiry::{ContactRequest, ProjectType};
use crate::variant::{reveal_classes, Variant};

pub enum ContactField {
    Name(String),
    Phone(String),
    Email(String),
    ProjectType(String),
    Message(String),
    Clear,
}

impl Reducible for ContactRequest {
    type Action = ContactField;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactField::Name(value) => next.name = value,
            ContactField::Phone(value) => next.phone = value,
            ContactField::Email(value) => next.email = value,
            ContactField::ProjectType(value) => next.project_type = ProjectType::from_value(&value),
            ContactField::Message(value) => next.message = value,
            ContactField::Clear => next = ContactRequest::default(),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub variant: Variant,
    pub revealed: bool,
    #[prop_or_default]
    pub endpoint: Option<AttrValue>,
    pub on_submit: Callback<ContactRequest>,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    /// When set the browser posts the form there; otherwise `on_submit` gets it.
    #[prop_or_default]
    pub endpoint: Option<AttrValue>,
    pub on_submit: Callback<ContactRequest>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_reducer(ContactRequest::default);
    let sent = use_state(|| false);

    let oninput_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactField::Name(input.value()));
        })
    };
    let oninput_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactField::Phone(input.value()));
        })
    };
    let oninput_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactField::Email(input.value()));
        })
    };
    let onchange_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.dispatch(ContactField::ProjectType(select.value()));
        })
    };
    let oninput_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactField::Message(area.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        let on_submit = props.on_submit.clone();
        let posts_natively = props.endpoint.is_some();
        Callback::from(move |e: SubmitEvent| {
            if posts_natively {
                return;
            }
            e.prevent_default();
            on_submit.emit((*form).clone());
            form.dispatch(ContactField::Clear);
            sent.set(true);
        })
    };

    let selected = form.project_type.map(ProjectType::value).unwrap_or("");

    html! {
        <form
            class="contact-form"
            action={props.endpoint.clone()}
            method="post"
            {onsubmit}
        >
            <h3>{"Angebot Anfordern"}</h3>
            <label for="contact-name">{"Name"}</label>
            <input id="contact-name" name="name" type="text" placeholder="Ihr Name"
                value={form.name.clone()} oninput={oninput_name} />

            <label for="contact-phone">{"Telefon"}</label>
            <input id="contact-phone" name="phone" type="tel" placeholder="Ihre Nummer"
                value={form.phone.clone()} oninput={oninput_phone} />

            <label for="contact-email">{"E-Mail"}</label>
            <input id="contact-email" name="email" type="email" placeholder="ihre@email.com"
                value={form.email.clone()} oninput={oninput_email} />

            <label for="contact-type">{"Projekttyp"}</label>
            <select id="contact-type" name="project_type" onchange={onchange_type}>
                <option value="" selected={selected.is_empty()}>{"Dienstleistung wählen"}</option>
                { for ProjectType::ALL.iter().map(|kind| html! {
                    <option value={kind.value()} selected={selected == kind.value()}>{kind.label()}</option>
                }) }
            </select>

            <label for="contact-message">{"Nachricht"}</label>
            <textarea id="contact-message" name="message" rows="4"
                placeholder="Erzählen Sie uns von Ihrem Projekt..."
                value={form.message.clone()} oninput={oninput_message} />

            <button class="pill-button" type="submit">{"Anfrage Absenden →"}</button>
            {
                if *sent {
                    html! { <p class="form-notice">{"Danke! Ihre Anfrage wurde vorbereitet."}</p> }
                } else {
                    html! {}
                }
            }
        </form>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactSectionProps) -> Html {
    let reveal = props.variant.reveal();
    let revealed = props.revealed;

    html! {
        <section id="kontakt" class="section">
            <div class="container contact-grid">
                <div class={reveal_classes(reveal, revealed)}>
                    <span class="section-eyebrow">{"Kontakt"}</span>
                    <h2 class="section-title">
                        {"Lassen Sie uns "}<span class="accent-text">{"sprechen"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Vereinbaren Sie eine kostenlose Beratung und erhalten Sie innerhalb von 24 Stunden ein unverbindliches Angebot."}
                    </p>
                    { for CONTACT_CHANNELS.iter().map(|channel| html! {
                        <div key={channel.label} class="contact-channel">
                            <span class="card-icon" aria-hidden="true">{channel.icon}</span>
                            <div>
                                <div class="hero-stat-label">{channel.label}</div>
                                {
                                    match channel.link.href() {
                                        Some(href) => html! { <a {href}>{channel.value}</a> },
                                        None => html! { <span>{channel.value}</span> },
                                    }
                                }
                            </div>
                        </div>
                    }) }
                </div>

                <div class={reveal_classes(reveal, revealed)}>
                    <ContactForm endpoint={props.endpoint.clone()} on_submit={props.on_submit.clone()} />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(request: ContactRequest, field: ContactField) -> ContactRequest {
        (*Rc::new(request).reduce(field)).clone()
    }

    #[test]
    fn fields_update_independently() {
        let request = apply(ContactRequest::default(), ContactField::Name("Hans Weber".into()));
        let request = apply(request, ContactField::ProjectType("technik".into()));
        let request = apply(request, ContactField::Message("Hausautomation".into()));

        assert_eq!(request.name, "Hans Weber");
        assert_eq!(request.project_type, Some(ProjectType::Technical));
        assert_eq!(request.message, "Hausautomation");
        assert!(request.email.is_empty());
    }

    #[test]
    fn placeholder_option_clears_project_type() {
        let request = apply(ContactRequest::default(), ContactField::ProjectType("bad".into()));
        let request = apply(request, ContactField::ProjectType(String::new()));
        assert_eq!(request.project_type, None);
    }

    #[test]
    fn clear_resets_everything() {
        let request = apply(ContactRequest::default(), ContactField::Email("a@b.ch".into()));
        assert_eq!(apply(request, ContactField::Clear), ContactRequest::default());
    }
}
