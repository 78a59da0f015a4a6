use yew::prelude::*;

use crate::variant::Variant;

pub mod contact;
pub mod cta_banner;
pub mod footer;
pub mod header;
pub mod hero;
pub mod highlights;
pub mod legal_modal;
pub mod marquee;
pub mod process;
pub mod progress_bar;
pub mod projects;
pub mod services;
pub mod stats;
pub mod testimonials;
pub mod whatsapp_button;

/// Props shared by every section that animates in on first sight.
#[derive(Properties, PartialEq, Clone)]
pub struct SectionProps {
    pub variant: Variant,
    pub revealed: bool,
}
