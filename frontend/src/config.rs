/// Where the contact form posts when a submission service is wired up.
/// `None` keeps the form client-side and falls back to a mailto draft.
#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> Option<&'static str> {
    None // Local builds never post anywhere
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> Option<&'static str> {
    None
}

// Scroll tracking
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 60.0;
pub const HEADER_HEIGHT_PX: f64 = 72.0;

// Section reveal observer
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.08;
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const STATS_VISIBILITY_THRESHOLD: f64 = 0.3;

// Counter frame loop, roughly one display frame
pub const COUNTER_FRAME_MS: u32 = 16;

pub const COMPANY_NAME: &str = "nik-renovation";
pub const COMPANY_URL: &str = "https://nik-renovation.ch";
pub const FOUNDED_YEAR: u16 = 2009;

pub const PHONE_DISPLAY: &str = "+41 44 123 45 67";
pub const PHONE_NUMBER: &str = "+41441234567";
pub const MOBILE_DISPLAY: &str = "+41 79 132 65 65";
pub const MOBILE_NUMBER: &str = "+41791326565";
pub const EMAIL: &str = "info@nik-renovation.ch";

pub const STREET: &str = "Bahnhofstrasse";
pub const POSTAL_CODE: &str = "9470";
pub const LOCALITY: &str = "Buchs";
pub const COUNTRY: &str = "Schweiz";
pub const COUNTRY_CODE: &str = "CH";

/// wa.me wants the number without the leading plus.
pub const WHATSAPP_NUMBER: &str = "41791326565";
pub const WHATSAPP_GREETING: &str =
    "Hallo! Ich interessiere mich für Ihre Renovierungsdienstleistungen.";
