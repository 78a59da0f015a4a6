use urlencoding::encode;

use crate::config;

/// Chat deep link with a prefilled message.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, encode(message))
}

pub fn company_whatsapp_link() -> String {
    whatsapp_link(config::WHATSAPP_NUMBER, config::WHATSAPP_GREETING)
}

pub fn tel_href(number: &str) -> String {
    format!("tel:{}", number)
}

pub fn mailto_href(to: &str, subject: &str, body: &str) -> String {
    format!("mailto:{}?subject={}&body={}", to, encode(subject), encode(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_message_is_percent_encoded() {
        let link = company_whatsapp_link();
        assert!(link.starts_with("https://wa.me/41791326565?text="));
        assert!(link.contains("Hallo%21%20Ich%20interessiere"));
        assert!(link.contains("f%C3%BCr"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn tel_and_mailto_links() {
        assert_eq!(tel_href(config::PHONE_NUMBER), "tel:+41441234567");
        assert_eq!(
            mailto_href("info@nik-renovation.ch", "Anfrage", "Guten Tag\nBad"),
            "mailto:info@nik-renovation.ch?subject=Anfrage&body=Guten%20Tag%0ABad"
        );
    }
}
