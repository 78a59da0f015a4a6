use crate::config;
use crate::links;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCounter {
    pub target: u64,
    pub duration_ms: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub dark: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub step: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub image: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub link: ChannelLink,
}

/// Where a contact channel points; hrefs are derived from `config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLink {
    Phone,
    WhatsApp,
    Email,
    None,
}

impl ChannelLink {
    pub fn href(self) -> Option<String> {
        match self {
            ChannelLink::Phone => Some(links::tel_href(config::PHONE_NUMBER)),
            ChannelLink::WhatsApp => Some(links::company_whatsapp_link()),
            ChannelLink::Email => Some(format!("mailto:{}", config::EMAIL)),
            ChannelLink::None => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalSection {
    pub title: &'static str,
    pub content: &'static str,
}

/// Sections whose entrance is animated once they scroll into view.
pub const ANIMATED_SECTIONS: &[&str] = &[
    "dienstleistungen",
    "prozess",
    "projekte",
    "ueber-uns",
    "testimonials",
    "kontakt",
];

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "500+", label: "Projekte" },
    HeroStat { value: "15+", label: "Jahre" },
    HeroStat { value: "98%", label: "Zufrieden" },
];

pub const MARQUEE_ITEMS: &[&str] = &[
    "🇨🇭 Schweizer Qualität",
    "✦ 500+ Projekte",
    "✦ 15 Jahre Erfahrung",
    "✦ 10 Jahre Garantie",
    "✦ Kostenlose Beratung",
    "✦ Schlüsselfertige Übergabe",
    "✦ 24/7 Support",
    "✦ Zertifizierte Fachkräfte",
];

pub const STAT_COUNTERS: &[StatCounter] = &[
    StatCounter { target: 500, duration_ms: 2000, suffix: "+", label: "Abgeschlossene Projekte", icon: "📈" },
    StatCounter { target: 15, duration_ms: 1800, suffix: "+", label: "Jahre Erfahrung", icon: "⏱" },
    StatCounter { target: 98, duration_ms: 1600, suffix: "%", label: "Kundenzufriedenheit", icon: "★" },
    StatCounter { target: 1200, duration_ms: 2500, suffix: "+", label: "Glückliche Familien", icon: "👪" },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🎨",
        title: "Küchenrenovierung",
        description: "Moderne Designs mit neuesten Geräten, Marmorarbeitsplatten und luxuriösen Oberflächen.",
        features: &["Personalisiertes 3D-Design", "Premium-Geräte", "10 Jahre Garantie"],
        dark: true,
    },
    Service {
        icon: "🛁",
        title: "Luxusbäder",
        description: "Verwandeln Sie Ihr Bad in ein privates Spa mit intelligenter Technologie.",
        features: &["Intelligente Armaturen", "Fußbodenheizung", "Maßgeschneiderte Duschwände"],
        dark: false,
    },
    Service {
        icon: "🔨",
        title: "Komplette Renovierungen",
        description: "Vollständige Wohnungsrenovierung mit integraler Projektleitung und tadellosen Oberflächen.",
        features: &["Komplette Verwaltung", "Premium-Materialien", "Schlüsselfertige Übergabe"],
        dark: false,
    },
    Service {
        icon: "🔧",
        title: "Technische Installationen",
        description: "Klimaanlagen, Hausautomation und elektrische Installationen mit Schweizer Zertifizierung.",
        features: &["Erweiterte Hausautomation", "Energieeffizienz", "Offizielle Zertifizierungen"],
        dark: false,
    },
    Service {
        icon: "🛡",
        title: "Premium-Wartung",
        description: "Kundendienst mit präventiver Wartung und erweiterter Garantie.",
        features: &["Jährliche Inspektionen", "Erweiterte Garantie", "24/7 Support"],
        dark: false,
    },
    Service {
        icon: "★",
        title: "Design-Beratung",
        description: "Persönliche Beratung mit spezialisierten Architekten und Innenarchitekten.",
        features: &["Personalisiertes Design", "3D-Renderings", "Kontinuierliche Beratung"],
        dark: true,
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep { step: "01", title: "Beratung", description: "Kostenlose Erstberatung und Bedarfsanalyse für Ihr Projekt.", icon: "💬" },
    ProcessStep { step: "02", title: "Planung", description: "3D-Planung, Materialauswahl und detailliertes Angebot.", icon: "📐" },
    ProcessStep { step: "03", title: "Ausführung", description: "Fachkundige Umsetzung durch zertifizierte Schweizer Fachkräfte.", icon: "🔨" },
    ProcessStep { step: "04", title: "Übergabe", description: "Qualitätskontrolle, Übergabe und 10 Jahre Garantie.", icon: "✔" },
];

pub const HERO_IMAGE: &str = "/assets/images/interior-design-with-photoframes-blue-couch.jpg";

pub const PROJECTS: &[Project] = &[
    Project {
        image: "/assets/images/beautiful-shot-modern-house-kitchen.jpg",
        title: "Moderne Minimalistische Küche",
        location: "Zürich, Schweiz",
        kind: "Küchenrenovierung",
    },
    Project {
        image: "/assets/images/small-bathroom-with-modern-design-style.jpg",
        title: "Luxus-Hauptbadezimmer",
        location: "Genf, Schweiz",
        kind: "Premium-Bad",
    },
    Project {
        image: "/assets/images/interior-design-with-photoframes-comfortable-couch.jpg",
        title: "Zeitgenössisches Wohnzimmer",
        location: "Basel, Schweiz",
        kind: "Vollrenovierung",
    },
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "🛡", title: "10 Jahre Garantie", description: "Auf alle Arbeiten und Materialien" },
    Highlight { icon: "⚡", title: "Schnelle Umsetzung", description: "Termingerecht und präzise" },
    Highlight { icon: "🏅", title: "Zertifiziert", description: "Schweizer Qualitätsstandards" },
    Highlight { icon: "⏱", title: "24/7 Support", description: "Immer für Sie erreichbar" },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Maria Müller",
        role: "Hausbesitzerin, Zürich",
        content: "Die Renovierung unserer Küche übertraf alle Erwartungen. Die Schweizer Qualität zeigt sich in jedem Detail, von den Oberflächen bis zur pünktlichen Lieferung.",
        accent: "accent-emerald",
    },
    Testimonial {
        name: "Hans Weber",
        role: "Architekt, Genf",
        content: "Als Fachmann kann ich bestätigen, dass nik-renovation die höchsten Qualitätsstandards einhält. Das Team ist außergewöhnlich und das Endergebnis ist tadellos.",
        accent: "accent-blue",
    },
    Testimonial {
        name: "Anna Schneider",
        role: "Designerin, Basel",
        content: "Fantastische Zusammenarbeit! Ihre Liebe zum Detail und ihr Engagement für Exzellenz unterscheidet sie deutlich von der Konkurrenz.",
        accent: "accent-violet",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: "📞", label: "Telefon", value: config::PHONE_DISPLAY, link: ChannelLink::Phone },
    ContactChannel { icon: "💬", label: "WhatsApp", value: config::MOBILE_DISPLAY, link: ChannelLink::WhatsApp },
    ContactChannel { icon: "✉", label: "E-Mail", value: config::EMAIL, link: ChannelLink::Email },
    ContactChannel { icon: "📍", label: "Adresse", value: "Bahnhofstrasse, 9470 Buchs, Schweiz", link: ChannelLink::None },
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Küchenrenovierung",
    "Luxusbäder",
    "Komplette Renovierungen",
    "Technische Installationen",
];

pub const FOOTER_COMPANY_LINKS: &[(&str, &str)] = &[
    ("Über Uns", "ueber-uns"),
    ("Projekte", "projekte"),
    ("Testimonials", "testimonials"),
    ("Kontakt", "kontakt"),
];

pub const TERMS_TITLE: &str = "Allgemeine Geschäftsbedingungen (AGB)";
pub const TERMS_FOOTNOTE: &str = "nik-renovation · Bahnhofstrasse · 9470 Buchs, Schweiz · Stand: Januar 2024";

pub const TERMS: &[LegalSection] = &[
    LegalSection {
        title: "§ 1 Geltungsbereich",
        content: "Diese Allgemeinen Geschäftsbedingungen gelten für alle Verträge zwischen nik-renovation und unseren Kunden über Renovierungs- und Baudienstleistungen. Abweichende Bedingungen des Kunden werden nur wirksam, wenn wir diesen ausdrücklich schriftlich zustimmen.",
    },
    LegalSection {
        title: "§ 2 Vertragsschluss",
        content: "Unsere Angebote sind freibleibend und unverbindlich. Ein Vertrag kommt erst durch unsere schriftliche Auftragsbestätigung oder durch Beginn der Arbeiten zustande. Mündliche Nebenabreden bedürfen der schriftlichen Bestätigung.",
    },
    LegalSection {
        title: "§ 3 Preise und Zahlungsbedingungen",
        content: "Alle Preise verstehen sich zuzüglich der gesetzlichen Mehrwertsteuer. Zahlungen sind innerhalb von 14 Tagen nach Rechnungsstellung ohne Abzug fällig. Bei Zahlungsverzug werden Verzugszinsen in Höhe von 8% über dem Basiszinssatz berechnet.",
    },
    LegalSection {
        title: "§ 4 Ausführung der Arbeiten",
        content: "Wir führen alle Arbeiten nach den anerkannten Regeln der Technik und den geltenden Normen aus. Terminangaben sind nur verbindlich, wenn sie ausdrücklich als verbindlich bezeichnet werden.",
    },
    LegalSection {
        title: "§ 5 Gewährleistung",
        content: "Wir gewähren eine Gewährleistung von 2 Jahren ab Abnahme der Arbeiten. Bei Mängeln sind wir zunächst zur Nachbesserung berechtigt. Schlägt die Nachbesserung fehl, kann der Kunde Minderung oder Rücktritt verlangen.",
    },
    LegalSection {
        title: "§ 6 Haftung",
        content: "Unsere Haftung ist auf Vorsatz und grobe Fahrlässigkeit beschränkt. Bei leichter Fahrlässigkeit haften wir nur bei Verletzung wesentlicher Vertragspflichten.",
    },
    LegalSection {
        title: "§ 7 Gerichtsstand",
        content: "Es gilt schweizerisches Recht. Gerichtsstand ist Zürich. Sollten einzelne Bestimmungen unwirksam sein, bleibt die Wirksamkeit der übrigen Bestimmungen unberührt.",
    },
];

pub const PRIVACY_TITLE: &str = "Datenschutzerklärung";
pub const PRIVACY_FOOTNOTE: &str = "Letzte Aktualisierung: Januar 2024 · info@nik-renovation.ch";

pub const PRIVACY: &[LegalSection] = &[
    LegalSection {
        title: "1. Datenschutz auf einen Blick",
        content: "Diese Datenschutzerklärung klärt Sie über die Art, den Umfang und Zweck der Verarbeitung von personenbezogenen Daten innerhalb unseres Onlineauftritts auf.",
    },
    LegalSection {
        title: "2. Verantwortliche Stelle",
        content: "nik-renovation · Bahnhofstrasse · 9470 Buchs, Schweiz · E-Mail: info@nik-renovation.ch · Telefon: +41 44 123 45 67",
    },
    LegalSection {
        title: "3. Kontaktformular",
        content: "Wenn Sie uns per Kontaktformular Anfragen zukommen lassen, werden Ihre Angaben zwecks Bearbeitung der Anfrage und für den Fall von Anschlussfragen bei uns gespeichert.",
    },
    LegalSection {
        title: "4. Server-Log-Dateien",
        content: "Der Provider erhebt automatisch Informationen in Server-Log-Dateien: Browsertyp, Betriebssystem, Referrer URL, Hostname, Uhrzeit der Serveranfrage und IP-Adresse.",
    },
    LegalSection {
        title: "5. Cookies",
        content: "Unsere Website verwendet Cookies. Sie können Ihren Browser so einstellen, dass Sie über das Setzen von Cookies informiert werden.",
    },
    LegalSection {
        title: "6. Ihre Rechte",
        content: "Sie haben das Recht auf Auskunft, Berichtigung, Löschung und Einschränkung der Verarbeitung Ihrer personenbezogenen Daten sowie das Recht auf Datenübertragbarkeit.",
    },
    LegalSection {
        title: "7. SSL-Verschlüsselung",
        content: "Diese Seite nutzt SSL-Verschlüsselung. Eine verschlüsselte Verbindung erkennen Sie daran, dass die Adresszeile von 'http://' auf 'https://' wechselt.",
    },
    LegalSection {
        title: "8. WhatsApp",
        content: "Wenn Sie die WhatsApp-Funktion nutzen, werden Sie zu WhatsApp weitergeleitet. Es gelten die Datenschutzbestimmungen von WhatsApp.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::navigation::NAV_ITEMS;

    #[test]
    fn every_navigation_target_is_an_animated_section() {
        for item in NAV_ITEMS {
            assert!(ANIMATED_SECTIONS.contains(&item.section_id), "{}", item.section_id);
        }
        for (_, id) in FOOTER_COMPANY_LINKS {
            assert!(ANIMATED_SECTIONS.contains(id), "{}", id);
        }
    }

    #[test]
    fn statistics_band_matches_the_hero_claims() {
        let targets: Vec<u64> = STAT_COUNTERS.iter().map(|stat| stat.target).collect();
        assert_eq!(targets, vec![500, 15, 98, 1200]);
        assert!(STAT_COUNTERS.iter().all(|stat| stat.duration_ms > 0));
    }

    #[test]
    fn legal_texts_are_complete() {
        assert_eq!(TERMS.len(), 7);
        assert_eq!(PRIVACY.len(), 8);
        assert!(TERMS.iter().chain(PRIVACY).all(|section| !section.content.is_empty()));
    }

    #[test]
    fn images_are_served_from_the_copied_assets_dir() {
        let images = std::iter::once(HERO_IMAGE).chain(PROJECTS.iter().map(|project| project.image));
        for image in images {
            assert!(image.starts_with("/assets/images/"), "{} would 404", image);
        }
    }

    #[test]
    fn contact_channels_follow_company_config() {
        let hrefs: Vec<Option<String>> = CONTACT_CHANNELS.iter().map(|channel| channel.link.href()).collect();
        assert_eq!(hrefs[0].as_deref(), Some(links::tel_href(config::PHONE_NUMBER).as_str()));
        assert_eq!(hrefs[1], Some(links::company_whatsapp_link()));
        assert!(hrefs[1].as_deref().is_some_and(|href| href.contains(config::WHATSAPP_NUMBER)));
        assert_eq!(hrefs[2], Some(format!("mailto:{}", config::EMAIL)));
        assert_eq!(hrefs[3], None);
    }
}
