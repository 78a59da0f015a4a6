use yew::prelude::*;

use crate::metadata::PageMetadata;

/// The three editions of the landing page. They share every component and
/// differ only in copy, palette and how sections make their entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Signature,
    Classic,
    Atelier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    SlideUp,
    Fade,
    Scale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantCopy {
    pub badge: &'static str,
    pub headline_lead: &'static str,
    pub headline_accent: &'static str,
    pub headline_tail: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
    pub quote_cta: &'static str,
    pub banner_title: &'static str,
    pub banner_accent: &'static str,
    pub banner_text: &'static str,
    pub banner_cta: &'static str,
}

const SIGNATURE_COPY: VariantCopy = VariantCopy {
    badge: "🇨🇭 Schweizer Qualität seit 2009",
    headline_lead: "Wir",
    headline_accent: "verwandeln",
    headline_tail: "Ihr Zuhause.",
    subtitle: "Premium-Renovierungen mit Schweizer Präzision. Vom ersten Entwurf bis zur Schlüsselübergabe realisieren wir Ihre Traumrenovierung.",
    primary_cta: "Kostenlose Beratung",
    secondary_cta: "Projekte ansehen",
    quote_cta: "Kostenloses Angebot",
    banner_title: "Bereit für Ihre",
    banner_accent: "Traumrenovierung?",
    banner_text: "Kontaktieren Sie uns für eine kostenlose Beratung. Wir verwirklichen Ihre Ideen mit garantierter Schweizer Qualität.",
    banner_cta: "Jetzt Angebot anfordern",
};

const CLASSIC_COPY: VariantCopy = VariantCopy {
    badge: "Familienbetrieb aus Buchs SG",
    headline_lead: "Handwerk, das",
    headline_accent: "bleibt",
    headline_tail: "für Generationen.",
    subtitle: "Seit 2009 renovieren wir Küchen, Bäder und ganze Wohnungen mit sorgfältiger Planung und fester Ansprechperson.",
    primary_cta: "Beratung vereinbaren",
    secondary_cta: "Referenzen ansehen",
    quote_cta: "Offerte anfragen",
    banner_title: "Ihr Projekt in",
    banner_accent: "guten Händen",
    banner_text: "Erzählen Sie uns von Ihren Plänen. Innerhalb von 24 Stunden erhalten Sie eine unverbindliche Offerte.",
    banner_cta: "Offerte anfordern",
};

const ATELIER_COPY: VariantCopy = VariantCopy {
    badge: "Atelier für Umbau & Modernisierung",
    headline_lead: "Räume",
    headline_accent: "neu gedacht",
    headline_tail: "bis ins Detail.",
    subtitle: "Architektur, Materialwahl und Ausführung aus einer Hand. Klare Linien, ehrliche Materialien, präzise Umsetzung.",
    primary_cta: "Gespräch anfragen",
    secondary_cta: "Portfolio",
    quote_cta: "Anfrage",
    banner_title: "Lassen Sie uns",
    banner_accent: "gestalten",
    banner_text: "Ein erstes Gespräch ist kostenlos und unverbindlich, vor Ort oder in unserem Atelier.",
    banner_cta: "Termin anfragen",
};

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Signature, Variant::Classic, Variant::Atelier];

    pub fn copy(self) -> &'static VariantCopy {
        match self {
            Variant::Signature => &SIGNATURE_COPY,
            Variant::Classic => &CLASSIC_COPY,
            Variant::Atelier => &ATELIER_COPY,
        }
    }

    pub fn reveal(self) -> RevealStyle {
        match self {
            Variant::Signature => RevealStyle::SlideUp,
            Variant::Classic => RevealStyle::Fade,
            Variant::Atelier => RevealStyle::Scale,
        }
    }

    pub fn theme_class(self) -> &'static str {
        match self {
            Variant::Signature => "theme-signature",
            Variant::Classic => "theme-classic",
            Variant::Atelier => "theme-atelier",
        }
    }

    /// Delay between neighbouring cards as a section reveals.
    pub fn stagger_ms(self) -> u32 {
        match self {
            Variant::Signature => 80,
            Variant::Classic => 150,
            Variant::Atelier => 60,
        }
    }

    pub fn metadata(self) -> PageMetadata {
        match self {
            Variant::Signature => PageMetadata {
                title: "nik-renovation | Premium-Renovierungen in der Schweiz",
                description: "Premium-Renovierungen mit Schweizer Präzision: Küchen, Bäder, Komplettumbauten und technische Installationen. Kostenlose Beratung.",
            },
            Variant::Classic => PageMetadata {
                title: "nik-renovation | Renovationen aus Buchs SG",
                description: "Familienbetrieb für Küchen, Bäder und Wohnungsrenovationen in der Ostschweiz. Offerte innert 24 Stunden.",
            },
            Variant::Atelier => PageMetadata {
                title: "nik-renovation Atelier | Umbau & Modernisierung",
                description: "Architektur, Materialwahl und Ausführung aus einer Hand. Umbau und Modernisierung mit Schweizer Präzision.",
            },
        }
    }
}

impl RevealStyle {
    fn class(self) -> &'static str {
        match self {
            RevealStyle::SlideUp => "reveal-slide",
            RevealStyle::Fade => "reveal-fade",
            RevealStyle::Scale => "reveal-scale",
        }
    }
}

/// Classes for an element that animates in once its section was seen.
pub fn reveal_classes(style: RevealStyle, revealed: bool) -> Classes {
    classes!("reveal", style.class(), revealed.then_some("is-visible"))
}

pub fn stagger_style(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", index as u32 * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_differ_in_copy_and_treatment() {
        let headlines: Vec<&str> = Variant::ALL.iter().map(|v| v.copy().headline_accent).collect();
        assert_eq!(headlines, vec!["verwandeln", "bleibt", "neu gedacht"]);

        let reveals: Vec<RevealStyle> = Variant::ALL.iter().map(|v| v.reveal()).collect();
        assert_eq!(reveals, vec![RevealStyle::SlideUp, RevealStyle::Fade, RevealStyle::Scale]);
    }

    #[test]
    fn reveal_classes_toggle_visibility() {
        let hidden = reveal_classes(RevealStyle::Fade, false);
        assert!(hidden.contains("reveal-fade"));
        assert!(!hidden.contains("is-visible"));

        let shown = reveal_classes(RevealStyle::Fade, true);
        assert!(shown.contains("is-visible"));
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_style(0, 80), "transition-delay: 0ms;");
        assert_eq!(stagger_style(3, 150), "transition-delay: 450ms;");
    }

    #[test]
    fn every_variant_has_metadata() {
        for variant in Variant::ALL {
            let meta = variant.metadata();
            assert!(meta.title.contains("nik-renovation"));
            assert!(!meta.description.is_empty());
        }
    }
}
