use log::warn;
use serde::Serialize;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, DomError};

const STRUCTURED_DATA_ID: &str = "structured-data";

#[derive(Clone, Debug, PartialEq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: &'static str,
    pub postal_code: &'static str,
    pub address_locality: &'static str,
    pub address_country: &'static str,
}

/// schema.org record search engines read for the business card.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub telephone: &'static str,
    pub email: &'static str,
    pub founding_date: String,
    pub address: PostalAddress,
    pub area_served: &'static str,
}

impl StructuredData {
    pub fn for_page(meta: &PageMetadata) -> Self {
        Self {
            context: "https://schema.org",
            kind: "HomeAndConstructionBusiness",
            name: config::COMPANY_NAME,
            description: meta.description,
            url: config::COMPANY_URL,
            telephone: config::PHONE_NUMBER,
            email: config::EMAIL,
            founding_date: config::FOUNDED_YEAR.to_string(),
            address: PostalAddress {
                kind: "PostalAddress",
                street_address: config::STREET,
                postal_code: config::POSTAL_CODE,
                address_locality: config::LOCALITY,
                address_country: config::COUNTRY_CODE,
            },
            area_served: config::COUNTRY,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn upsert_head_element(tag: &str, selector: &str, init: impl FnOnce(&web_sys::Element) -> Result<(), DomError>) -> Result<(), DomError> {
    let document = dom::document()?;
    let element = match document.query_selector(selector)? {
        Some(existing) => existing,
        None => {
            let created = document.create_element(tag)?;
            let head = document.head().ok_or(DomError::NoDocument)?;
            head.append_child(&created)?;
            created
        }
    };
    init(&element)
}

/// Writes title, description and the JSON-LD block into `<head>`.
pub fn apply(meta: &PageMetadata) -> Result<(), DomError> {
    let document = dom::document()?;
    document.set_title(meta.title);

    upsert_head_element("meta", "meta[name=\"description\"]", |element| {
        element.set_attribute("name", "description")?;
        element.set_attribute("content", meta.description)?;
        Ok(())
    })?;

    let json = StructuredData::for_page(meta)
        .to_json()
        .map_err(|err| DomError::Js(err.to_string()))?;
    upsert_head_element("script", &format!("script#{}", STRUCTURED_DATA_ID), |element| {
        element.set_id(STRUCTURED_DATA_ID);
        element.set_attribute("type", "application/ld+json")?;
        element.set_text_content(Some(&json));
        Ok(())
    })
}

#[hook]
pub fn use_page_metadata(meta: PageMetadata) {
    use_effect_with_deps(
        |meta| {
            if let Err(err) = apply(meta) {
                warn!("Failed to apply page metadata: {}", err);
            }
            || ()
        },
        meta,
    );
}
