use serde::{Deserialize, Serialize};

use crate::config;
use crate::links;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "küche")]
    Kitchen,
    #[serde(rename = "bad")]
    Bath,
    #[serde(rename = "komplett")]
    Complete,
    #[serde(rename = "technik")]
    Technical,
    #[serde(rename = "andere")]
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Kitchen,
        ProjectType::Bath,
        ProjectType::Complete,
        ProjectType::Technical,
        ProjectType::Other,
    ];

    /// Form value, kept stable for whatever service ends up receiving the post.
    pub fn value(self) -> &'static str {
        match self {
            ProjectType::Kitchen => "küche",
            ProjectType::Bath => "bad",
            ProjectType::Complete => "komplett",
            ProjectType::Technical => "technik",
            ProjectType::Other => "andere",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Kitchen => "Küchenrenovierung",
            ProjectType::Bath => "Luxusbad",
            ProjectType::Complete => "Komplette Renovierung",
            ProjectType::Technical => "Technische Installationen",
            ProjectType::Other => "Andere",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

/// Whatever the visitor typed into the quote form. No validation happens here;
/// the receiving side owns that policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub project_type: Option<ProjectType>,
    pub message: String,
}

impl ContactRequest {
    pub fn subject(&self) -> String {
        match self.project_type {
            Some(kind) => format!("Angebotsanfrage: {}", kind.label()),
            None => "Angebotsanfrage".to_string(),
        }
    }

    pub fn body(&self) -> String {
        let field = |value: &str| if value.trim().is_empty() { "-".to_string() } else { value.trim().to_string() };
        format!(
            "Name: {}\nTelefon: {}\nE-Mail: {}\nProjekttyp: {}\n\n{}",
            field(&self.name),
            field(&self.phone),
            field(&self.email),
            self.project_type.map(ProjectType::label).unwrap_or("-"),
            self.message.trim(),
        )
    }

    /// Mail draft to the office, used while no submission endpoint is configured.
    pub fn mailto_href(&self) -> String {
        links::mailto_href(config::EMAIL, &self.subject(), &self.body())
    }
}
