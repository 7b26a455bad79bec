use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// The full resume as loaded from the input document. Read-only after load.
///
/// `name`, `summary`, `contact`, `skills` and `experience` are mandatory; a
/// document missing any of them fails to deserialize. The remaining sections
/// default to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    pub summary: String,
    pub contact: ContactInfo,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub awards: Vec<AwardEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub publications: Vec<PublicationEntry>,
}

impl ResumeDocument {
    /// Spellings of the owner's name to bold in publication author lists,
    /// longest first: the full name, then the `F. Lastname` initial form.
    pub fn author_variants(&self) -> Vec<String> {
        let parts: Vec<&str> = self.name.split_whitespace().collect();
        match parts.as_slice() {
            [] => vec![],
            [only] => vec![only.to_string()],
            [first, .., last] => {
                let mut variants = vec![parts.join(" ")];
                if let Some(initial) = first.chars().next() {
                    variants.push(format!("{initial}. {last}"));
                }
                variants
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub location: Option<String>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Section records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    #[serde(deserialize_with = "scalar_text")]
    pub items: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub location: String,
    pub company: String,
    #[serde(deserialize_with = "scalar_text")]
    pub date_start: String,
    #[serde(deserialize_with = "scalar_text")]
    pub date_end: String,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub company_url: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub company_description: Option<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// One bullet under an experience entry. `description` may carry
/// `[text](url)` inline links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub location: String,
    #[serde(deserialize_with = "scalar_text")]
    pub date_start: String,
    #[serde(deserialize_with = "scalar_text")]
    pub date_end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardEntry {
    pub title: String,
    pub organization: String,
    pub location: String,
    #[serde(deserialize_with = "scalar_text")]
    pub date: String,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub organization_detail: Option<String>,
    #[serde(default, deserialize_with = "optional_scalar_text")]
    pub organization_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationEntry {
    pub title: String,
    pub organization: String,
    #[serde(deserialize_with = "scalar_text")]
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationEntry {
    pub authors: String,
    pub title: String,
    pub venue: String,
    #[serde(deserialize_with = "scalar_text")]
    pub year: String,
    pub url: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar coercion
// ────────────────────────────────────────────────────────────────────────────

/// YAML types `2021` as an integer and `yes` as a bool; dates and years are
/// kept as the text the author wrote.
fn scalar_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_text(value).ok_or_else(|| D::Error::custom("expected a text or number value"))
}

fn optional_scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => scalar_to_text(value)
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected a text or number value")),
    }
}
