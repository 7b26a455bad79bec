//! Template filling.
//!
//! The template is scanned once, left to right. The first occurrence of each
//! placeholder token is replaced by its value; later occurrences and tokens
//! inside substituted values are left alone. Tokens missing from the template
//! are skipped.

use tracing::debug;

use crate::models::ResumeDocument;
use crate::render::escape::{escape, escape_opt};
use crate::render::sections::{
    format_awards, format_certifications, format_contact_links, format_education,
    format_experience, format_publications, format_skills,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Name,
    Phone,
    Email,
    Location,
    Links,
    Summary,
    Skills,
    Experience,
    Education,
    Awards,
    Certifications,
    Publications,
}

impl Token {
    pub const ALL: [Token; 12] = [
        Token::Name,
        Token::Phone,
        Token::Email,
        Token::Location,
        Token::Links,
        Token::Summary,
        Token::Skills,
        Token::Experience,
        Token::Education,
        Token::Awards,
        Token::Certifications,
        Token::Publications,
    ];

    /// The literal text of the placeholder in the template.
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Name => "NAME",
            Token::Phone => "PHONE",
            Token::Email => "EMAIL",
            Token::Location => "LOCATION",
            Token::Links => "LINKS",
            Token::Summary => "SUMMARY",
            Token::Skills => "SKILLS",
            Token::Experience => "EXPERIENCE",
            Token::Education => "EDUCATION",
            Token::Awards => "AWARDS",
            Token::Certifications => "CERTIFICATIONS",
            Token::Publications => "PUBLICATIONS",
        }
    }
}

/// Rendered LaTeX for every placeholder token.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    values: Vec<(Token, String)>,
}

impl TemplateValues {
    /// Formats every section of `document`. Publication authors matching any
    /// of `highlight` are bolded.
    pub fn from_document(document: &ResumeDocument, highlight: &[String]) -> Self {
        let contact = &document.contact;
        let mut values = TemplateValues::default();
        values.set(Token::Name, escape(&document.name));
        values.set(Token::Phone, escape_opt(contact.phone.as_deref()));
        values.set(Token::Email, escape_opt(contact.email.as_deref()));
        values.set(Token::Location, escape_opt(contact.location.as_deref()));
        values.set(Token::Links, format_contact_links(&contact.links));
        values.set(Token::Summary, escape(&document.summary));
        values.set(Token::Skills, format_skills(&document.skills));
        values.set(Token::Experience, format_experience(&document.experience));
        values.set(Token::Education, format_education(&document.education));
        values.set(Token::Awards, format_awards(&document.awards));
        values.set(
            Token::Certifications,
            format_certifications(&document.certifications),
        );
        values.set(
            Token::Publications,
            format_publications(&document.publications, highlight),
        );
        values
    }

    pub fn set(&mut self, token: Token, value: String) {
        match self.values.iter_mut().find(|(t, _)| *t == token) {
            Some((_, existing)) => *existing = value,
            None => self.values.push((token, value)),
        }
    }

    pub fn get(&self, token: Token) -> Option<&str> {
        self.values
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, v)| v.as_str())
    }
}

/// Substitutes the first occurrence of each token in `template` with its value.
pub fn render(template: &str, values: &TemplateValues) -> String {
    let mut pending: Vec<(&'static str, &str)> = values
        .values
        .iter()
        .map(|(token, value)| (token.as_str(), value.as_str()))
        .collect();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    loop {
        // Earliest match wins; on a tie the longer token does.
        let next = pending
            .iter()
            .enumerate()
            .filter_map(|(i, (token, _))| rest.find(token).map(|pos| (pos, i)))
            .min_by(|(pos_a, a), (pos_b, b)| {
                pos_a
                    .cmp(pos_b)
                    .then(pending[*b].0.len().cmp(&pending[*a].0.len()))
            });

        let Some((pos, i)) = next else { break };
        let (token, value) = pending.swap_remove(i);
        out.push_str(&rest[..pos]);
        out.push_str(value);
        rest = &rest[pos + token.len()..];
    }
    out.push_str(rest);

    for (token, _) in &pending {
        debug!("Placeholder {token} not found in template");
    }
    out
}

/// Fills `template` from `document`, bolding the owner's own name in
/// publication author lists.
pub fn fill(template: &str, document: &ResumeDocument) -> String {
    let values = TemplateValues::from_document(document, &document.author_variants());
    render(template, &values)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r"\begin{document}
{\Huge NAME} \\ PHONE $|$ EMAIL $|$ LOCATION \\ LINKS
\section{Summary} SUMMARY
\section{Skills} SKILLS
\section{Experience} EXPERIENCE
\section{Education} EDUCATION
\section{Awards} AWARDS
\section{Certifications} CERTIFICATIONS
\section{Publications} PUBLICATIONS
\end{document}
";

    fn minimal_document() -> ResumeDocument {
        serde_yaml::from_str(
            r#"
name: Ada Lovelace
summary: Mathematician & writer
contact:
  phone: "+44 20 0000"
  email: ada@example.org
  location: London
  links:
    - name: GitHub
      url: https://github.com/ada
skills:
  - category: Math
    items: Analysis, Algebra
experience:
  - title: Analyst
    company: Analytical Engines
    location: London
    date_start: 1842
    date_end: 1843
    achievements:
      - name: Notes
        description: Wrote [Note G](https://example.org/g)
education:
  - degree: Private tutoring
    institution: Home
    location: London
    date_start: 1830
    date_end: 1835
awards:
  - title: Honour
    organization: Society
    location: London
    date: 1840
certifications:
  - title: Engines
    organization: Babbage
    date: 1841
    url: https://example.org/cert
publications:
  - authors: A. Lovelace
    title: Sketch of the Analytical Engine
    venue: Scientific Memoirs
    year: 1843
    url: https://example.org/sketch
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_fill_replaces_every_token() {
        let out = fill(TEMPLATE, &minimal_document());
        for token in Token::ALL {
            assert!(!out.contains(token.as_str()), "{} left in output", token.as_str());
        }
        assert!(out.contains(r"{\Huge Ada Lovelace}"));
        assert!(out.contains(r"Mathematician \& writer"));
        assert!(out.contains(r"\textbf{A. Lovelace}"));
        assert!(out.contains(r"\href{https://example.org/g}{Note G}"));
    }

    #[test]
    fn test_missing_token_is_a_no_op() {
        let mut values = TemplateValues::default();
        values.set(Token::Name, "Ada".to_string());
        values.set(Token::Awards, "prizes".to_string());
        assert_eq!(render("Hello NAME", &values), "Hello Ada");
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let mut values = TemplateValues::default();
        values.set(Token::Name, "Ada".to_string());
        assert_eq!(render("NAME and NAME", &values), "Ada and NAME");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let mut values = TemplateValues::default();
        values.set(Token::Summary, "I list SKILLS here".to_string());
        values.set(Token::Skills, "Rust".to_string());
        assert_eq!(
            render("SUMMARY / SKILLS", &values),
            "I list SKILLS here / Rust"
        );
    }

    #[test]
    fn test_tokens_out_of_order() {
        let mut values = TemplateValues::default();
        values.set(Token::Name, "Ada".to_string());
        values.set(Token::Email, "ada@example.org".to_string());
        assert_eq!(render("EMAIL - NAME", &values), "ada@example.org - Ada");
    }

    #[test]
    fn test_empty_optional_sections_render_empty() {
        let mut doc = minimal_document();
        doc.awards.clear();
        doc.publications.clear();
        let values = TemplateValues::from_document(&doc, &[]);
        assert_eq!(values.get(Token::Awards), Some(""));
        assert_eq!(values.get(Token::Publications), Some(""));
    }

    #[test]
    fn test_absent_contact_fields_render_empty() {
        let mut doc = minimal_document();
        doc.contact.phone = None;
        let values = TemplateValues::from_document(&doc, &[]);
        assert_eq!(values.get(Token::Phone), Some(""));
    }

    #[test]
    fn test_set_overwrites() {
        let mut values = TemplateValues::default();
        values.set(Token::Name, "A".to_string());
        values.set(Token::Name, "B".to_string());
        assert_eq!(values.get(Token::Name), Some("B"));
    }
}
