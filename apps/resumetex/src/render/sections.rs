//! Section formatters, one LaTeX block per resume section.
//!
//! Each formatter concatenates per-record blocks in input order. An empty
//! slice yields an empty string. The macros used here (`\resumeSubheading`,
//! `\resumeItem`, ...) are defined by the template.

use crate::models::{
    AwardEntry, CertificationEntry, EducationEntry, ExperienceEntry, Link, PublicationEntry,
    SkillGroup,
};
use crate::render::escape::{escape, escape_ampersands};
use crate::render::links::{href, translate_links};

/// Separator between inline items on one line.
const VERT: &str = r" $\vert$ ";

/// Vertical space between publications.
const PUBLICATION_SPACING: &str = "  \\vspace{5pt}\n";

/// Optional text fields count as absent when empty.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

pub fn format_contact_links(links: &[Link]) -> String {
    links
        .iter()
        .map(|link| href(&link.url, &escape(&link.name)))
        .collect::<Vec<_>>()
        .join(VERT)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Skill text is frequently pasted with `\&` already in place; escape
/// ampersands before and after the general pass.
fn escape_skill_text(text: &str) -> String {
    escape(&escape_ampersands(text)).replace(r"\\&", r"\&")
}

pub fn format_skills(skills: &[SkillGroup]) -> String {
    let mut out = String::new();
    for skill in skills {
        let category = escape_skill_text(&skill.category);
        let items = escape_skill_text(&skill.items);
        out.push_str(&format!(
            "  \\resumeSubheading\n    {{{category}}}{{}}\n    {{{items}}}{{}}\n"
        ));
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// Company name, hyperlinked when a URL exists, followed by `{: description}`
/// when a description exists.
fn company_display(entry: &ExperienceEntry) -> String {
    let company = escape(&entry.company);
    let name = match present(&entry.company_url) {
        Some(url) => href(url, &company),
        None => company,
    };
    match present(&entry.company_description) {
        Some(description) => format!("{name}{{: {}}}", escape(description)),
        None => name,
    }
}

pub fn format_experience(entries: &[ExperienceEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let title = escape(&entry.title);
        let location = escape(&entry.location);
        let company = company_display(entry);
        let dates = format!(
            "{} - {}",
            escape(&entry.date_start),
            escape(&entry.date_end)
        );

        out.push_str(&format!(
            "  \\resumeSubheading\n  {{{title}}}{{{dates}}}\n  {{{company}}}{{{location}}}\n"
        ));

        if entry.achievements.is_empty() {
            continue;
        }
        out.push_str("    \\resumeItemListStart\n");
        for achievement in &entry.achievements {
            let name = escape(&achievement.name);
            let description = translate_links(&achievement.description);
            out.push_str(&format!(
                "      \\resumeItem{{{name}}}\n      {{{description}}}\n"
            ));
        }
        out.push_str("      \\resumeItemListEnd\n\n");
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn format_education(entries: &[EducationEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let degree = escape(&entry.degree);
        let institution = escape(&entry.institution);
        let location = escape(&entry.location);
        let dates = format!(
            "{} -- {}",
            escape(&entry.date_start),
            escape(&entry.date_end)
        );
        out.push_str(&format!(
            "    \\resumeSubheading\n      {{{degree}}}{{{dates}}}\n      {{{institution}}}{{{location}}}\n"
        ));
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Awards
// ────────────────────────────────────────────────────────────────────────────

/// Organization, then ` $\vert$ detail` when a detail exists. With a URL only
/// the part after the first colon of the detail is linked (`Rank: 1st` links
/// `1st`).
fn award_organization(award: &AwardEntry) -> String {
    let organization = escape(&award.organization);
    let Some(detail) = present(&award.organization_detail) else {
        return organization;
    };
    let detail = escape(detail);
    match present(&award.organization_url) {
        Some(url) => {
            let label = detail.split_once(':').map_or(detail.as_str(), |(_, rest)| rest);
            format!("{organization}{VERT}{}", href(url, label.trim()))
        }
        None => format!("{organization}{VERT}{detail}"),
    }
}

pub fn format_awards(awards: &[AwardEntry]) -> String {
    let mut out = String::new();
    for award in awards {
        let title = escape(&award.title);
        let date = escape(&award.date);
        let organization = award_organization(award);
        let location = escape(&award.location);
        out.push_str(&format!(
            "    \\resumeSubheading\n      {{{title}}}{{{date}}}\n      {{{organization}}}{{{location}}}\n"
        ));
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Certifications
// ────────────────────────────────────────────────────────────────────────────

pub fn format_certifications(certifications: &[CertificationEntry]) -> String {
    let mut out = String::new();
    for cert in certifications {
        let title = escape(&cert.title);
        let date = escape(&cert.date);
        let organization = escape(&cert.organization);
        let link = href(&cert.url, "Certificate");
        out.push_str(&format!(
            "    \\resumeSubheading\n      {{{title}}}{{{date}}}\n      {{{link}}}{{{organization}}}\n"
        ));
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Publications
// ────────────────────────────────────────────────────────────────────────────

/// Bolds the first of `highlight` found verbatim in the escaped author list.
/// Matching is exact-substring; `highlight` should be ordered longest first.
fn bold_author(authors: &str, highlight: &[String]) -> String {
    highlight
        .iter()
        .filter(|name| !name.is_empty())
        .map(|name| escape(name))
        .find(|name| authors.contains(name.as_str()))
        .map_or_else(
            || authors.to_string(),
            |name| authors.replace(&name, &format!("\\textbf{{{name}}}")),
        )
}

pub fn format_publications(publications: &[PublicationEntry], highlight: &[String]) -> String {
    let mut out = String::new();
    for (i, publication) in publications.iter().enumerate() {
        let authors = bold_author(&escape(&publication.authors), highlight);
        let title = escape(&publication.title);
        let venue = escape(&publication.venue);
        let year = escape(&publication.year);
        let link = href(&publication.url, "link");
        out.push_str(&format!(
            "  \\item{{{authors}, ``{title}'', {venue}, {year}. {link}}}\n"
        ));
        if i + 1 < publications.len() {
            out.push_str(PUBLICATION_SPACING);
        }
    }
    out
}
