//! Quick-look condensation of a resume: headline, per-section counts with the
//! top entry, contact channels, and which sections are still empty.
//!
//! Works straight off the data model (no rendering) and accepts anything the
//! model accepts, including a completely empty resume.

use std::fmt;

use serde::Serialize;

use crate::model::{Education, Experience, Project, Resume, Section, SkillGroup};

/// Longest excerpt, in characters, before it is cut with "...".
const MAX_EXCERPT_CHARS: usize = 80;

const UNTITLED_RESUME: &str = "(untitled resume)";
const UNTITLED_ENTRY: &str = "(untitled entry)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOverview {
    pub section: Section,
    pub count: usize,
    /// One-line description of the first (top-most) entry.
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSummary {
    /// `name | subtitle`, whichever parts are present.
    pub headline: String,
    /// First line of the summary, shortened.
    pub summary_excerpt: Option<String>,
    pub contact_channels: Vec<&'static str>,
    /// Only sections with at least one entry, in layout order.
    pub sections: Vec<SectionOverview>,
    pub missing_sections: Vec<Section>,
    pub total_entries: usize,
}

/// Builds the structured preview.
pub fn preview(resume: &Resume) -> PreviewSummary {
    let headline = [resume.name.trim(), resume.subtitle.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    let headline = if headline.is_empty() {
        UNTITLED_RESUME.to_string()
    } else {
        excerpt(&headline)
    };

    let summary_excerpt = resume
        .summary
        .as_deref()
        .and_then(|s| s.lines().map(str::trim).find(|line| !line.is_empty()))
        .map(excerpt);

    let mut sections = Vec::new();
    let mut missing_sections = Vec::new();
    for section in Section::ALL {
        let count = resume.len(section);
        match first_headline(resume, section) {
            Some(headline) => sections.push(SectionOverview {
                section,
                count,
                headline: excerpt(&headline),
            }),
            None => missing_sections.push(section),
        }
    }

    PreviewSummary {
        headline,
        summary_excerpt,
        contact_channels: resume.contact.channels(),
        total_entries: sections.iter().map(|s| s.count).sum(),
        sections,
        missing_sections,
    }
}

/// Plain-text preview. Never empty.
pub fn summarize(resume: &Resume) -> String {
    preview(resume).to_string()
}

impl fmt::Display for PreviewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.headline)?;
        if let Some(summary) = &self.summary_excerpt {
            writeln!(f, "Summary: {summary}")?;
        }
        if !self.contact_channels.is_empty() {
            writeln!(f, "Contact: {}", self.contact_channels.join(", "))?;
        }
        if self.sections.is_empty() {
            return write!(f, "No sections filled in");
        }
        for overview in &self.sections {
            writeln!(
                f,
                "{} ({}): {}",
                section_title(overview.section),
                overview.count,
                overview.headline
            )?;
        }
        if self.missing_sections.is_empty() {
            write!(f, "All sections filled in")
        } else {
            let missing: Vec<&str> = self.missing_sections.iter().map(Section::as_str).collect();
            write!(f, "Empty: {}", missing.join(", "))
        }
    }
}

fn section_title(section: Section) -> &'static str {
    match section {
        Section::Experience => "Experience",
        Section::Projects => "Projects",
        Section::Education => "Education",
        Section::Skills => "Skills",
        Section::Achievements => "Achievements",
    }
}

fn first_headline(resume: &Resume, section: Section) -> Option<String> {
    match section {
        Section::Experience => resume.experience.first().map(experience_headline),
        Section::Projects => resume.projects.first().map(project_headline),
        Section::Education => resume.education.first().map(education_headline),
        Section::Skills => resume.skills.first().map(skill_headline),
        Section::Achievements => resume.achievements.first().map(|a| or_untitled(a.trim())),
    }
}

fn experience_headline(exp: &Experience) -> String {
    let role = match (exp.title.trim(), exp.company.trim()) {
        ("", "") => UNTITLED_ENTRY.to_string(),
        (title, "") => title.to_string(),
        ("", company) => company.to_string(),
        (title, company) => format!("{title} at {company}"),
    };
    with_dates(role, &exp.start_date, &exp.end_date)
}

fn project_headline(proj: &Project) -> String {
    let name = joined(&[proj.title.as_str(), proj.subtitle.as_str()], ": ");
    with_dates(name, &proj.start_date, &proj.end_date)
}

fn education_headline(edu: &Education) -> String {
    let name = joined(&[edu.degree.as_str(), edu.school.as_str()], ", ");
    with_dates(name, &edu.start_date, &edu.end_date)
}

fn skill_headline(group: &SkillGroup) -> String {
    joined(&[group.category.as_str(), group.skills.as_str()], ": ")
}

fn joined(parts: &[&str], sep: &str) -> String {
    let present: Vec<&str> = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    or_untitled(&present.join(sep))
}

fn with_dates(text: String, start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => text,
        (start, "") => format!("{text} ({start})"),
        ("", end) => format!("{text} ({end})"),
        (start, end) => format!("{text} ({start} - {end})"),
    }
}

fn or_untitled(text: &str) -> String {
    if text.is_empty() {
        UNTITLED_ENTRY.to_string()
    } else {
        text.to_string()
    }
}

/// Cuts on a character boundary, never inside a code point.
fn excerpt(text: &str) -> String {
    if text.chars().count() <= MAX_EXCERPT_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(MAX_EXCERPT_CHARS).collect();
    cut.push_str("...");
    cut
}
