//! Resume → single self-contained HTML document.
//!
//! Layout is fixed: a primary column (title header, Experience, Projects,
//! Education) and a sidebar (Contact, Skills, Achievements, attribution).
//! A section whose sequence is empty is left out entirely. Text is escaped
//! at the leaf as it is written; the document is never escaped as a whole.
//!
//! Rendering is total over the data model: there is no error path.

mod sections;
mod stylesheet;

use tracing::debug;

use crate::escape::escape_into;
use crate::model::Resume;

pub use stylesheet::STYLESHEET;

/// Static line at the bottom of the sidebar.
pub const ATTRIBUTION: &str = "Built with Resume Builder";

/// Blocks scripts, plugins and every remote fetch; only the embedded
/// stylesheet and inline data images are allowed.
const CONTENT_SECURITY_POLICY: &str =
    "default-src 'none'; style-src 'unsafe-inline'; img-src data:; base-uri 'none'; form-action 'none'";

/// Renders `resume` to a complete HTML document. Same input, same bytes.
pub fn render(resume: &Resume) -> String {
    let mut out = String::with_capacity(STYLESHEET.len() + 8 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta http-equiv=\"Content-Security-Policy\" content=\"");
    out.push_str(CONTENT_SECURITY_POLICY);
    out.push_str("\">\n<title>");
    if resume.name.trim().is_empty() {
        out.push_str("Resume");
    } else {
        escape_into(&mut out, &resume.name);
        out.push_str(" Resume");
    }
    out.push_str("</title>\n<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body lang=\"en\">\n");

    primary_region(&mut out, resume);
    secondary_region(&mut out, resume);

    out.push_str("</body>\n</html>\n");

    debug!(
        bytes = out.len(),
        experience = resume.experience.len(),
        projects = resume.projects.len(),
        education = resume.education.len(),
        "rendered resume"
    );
    out
}

fn primary_region(out: &mut String, resume: &Resume) {
    out.push_str("<section id=\"main\">\n");
    sections::header(out, &resume.name, &resume.subtitle, resume.summary.as_deref());

    if !resume.experience.is_empty() {
        sections::open_block(out, "experience", "Experience", false);
        for exp in &resume.experience {
            sections::experience(out, exp);
        }
        sections::close_block(out);
    }

    if !resume.projects.is_empty() {
        sections::open_block(out, "projects", "Projects", false);
        for proj in &resume.projects {
            sections::project(out, proj);
        }
        sections::close_block(out);
    }

    if !resume.education.is_empty() {
        sections::open_block(out, "education", "Education &amp; Certifications", true);
        for edu in &resume.education {
            sections::education(out, edu);
        }
        sections::close_block(out);
    }

    out.push_str("</section>\n");
}

fn secondary_region(out: &mut String, resume: &Resume) {
    out.push_str("<aside id=\"sidebar\">\n");

    if !resume.contact.is_empty() {
        sections::contact(out, &resume.contact);
    }

    if !resume.skills.is_empty() {
        out.push_str("<div class=\"side-block\" id=\"skills\">\n<h1>Skills</h1>\n");
        for group in &resume.skills {
            sections::skill_group(out, group);
        }
        out.push_str("</div>\n");
    }

    if !resume.achievements.is_empty() {
        sections::achievements(out, &resume.achievements);
    }

    out.push_str("<div class=\"side-block\" id=\"disclaimer\">");
    out.push_str(ATTRIBUTION);
    out.push_str("</div>\n</aside>\n");
}
