//! Per-section markup. Every function appends to `out` and escapes each
//! leaf value as it is written; no function ever escapes markup it built.

use crate::escape::{display_url, escape_attr, escape_into, safe_href};
use crate::model::{Contact, Education, Experience, Project, SkillGroup};

// ────────────────────────────────────────────────────────────────────────────
// Primary region
// ────────────────────────────────────────────────────────────────────────────

/// Name, subtitle and optional multi-line summary.
pub(super) fn header(out: &mut String, name: &str, subtitle: &str, summary: Option<&str>) {
    out.push_str("<header id=\"title\">\n<h1>");
    escape_into(out, name);
    out.push_str("</h1>\n<span class=\"subtitle\">");
    escape_into(out, subtitle);
    out.push_str("</span>\n");
    if let Some(summary) = summary.filter(|s| !s.trim().is_empty()) {
        out.push_str("<p class=\"summary\">");
        summary_lines(out, summary);
        out.push_str("</p>\n");
    }
    out.push_str("</header>\n");
}

/// Splits on author line breaks, escapes each segment on its own and joins
/// the segments with `<br>`.
pub(super) fn summary_lines(out: &mut String, summary: &str) {
    let normalized = summary.replace("\r\n", "\n").replace('\r', "\n");
    for (i, segment) in normalized.split('\n').enumerate() {
        if i > 0 {
            out.push_str("<br>");
        }
        escape_into(out, segment);
    }
}

/// Opens a `main-block`; `concise` is the tighter education styling.
pub(super) fn open_block(out: &mut String, id: &str, heading: &str, concise: bool) {
    out.push_str("<section class=\"main-block");
    if concise {
        out.push_str(" concise");
    }
    out.push_str("\" id=\"");
    out.push_str(id);
    out.push_str("\">\n<h2>");
    out.push_str(heading);
    out.push_str("</h2>\n");
}

pub(super) fn close_block(out: &mut String) {
    out.push_str("</section>\n");
}

/// Timeline entry for a job.
pub(super) fn experience(out: &mut String, exp: &Experience) {
    timeline(
        out,
        TimelineFields {
            title: &exp.title,
            place: &exp.company,
            location: &exp.location,
            start: &exp.start_date,
            end: &exp.end_date,
            bullets: &exp.bullets,
        },
    );
}

/// Timeline entry for a project. Projects have no location.
pub(super) fn project(out: &mut String, proj: &Project) {
    timeline(
        out,
        TimelineFields {
            title: &proj.title,
            place: &proj.subtitle,
            location: "",
            start: &proj.start_date,
            end: &proj.end_date,
            bullets: &proj.bullets,
        },
    );
}

/// Simple entry for a degree: dates and header like a timeline entry, but a
/// free-text notes block instead of a bullet list.
pub(super) fn education(out: &mut String, edu: &Education) {
    out.push_str("<section class=\"blocks\">\n");
    dates(out, &edu.start_date, &edu.end_date);
    out.push_str("<div class=\"decorator\"></div>\n<div class=\"details\">\n");
    details_header(out, &edu.degree, &edu.school, &edu.location);
    if !edu.notes.trim().is_empty() {
        out.push_str("<div class=\"notes\">");
        escape_into(out, &edu.notes);
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n</section>\n");
}

struct TimelineFields<'a> {
    title: &'a str,
    place: &'a str,
    location: &'a str,
    start: &'a str,
    end: &'a str,
    bullets: &'a [String],
}

/// An empty bullet sequence still yields an empty `<ul>` so every timeline
/// row keeps the same structure.
fn timeline(out: &mut String, fields: TimelineFields<'_>) {
    out.push_str("<section class=\"blocks\">\n");
    dates(out, fields.start, fields.end);
    out.push_str("<div class=\"decorator\"></div>\n<div class=\"details\">\n");
    details_header(out, fields.title, fields.place, fields.location);
    out.push_str("<div><ul>");
    for bullet in fields.bullets {
        out.push_str("<li>");
        escape_into(out, bullet);
        out.push_str("</li>");
    }
    out.push_str("</ul></div>\n</div>\n</section>\n");
}

/// End date on top, start date below.
fn dates(out: &mut String, start: &str, end: &str) {
    out.push_str("<div class=\"date\"><span>");
    escape_into(out, end);
    out.push_str("</span><span>");
    escape_into(out, start);
    out.push_str("</span></div>\n");
}

fn details_header(out: &mut String, title: &str, place: &str, location: &str) {
    out.push_str("<header><h3>");
    escape_into(out, title);
    out.push_str("</h3><span class=\"place\">");
    escape_into(out, place);
    out.push_str("</span>");
    if !location.trim().is_empty() {
        out.push_str("<span class=\"location\">");
        escape_into(out, location);
        out.push_str("</span>");
    }
    out.push_str("</header>\n");
}

// ────────────────────────────────────────────────────────────────────────────
// Sidebar
// ────────────────────────────────────────────────────────────────────────────

/// Contact block. Caller checks `Contact::is_empty` first.
pub(super) fn contact(out: &mut String, contact: &Contact) {
    out.push_str("<div class=\"side-block\" id=\"contact\">\n<h1>Contact Info</h1>\n<ul>\n");

    if let Some(website) = non_blank(contact.website.as_deref()) {
        out.push_str("<li class=\"website\">");
        match safe_href(website) {
            Some(href) => {
                out.push_str("<a href=\"");
                out.push_str(&href);
                out.push_str("\">");
                escape_into(out, display_url(website));
                out.push_str("</a>");
            }
            None => escape_into(out, display_url(website)),
        }
        out.push_str("</li>\n");
    }

    if let Some(email) = non_blank(contact.email.as_deref()) {
        out.push_str("<li class=\"email\"><a href=\"mailto:");
        out.push_str(&escape_attr(email.trim()));
        out.push_str("\">");
        escape_into(out, email);
        out.push_str("</a></li>\n");
    }

    if let Some(phone) = non_blank(contact.phone.as_deref()) {
        out.push_str("<li class=\"phone\">");
        escape_into(out, phone);
        out.push_str("</li>\n");
    }

    out.push_str("</ul>\n</div>\n");
}

/// Simple entry for a skills line: bold category, then the skills text.
pub(super) fn skill_group(out: &mut String, group: &SkillGroup) {
    out.push_str("<ul>");
    if !group.category.trim().is_empty() {
        out.push_str("<li><strong>");
        escape_into(out, &group.category);
        out.push_str(":</strong></li>");
    }
    out.push_str("<li>");
    escape_into(out, &group.skills);
    out.push_str("</li></ul>\n");
}

pub(super) fn achievements(out: &mut String, items: &[String]) {
    out.push_str("<div class=\"side-block\" id=\"achievements\">\n<h1>Achievements</h1>\n<ul>\n");
    for item in items {
        out.push_str("<li>");
        escape_into(out, item);
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n</div>\n");
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
