//! Advisory field checks: email shape and recognisable dates.
//!
//! Nothing in the core refuses to persist or render because of these. The
//! collaborator decides whether an issue blocks anything.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::Resume;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    /// Path to the field, e.g. `experience[1].start_date`.
    pub field: String,
    pub value: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub passed: bool,
    pub issues: Vec<FieldIssue>,
}

/// Accepted date spellings, for messages.
const DATE_HINT: &str = "use e.g. 2024, 03/2024, Mar 2024, March 2024, 2024-03-01 or Present";

/// Checks an email address. Empty is accepted.
///
/// Shape: `local@domain.tld` with local part `[A-Za-z0-9._%+-]+`, domain
/// `[A-Za-z0-9.-]+` and an alphabetic top-level label of at least 2 chars.
pub fn check_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(());
    }

    let invalid = || Err(format!("Invalid email format: {email}"));

    let Some((local, domain)) = email.split_once('@') else {
        return invalid();
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    let domain_ok = !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));
    let tld_ok = match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    };

    if local_ok && domain_ok && tld_ok {
        Ok(())
    } else {
        invalid()
    }
}

/// Checks a free-text date. Empty and the exact word `Present` are accepted.
///
/// Years run from 1 to 9999 and carry no sign.
pub fn check_date(date: &str) -> Result<(), String> {
    let date = date.trim();
    if date.is_empty() || date == "Present" {
        return Ok(());
    }

    if parse_date(date).is_some_and(|d| (1..=9999).contains(&d.year())) {
        Ok(())
    } else {
        Err(format!("Invalid date format: {date}; {DATE_HINT}"))
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if date.starts_with(&['+', '-'][..]) || date.contains("/+") || date.contains(" +") {
        return None;
    }
    if date.len() == 4 && date.chars().all(|c| c.is_ascii_digit()) {
        return NaiveDate::parse_from_str(&format!("{date}-01-01"), "%Y-%m-%d").ok();
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("01/{date}"), "%d/%m/%Y"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("01 {date}"), "%d %b %Y"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("01 {date}"), "%d %B %Y"))
        .ok()
}

/// Runs every field check over `resume`, collecting all issues.
pub fn check_resume(resume: &Resume) -> FieldReport {
    let mut issues = Vec::new();

    if let Some(email) = resume.contact.email.as_deref() {
        push_issue(&mut issues, "contact.email", email, check_email(email));
    }

    let mut dates = |prefix: &str, index: usize, start: &str, end: &str| {
        push_issue(
            &mut issues,
            &format!("{prefix}[{index}].start_date"),
            start,
            check_date(start),
        );
        push_issue(
            &mut issues,
            &format!("{prefix}[{index}].end_date"),
            end,
            check_date(end),
        );
    };
    for (i, exp) in resume.experience.iter().enumerate() {
        dates("experience", i, &exp.start_date, &exp.end_date);
    }
    for (i, proj) in resume.projects.iter().enumerate() {
        dates("projects", i, &proj.start_date, &proj.end_date);
    }
    for (i, edu) in resume.education.iter().enumerate() {
        dates("education", i, &edu.start_date, &edu.end_date);
    }

    FieldReport {
        passed: issues.is_empty(),
        issues,
    }
}

fn push_issue(issues: &mut Vec<FieldIssue>, field: &str, value: &str, result: Result<(), String>) {
    if let Err(message) = result {
        issues.push(FieldIssue {
            field: field.to_string(),
            value: value.to_string(),
            message,
        });
    }
}
