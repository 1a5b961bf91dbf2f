//! Persisted form of a [`Resume`]: pretty-printed JSON, fields in declared
//! order, prefixed by a `schema_version` key.
//!
//! `read` and `write` work on in-memory buffers only; the caller owns any
//! file or network I/O. Round-trip law: `read(&write(r)) == Ok(r)`.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{ResumeError, Result};
use crate::model::Resume;

/// Version written by [`write`]. Files without a version key (as written by
/// older builds) are read as version 1.
pub const SCHEMA_VERSION: u64 = 1;

const VERSION_KEY: &str = "schema_version";

#[derive(Serialize)]
struct Persisted<'a> {
    schema_version: u64,
    #[serde(flatten)]
    resume: &'a Resume,
}

/// Encodes `resume` as canonical persisted bytes (UTF-8, trailing newline).
///
/// Writing the same value twice yields identical bytes.
pub fn write(resume: &Resume) -> Vec<u8> {
    write_string(resume).into_bytes()
}

/// [`write`], as a `String`.
pub fn write_string(resume: &Resume) -> String {
    let persisted = Persisted {
        schema_version: SCHEMA_VERSION,
        resume,
    };
    // Serializing plain strings and sequences into a String cannot fail.
    let mut out = serde_json::to_string_pretty(&persisted).unwrap_or_default();
    out.push('\n');
    debug!(bytes = out.len(), "serialized resume");
    out
}

/// Decodes persisted bytes into a fresh [`Resume`].
///
/// - not UTF-8 JSON → [`ResumeError::Parse`]
/// - JSON of the wrong shape, or an unsupported `schema_version` →
///   [`ResumeError::Structure`]
///
/// Unknown keys anywhere in the tree are ignored.
pub fn read(bytes: &[u8]) -> Result<Resume> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| {
        debug!(error = %e, "rejected persisted resume: not well-formed");
        ResumeError::Parse(e.to_string())
    })?;

    check_version(&value)?;

    Resume::from_value(value).map_err(|e| {
        debug!(error = %e, "rejected persisted resume: bad shape");
        e
    })
}

fn check_version(value: &Value) -> Result<()> {
    let Some(version) = value.get(VERSION_KEY) else {
        return Ok(());
    };
    match version.as_u64() {
        Some(v) if (1..=SCHEMA_VERSION).contains(&v) => Ok(()),
        Some(v) => Err(ResumeError::Structure(format!(
            "unsupported {VERSION_KEY} {v} (this build reads up to {SCHEMA_VERSION})"
        ))),
        None => Err(ResumeError::Structure(format!(
            "{VERSION_KEY} must be a positive integer, got {version}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Contact, Education, Experience, Project, SkillGroup};

    fn full_resume() -> Resume {
        let mut resume = Resume::named("Jane Doe");
        resume.set_subtitle("Senior Software Engineer");
        resume.set_summary("Builds things.\nShips them.\n\nThen writes it down.");
        resume.set_contact(Contact {
            website: Some("https://jane.dev".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+1 555 0100".into()),
        });
        resume.push(
            Experience::new("Software Engineer", "Tech Corp")
                .with_location("San Francisco")
                .with_dates("2020", "Present")
                .with_bullets(["Developed web apps", "Led team of 5"]),
        );
        resume.push(Experience::new("Intern", "Small Co").with_dates("2019", "2019"));
        resume.push(
            Project::new("Open Source Project", "CLI tool")
                .with_dates("2023", "2024")
                .with_bullet("1000+ GitHub stars"),
        );
        resume.push(
            Education::new("BS Computer Science", "University of Tech")
                .with_location("Boston")
                .with_dates("2014", "2018")
                .with_notes("Summa Cum Laude"),
        );
        resume.push(SkillGroup::new("Programming", "Python, JavaScript, Rust"));
        resume.push(SkillGroup::new("Tools", "Git, Docker"));
        resume.push_achievement("Hackathon winner");
        resume
    }

    fn round_trip(resume: &Resume) -> Resume {
        read(&write(resume)).expect("round trip must succeed")
    }

    #[test]
    fn test_round_trip_full() {
        let resume = full_resume();
        assert_eq!(round_trip(&resume), resume);
    }

    #[test]
    fn test_round_trip_all_optional_absent() {
        let resume = Resume::default();
        let back = round_trip(&resume);
        assert_eq!(back, resume);
        assert!(back.summary.is_none());
        assert_eq!(back.contact, Contact::default());
    }

    #[test]
    fn test_round_trip_keeps_empty_vs_absent() {
        let mut resume = Resume::default();
        resume.set_summary("");
        resume.contact.email = Some(String::new());
        let back = round_trip(&resume);
        assert_eq!(back.summary.as_deref(), Some(""));
        assert_eq!(back.contact.email.as_deref(), Some(""));
        assert!(back.contact.phone.is_none());
    }

    #[test]
    fn test_round_trip_long_text() {
        let mut resume = Resume::named("n".repeat(10_000));
        resume.push(Experience::new("t", "c").with_bullet("b ".repeat(20_000)));
        assert_eq!(round_trip(&resume), resume);
    }

    #[test]
    fn test_round_trip_unicode() {
        let mut resume = Resume::named("Zoë Ångström");
        resume.push(
            Experience::new("エンジニア", "株式会社")
                .with_bullet("Cafe\u{301} ≠ café → 🚀 ✓ 中文 <&>"),
        );
        assert_eq!(round_trip(&resume), resume);
    }

    #[test]
    fn test_second_write_is_byte_identical() {
        let first = write(&full_resume());
        let second = write(&read(&first).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_write_is_readable_and_ordered() {
        let text = write_string(&full_resume());
        assert!(text.starts_with("{\n  \"schema_version\": 1,\n  \"name\": \"Jane Doe\""));
        assert!(text.ends_with("}\n"));
        let pos = |key: &str| text.find(&format!("\"{key}\"")).unwrap();
        assert!(pos("name") < pos("subtitle"));
        assert!(pos("subtitle") < pos("summary"));
        assert!(pos("contact") < pos("experience"));
        assert!(pos("experience") < pos("projects"));
        assert!(pos("education") < pos("skills"));
        assert!(pos("skills") < pos("achievements"));
    }

    #[test]
    fn test_write_does_not_escape_unicode() {
        let text = write_string(&Resume::named("東京"));
        assert!(text.contains("東京"));
    }

    #[test]
    fn test_write_omits_absent_optionals() {
        let text = write_string(&Resume::named("J"));
        assert!(!text.contains("summary"));
        assert!(!text.contains("email"));
    }

    #[test]
    fn test_read_garbage_is_parse_error() {
        assert!(matches!(read(b"{not json"), Err(ResumeError::Parse(_))));
        assert!(matches!(read(b""), Err(ResumeError::Parse(_))));
        assert!(matches!(read(&[0xff, 0xfe, 0x00]), Err(ResumeError::Parse(_))));
    }

    #[test]
    fn test_read_wrong_shape_is_structure_error() {
        assert!(matches!(
            read(br#"{"experience": "not a list"}"#),
            Err(ResumeError::Structure(_))
        ));
        assert!(matches!(read(b"[]"), Err(ResumeError::Structure(_))));
        assert!(matches!(read(b"\"text\""), Err(ResumeError::Structure(_))));
    }

    #[test]
    fn test_read_legacy_file_without_version() {
        let legacy = br#"{
            "name": "John Doe",
            "subtitle": "Engineer",
            "contact": {"website": "", "email": "john@example.com", "phone": ""},
            "experience": [{"title": "SE", "company": "Corp", "location": "",
                            "start_date": "2020", "end_date": "Present", "bullets": []}],
            "projects": [],
            "education": [],
            "skills": [{"category": "Lang", "skills": "Rust"}]
        }"#;
        let resume = read(legacy).unwrap();
        assert_eq!(resume.name, "John Doe");
        assert_eq!(resume.contact.website.as_deref(), Some(""));
        assert_eq!(resume.experience[0].end_date, "Present");
        assert!(resume.achievements.is_empty());
    }

    #[test]
    fn test_read_ignores_unknown_fields() {
        let resume = read(br#"{"name": "J", "theme": "dark", "contact": {"fax": "1"}}"#).unwrap();
        assert_eq!(resume, Resume::named("J"));
    }

    #[test]
    fn test_read_rejects_future_version() {
        let err = read(br#"{"schema_version": 99, "name": "J"}"#).unwrap_err();
        assert!(matches!(err, ResumeError::Structure(ref m) if m.contains("99")), "{err}");
    }

    #[test]
    fn test_read_rejects_non_integer_version() {
        assert!(matches!(
            read(br#"{"schema_version": "one"}"#),
            Err(ResumeError::Structure(_))
        ));
    }

    #[test]
    fn test_failed_read_leaves_current_value_alone() {
        let mut current = full_resume();
        let before = current.clone();
        if let Ok(loaded) = read(b"{broken") {
            current = loaded;
        }
        assert_eq!(current, before);
    }
}
