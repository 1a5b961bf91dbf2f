use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{nullable, value_kind, Education, Experience, Project, SkillGroup};
use crate::error::{ResumeError, Result};

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

/// The root document. Field order here is the persisted order.
///
/// Every sequence is in rendering order; no operation reorders it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub subtitle: String,
    /// May contain `\n` line breaks; the renderer turns them into `<br>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub contact: Contact,
    #[serde(deserialize_with = "nullable")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "nullable")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<SkillGroup>,
    #[serde(deserialize_with = "nullable")]
    pub achievements: Vec<String>,
}

/// Sidebar contact channels. No format is enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Contact {
    /// True when no channel has visible text.
    pub fn is_empty(&self) -> bool {
        self.channels().is_empty()
    }

    /// Names of the channels that carry non-blank text, in display order.
    pub fn channels(&self) -> Vec<&'static str> {
        [
            ("website", &self.website),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| has_text(value.as_deref()))
        .map(|(name, _)| name)
        .collect()
    }
}

pub(crate) fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Sections and entries
// ────────────────────────────────────────────────────────────────────────────

/// The five ordered sequences of a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Experience,
    Projects,
    Education,
    Skills,
    Achievements,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Skills,
        Section::Achievements,
    ];

    /// The persisted field name of this section.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Achievements => "achievements",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ResumeError;

    fn from_str(s: &str) -> Result<Self> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ResumeError::Structure(format!("unknown section '{s}'")))
    }
}

/// One element of a section, as a whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Experience(Experience),
    Project(Project),
    Education(Education),
    Skill(SkillGroup),
    Achievement(String),
}

impl Entry {
    pub fn section(&self) -> Section {
        match self {
            Entry::Experience(_) => Section::Experience,
            Entry::Project(_) => Section::Projects,
            Entry::Education(_) => Section::Education,
            Entry::Skill(_) => Section::Skills,
            Entry::Achievement(_) => Section::Achievements,
        }
    }

    /// Builds an entry for `section` from untyped field values.
    ///
    /// Fails with `Structure` when the value is not the shape the section
    /// stores: a mapping of fields, or text for achievements.
    pub fn from_value(section: Section, value: Value) -> Result<Entry> {
        check_entry_shape(section, &value, None)?;
        let structure =
            |e: serde_json::Error| ResumeError::Structure(format!("{section} entry: {e}"));
        let entry = match section {
            Section::Experience => Entry::Experience(serde_json::from_value(value).map_err(structure)?),
            Section::Projects => Entry::Project(serde_json::from_value(value).map_err(structure)?),
            Section::Education => Entry::Education(serde_json::from_value(value).map_err(structure)?),
            Section::Skills => Entry::Skill(serde_json::from_value(value).map_err(structure)?),
            Section::Achievements => {
                Entry::Achievement(serde_json::from_value(value).map_err(structure)?)
            }
        };
        Ok(entry)
    }
}

impl From<Experience> for Entry {
    fn from(value: Experience) -> Self {
        Entry::Experience(value)
    }
}

impl From<Project> for Entry {
    fn from(value: Project) -> Self {
        Entry::Project(value)
    }
}

impl From<Education> for Entry {
    fn from(value: Education) -> Self {
        Entry::Education(value)
    }
}

impl From<SkillGroup> for Entry {
    fn from(value: SkillGroup) -> Self {
        Entry::Skill(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Achievement(value.to_string())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Construction and mutation
// ────────────────────────────────────────────────────────────────────────────

impl Resume {
    /// An empty resume with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a resume from an untyped tree, applying the same shape checks
    /// as loading persisted bytes. Unknown keys are ignored.
    pub fn from_value(value: Value) -> Result<Resume> {
        let Value::Object(map) = &value else {
            return Err(ResumeError::Structure(format!(
                "resume must be a mapping, got {}",
                value_kind(&value)
            )));
        };

        if let Some(contact) = map.get("contact") {
            if !matches!(contact, Value::Object(_) | Value::Null) {
                return Err(ResumeError::Structure(format!(
                    "'contact' must be a mapping, got {}",
                    value_kind(contact)
                )));
            }
        }

        for section in Section::ALL {
            match map.get(section.as_str()) {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        check_entry_shape(section, item, Some(index))?;
                    }
                }
                Some(other) => {
                    return Err(ResumeError::Structure(format!(
                        "'{section}' must be a sequence, got {}",
                        value_kind(other)
                    )));
                }
            }
        }

        serde_json::from_value(value).map_err(|e| ResumeError::Structure(e.to_string()))
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = Some(summary.into());
    }

    pub fn clear_summary(&mut self) {
        self.summary = None;
    }

    pub fn set_contact(&mut self, contact: Contact) {
        self.contact = contact;
    }

    /// Appends `entry` to the end of its section and returns the new length.
    pub fn push(&mut self, entry: impl Into<Entry>) -> usize {
        match entry.into() {
            Entry::Experience(e) => {
                self.experience.push(e);
                self.experience.len()
            }
            Entry::Project(p) => {
                self.projects.push(p);
                self.projects.len()
            }
            Entry::Education(e) => {
                self.education.push(e);
                self.education.len()
            }
            Entry::Skill(s) => {
                self.skills.push(s);
                self.skills.len()
            }
            Entry::Achievement(a) => {
                self.achievements.push(a);
                self.achievements.len()
            }
        }
    }

    pub fn push_achievement(&mut self, achievement: impl Into<String>) -> usize {
        self.push(Entry::Achievement(achievement.into()))
    }

    /// Removes and returns the entry at `index`. Later entries shift down by
    /// one; their relative order is unchanged.
    pub fn remove(&mut self, section: Section, index: usize) -> Result<Entry> {
        Ok(match section {
            Section::Experience => Entry::Experience(take(&mut self.experience, section, index)?),
            Section::Projects => Entry::Project(take(&mut self.projects, section, index)?),
            Section::Education => Entry::Education(take(&mut self.education, section, index)?),
            Section::Skills => Entry::Skill(take(&mut self.skills, section, index)?),
            Section::Achievements => {
                Entry::Achievement(take(&mut self.achievements, section, index)?)
            }
        })
    }

    /// Number of entries in `section`.
    pub fn len(&self, section: Section) -> usize {
        match section {
            Section::Experience => self.experience.len(),
            Section::Projects => self.projects.len(),
            Section::Education => self.education.len(),
            Section::Skills => self.skills.len(),
            Section::Achievements => self.achievements.len(),
        }
    }

    /// True when nothing at all has been filled in.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.subtitle.trim().is_empty()
            && !has_text(self.summary.as_deref())
            && self.contact.is_empty()
            && Section::ALL.into_iter().all(|s| self.len(s) == 0)
    }
}

fn take<T>(items: &mut Vec<T>, section: Section, index: usize) -> Result<T> {
    if index >= items.len() {
        return Err(ResumeError::Index {
            section: section.as_str(),
            index,
            len: items.len(),
        });
    }
    Ok(items.remove(index))
}

/// Achievements are text; every other section stores mappings.
fn check_entry_shape(section: Section, value: &Value, index: Option<usize>) -> Result<()> {
    let ok = match section {
        Section::Achievements => matches!(value, Value::String(_)),
        _ => matches!(value, Value::Object(_)),
    };
    if ok {
        return Ok(());
    }
    let expected = match section {
        Section::Achievements => "text",
        _ => "a mapping of fields",
    };
    let at = index.map(|i| format!("[{i}]")).unwrap_or_default();
    Err(ResumeError::Structure(format!(
        "{section}{at} must be {expected}, got {}",
        value_kind(value)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn three_jobs() -> Resume {
        let mut resume = Resume::named("Jane Doe");
        resume.push(Experience::new("E1", "A"));
        resume.push(Experience::new("E2", "B"));
        resume.push(Experience::new("E3", "C"));
        resume
    }

    fn titles(resume: &Resume) -> Vec<&str> {
        resume.experience.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_push_preserves_append_order() {
        let resume = three_jobs();
        assert_eq!(titles(&resume), vec!["E1", "E2", "E3"]);
    }

    #[test]
    fn test_remove_middle_keeps_order() {
        let mut resume = three_jobs();
        let removed = resume.remove(Section::Experience, 1).unwrap();
        assert_eq!(removed, Entry::Experience(Experience::new("E2", "B")));
        assert_eq!(titles(&resume), vec!["E1", "E3"]);
    }

    #[test]
    fn test_remove_out_of_range_is_index_error() {
        let mut resume = three_jobs();
        let err = resume.remove(Section::Experience, 3).unwrap_err();
        assert_eq!(
            err,
            ResumeError::Index {
                section: "experience",
                index: 3,
                len: 3
            }
        );
        assert_eq!(resume.len(Section::Experience), 3, "failed removal must not mutate");
    }

    #[test]
    fn test_remove_from_empty_section() {
        let mut resume = Resume::default();
        assert!(matches!(
            resume.remove(Section::Achievements, 0),
            Err(ResumeError::Index { len: 0, .. })
        ));
    }

    #[test]
    fn test_push_returns_new_len() {
        let mut resume = Resume::default();
        assert_eq!(resume.push_achievement("Award"), 1);
        assert_eq!(resume.push("Second"), 2);
        assert_eq!(resume.push(SkillGroup::new("Rust", "tokio, serde")), 1);
    }

    #[test]
    fn test_summary_set_and_clear() {
        let mut resume = Resume::default();
        resume.set_summary("line one\nline two");
        assert_eq!(resume.summary.as_deref(), Some("line one\nline two"));
        resume.clear_summary();
        assert!(resume.summary.is_none());
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("projects".parse::<Section>().unwrap(), Section::Projects);
        assert!(matches!(
            "hobbies".parse::<Section>(),
            Err(ResumeError::Structure(_))
        ));
    }

    #[test]
    fn test_entry_from_value_accepts_mapping() {
        let entry = Entry::from_value(
            Section::Experience,
            json!({"title": "Engineer", "company": "Acme", "bullets": ["a", "b"]}),
        )
        .unwrap();
        assert_eq!(
            entry,
            Entry::Experience(Experience::new("Engineer", "Acme").with_bullets(["a", "b"]))
        );
    }

    #[test]
    fn test_entry_from_value_rejects_sequence() {
        let err = Entry::from_value(Section::Education, json!(["BS", "MIT"])).unwrap_err();
        assert!(matches!(err, ResumeError::Structure(ref m) if m.contains("mapping")), "{err}");
    }

    #[test]
    fn test_entry_from_value_achievement_must_be_text() {
        assert!(Entry::from_value(Section::Achievements, json!("Won")).is_ok());
        assert!(matches!(
            Entry::from_value(Section::Achievements, json!({"title": "Won"})),
            Err(ResumeError::Structure(_))
        ));
    }

    #[test]
    fn test_entry_from_value_accepts_weird_content() {
        let long = "x".repeat(50_000);
        let entry = Entry::from_value(
            Section::Skills,
            json!({"category": "", "skills": long}),
        );
        assert!(entry.is_ok());
    }

    #[test]
    fn test_from_value_rejects_non_sequence_section() {
        let err = Resume::from_value(json!({"name": "J", "experience": {"title": "x"}})).unwrap_err();
        assert_eq!(
            err,
            ResumeError::Structure("'experience' must be a sequence, got a mapping".to_string())
        );
    }

    #[test]
    fn test_from_value_reports_bad_entry_position() {
        let err =
            Resume::from_value(json!({"projects": [{"title": "ok"}, "not a project"]})).unwrap_err();
        assert!(matches!(err, ResumeError::Structure(ref m) if m.contains("projects[1]")), "{err}");
    }

    #[test]
    fn test_from_value_rejects_non_mapping_root() {
        assert!(matches!(
            Resume::from_value(json!([1, 2])),
            Err(ResumeError::Structure(_))
        ));
    }

    #[test]
    fn test_from_value_rejects_mistyped_text() {
        assert!(matches!(
            Resume::from_value(json!({"name": 42})),
            Err(ResumeError::Structure(_))
        ));
    }

    #[test]
    fn test_from_value_fills_defaults() {
        let resume = Resume::from_value(json!({"name": "Only Name", "unknown": true})).unwrap();
        assert_eq!(resume, Resume::named("Only Name"));
        assert!(resume.summary.is_none());
        assert!(resume.contact.email.is_none());
    }

    #[test]
    fn test_contact_channels() {
        let contact = Contact {
            website: Some("jane.dev".into()),
            email: Some("  ".into()),
            phone: Some("555".into()),
        };
        assert_eq!(contact.channels(), vec!["website", "phone"]);
        assert!(Contact::default().is_empty());
    }

    #[test]
    fn test_is_blank() {
        assert!(Resume::default().is_blank());
        assert!(!Resume::named("J").is_blank());
        let mut resume = Resume::default();
        resume.push_achievement("x");
        assert!(!resume.is_blank());
    }
}
