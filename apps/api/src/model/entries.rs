//! Section entries. Each type is an immutable-by-convention value object:
//! collaborators build one with the `new(..).with_*(..)` chain and hand it to
//! [`Resume::push`](super::Resume::push) whole.

use serde::{Deserialize, Serialize};

use super::nullable;

/// A job held. Rendered as a timeline entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    /// Free text. "Present" is displayed verbatim, nothing more.
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub bullets: Vec<String>,
}

impl Experience {
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets.extend(bullets.into_iter().map(Into::into));
        self
    }
}

/// A personal or side project. Rendered as a timeline entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub subtitle: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub bullets: Vec<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            ..Self::default()
        }
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullets.push(bullet.into());
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets.extend(bullets.into_iter().map(Into::into));
        self
    }
}

/// A degree or certification. Rendered as a simple entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "nullable")]
    pub degree: String,
    #[serde(deserialize_with = "nullable")]
    pub school: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
}

impl Education {
    pub fn new(degree: impl Into<String>, school: impl Into<String>) -> Self {
        Self {
            degree: degree.into(),
            school: school.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = start.into();
        self.end_date = end.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// One sidebar skills line. `skills` is kept exactly as authored; the core
/// never splits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "nullable")]
    pub category: String,
    #[serde(deserialize_with = "nullable")]
    pub skills: String,
}

impl SkillGroup {
    pub fn new(category: impl Into<String>, skills: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            skills: skills.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_builder_keeps_bullet_order() {
        let exp = Experience::new("Engineer", "Acme")
            .with_location("Berlin")
            .with_dates("2020", "Present")
            .with_bullet("first")
            .with_bullets(["second", "third"]);
        assert_eq!(exp.location, "Berlin");
        assert_eq!(exp.end_date, "Present");
        assert_eq!(exp.bullets, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let exp: Experience = serde_json::from_str(r#"{"title": "Engineer"}"#).unwrap();
        assert_eq!(exp.title, "Engineer");
        assert_eq!(exp.company, "");
        assert!(exp.bullets.is_empty());
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let edu: Education =
            serde_json::from_str(r#"{"degree": null, "school": "MIT", "notes": null}"#).unwrap();
        assert_eq!(edu.degree, "");
        assert_eq!(edu.school, "MIT");
        assert_eq!(edu.notes, "");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let proj: Project =
            serde_json::from_str(r#"{"title": "CLI", "stars": 1000, "tags": ["a"]}"#).unwrap();
        assert_eq!(proj, Project::new("CLI", ""));
    }

    #[test]
    fn test_non_text_bullet_rejected() {
        let err = serde_json::from_str::<Experience>(r#"{"bullets": ["ok", 3]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_serialized_field_order() {
        let json = serde_json::to_string(&Education::new("BS", "MIT")).unwrap();
        let degree = json.find("\"degree\"").unwrap();
        let school = json.find("\"school\"").unwrap();
        let notes = json.find("\"notes\"").unwrap();
        assert!(degree < school && school < notes, "got {json}");
    }
}
