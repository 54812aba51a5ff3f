//! The Resume document model — canonical in-memory representation of one resume.
//!
//! The model is passive: it holds state and exposes read access, and is mutated
//! exclusively through the `mutation` module. It never talks to the persistence
//! or completion ports itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TITLE: &str = "Untitled Resume";

// ────────────────────────────────────────────────────────────────────────────
// Template selector
// ────────────────────────────────────────────────────────────────────────────

/// The six built-in layout strategies.
///
/// The *stored* selector on [`Resume`] is a plain string so that an
/// unrecognized value round-trips through save/load untouched; resolution to a
/// known variant happens only at render time via [`TemplateId::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Modern,
    Minimalist,
    Creative,
    Professional,
    Executive,
    Elegant,
}

impl TemplateId {
    pub const ALL: [TemplateId; 6] = [
        TemplateId::Modern,
        TemplateId::Minimalist,
        TemplateId::Creative,
        TemplateId::Professional,
        TemplateId::Executive,
        TemplateId::Elegant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Minimalist => "minimalist",
            TemplateId::Creative => "creative",
            TemplateId::Professional => "professional",
            TemplateId::Executive => "executive",
            TemplateId::Elegant => "elegant",
        }
    }

    /// Resolves a stored selector string, falling back to `Modern` for
    /// anything unknown. The stored value itself is left as-is by callers.
    pub fn resolve(raw: &str) -> TemplateId {
        match raw {
            "minimalist" => TemplateId::Minimalist,
            "creative" => TemplateId::Creative,
            "professional" => TemplateId::Professional,
            "executive" => TemplateId::Executive,
            "elegant" => TemplateId::Elegant,
            _ => TemplateId::Modern,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Singleton sections
// ────────────────────────────────────────────────────────────────────────────

/// Contact block. Every field is independently optional free text;
/// `full_name`/`email` are advisory for export readiness, never enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
}

/// One field of the [`PersonalInfo`] singleton, for field-level updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
    Summary,
}

// ────────────────────────────────────────────────────────────────────────────
// Section Items
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceItem {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    /// When true the end boundary renders as the literal "Present";
    /// the stored `end_date` is left untouched.
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
    pub start_date: String,
    pub end_date: String,
}

/// The three repeatable Section Item sequences. Skills are a flat string
/// sequence and are addressed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Education,
    Experience,
    Projects,
}

impl SectionKind {
    pub fn parse(raw: &str) -> Option<SectionKind> {
        match raw {
            "education" => Some(SectionKind::Education),
            "experience" => Some(SectionKind::Experience),
            "projects" => Some(SectionKind::Projects),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document root
// ────────────────────────────────────────────────────────────────────────────

/// The full in-memory resume record. Owns all Section Items and the
/// personal-info singleton exclusively; sequence ordering is insertion order
/// and display-significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resume {
    pub title: String,
    /// Stored template selector. Unknown values are preserved verbatim and
    /// only fall back to `modern` at render time.
    pub template: String,
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationItem>,
    pub experience: Vec<ExperienceItem>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectItem>,
}

impl Default for Resume {
    fn default() -> Self {
        Resume::new(DEFAULT_TITLE)
    }
}

impl Resume {
    /// Creates an empty document: blank singleton, empty sequences,
    /// template `modern`.
    pub fn new(title: &str) -> Self {
        let title = title.trim();
        Resume {
            title: if title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                title.to_string()
            },
            template: TemplateId::Modern.as_str().to_string(),
            personal_info: PersonalInfo::default(),
            education: Vec::new(),
            experience: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }
}

/// Assigns Section Item ids. Uuid v4 strings are unique within a sequence by
/// construction, unlike timestamp-based ids which collide on fast
/// successive adds.
pub fn new_item_id() -> String {
    Uuid::new_v4().to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence envelope
// ────────────────────────────────────────────────────────────────────────────

/// One persisted snapshot, as stored by the persistence port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    #[serde(flatten)]
    pub resume: Resume,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// List row returned by the persistence port's `list`, ordered by
/// `updated_at` descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: Uuid,
    pub title: String,
    pub template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_resume_defaults() {
        let resume = Resume::new("");
        assert_eq!(resume.title, DEFAULT_TITLE);
        assert_eq!(resume.template, "modern");
        assert_eq!(resume.personal_info, PersonalInfo::default());
        assert!(resume.education.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.skills.is_empty());
        assert!(resume.projects.is_empty());
    }

    #[test]
    fn test_new_resume_trims_title() {
        let resume = Resume::new("  My Resume  ");
        assert_eq!(resume.title, "My Resume");
    }

    #[test]
    fn test_resolve_known_templates() {
        for id in TemplateId::ALL {
            assert_eq!(TemplateId::resolve(id.as_str()), id);
        }
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_modern() {
        assert_eq!(TemplateId::resolve("unknown-value"), TemplateId::Modern);
        assert_eq!(TemplateId::resolve(""), TemplateId::Modern);
    }

    #[test]
    fn test_unknown_template_string_round_trips_unchanged() {
        let mut resume = Resume::new("Draft");
        resume.template = "unknown-value".to_string();

        let json = serde_json::to_string(&resume).unwrap();
        let back: Resume = serde_json::from_str(&json).unwrap();
        assert_eq!(back.template, "unknown-value");
    }

    #[test]
    fn test_camel_case_wire_names() {
        let mut resume = Resume::new("Wire");
        resume.personal_info.full_name = "Ada Lovelace".to_string();
        resume.experience.push(ExperienceItem {
            id: new_item_id(),
            start_date: "2020-01".to_string(),
            ..Default::default()
        });

        let value = serde_json::to_value(&resume).unwrap();
        assert!(value["personalInfo"]["fullName"].is_string());
        assert!(value["experience"][0]["startDate"].is_string());
    }

    #[test]
    fn test_partial_item_json_fills_defaults() {
        let item: ExperienceItem =
            serde_json::from_str(r#"{"company":"Acme","position":"Engineer"}"#).unwrap();
        assert_eq!(item.company, "Acme");
        assert_eq!(item.position, "Engineer");
        assert!(!item.current);
        assert!(item.id.is_empty());
    }

    #[test]
    fn test_item_ids_are_distinct() {
        let a = new_item_id();
        let b = new_item_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
