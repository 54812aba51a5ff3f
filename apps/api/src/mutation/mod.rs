//! Section Mutation Engine — ordered operations over the repeatable sections
//! and field-level updates for the singletons.
//!
//! Every operation is synchronous and infallible: it reads one snapshot and
//! returns a fresh one (replace-whole-object semantics, no history). "Not
//! found" conditions are silent no-ops by contract — the calling layer is
//! responsible for not offering stale item ids, and tests assert the no-op
//! behavior rather than expecting an error.

use serde::Deserialize;
use serde_json::Value;

use crate::models::resume::{
    new_item_id, EducationItem, ExperienceItem, PersonalField, ProjectItem, Resume, SectionKind,
    DEFAULT_TITLE,
};

// ────────────────────────────────────────────────────────────────────────────
// Operation payloads
// ────────────────────────────────────────────────────────────────────────────

/// Field payload for `add_item`. The variant carries the target section, so a
/// payload can never be appended to the wrong sequence. Any `id` present in
/// the payload is discarded and replaced with a freshly assigned one.
#[derive(Debug, Clone)]
pub enum NewItem {
    Education(EducationItem),
    Experience(ExperienceItem),
    Project(ProjectItem),
}

impl NewItem {
    pub fn kind(&self) -> SectionKind {
        match self {
            NewItem::Education(_) => SectionKind::Education,
            NewItem::Experience(_) => SectionKind::Experience,
            NewItem::Project(_) => SectionKind::Projects,
        }
    }

    /// Deserializes an untyped JSON body against the section named in the
    /// request path. Unknown JSON fields are ignored; missing fields default
    /// to blank, so a mostly-empty payload creates a mostly-blank item.
    pub fn from_json(kind: SectionKind, value: Value) -> Result<NewItem, serde_json::Error> {
        Ok(match kind {
            SectionKind::Education => NewItem::Education(serde_json::from_value(value)?),
            SectionKind::Experience => NewItem::Experience(serde_json::from_value(value)?),
            SectionKind::Projects => NewItem::Project(serde_json::from_value(value)?),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Partial-field payload for `update_item`. Absent fields are left untouched.
#[derive(Debug, Clone)]
pub enum ItemPatch {
    Education(EducationPatch),
    Experience(ExperiencePatch),
    Project(ProjectPatch),
}

impl ItemPatch {
    pub fn from_json(kind: SectionKind, value: Value) -> Result<ItemPatch, serde_json::Error> {
        Ok(match kind {
            SectionKind::Education => ItemPatch::Education(serde_json::from_value(value)?),
            SectionKind::Experience => ItemPatch::Experience(serde_json::from_value(value)?),
            SectionKind::Projects => ItemPatch::Project(serde_json::from_value(value)?),
        })
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Repeatable-section operations
// ────────────────────────────────────────────────────────────────────────────

/// Appends a new Section Item with a freshly assigned id and returns the new
/// snapshot together with that id. Required-field policy lives with the
/// caller; an empty payload is accepted and creates a mostly-blank item.
pub fn add_item(resume: &Resume, item: NewItem) -> (Resume, String) {
    let mut next = resume.clone();
    let id = new_item_id();
    match item {
        NewItem::Education(fields) => next.education.push(EducationItem {
            id: id.clone(),
            ..fields
        }),
        NewItem::Experience(fields) => next.experience.push(ExperienceItem {
            id: id.clone(),
            ..fields
        }),
        NewItem::Project(fields) => next.projects.push(ProjectItem {
            id: id.clone(),
            ..fields
        }),
    }
    (next, id)
}

/// Merges the patch into the item matching `item_id`. Unknown ids leave the
/// snapshot unchanged.
pub fn update_item(resume: &Resume, item_id: &str, patch: ItemPatch) -> Resume {
    let mut next = resume.clone();
    match patch {
        ItemPatch::Education(p) => {
            if let Some(item) = next.education.iter_mut().find(|i| i.id == item_id) {
                merge(&mut item.school, p.school);
                merge(&mut item.degree, p.degree);
                merge(&mut item.field, p.field);
                merge(&mut item.start_date, p.start_date);
                merge(&mut item.end_date, p.end_date);
                merge(&mut item.gpa, p.gpa);
                merge(&mut item.description, p.description);
            }
        }
        ItemPatch::Experience(p) => {
            if let Some(item) = next.experience.iter_mut().find(|i| i.id == item_id) {
                merge(&mut item.company, p.company);
                merge(&mut item.position, p.position);
                merge(&mut item.location, p.location);
                merge(&mut item.start_date, p.start_date);
                merge(&mut item.end_date, p.end_date);
                merge(&mut item.current, p.current);
                merge(&mut item.description, p.description);
            }
        }
        ItemPatch::Project(p) => {
            if let Some(item) = next.projects.iter_mut().find(|i| i.id == item_id) {
                merge(&mut item.name, p.name);
                merge(&mut item.description, p.description);
                merge(&mut item.technologies, p.technologies);
                merge(&mut item.link, p.link);
                merge(&mut item.start_date, p.start_date);
                merge(&mut item.end_date, p.end_date);
            }
        }
    }
    next
}

/// Removes the item matching `item_id`; unknown ids are a silent no-op.
pub fn delete_item(resume: &Resume, section: SectionKind, item_id: &str) -> Resume {
    let mut next = resume.clone();
    match section {
        SectionKind::Education => next.education.retain(|i| i.id != item_id),
        SectionKind::Experience => next.experience.retain(|i| i.id != item_id),
        SectionKind::Projects => next.projects.retain(|i| i.id != item_id),
    }
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Replaces the skills sequence wholesale. Deliberately does NOT dedupe —
/// only the single-skill add path applies the duplicate check.
pub fn replace_skills(resume: &Resume, skills: Vec<String>) -> Resume {
    let mut next = resume.clone();
    next.skills = skills;
    next
}

/// Appends one skill. The raw value is trimmed; empty input and
/// case-insensitive duplicates are silent no-ops, so adding "Python" when
/// "python" exists does not grow the sequence.
pub fn add_skill(resume: &Resume, skill: &str) -> Resume {
    let skill = skill.trim();
    if skill.is_empty() {
        return resume.clone();
    }
    let lowered = skill.to_lowercase();
    if resume.skills.iter().any(|s| s.to_lowercase() == lowered) {
        return resume.clone();
    }
    let mut next = resume.clone();
    next.skills.push(skill.to_string());
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Singleton updates
// ────────────────────────────────────────────────────────────────────────────

/// Sets one field of the personal-info singleton.
pub fn update_personal_info(resume: &Resume, field: PersonalField, value: &str) -> Resume {
    let mut next = resume.clone();
    let info = &mut next.personal_info;
    let slot = match field {
        PersonalField::FullName => &mut info.full_name,
        PersonalField::Email => &mut info.email,
        PersonalField::Phone => &mut info.phone,
        PersonalField::Location => &mut info.location,
        PersonalField::Linkedin => &mut info.linkedin,
        PersonalField::Website => &mut info.website,
        PersonalField::Summary => &mut info.summary,
    };
    *slot = value.to_string();
    next
}

/// Sets the stored template selector. No validation, no re-render — the
/// renderer resolves the value on its own schedule.
pub fn set_template(resume: &Resume, template: crate::models::resume::TemplateId) -> Resume {
    let mut next = resume.clone();
    next.template = template.as_str().to_string();
    next
}

/// Sets the display title; blank input falls back to the default so the
/// non-empty invariant holds.
pub fn set_title(resume: &Resume, title: &str) -> Resume {
    let mut next = resume.clone();
    let title = title.trim();
    next.title = if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title.to_string()
    };
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::TemplateId;

    fn experience_fields(company: &str, position: &str) -> NewItem {
        NewItem::Experience(ExperienceItem {
            company: company.to_string(),
            position: position.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_add_item_to_empty_document() {
        let resume = Resume::new("Test");
        let (next, id) = add_item(&resume, experience_fields("Acme", "Engineer"));

        assert_eq!(next.experience.len(), 1);
        assert!(!id.is_empty());
        assert_eq!(next.experience[0].id, id);
        assert_eq!(next.experience[0].company, "Acme");
        assert_eq!(next.experience[0].position, "Engineer");
        // Original snapshot is untouched.
        assert!(resume.experience.is_empty());
    }

    #[test]
    fn test_add_item_accepts_blank_payload() {
        let resume = Resume::new("Test");
        let (next, id) = add_item(&resume, NewItem::Education(EducationItem::default()));
        assert_eq!(next.education.len(), 1);
        assert_eq!(next.education[0].id, id);
        assert!(next.education[0].school.is_empty());
    }

    #[test]
    fn test_sequence_length_equals_adds_minus_deletes() {
        let mut resume = Resume::new("Test");
        let mut ids = Vec::new();
        for i in 0..5 {
            let (next, id) = add_item(&resume, experience_fields(&format!("Co{i}"), "Eng"));
            resume = next;
            ids.push(id);
        }
        resume = delete_item(&resume, SectionKind::Experience, &ids[1]);
        resume = delete_item(&resume, SectionKind::Experience, &ids[3]);

        assert_eq!(resume.experience.len(), 3);
        // Surviving items preserve insertion order.
        let companies: Vec<&str> = resume
            .experience
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(companies, vec!["Co0", "Co2", "Co4"]);
    }

    #[test]
    fn test_update_item_merges_partial_fields() {
        let resume = Resume::new("Test");
        let (resume, id) = add_item(&resume, experience_fields("Acme", "Engineer"));
        let next = update_item(
            &resume,
            &id,
            ItemPatch::Experience(ExperiencePatch {
                position: Some("Senior Engineer".to_string()),
                current: Some(true),
                ..Default::default()
            }),
        );

        let item = &next.experience[0];
        assert_eq!(item.position, "Senior Engineer");
        assert!(item.current);
        // Untouched fields survive the merge.
        assert_eq!(item.company, "Acme");
    }

    #[test]
    fn test_update_item_unknown_id_is_noop() {
        let resume = Resume::new("Test");
        let (resume, _) = add_item(&resume, experience_fields("Acme", "Engineer"));
        let next = update_item(
            &resume,
            "no-such-id",
            ItemPatch::Experience(ExperiencePatch {
                company: Some("Globex".to_string()),
                ..Default::default()
            }),
        );
        assert_eq!(next, resume);
    }

    #[test]
    fn test_delete_item_unknown_id_is_noop() {
        let resume = Resume::new("Test");
        let (resume, _) = add_item(&resume, experience_fields("Acme", "Engineer"));
        let next = delete_item(&resume, SectionKind::Experience, "no-such-id");
        assert_eq!(next, resume);
    }

    #[test]
    fn test_replace_skills_does_not_dedupe() {
        let resume = Resume::new("Test");
        let resume = replace_skills(&resume, vec![]);
        assert!(resume.skills.is_empty());

        // The wholesale path keeps both spellings; only add_skill dedupes.
        let resume = replace_skills(&resume, vec!["Go".to_string(), "go".to_string()]);
        assert_eq!(resume.skills, vec!["Go", "go"]);
    }

    #[test]
    fn test_add_skill_case_insensitive_idempotence() {
        let resume = Resume::new("Test");
        let resume = add_skill(&resume, "python");
        let resume = add_skill(&resume, "Python");
        assert_eq!(resume.skills, vec!["python"]);
    }

    #[test]
    fn test_add_skill_trims_and_rejects_empty() {
        let resume = Resume::new("Test");
        let resume = add_skill(&resume, "  Rust  ");
        let resume = add_skill(&resume, "   ");
        assert_eq!(resume.skills, vec!["Rust"]);
    }

    #[test]
    fn test_update_personal_info_sets_one_field() {
        let resume = Resume::new("Test");
        let next = update_personal_info(&resume, PersonalField::Email, "ada@example.com");
        assert_eq!(next.personal_info.email, "ada@example.com");
        assert!(next.personal_info.full_name.is_empty());
    }

    #[test]
    fn test_set_template_stores_without_rendering() {
        let resume = Resume::new("Test");
        let next = set_template(&resume, TemplateId::Elegant);
        assert_eq!(next.template, "elegant");
    }

    #[test]
    fn test_set_title_falls_back_when_blank() {
        let resume = Resume::new("Test");
        let next = set_title(&resume, "   ");
        assert_eq!(next.title, DEFAULT_TITLE);
        let next = set_title(&next, "Backend Roles 2026");
        assert_eq!(next.title, "Backend Roles 2026");
    }

    #[test]
    fn test_new_item_from_json_ignores_client_id() {
        let resume = Resume::new("Test");
        let payload = serde_json::json!({"id": "client-chosen", "company": "Acme"});
        let item = NewItem::from_json(SectionKind::Experience, payload).unwrap();
        let (next, id) = add_item(&resume, item);
        assert_ne!(next.experience[0].id, "client-chosen");
        assert_eq!(next.experience[0].id, id);
    }

    #[test]
    fn test_item_patch_from_json_per_section() {
        let patch = ItemPatch::from_json(
            SectionKind::Projects,
            serde_json::json!({"technologies": "Rust, Axum"}),
        )
        .unwrap();
        match patch {
            ItemPatch::Project(p) => assert_eq!(p.technologies.as_deref(), Some("Rust, Axum")),
            other => panic!("expected project patch, got {other:?}"),
        }
    }
}
