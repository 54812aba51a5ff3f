//! The six layout strategies. Each one is a pure `(Resume) -> VisualSurface`
//! function behind a shared trait; the registry in `render` dispatches on the
//! resolved template selector.

pub mod creative;
pub mod elegant;
pub mod executive;
pub mod minimalist;
pub mod modern;
pub mod professional;

use crate::models::resume::{ExperienceItem, PersonalInfo, Resume, TemplateId};
use crate::render::surface::VisualSurface;

/// One interchangeable layout. Strategies must tolerate every optional field
/// being empty, preserve stored sequence order, and stay pagination-agnostic.
pub trait TemplateStrategy: Send + Sync {
    fn id(&self) -> TemplateId;
    fn render(&self, resume: &Resume) -> VisualSurface;
}

/// The name line always renders, falling back to a literal placeholder.
pub(crate) fn display_name(info: &PersonalInfo) -> &str {
    let name = info.full_name.trim();
    if name.is_empty() {
        "Your Name"
    } else {
        name
    }
}

/// Joins a date range with a template-specific separator; blank on both
/// sides yields an empty string so the line is skipped entirely.
pub(crate) fn date_range(start: &str, end: &str, separator: &str) -> String {
    if start.trim().is_empty() && end.trim().is_empty() {
        String::new()
    } else {
        format!("{} {separator} {}", start.trim(), end.trim())
    }
}

/// End boundary for experience items that track a `current` flag: the
/// literal "Present" supersedes the stored end date at render time without
/// mutating it.
pub(crate) fn experience_end(item: &ExperienceItem) -> &str {
    if item.current {
        "Present"
    } else {
        &item.end_date
    }
}

/// End boundary for items without a `current` flag: a blank end date reads
/// as "Present" (executive/elegant experience, most project lists).
pub(crate) fn end_or_present(end_date: &str) -> &str {
    if end_date.trim().is_empty() {
        "Present"
    } else {
        end_date
    }
}

/// Contact entries in display order, blanks skipped.
pub(crate) fn contact_entries(info: &PersonalInfo) -> Vec<&str> {
    [
        info.email.as_str(),
        info.phone.as_str(),
        info.location.as_str(),
        info.linkedin.as_str(),
        info.website.as_str(),
    ]
    .into_iter()
    .filter(|s| !s.trim().is_empty())
    .collect()
}

/// "Degree in Field" when both are present, degree alone otherwise.
pub(crate) fn degree_line(degree: &str, field: &str) -> String {
    if field.trim().is_empty() {
        degree.trim().to_string()
    } else if degree.trim().is_empty() {
        field.trim().to_string()
    } else {
        format!("{} in {}", degree.trim(), field.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back() {
        let mut info = PersonalInfo::default();
        assert_eq!(display_name(&info), "Your Name");
        info.full_name = "Grace Hopper".to_string();
        assert_eq!(display_name(&info), "Grace Hopper");
    }

    #[test]
    fn test_date_range_blank_both_sides() {
        assert_eq!(date_range("", "", "-"), "");
        assert_eq!(date_range("2020", "", "-"), "2020 - ");
        assert_eq!(date_range("2020", "2022", "—"), "2020 — 2022");
    }

    #[test]
    fn test_experience_end_present_supersedes() {
        let item = ExperienceItem {
            current: true,
            end_date: "2023-06".to_string(),
            ..Default::default()
        };
        assert_eq!(experience_end(&item), "Present");
        // The stored value is untouched.
        assert_eq!(item.end_date, "2023-06");
    }

    #[test]
    fn test_end_or_present() {
        assert_eq!(end_or_present(""), "Present");
        assert_eq!(end_or_present("2024"), "2024");
    }

    #[test]
    fn test_degree_line_combinations() {
        assert_eq!(degree_line("BSc", "Physics"), "BSc in Physics");
        assert_eq!(degree_line("BSc", ""), "BSc");
        assert_eq!(degree_line("", "Physics"), "Physics");
    }

    #[test]
    fn test_contact_entries_skip_blanks() {
        let info = PersonalInfo {
            email: "a@b.c".to_string(),
            location: "Berlin".to_string(),
            ..Default::default()
        };
        assert_eq!(contact_entries(&info), vec!["a@b.c", "Berlin"]);
    }
}
