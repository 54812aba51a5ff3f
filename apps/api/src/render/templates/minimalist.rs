//! Minimalist — single serif column with a centered header, em-dash date
//! separators, and skills joined into one "•"-delimited line.

use crate::models::resume::{Resume, TemplateId};
use crate::render::metrics::FontClass;
use crate::render::surface::{assemble, RegionBuilder, TextStyle, VisualSurface, PAGE_WIDTH_PX};
use crate::render::templates::{
    date_range, display_name, end_or_present, experience_end, TemplateStrategy,
};

pub struct MinimalistTemplate;

impl TemplateStrategy for MinimalistTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Minimalist
    }

    fn render(&self, resume: &Resume) -> VisualSurface {
        let info = &resume.personal_info;
        let mut page = RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Serif);

        // Header: name, then two contact rows.
        page.wrapped(display_name(info), TextStyle::Name);
        let primary: Vec<&str> = [&info.email, &info.phone, &info.location]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .collect();
        page.wrapped(&primary.join("   "), TextStyle::Meta);
        let secondary: Vec<&str> = [&info.linkedin, &info.website]
            .into_iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .collect();
        page.wrapped(&secondary.join("   "), TextStyle::Meta);
        page.gap(20.0);

        page.wrapped(&info.summary, TextStyle::Body);
        page.gap(20.0);

        if !resume.experience.is_empty() {
            page.line("EXPERIENCE", TextStyle::Heading);
            for exp in &resume.experience {
                page.line(&exp.position, TextStyle::Title);
                page.line(
                    &date_range(&exp.start_date, experience_end(exp), "—"),
                    TextStyle::Meta,
                );
                page.line(&exp.company, TextStyle::Subtitle);
                page.line(&exp.location, TextStyle::Meta);
                page.wrapped(&exp.description, TextStyle::Body);
                page.gap(14.0);
            }
            page.gap(8.0);
        }

        if !resume.education.is_empty() {
            page.line("EDUCATION", TextStyle::Heading);
            for edu in &resume.education {
                page.line(&edu.degree, TextStyle::Title);
                page.line(
                    &date_range(&edu.start_date, &edu.end_date, "—"),
                    TextStyle::Meta,
                );
                page.line(&edu.school, TextStyle::Subtitle);
                page.line(&edu.field, TextStyle::Body);
                if !edu.gpa.trim().is_empty() {
                    page.line(&format!("GPA: {}", edu.gpa), TextStyle::Meta);
                }
                page.gap(12.0);
            }
            page.gap(8.0);
        }

        if !resume.projects.is_empty() {
            page.line("PROJECTS", TextStyle::Heading);
            for project in &resume.projects {
                page.line(&project.name, TextStyle::Title);
                if !project.start_date.trim().is_empty() {
                    page.line(
                        &date_range(&project.start_date, end_or_present(&project.end_date), "—"),
                        TextStyle::Meta,
                    );
                }
                page.line(&project.technologies, TextStyle::Body);
                page.wrapped(&project.description, TextStyle::Body);
                page.gap(12.0);
            }
            page.gap(8.0);
        }

        if !resume.skills.is_empty() {
            page.line("SKILLS", TextStyle::Heading);
            page.wrapped(&resume.skills.join(" • "), TextStyle::Body);
        }

        assemble(self.id(), vec![page.finish()])
    }
}
