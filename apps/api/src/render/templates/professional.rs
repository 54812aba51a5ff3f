//! Professional — conservative single serif column: centered header, en-dash
//! date separators, "Degree in Field" education lines, skills joined with
//! pipes.

use crate::models::resume::{Resume, TemplateId};
use crate::render::metrics::FontClass;
use crate::render::surface::{assemble, RegionBuilder, TextStyle, VisualSurface, PAGE_WIDTH_PX};
use crate::render::templates::{
    contact_entries, date_range, degree_line, display_name, end_or_present, experience_end,
    TemplateStrategy,
};

pub struct ProfessionalTemplate;

impl TemplateStrategy for ProfessionalTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Professional
    }

    fn render(&self, resume: &Resume) -> VisualSurface {
        let info = &resume.personal_info;
        let mut page = RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Serif);

        page.wrapped(display_name(info), TextStyle::Name);
        page.wrapped(&contact_entries(info).join("   "), TextStyle::Meta);
        page.gap(18.0);

        if !info.summary.trim().is_empty() {
            page.line("PROFESSIONAL SUMMARY", TextStyle::Heading);
            page.wrapped(&info.summary, TextStyle::Body);
            page.gap(16.0);
        }

        if !resume.experience.is_empty() {
            page.line("PROFESSIONAL EXPERIENCE", TextStyle::Heading);
            for exp in &resume.experience {
                page.line(&exp.position, TextStyle::Title);
                // Company and location share one line.
                let employer = if exp.location.trim().is_empty() {
                    exp.company.trim().to_string()
                } else if exp.company.trim().is_empty() {
                    exp.location.trim().to_string()
                } else {
                    format!("{}, {}", exp.company.trim(), exp.location.trim())
                };
                page.line(&employer, TextStyle::Subtitle);
                page.line(
                    &date_range(&exp.start_date, experience_end(exp), "–"),
                    TextStyle::Meta,
                );
                page.wrapped(&exp.description, TextStyle::Body);
                page.gap(14.0);
            }
            page.gap(8.0);
        }

        if !resume.education.is_empty() {
            page.line("EDUCATION", TextStyle::Heading);
            for edu in &resume.education {
                page.line(&degree_line(&edu.degree, &edu.field), TextStyle::Title);
                page.line(&edu.school, TextStyle::Subtitle);
                page.line(
                    &date_range(&edu.start_date, &edu.end_date, "–"),
                    TextStyle::Meta,
                );
                if !edu.gpa.trim().is_empty() {
                    page.line(&format!("GPA: {}", edu.gpa), TextStyle::Meta);
                }
                page.wrapped(&edu.description, TextStyle::Body);
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
                        &date_range(&project.start_date, end_or_present(&project.end_date), "–"),
                        TextStyle::Meta,
                    );
                }
                if !project.technologies.trim().is_empty() {
                    page.line(
                        &format!("Technologies: {}", project.technologies),
                        TextStyle::Body,
                    );
                }
                page.wrapped(&project.description, TextStyle::Body);
                page.gap(12.0);
            }
            page.gap(8.0);
        }

        if !resume.skills.is_empty() {
            page.line("SKILLS", TextStyle::Heading);
            page.wrapped(&resume.skills.join(" | "), TextStyle::Body);
        }

        assemble(self.id(), vec![page.finish()])
    }
}
