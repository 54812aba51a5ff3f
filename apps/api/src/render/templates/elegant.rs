//! Elegant — serif layout with an accent centered header, title-case
//! headings ("Skills & Expertise", "Notable Projects"), and project links
//! rendered as a trailing arrow line.

use crate::models::resume::{Resume, TemplateId};
use crate::render::metrics::FontClass;
use crate::render::surface::{
    assemble, RegionBuilder, Shade, TextStyle, VisualSurface, PAGE_WIDTH_PX,
};
use crate::render::templates::{
    contact_entries, date_range, degree_line, display_name, end_or_present, TemplateStrategy,
};

pub struct ElegantTemplate;

impl TemplateStrategy for ElegantTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Elegant
    }

    fn render(&self, resume: &Resume) -> VisualSurface {
        let info = &resume.personal_info;

        // ── Header ──────────────────────────────────────────────────────────
        let mut header =
            RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Serif).background(Shade::Accent);
        header.wrapped(display_name(info), TextStyle::Name);
        header.wrapped(&contact_entries(info).join("  •  "), TextStyle::Meta);
        let header = header.finish();

        let mut body = RegionBuilder::new(0.0, header.height, PAGE_WIDTH_PX, FontClass::Serif);

        if !info.summary.trim().is_empty() {
            body.line("Professional Summary", TextStyle::Heading);
            body.wrapped(&info.summary, TextStyle::Body);
            body.gap(18.0);
        }

        if !resume.experience.is_empty() {
            body.line("Professional Experience", TextStyle::Heading);
            for exp in &resume.experience {
                body.line(&exp.position, TextStyle::Title);
                body.line(&exp.company, TextStyle::Subtitle);
                body.line(
                    &date_range(&exp.start_date, end_or_present(&exp.end_date), "-"),
                    TextStyle::Meta,
                );
                body.line(&exp.location, TextStyle::Meta);
                body.wrapped(&exp.description, TextStyle::Body);
                body.gap(14.0);
            }
            body.gap(8.0);
        }

        if !resume.education.is_empty() {
            body.line("Education", TextStyle::Heading);
            for edu in &resume.education {
                body.line(&degree_line(&edu.degree, &edu.field), TextStyle::Title);
                body.line(&edu.school, TextStyle::Subtitle);
                body.line(
                    &date_range(&edu.start_date, &edu.end_date, "-"),
                    TextStyle::Meta,
                );
                if !edu.gpa.trim().is_empty() {
                    body.line(&format!("GPA: {}", edu.gpa), TextStyle::Meta);
                }
                body.gap(12.0);
            }
            body.gap(8.0);
        }

        if !resume.skills.is_empty() {
            body.line("Skills & Expertise", TextStyle::Heading);
            body.wrapped(&resume.skills.join("  "), TextStyle::Chip);
            body.gap(18.0);
        }

        if !resume.projects.is_empty() {
            body.line("Notable Projects", TextStyle::Heading);
            for project in &resume.projects {
                body.line(&project.name, TextStyle::Title);
                if !project.start_date.trim().is_empty() {
                    body.line(
                        &date_range(&project.start_date, end_or_present(&project.end_date), "-"),
                        TextStyle::Meta,
                    );
                }
                if !project.technologies.trim().is_empty() {
                    body.line(
                        &format!("Technologies: {}", project.technologies),
                        TextStyle::Subtitle,
                    );
                }
                body.wrapped(&project.description, TextStyle::Body);
                if !project.link.trim().is_empty() {
                    body.line(&format!("View Project → {}", project.link), TextStyle::Meta);
                }
                body.gap(12.0);
            }
        }

        assemble(self.id(), vec![header, body.finish()])
    }
}
