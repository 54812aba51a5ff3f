//! Creative — full-width dark header strip carrying name, contact and
//! summary, followed by skill chips without a heading, then experience,
//! education and projects.

use crate::models::resume::{Resume, TemplateId};
use crate::render::metrics::FontClass;
use crate::render::surface::{
    assemble, RegionBuilder, Shade, TextStyle, VisualSurface, PAGE_WIDTH_PX,
};
use crate::render::templates::{
    contact_entries, date_range, display_name, experience_end, TemplateStrategy,
};

pub struct CreativeTemplate;

impl TemplateStrategy for CreativeTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }

    fn render(&self, resume: &Resume) -> VisualSurface {
        let info = &resume.personal_info;

        // ── Header strip ────────────────────────────────────────────────────
        let mut header =
            RegionBuilder::new(0.0, 0.0, PAGE_WIDTH_PX, FontClass::Sans).background(Shade::Dark);
        header.wrapped(display_name(info), TextStyle::Name);
        header.wrapped(&contact_entries(info).join("   "), TextStyle::Meta);
        header.wrapped(&info.summary, TextStyle::Body);
        let header = header.finish();

        // ── Body ────────────────────────────────────────────────────────────
        let mut body =
            RegionBuilder::new(0.0, header.height, PAGE_WIDTH_PX, FontClass::Sans);

        if !resume.skills.is_empty() {
            // Chips only, no heading — the header already sets the scene.
            body.wrapped(&resume.skills.join("  "), TextStyle::Chip);
            body.gap(20.0);
        }

        if !resume.experience.is_empty() {
            body.line("EXPERIENCE", TextStyle::Heading);
            for exp in &resume.experience {
                body.line(&exp.position, TextStyle::Title);
                body.line(&exp.company, TextStyle::Subtitle);
                body.line(
                    &date_range(&exp.start_date, experience_end(exp), "-"),
                    TextStyle::Meta,
                );
                body.line(&exp.location, TextStyle::Meta);
                body.wrapped(&exp.description, TextStyle::Body);
                body.gap(16.0);
            }
            body.gap(8.0);
        }

        if !resume.education.is_empty() {
            body.line("EDUCATION", TextStyle::Heading);
            for edu in &resume.education {
                body.line(&edu.degree, TextStyle::Title);
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

        if !resume.projects.is_empty() {
            body.line("PROJECTS", TextStyle::Heading);
            for project in &resume.projects {
                body.line(&project.name, TextStyle::Title);
                body.line(&project.technologies, TextStyle::Subtitle);
                body.wrapped(&project.description, TextStyle::Body);
                body.gap(12.0);
            }
        }

        assemble(self.id(), vec![header, body.finish()])
    }
}
