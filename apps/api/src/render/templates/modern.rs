//! Modern — the only two-column layout: a narrow accent sidebar carrying
//! name, summary, contact, skills and education, and a wide main column
//! carrying experience and projects. The partition is a fixed rule of this
//! template, not user-configurable.

use crate::models::resume::{Resume, TemplateId};
use crate::render::metrics::FontClass;
use crate::render::surface::{assemble, RegionBuilder, Shade, TextStyle, VisualSurface};
use crate::render::templates::{
    contact_entries, date_range, display_name, experience_end, TemplateStrategy,
};

const SIDEBAR_FRACTION: f32 = 1.0 / 3.0;

pub struct ModernTemplate;

impl TemplateStrategy for ModernTemplate {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }

    fn render(&self, resume: &Resume) -> VisualSurface {
        let info = &resume.personal_info;
        let sidebar_width = super::super::surface::PAGE_WIDTH_PX * SIDEBAR_FRACTION;

        // ── Sidebar ─────────────────────────────────────────────────────────
        let mut sidebar = RegionBuilder::new(0.0, 0.0, sidebar_width, FontClass::Sans)
            .background(Shade::Accent)
            .fill_to_bottom();

        sidebar.wrapped(display_name(info), TextStyle::Name);
        sidebar.wrapped(&info.summary, TextStyle::Body);
        sidebar.gap(24.0);

        sidebar.line("CONTACT", TextStyle::Heading);
        for entry in contact_entries(info) {
            sidebar.wrapped(entry, TextStyle::Meta);
        }
        sidebar.gap(24.0);

        if !resume.skills.is_empty() {
            sidebar.line("SKILLS", TextStyle::Heading);
            sidebar.wrapped(&resume.skills.join("  "), TextStyle::Chip);
            sidebar.gap(24.0);
        }

        if !resume.education.is_empty() {
            sidebar.line("EDUCATION", TextStyle::Heading);
            for edu in &resume.education {
                sidebar.wrapped(&edu.degree, TextStyle::Title);
                sidebar.wrapped(&edu.school, TextStyle::Body);
                sidebar.line(&date_range(&edu.start_date, &edu.end_date, "-"), TextStyle::Meta);
                if !edu.gpa.trim().is_empty() {
                    sidebar.line(&format!("GPA: {}", edu.gpa), TextStyle::Meta);
                }
                sidebar.gap(10.0);
            }
        }

        // ── Main column ─────────────────────────────────────────────────────
        let mut main = RegionBuilder::new(
            sidebar_width,
            0.0,
            super::super::surface::PAGE_WIDTH_PX - sidebar_width,
            FontClass::Sans,
        );

        if !resume.experience.is_empty() {
            main.line("WORK EXPERIENCE", TextStyle::Heading);
            for exp in &resume.experience {
                main.line(&exp.position, TextStyle::Title);
                main.line(&exp.company, TextStyle::Subtitle);
                main.line(
                    &date_range(&exp.start_date, experience_end(exp), "-"),
                    TextStyle::Meta,
                );
                main.line(&exp.location, TextStyle::Meta);
                main.wrapped(&exp.description, TextStyle::Body);
                main.gap(14.0);
            }
            main.gap(10.0);
        }

        if !resume.projects.is_empty() {
            main.line("PROJECTS", TextStyle::Heading);
            for project in &resume.projects {
                main.line(&project.name, TextStyle::Title);
                if !project.start_date.trim().is_empty() {
                    main.line(
                        &date_range(
                            &project.start_date,
                            super::end_or_present(&project.end_date),
                            "-",
                        ),
                        TextStyle::Meta,
                    );
                }
                main.line(&project.technologies, TextStyle::Subtitle);
                main.wrapped(&project.description, TextStyle::Body);
                main.line(&project.link, TextStyle::Meta);
                main.gap(14.0);
            }
        }

        assemble(self.id(), vec![sidebar.finish(), main.finish()])
    }
}
