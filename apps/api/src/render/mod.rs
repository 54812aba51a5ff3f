//! Layout engine: font metrics, the VisualSurface model, and the six
//! template strategies behind a single `render` entry point.

pub mod metrics;
pub mod surface;
pub mod templates;

use crate::models::resume::{Resume, TemplateId};
use surface::VisualSurface;
use templates::creative::CreativeTemplate;
use templates::elegant::ElegantTemplate;
use templates::executive::ExecutiveTemplate;
use templates::minimalist::MinimalistTemplate;
use templates::modern::ModernTemplate;
use templates::professional::ProfessionalTemplate;
use templates::TemplateStrategy;

/// Returns the strategy registered for a template id.
pub fn strategy_for(id: TemplateId) -> &'static dyn TemplateStrategy {
    match id {
        TemplateId::Modern => &ModernTemplate,
        TemplateId::Minimalist => &MinimalistTemplate,
        TemplateId::Creative => &CreativeTemplate,
        TemplateId::Professional => &ProfessionalTemplate,
        TemplateId::Executive => &ExecutiveTemplate,
        TemplateId::Elegant => &ElegantTemplate,
    }
}

/// Lays out a document with its selected template. Unknown selectors fall
/// back to modern rather than failing, so a stale stored value still previews.
pub fn render(resume: &Resume) -> VisualSurface {
    let id = TemplateId::resolve(&resume.template);
    strategy_for(id).render(resume)
}

// ────────────────────────────────────────────────────────────────────────────
// Completion certificate
// ────────────────────────────────────────────────────────────────────────────

pub mod certificate {
    //! A fixed landscape surface congratulating a user on finishing their
    //! resume. Exported full-bleed onto A4 landscape.

    use crate::models::resume::TemplateId;
    use crate::render::metrics::FontClass;
    use crate::render::surface::{Line, Region, Shade, TextStyle, VisualSurface};

    /// A4 landscape at 96 dpi.
    pub const CERT_WIDTH_PX: f32 = 1123.0;
    pub const CERT_HEIGHT_PX: f32 = 794.0;

    pub fn certificate_surface(name: &str) -> VisualSurface {
        let name = name.trim();
        let name = if name.is_empty() { "Your Name" } else { name };
        let metrics = crate::render::metrics::get_metrics(FontClass::Serif);

        let mut lines = Vec::new();
        let mut y = 180.0;
        for (text, style, gap) in [
            ("Certificate of Completion", TextStyle::Name, 90.0),
            ("This certifies that", TextStyle::Subtitle, 50.0),
            (name, TextStyle::Name, 90.0),
            (
                "has successfully completed their professional resume",
                TextStyle::Body,
                60.0,
            ),
            ("ResumeForge", TextStyle::Heading, 0.0),
        ] {
            let width = metrics.width_px(text, style.font_size());
            lines.push(Line {
                text: text.to_string(),
                style,
                // Centered on the landscape page.
                x: (CERT_WIDTH_PX - width) / 2.0,
                y,
                width,
            });
            y += style.line_height() + gap;
        }

        VisualSurface {
            template: TemplateId::Elegant,
            width: CERT_WIDTH_PX,
            height: CERT_HEIGHT_PX,
            regions: vec![Region {
                x: 0.0,
                y: 0.0,
                width: CERT_WIDTH_PX,
                height: CERT_HEIGHT_PX,
                background: Shade::Light,
                fill_to_bottom: false,
                lines,
            }],
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{EducationItem, ExperienceItem, PersonalInfo};
    use crate::render::surface::{PAGE_MIN_HEIGHT_PX, PAGE_WIDTH_PX};

    fn sample_resume() -> Resume {
        Resume {
            title: "Sample".to_string(),
            template: "modern".to_string(),
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                summary: "Analytical engine programmer.".to_string(),
                ..Default::default()
            },
            education: vec![EducationItem {
                id: "e1".to_string(),
                school: "University of London".to_string(),
                degree: "BSc".to_string(),
                field: "Mathematics".to_string(),
                ..Default::default()
            }],
            experience: vec![
                ExperienceItem {
                    id: "x1".to_string(),
                    company: "Analytical Engines Ltd".to_string(),
                    position: "Programmer".to_string(),
                    start_date: "1842".to_string(),
                    end_date: "1843".to_string(),
                    ..Default::default()
                },
                ExperienceItem {
                    id: "x2".to_string(),
                    company: "Babbage & Co".to_string(),
                    position: "Consultant".to_string(),
                    start_date: "1843".to_string(),
                    current: true,
                    ..Default::default()
                },
            ],
            skills: vec!["Mathematics".to_string(), "Translation".to_string()],
            projects: vec![],
        }
    }

    fn all_text(surface: &surface::VisualSurface) -> String {
        surface
            .regions
            .iter()
            .flat_map(|r| r.lines.iter())
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_is_deterministic() {
        let resume = sample_resume();
        assert_eq!(render(&resume), render(&resume));
    }

    #[test]
    fn test_unknown_template_renders_as_modern() {
        let mut resume = sample_resume();
        resume.template = "brutalist".to_string();
        let fallback = render(&resume);
        resume.template = "modern".to_string();
        assert_eq!(fallback, render(&resume));
    }

    #[test]
    fn test_every_template_renders_empty_document() {
        let resume = Resume::new("");
        for id in TemplateId::ALL {
            let surface = strategy_for(id).render(&resume);
            assert_eq!(surface.width, PAGE_WIDTH_PX);
            assert!(surface.height >= PAGE_MIN_HEIGHT_PX);
            assert!(all_text(&surface).contains("Your Name"), "{:?}", id);
        }
    }

    #[test]
    fn test_current_role_shows_present_without_mutating() {
        let resume = sample_resume();
        let text = all_text(&render(&resume));
        assert!(text.contains("1843 - Present"));
        assert!(text.contains("1842 - 1843"));
        // The document itself is unchanged.
        assert_eq!(resume.experience[1].end_date, "");
    }

    #[test]
    fn test_sequence_order_is_preserved() {
        let resume = sample_resume();
        let text = all_text(&render(&resume));
        let first = text.find("Analytical Engines Ltd").unwrap();
        let second = text.find("Babbage & Co").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_modern_partitions_sidebar_and_main() {
        let resume = sample_resume();
        let surface = render(&resume);
        assert_eq!(surface.regions.len(), 2);
        let sidebar = &surface.regions[0];
        let main = &surface.regions[1];
        assert!(sidebar.width < main.width);
        let sidebar_text: String = sidebar.lines.iter().map(|l| l.text.clone()).collect();
        let main_text: String = main.lines.iter().map(|l| l.text.clone()).collect();
        assert!(sidebar_text.contains("University of London"));
        assert!(sidebar_text.contains("Mathematics"));
        assert!(main_text.contains("Analytical Engines Ltd"));
        assert!(!main_text.contains("University of London"));
    }

    #[test]
    fn test_minimalist_joins_skills_with_bullets() {
        let mut resume = sample_resume();
        resume.template = "minimalist".to_string();
        let text = all_text(&render(&resume));
        assert!(text.contains("Mathematics • Translation"));
    }

    #[test]
    fn test_elegant_title_case_headings() {
        let mut resume = sample_resume();
        resume.template = "elegant".to_string();
        let text = all_text(&render(&resume));
        assert!(text.contains("Professional Experience"));
        assert!(text.contains("Skills & Expertise"));
    }

    #[test]
    fn test_certificate_is_landscape_and_centered() {
        let surface = certificate::certificate_surface("Ada Lovelace");
        assert!(surface.width > surface.height);
        let text = all_text(&surface);
        assert!(text.contains("Certificate of Completion"));
        assert!(text.contains("Ada Lovelace"));
    }
}
