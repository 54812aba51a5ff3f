//! System instructions and prompt builders for the suggestion adapter.
//! One system instruction per suggestion kind; builders assemble the user
//! prompt from the live document plus request fields. Blank inputs get the
//! same placeholder text a coach would see ("No description provided") so the
//! model writes from scratch instead of echoing emptiness.

use crate::models::resume::{ExperienceItem, PersonalInfo, ProjectItem, Resume};

use super::SuggestionKind;

pub fn system_prompt(kind: SuggestionKind) -> &'static str {
    match kind {
        SuggestionKind::Summary => {
            "You are a professional resume writer. Generate a compelling professional summary \
             based on the user's information. Keep it concise (2-3 sentences) and impactful."
        }
        SuggestionKind::Experience => {
            "You are a professional resume writer. Improve the job description provided. Use \
             action verbs, quantify achievements where possible, and make it more impactful. \
             Return 3-4 bullet points."
        }
        SuggestionKind::Skills => {
            "You are a professional resume writer. Based on the job title or field provided, \
             suggest relevant technical and soft skills. Return as a comma-separated list."
        }
        SuggestionKind::ProjectDescription => {
            "You are a professional resume writer. Improve the project description provided. \
             Highlight technologies used, your role, and the impact. Return 2-3 bullet points."
        }
        SuggestionKind::CoverLetter => {
            "You are a professional cover letter writer. Generate a compelling cover letter \
             based on the resume information and job description provided. Keep it professional \
             and personalized."
        }
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

pub fn summary_prompt(info: &PersonalInfo) -> String {
    format!(
        "Generate a professional summary for someone named {}.\n\
         They can be reached at {}.\n\
         Location: {}.\n\
         Create a compelling 2-3 sentence professional summary that highlights their \
         potential value to employers.",
        or_placeholder(&info.full_name, "a professional"),
        or_placeholder(&info.email, "email not provided"),
        or_placeholder(&info.location, "not specified"),
    )
}

pub fn experience_prompt(item: &ExperienceItem) -> String {
    format!(
        "Improve this job description for a {} at {}:\n\
         \"{}\"\n\n\
         Generate 3-4 impactful bullet points using action verbs and quantifiable \
         achievements.\n\
         If no description is provided, create relevant bullet points for this role.",
        item.position,
        item.company,
        or_placeholder(&item.description, "No description provided"),
    )
}

pub fn skills_prompt(job_title: &str) -> String {
    format!(
        "Suggest 10 relevant technical and soft skills for a {job_title} position.\n\
         Return them as a comma-separated list without numbers or bullet points."
    )
}

pub fn project_prompt(item: &ProjectItem) -> String {
    format!(
        "Improve this project description for \"{}\":\n\
         \"{}\"\n\
         Technologies used: {}\n\n\
         Generate 2-3 impactful bullet points highlighting:\n\
         - What the project does\n\
         - Your role and contributions\n\
         - Technologies used and impact",
        item.name,
        or_placeholder(&item.description, "No description provided"),
        or_placeholder(&item.technologies, "Not specified"),
    )
}

/// Job-posting details the caller supplies alongside the document.
#[derive(Debug, Clone)]
pub struct CoverLetterDetails {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub additional_info: String,
}

pub fn cover_letter_prompt(resume: &Resume, details: &CoverLetterDetails) -> String {
    let latest_position = resume
        .experience
        .first()
        .map(|e| e.position.as_str())
        .filter(|p| !p.trim().is_empty())
        .unwrap_or("Professional");
    let skills = if resume.skills.is_empty() {
        "Various professional skills".to_string()
    } else {
        resume.skills.join(", ")
    };
    let education = resume
        .education
        .first()
        .map(|e| e.degree.as_str())
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("Relevant education");

    format!(
        "Write a professional cover letter for the position of \"{job_title}\" at \
         {company_name}.\n\n\
         Applicant Information:\n\
         - Name: {name}\n\
         - Current/Most Recent Position: {latest_position}\n\
         - Key Skills: {skills}\n\
         - Years of Experience: Based on resume data\n\
         - Education: {education}\n\n\
         Job Details:\n\
         - Position: {job_title}\n\
         - Company: {company_name}\n\
         - Job Description: {job_description}\n\n\
         Additional Context: {additional_info}\n\n\
         Please write a compelling cover letter that:\n\
         1. Introduces the applicant and the position they're applying for\n\
         2. Highlights relevant experience and skills that match the job requirements\n\
         3. Shows enthusiasm for the company and role\n\
         4. Includes specific examples from their background\n\
         5. Ends with a strong call to action\n\n\
         Keep it professional, concise (250-400 words), and tailored to the specific role \
         and company.",
        job_title = details.job_title,
        company_name = details.company_name,
        name = or_placeholder(&resume.personal_info.full_name, "The applicant"),
        job_description = or_placeholder(&details.job_description, "Not provided"),
        additional_info = or_placeholder(&details.additional_info, "None provided"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_placeholders() {
        let prompt = summary_prompt(&PersonalInfo::default());
        assert!(prompt.contains("a professional"));
        assert!(prompt.contains("email not provided"));
        assert!(prompt.contains("not specified"));
    }

    #[test]
    fn test_experience_prompt_uses_description() {
        let item = ExperienceItem {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            description: "Built things".to_string(),
            ..Default::default()
        };
        let prompt = experience_prompt(&item);
        assert!(prompt.contains("Engineer at Acme"));
        assert!(prompt.contains("\"Built things\""));
    }

    #[test]
    fn test_skills_prompt_mentions_title() {
        assert!(skills_prompt("Data Scientist").contains("Data Scientist position"));
    }

    #[test]
    fn test_cover_letter_prompt_falls_back_per_field() {
        let resume = Resume::new("Empty");
        let details = CoverLetterDetails {
            job_title: "Backend Engineer".to_string(),
            company_name: "Initech".to_string(),
            job_description: String::new(),
            additional_info: String::new(),
        };
        let prompt = cover_letter_prompt(&resume, &details);
        assert!(prompt.contains("\"Backend Engineer\" at Initech"));
        assert!(prompt.contains("Current/Most Recent Position: Professional"));
        assert!(prompt.contains("Key Skills: Various professional skills"));
        assert!(prompt.contains("Job Description: Not provided"));
        assert!(prompt.contains("Additional Context: None provided"));
    }
}
