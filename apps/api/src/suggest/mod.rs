//! Suggestion adapter: turns document context into completion-port prompts
//! and returns raw suggestion text. The adapter never writes to the document;
//! applying a suggestion goes back through the mutation engine.

pub mod prompts;

use serde::Deserialize;
use thiserror::Error;

use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::Resume;
use prompts::CoverLetterDetails;

/// The five suggestion flavors, each with its own system instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Summary,
    Experience,
    Skills,
    ProjectDescription,
    CoverLetter,
}

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("no {section} item with id {id}")]
    UnknownItem { section: &'static str, id: String },
    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// One suggestion request, tagged by kind on the wire. Item-scoped kinds
/// name the stored item they refer to; the builder reads the current values
/// from the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SuggestionRequest {
    Summary,
    Experience {
        #[serde(rename = "itemId")]
        item_id: String,
    },
    Skills {
        #[serde(rename = "jobTitle")]
        job_title: String,
    },
    ProjectDescription {
        #[serde(rename = "itemId")]
        item_id: String,
    },
    CoverLetter {
        #[serde(rename = "jobTitle")]
        job_title: String,
        #[serde(rename = "companyName")]
        company_name: String,
        #[serde(rename = "jobDescription", default)]
        job_description: String,
        #[serde(rename = "additionalInfo", default)]
        additional_info: String,
    },
}

impl SuggestionRequest {
    pub fn kind(&self) -> SuggestionKind {
        match self {
            SuggestionRequest::Summary => SuggestionKind::Summary,
            SuggestionRequest::Experience { .. } => SuggestionKind::Experience,
            SuggestionRequest::Skills { .. } => SuggestionKind::Skills,
            SuggestionRequest::ProjectDescription { .. } => SuggestionKind::ProjectDescription,
            SuggestionRequest::CoverLetter { .. } => SuggestionKind::CoverLetter,
        }
    }
}

/// Builds the user prompt for a request against the current document.
pub fn build_prompt(resume: &Resume, request: &SuggestionRequest) -> Result<String, SuggestError> {
    match request {
        SuggestionRequest::Summary => Ok(prompts::summary_prompt(&resume.personal_info)),
        SuggestionRequest::Experience { item_id } => {
            let item = resume
                .experience
                .iter()
                .find(|e| e.id == *item_id)
                .ok_or_else(|| SuggestError::UnknownItem {
                    section: "experience",
                    id: item_id.clone(),
                })?;
            Ok(prompts::experience_prompt(item))
        }
        SuggestionRequest::Skills { job_title } => Ok(prompts::skills_prompt(job_title)),
        SuggestionRequest::ProjectDescription { item_id } => {
            let item = resume
                .projects
                .iter()
                .find(|p| p.id == *item_id)
                .ok_or_else(|| SuggestError::UnknownItem {
                    section: "projects",
                    id: item_id.clone(),
                })?;
            Ok(prompts::project_prompt(item))
        }
        SuggestionRequest::CoverLetter {
            job_title,
            company_name,
            job_description,
            additional_info,
        } => Ok(prompts::cover_letter_prompt(
            resume,
            &CoverLetterDetails {
                job_title: job_title.clone(),
                company_name: company_name.clone(),
                job_description: job_description.clone(),
                additional_info: additional_info.clone(),
            },
        )),
    }
}

/// Runs one suggestion end to end: build the prompt, make a single completion
/// call, return the raw text. No retry; a failed call is a failed suggestion.
pub async fn suggest(
    llm: &LlmClient,
    resume: &Resume,
    request: &SuggestionRequest,
) -> Result<String, SuggestError> {
    let prompt = build_prompt(resume, request)?;
    let system = prompts::system_prompt(request.kind());
    Ok(llm.complete(&prompt, system).await?)
}

/// Splits a comma-separated skills suggestion and keeps only entries not
/// already present (case-insensitive). Pure; the caller feeds the result to
/// the mutation engine.
pub fn merge_suggested_skills(existing: &[String], raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| !existing.iter().any(|e| e.eq_ignore_ascii_case(s)))
        .map(str::to_string)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceItem;

    #[test]
    fn test_request_kind_deserializes_kebab_case() {
        let request: SuggestionRequest =
            serde_json::from_str(r#"{"kind":"project-description","itemId":"p1"}"#).unwrap();
        assert_eq!(request.kind(), SuggestionKind::ProjectDescription);
        let request: SuggestionRequest =
            serde_json::from_str(r#"{"kind":"cover-letter","jobTitle":"Dev","companyName":"Acme"}"#)
                .unwrap();
        assert_eq!(request.kind(), SuggestionKind::CoverLetter);
    }

    #[test]
    fn test_build_prompt_unknown_item_fails() {
        let resume = Resume::new("Doc");
        let err = build_prompt(
            &resume,
            &SuggestionRequest::Experience {
                item_id: "missing".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, SuggestError::UnknownItem { .. }));
    }

    #[test]
    fn test_build_prompt_reads_stored_item() {
        let mut resume = Resume::new("Doc");
        resume.experience.push(ExperienceItem {
            id: "x1".to_string(),
            position: "SRE".to_string(),
            company: "Initech".to_string(),
            ..Default::default()
        });
        let prompt = build_prompt(
            &resume,
            &SuggestionRequest::Experience {
                item_id: "x1".to_string(),
            },
        )
        .unwrap();
        assert!(prompt.contains("SRE at Initech"));
    }

    #[test]
    fn test_merge_suggested_skills_filters_case_insensitively() {
        let existing = vec!["Rust".to_string(), "SQL".to_string()];
        let merged = merge_suggested_skills(&existing, "rust, Go,  SQL , Kubernetes, ,Go");
        assert_eq!(merged, vec!["Go", "Kubernetes", "Go"]);
    }

    #[test]
    fn test_merge_suggested_skills_empty_raw() {
        assert!(merge_suggested_skills(&[], "  ,  , ").is_empty());
    }
}
