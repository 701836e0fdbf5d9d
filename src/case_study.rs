use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

const WORDS_PER_MINUTE: usize = 200;

pub static GLOBAL_CASE_STUDY_CACHE: LazyLock<DashMap<String, CaseStudy>> =
    LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "content/case-studies"]
struct CaseStudyAssets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    updated: DateTime<Utc>,
}

/// Long-form write-up of a project, rendered to HTML on the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub project_id: String,
    pub title: String,
    pub updated: DateTime<Utc>,
    pub reading_minutes: usize,
    pub html: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseStudyError {
    #[error("no case study for {0}")]
    NotFound(String),
    #[error("case study for {0} is not UTF-8")]
    Encoding(String),
    #[error("couldn't parse front matter of {0}")]
    FrontMatter(String),
}

pub fn reading_minutes(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(WORDS_PER_MINUTE).max(1)
}

#[cfg(feature = "ssr")]
pub fn render_case_study(project_id: &str, source: &str) -> Result<CaseStudy, CaseStudyError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(source)
        .ok_or_else(|| CaseStudyError::FrontMatter(project_id.to_string()))?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, highlight(parser).into_iter());

    Ok(CaseStudy {
        project_id: project_id.to_string(),
        title: parsed.data.title,
        updated: parsed.data.updated,
        reading_minutes: reading_minutes(&parsed.content),
        html,
    })
}

#[cfg(feature = "ssr")]
pub fn get_case_study(project_id: &str) -> Result<CaseStudy, CaseStudyError> {
    if let Some(cached) = GLOBAL_CASE_STUDY_CACHE.get(project_id) {
        return Ok(cached.clone());
    }
    let file = CaseStudyAssets::get(&format!("{project_id}.md"))
        .ok_or_else(|| CaseStudyError::NotFound(project_id.to_string()))?;
    let source = String::from_utf8(file.data.into_owned())
        .map_err(|_| CaseStudyError::Encoding(project_id.to_string()))?;

    let study = render_case_study(project_id, &source)?;
    GLOBAL_CASE_STUDY_CACHE.insert(project_id.to_string(), study.clone());
    Ok(study)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_minutes() {
        assert_eq!(reading_minutes(""), 1);
        assert_eq!(reading_minutes(&"word ".repeat(200)), 1);
        assert_eq!(reading_minutes(&"word ".repeat(201)), 2);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_embedded_case_study_renders() {
        let study = get_case_study("audit-buddy").expect("case study should render");
        assert_eq!(study.project_id, "audit-buddy");
        assert!(study.title.starts_with("Audit Buddy"));
        assert!(study.html.contains("<h2>Why</h2>"));
        // front matter never leaks into the body
        assert!(!study.html.contains("updated:"));
        assert!(GLOBAL_CASE_STUDY_CACHE.contains_key("audit-buddy"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_missing_case_study() {
        assert_eq!(
            get_case_study("nope"),
            Err(CaseStudyError::NotFound("nope".to_string()))
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_missing_front_matter_rejected() {
        let err = render_case_study("x", "# no front matter\n").unwrap_err();
        assert_eq!(err, CaseStudyError::FrontMatter("x".to_string()));
    }
}
