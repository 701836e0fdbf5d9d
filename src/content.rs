use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROJECTS_FILE: &str = "projects.json";

/// Parsed once per process; falls back to [`fallback_projects`] when the embedded data is bad.
pub static PROJECTS: LazyLock<Vec<Project>> =
    LazyLock::new(|| projects_or_fallback(load_projects()));

#[derive(Embed)]
#[folder = "content/data"]
pub struct DataAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(&'static str),
    #[error("content file is not UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no projects in content file")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub impact: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub architecture: Vec<String>,
    #[serde(default)]
    pub image_layers: Vec<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub approach: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub case_study_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Repository,
    CaseStudy,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Demo => "Live Demo",
            Self::Repository => "GitHub",
            Self::CaseStudy => "Case Study",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Demo => "btn btn-primary",
            Self::Repository | Self::CaseStudy => "btn btn-ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink<'a> {
    pub kind: LinkKind,
    pub href: &'a str,
}

impl Project {
    /// One link per optional URL that is actually set, in display order.
    pub fn links(&self) -> Vec<ProjectLink<'_>> {
        [
            (LinkKind::Demo, &self.demo_url),
            (LinkKind::Repository, &self.repo_url),
            (LinkKind::CaseStudy, &self.case_study_url),
        ]
        .into_iter()
        .filter_map(|(kind, url)| {
            url.as_deref()
                .filter(|href| !href.is_empty())
                .map(|href| ProjectLink { kind, href })
        })
        .collect()
    }

    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }

    /// Public URL of an image layer; layer names are file names under `/images/`.
    pub fn layer_src(&self, index: usize) -> Option<String> {
        self.image_layers
            .get(index)
            .map(|name| format!("/images/{name}"))
    }

    pub fn workflow_label(&self) -> String {
        format!("{} Workflow", self.title)
    }

    pub fn layer_alt(&self, index: usize) -> String {
        format!("{} workflow layer {}", self.title, index + 1)
    }
}

pub fn parse_projects(json: &str) -> Result<Vec<Project>, ContentError> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    if projects.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(projects)
}

pub fn load_projects() -> Result<Vec<Project>, ContentError> {
    let file = DataAssets::get(PROJECTS_FILE).ok_or(ContentError::NotFound(PROJECTS_FILE))?;
    let json = String::from_utf8(file.data.into_owned())?;
    parse_projects(&json)
}

pub fn projects_or_fallback(loaded: Result<Vec<Project>, ContentError>) -> Vec<Project> {
    loaded.unwrap_or_else(|e| {
        log::error!("Failed to load projects: {e}");
        fallback_projects()
    })
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// The single record shown when the project data can't be loaded.
pub fn fallback_projects() -> Vec<Project> {
    vec![Project {
        id: "audit-buddy".to_string(),
        title: "Audit Buddy — Pharma Compliance Automation".to_string(),
        summary: "LLM + n8n pipeline that ingests SOPs, performs retrieval-augmented checks, and drafts audit notes.".to_string(),
        impact: strings(&[
            "Cut manual review time 90%",
            "Improved coverage of critical checks",
            "Real-time compliance validation",
        ]),
        tech: strings(&["LLM", "RAG", "n8n", "Docker", "Playwright", "Python", "FastAPI"]),
        architecture: strings(&[
            "Document ingestion → OCR preprocessing → chunking → vector store",
            "Query planner → tool router → policy checks → compliance validation",
            "Report composer → audit notes → export → dashboard tracking",
        ]),
        image_layers: strings(&[
            "ab-base.png",
            "ab-nodes.png",
            "ab-lines.png",
            "ab-dashboard.png",
        ]),
        problem: None,
        approach: None,
        outcome: None,
        demo_url: Some("https://demo.auditbuddy.com".to_string()),
        repo_url: Some("https://github.com/aravindmanoj/audit-buddy".to_string()),
        case_study_url: Some("/case-studies/audit-buddy.pdf".to_string()),
    }]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub struct SiteProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub location: &'static str,
    pub degree: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume_url: &'static str,
}

pub const PROFILE: SiteProfile = SiteProfile {
    name: "Aravind Manoj",
    title: "Data & AI Engineer",
    tagline: "Building enterprise intelligent systems and AI assistants for compliance, automation, and insight.",
    about: "Passionate M.Sc. Data Science student with hands-on experience developing enterprise intelligent systems and AI-powered solutions. Proven ability to build end-to-end data pipelines, chatbots, and context-aware agents to streamline pharmaceutical compliance and digital workflows.",
    location: "Bangalore, India",
    degree: "M.Sc. Data Science",
    email: "aravind.manoj@email.com",
    phone: "+91 98765 43210",
    github: "https://github.com/aravindmanoj",
    linkedin: "https://linkedin.com/in/aravindmanoj",
    resume_url: "/resume.pdf",
};

pub const FOCUS_AREAS: [&str; 6] = [
    "End-to-end data pipeline development",
    "AI-powered automation solutions",
    "Machine learning model deployment",
    "Intelligent document processing",
    "Real-time analytics systems",
    "Research & development in NLP",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Learning,
    Familiar,
    Proficient,
    Expert,
}

impl SkillLevel {
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            3.. => Self::Expert,
            2 => Self::Proficient,
            1 => Self::Familiar,
            0 => Self::Learning,
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Width of the level bar, in percent.
    pub fn percent(self) -> u8 {
        (self.rank() + 1) * 25
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Proficient => "Proficient",
            Self::Familiar => "Familiar",
            Self::Learning => "Learning",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            Self::Expert => "bg-cyan-500",
            Self::Proficient => "bg-cyan-400",
            Self::Familiar => "bg-cyan-300",
            Self::Learning => "bg-gray-300",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub level: SkillLevel,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, rank: u8) -> Skill {
    Skill {
        name,
        level: SkillLevel::from_rank(rank),
    }
}

pub const SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        title: "AI/ML",
        skills: &[
            skill("Machine Learning", 3),
            skill("Deep Learning", 3),
            skill("NLP", 3),
            skill("Computer Vision", 2),
            skill("LLMs", 3),
            skill("Vector Databases", 2),
        ],
    },
    SkillCategory {
        title: "Data Engineering",
        skills: &[
            skill("Python", 3),
            skill("SQL", 3),
            skill("Pandas", 3),
            skill("Apache Spark", 2),
            skill("ETL Pipelines", 3),
            skill("Data Warehousing", 2),
        ],
    },
    SkillCategory {
        title: "Automation",
        skills: &[
            skill("n8n", 3),
            skill("Docker", 3),
            skill("Kubernetes", 2),
            skill("CI/CD", 2),
            skill("API Development", 3),
            skill("Workflow Orchestration", 3),
        ],
    },
    SkillCategory {
        title: "Tools",
        skills: &[
            skill("Git", 3),
            skill("AWS", 2),
            skill("Obsidian", 3),
            skill("Jupyter", 3),
            skill("VS Code", 3),
            skill("Linux", 2),
        ],
    },
];

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub tech: &'static [&'static str],
}

pub const EXPERIENCE: [Experience; 2] = [
    Experience {
        company: "Winkl",
        role: "Data Science Intern",
        period: "2024 - Present",
        location: "Remote",
        description: "Contributing to campaign automation and data-driven marketing solutions",
        achievements: &[
            "Contributed to ₹30–50L monthly sales through automated campaign optimization",
            "Scaled revenue generation to ₹50L–1Cr/month through improved targeting algorithms",
            "Implemented influencer workflow automation reducing manual processing time by 70%",
            "Enhanced pitch throughput by 3x through automated content generation and matching",
        ],
        tech: &["Python", "Machine Learning", "Campaign Automation", "Data Analytics"],
    },
    Experience {
        company: "SEEM Research Lab",
        role: "Research Intern",
        period: "2023 - 2024",
        location: "Bangalore, India",
        description: "Conducted research in media bias analysis and NLP applications",
        achievements: &[
            "Developed media bias analysis pipeline processing 50,000+ articles",
            "Achieved 45% improvement in macro-F1 score for bias detection",
            "Implemented minority class optimization boosting recall by 10x",
            "Published research findings on NLP-based bias detection methodologies",
        ],
        tech: &["BERTopic", "DistilBERT", "RoBERTa", "NLP", "Research"],
    },
];

pub struct Education {
    pub degree: &'static str,
    pub focus: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "M.Sc. Data Science",
    focus: "Specializing in Machine Learning, NLP, and AI Systems",
};

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: "Title".to_string(),
            summary: "Summary".to_string(),
            impact: Vec::new(),
            tech: Vec::new(),
            architecture: Vec::new(),
            image_layers: Vec::new(),
            problem: None,
            approach: None,
            outcome: None,
            demo_url: None,
            repo_url: None,
            case_study_url: None,
        }
    }

    #[test]
    fn test_embedded_projects_load() {
        let projects = load_projects().expect("embedded projects should parse");
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| !p.title.is_empty() && !p.summary.is_empty()));
        assert_eq!(projects[0].id, "audit-buddy");
    }

    #[test]
    fn test_find_project() {
        assert!(find_project("media-bias-analysis").is_some());
        assert!(find_project("nope").is_none());
    }

    #[test]
    fn test_links_only_for_present_fields() {
        let project = bare("p");
        assert!(project.links().is_empty());

        let project = Project {
            demo_url: Some("https://demo.example".to_string()),
            case_study_url: Some("/case.pdf".to_string()),
            ..bare("p")
        };
        let links = project.links();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].kind, LinkKind::Demo);
        assert_eq!(links[0].href, "https://demo.example");
        assert_eq!(links[1].kind, LinkKind::CaseStudy);
        assert!(links.iter().all(|l| l.kind != LinkKind::Repository));
    }

    #[test]
    fn test_empty_url_counts_as_absent() {
        let project = Project {
            repo_url: Some(String::new()),
            ..bare("p")
        };
        assert!(project.links().is_empty());
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let json = r#"[{"id": "x", "title": "X", "summary": "S"}]"#;
        let projects = parse_projects(json).unwrap();
        assert_eq!(projects[0], bare_with("x", "X", "S"));
    }

    fn bare_with(id: &str, title: &str, summary: &str) -> Project {
        Project {
            title: title.to_string(),
            summary: summary.to_string(),
            ..bare(id)
        }
    }

    #[test]
    fn test_bad_content_is_an_error() {
        assert!(matches!(parse_projects("[]"), Err(ContentError::Empty)));
        assert!(matches!(parse_projects("{"), Err(ContentError::Parse(_))));
        // title and summary are required
        assert!(matches!(
            parse_projects(r#"[{"id": "x"}]"#),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_fallback_is_single_complete_record() {
        let fallback = fallback_projects();
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].links().len(), 3);
    }

    #[test]
    fn test_load_failure_uses_fallback() {
        let projects = projects_or_fallback(Err(ContentError::Empty));
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "audit-buddy");

        let loaded = vec![bare("only")];
        assert_eq!(projects_or_fallback(Ok(loaded.clone())), loaded);
    }

    #[test]
    fn test_layer_src_is_under_images() {
        let project = Project {
            image_layers: vec!["one.png".to_string(), "two.png".to_string()],
            ..bare("p")
        };
        assert_eq!(project.layer_src(1).as_deref(), Some("/images/two.png"));
        assert_eq!(project.layer_src(2), None);
        assert_eq!(bare("p").workflow_label(), "Title Workflow");
    }

    #[test]
    fn test_skill_levels() {
        assert_eq!(SkillLevel::from_rank(3).label(), "Expert");
        assert_eq!(SkillLevel::from_rank(9), SkillLevel::Expert);
        assert_eq!(SkillLevel::from_rank(0).label(), "Learning");
        assert_eq!(SkillLevel::Proficient.rank(), 2);
        assert_eq!(SkillLevel::Expert.percent(), 100);
        assert_eq!(SkillLevel::Learning.percent(), 25);
        assert!(SKILLS.iter().all(|c| c.skills.len() == 6));
    }
}
