use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const SYSTEM_DOCUMENT: &str = "system.json";

static SITE_CONTENT: LazyLock<ContentModel> = LazyLock::new(|| match ContentModel::load() {
    Ok(content) => content,
    Err(e) => {
        log::error!("couldn't load site content, rendering empty page: {e}");
        ContentModel::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content document {0} not found")]
    NotFound(&'static str),
    #[error("Couldn't parse content document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the page renders. Authored once in `content/system.json` and
/// never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub id: String,
    #[serde(default)]
    pub status: SystemStatus,
    pub tagline: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub contact: ContactEndpoints,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactEndpoints {
    pub email: String,
    pub linkedin: String,
    #[serde(default)]
    pub github: Option<String>,
}

/// Display-only. Nothing checks liveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SystemStatus {
    Online,
    Offline,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SystemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Online => "ONLINE",
            SystemStatus::Offline => "OFFLINE",
            SystemStatus::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    #[serde(default)]
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code,
    Database,
    Chart,
    Activity,
    Cpu,
    Globe,
    Map,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Icon {
    /// Glyph class from the lucide icon font linked in the page shell.
    pub fn class(&self) -> &'static str {
        match self {
            Icon::Code => "icon-code",
            Icon::Database => "icon-database",
            Icon::Chart => "icon-chart-column",
            Icon::Activity => "icon-activity",
            Icon::Cpu => "icon-cpu",
            Icon::Globe => "icon-globe",
            Icon::Map => "icon-map",
            Icon::Unknown => "icon-circle",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub org: String,
    /// Free text, never parsed.
    pub date: String,
    pub desc: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub minors: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub role: String,
    pub year: String,
    #[serde(default)]
    pub stack: Vec<String>,
    pub desc: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
}

/// Authored as a free-form string. Unrecognised labels are kept verbatim in
/// `Other` so they still render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Completed,
    Live,
    InProgress,
    Offline,
    Other(String),
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Live => "Live",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Offline => "Offline",
            ProjectStatus::Other(s) => s,
        }
    }
}

/// A project authored without a status shows as `Unknown` in the pending tier.
impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Other("Unknown".to_string())
    }
}

impl From<String> for ProjectStatus {
    fn from(value: String) -> Self {
        match value.trim() {
            "Completed" => Self::Completed,
            "Live" => Self::Live,
            "In Progress" => Self::InProgress,
            "Offline" => Self::Offline,
            _ => Self::Other(value),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(value: ProjectStatus) -> Self {
        value.label().to_string()
    }
}

impl ContentModel {
    /// Decodes the bundled content document.
    pub fn load() -> Result<Self, ContentError> {
        let doc =
            ContentAssets::get(SYSTEM_DOCUMENT).ok_or(ContentError::NotFound(SYSTEM_DOCUMENT))?;
        Ok(serde_json::from_slice(&doc.data)?)
    }

    pub fn from_json(s: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(s)?)
    }
}

/// The page-wide content record. Falls back to an empty record if the bundled
/// document can't be decoded.
pub fn site_content() -> &'static ContentModel {
    &SITE_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "profile": {
            "name": "Ada Lovelace",
            "title": "Analyst",
            "id": "ADA-001",
            "status": "ONLINE",
            "tagline": "Engines all the way down.",
            "contact": { "email": "ada@example.com", "linkedin": "https://linkedin.com/in/ada" }
        }
    }"#;

    #[test]
    fn test_bundled_content_loads() {
        let content = ContentModel::load().expect("bundled content should decode");

        assert_eq!(content.profile.name, "Juan S. Gutierrez");
        assert_eq!(content.profile.status, SystemStatus::Online);
        assert_eq!(content.skills.len(), 5);
        assert_eq!(content.experience.len(), 5);
        assert_eq!(content.projects.len(), 6);
        assert!(content.education.is_some());
        assert!(content.profile.contact.github.is_some());
    }

    #[test]
    fn test_site_content_matches_bundle() {
        let loaded = ContentModel::load().unwrap();
        assert_eq!(site_content(), &loaded);
    }

    #[test]
    fn test_optional_sections_default_empty() {
        let content = ContentModel::from_json(MINIMAL).unwrap();

        assert!(content.skills.is_empty());
        assert!(content.experience.is_empty());
        assert!(content.projects.is_empty());
        assert!(content.education.is_none());
        assert!(content.profile.contact.github.is_none());
        assert!(content.profile.avatar.is_none());
    }

    #[test]
    fn test_unknown_literals_fall_back() {
        let json = MINIMAL.replace("\"ONLINE\"", "\"DEGRADED\"");
        let content = ContentModel::from_json(&json).unwrap();
        assert_eq!(content.profile.status, SystemStatus::Unknown);
        assert_eq!(content.profile.status.label(), "UNKNOWN");

        let skill: SkillEntry =
            serde_json::from_str(r#"{ "name": "Rust", "type": "Systems", "icon": "ferris" }"#)
                .unwrap();
        assert_eq!(skill.icon, Icon::Unknown);
        assert_eq!(skill.category, "Systems");
    }

    #[test]
    fn test_project_status_decoding() {
        let decode = |s: &str| ProjectStatus::from(s.to_string());

        assert_eq!(decode("Completed"), ProjectStatus::Completed);
        assert_eq!(decode("Live"), ProjectStatus::Live);
        assert_eq!(decode("In Progress"), ProjectStatus::InProgress);
        assert_eq!(decode("Offline"), ProjectStatus::Offline);
        assert_eq!(decode("Archived"), ProjectStatus::Other("Archived".into()));
        assert_eq!(decode("Archived").label(), "Archived");
    }

    #[test]
    fn test_missing_project_status_keeps_page() {
        let mut doc: serde_json::Value = serde_json::from_str(MINIMAL).unwrap();
        doc["projects"] = serde_json::json!([
            { "id": 1, "title": "Draft", "role": "Lead", "year": "2025", "desc": "d" },
            { "id": 2, "title": "Shipped", "role": "Lead", "year": "2024", "desc": "d", "status": "Live" }
        ]);
        let json = doc.to_string();
        let content = ContentModel::from_json(&json).unwrap();

        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.projects[0].status, ProjectStatus::default());
        assert_eq!(content.projects[0].status.label(), "Unknown");
        assert_eq!(content.projects[1].status, ProjectStatus::Live);
    }

    #[test]
    fn test_project_status_serializes_as_label() {
        let s = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(s, "\"In Progress\"");
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(
            ContentModel::from_json("{ \"profile\": 42 }"),
            Err(ContentError::Parse(_))
        ));
    }
}
