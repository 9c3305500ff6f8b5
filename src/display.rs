//! View records derived from the content model.
//!
//! Components render these instead of reaching into the raw entries, so the
//! branching (link present, status tier, name split) lives in plain functions.

use url::Url;

use crate::content::{ExperienceEntry, ProjectEntry, ProjectStatus, SkillEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    Active,
    Pending,
}

impl StatusTier {
    pub fn badge_class(&self) -> &'static str {
        match self {
            StatusTier::Active => "bg-cyan text-black",
            StatusTier::Pending => "bg-foreground/10 text-foreground",
        }
    }
}

impl ProjectStatus {
    pub fn tier(&self) -> StatusTier {
        if matches!(self, ProjectStatus::Completed | ProjectStatus::Live) {
            StatusTier::Active
        } else {
            StatusTier::Pending
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAffordance {
    External(String),
    Unavailable,
}

impl LinkAffordance {
    /// Blank links count as missing.
    pub fn from_link(link: Option<&str>) -> Self {
        match link.map(str::trim) {
            Some(l) if !l.is_empty() => Self::External(l.to_string()),
            _ => Self::Unavailable,
        }
    }

    /// Only absolute web URLs leave the page. In-page anchors such as
    /// `#hero` navigate in place.
    pub fn opens_new_context(&self) -> bool {
        match self {
            Self::External(href) => {
                Url::parse(href).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
            }
            Self::Unavailable => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id_label: String,
    pub title: String,
    pub role: String,
    pub year: String,
    pub stack: Vec<String>,
    pub desc: String,
    pub status_label: String,
    pub tier: StatusTier,
    pub link: LinkAffordance,
}

impl From<&ProjectEntry> for ProjectCard {
    fn from(p: &ProjectEntry) -> Self {
        Self {
            id_label: format_project_id(p.id),
            title: p.title.clone(),
            role: p.role.clone(),
            year: p.year.clone(),
            stack: p.stack.clone(),
            desc: p.desc.clone(),
            status_label: p.status.label().to_string(),
            tier: p.status.tier(),
            link: LinkAffordance::from_link(p.link.as_deref()),
        }
    }
}

pub fn format_project_id(id: u32) -> String {
    format!("ID: {id:03}")
}

pub fn project_cards(projects: &[ProjectEntry]) -> impl Iterator<Item = ProjectCard> + Clone + '_ {
    projects.iter().map(ProjectCard::from)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineBlock {
    pub position: usize,
    pub role: String,
    pub org: String,
    pub date: String,
    pub desc: String,
    pub tags: Vec<String>,
}

/// One block per entry, in authored order.
pub fn timeline(entries: &[ExperienceEntry]) -> impl Iterator<Item = TimelineBlock> + Clone + '_ {
    entries.iter().enumerate().map(|(position, e)| TimelineBlock {
        position,
        role: e.role.clone(),
        org: e.org.clone(),
        date: e.date.clone(),
        desc: e.desc.clone(),
        tags: e.skills.clone(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    pub name: String,
    pub category: String,
    pub icon_class: &'static str,
}

pub fn skill_rows(skills: &[SkillEntry]) -> impl Iterator<Item = SkillRow> + Clone + '_ {
    skills.iter().map(|s| SkillRow {
        name: s.name.clone(),
        category: s.category.clone(),
        icon_class: s.icon.class(),
    })
}

/// Splits a display name into a leading line and the accented surname line,
/// both upper-cased.
pub fn split_name(name: &str) -> (Option<String>, String) {
    let name = name.trim();
    match name.rsplit_once(char::is_whitespace) {
        Some((first, last)) => (Some(first.trim_end().to_uppercase()), last.to_uppercase()),
        None => (None, name.to_uppercase()),
    }
}

/// `https://www.linkedin.com/in/jane/` becomes `/in/jane`. Anything that
/// doesn't parse as a URL with a path is shown as authored.
pub fn display_handle(link: &str) -> String {
    match Url::parse(link) {
        Ok(url) => {
            let path = url.path().trim_end_matches('/');
            if path.is_empty() {
                link.to_string()
            } else {
                path.to_string()
            }
        }
        Err(_) => link.to_string(),
    }
}
