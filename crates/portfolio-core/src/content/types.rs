//! Content records shown on the site.
//!
//! All records are plain immutable data deserialized once at startup.

use serde::{Deserialize, Serialize};

/// Owner of the site. Singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

impl PersonalInfo {
    /// `mailto:` link for the contact card
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Social links that are present, as `(label, url)` pairs
    pub fn social_links(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(ref github) = self.github {
            links.push(("GitHub", github.as_str()));
        }
        if let Some(ref linkedin) = self.linkedin {
            links.push(("LinkedIn", linkedin.as_str()));
        }
        links
    }
}

/// Project category shown as a badge on each project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Backend,
    Fullstack,
    Frontend,
    Other,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::Backend => "backend",
            ProjectCategory::Fullstack => "fullstack",
            ProjectCategory::Frontend => "frontend",
            ProjectCategory::Other => "other",
        }
    }
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub technologies: Vec<String>,
    pub category: ProjectCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// How a project card is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectVariant {
    /// Expanded case-study layout for the first project
    Featured,
    #[default]
    Compact,
}

impl ProjectVariant {
    /// Technology chips shown before collapsing the rest into `+N`
    pub fn max_technologies(&self) -> usize {
        match self {
            ProjectVariant::Featured => 8,
            ProjectVariant::Compact => 6,
        }
    }

    pub fn max_highlights(&self) -> usize {
        match self {
            ProjectVariant::Featured => 4,
            ProjectVariant::Compact => 2,
        }
    }

    pub fn shows_long_description(&self) -> bool {
        matches!(self, ProjectVariant::Featured)
    }

    pub fn class(&self) -> &'static str {
        match self {
            ProjectVariant::Featured => "project-card featured",
            ProjectVariant::Compact => "project-card compact",
        }
    }
}

impl Project {
    /// Technologies visible in the given layout
    pub fn visible_technologies(&self, variant: ProjectVariant) -> &[String] {
        let n = self.technologies.len().min(variant.max_technologies());
        &self.technologies[..n]
    }

    /// Count of technologies hidden behind the `+N` badge
    pub fn hidden_technologies(&self, variant: ProjectVariant) -> usize {
        self.technologies
            .len()
            .saturating_sub(variant.max_technologies())
    }

    pub fn visible_highlights(&self, variant: ProjectVariant) -> &[String] {
        let n = self.highlights.len().min(variant.max_highlights());
        &self.highlights[..n]
    }
}

/// End of a date range. `Present` marks an ongoing role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EndDate {
    Present,
    Date(String),
}

impl EndDate {
    pub fn is_present(&self) -> bool {
        matches!(self, EndDate::Present)
    }

    pub fn as_str(&self) -> &str {
        match self {
            EndDate::Present => "Present",
            EndDate::Date(d) => d,
        }
    }
}

impl From<String> for EndDate {
    fn from(value: String) -> Self {
        if value == "Present" {
            EndDate::Present
        } else {
            EndDate::Date(value)
        }
    }
}

impl From<EndDate> for String {
    fn from(value: EndDate) -> Self {
        match value {
            EndDate::Present => "Present".to_string(),
            EndDate::Date(d) => d,
        }
    }
}

impl std::fmt::Display for EndDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position held
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: String,
    pub start_date: String,
    pub end_date: EndDate,
    pub description: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// A degree or course of study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub location: String,
    pub start_date: String,
    pub end_date: EndDate,
    #[serde(default)]
    pub description: Vec<String>,
}

/// Skill grouping on the skills section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Backend,
    Frontend,
    Database,
    Tools,
    Other,
}

impl SkillCategory {
    /// Heading shown above the group
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Backend => "Backend",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools & DevOps",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Expert,
    Advanced,
    Intermediate,
}

impl Proficiency {
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Expert => "expert",
            Proficiency::Advanced => "advanced",
            Proficiency::Intermediate => "intermediate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
}

/// Landing view copy: rotating job titles and the headline tech tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub phrases: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(techs: usize, highlights: usize) -> Project {
        Project {
            id: "p".to_string(),
            title: "P".to_string(),
            description: String::new(),
            long_description: String::new(),
            technologies: (0..techs).map(|i| format!("t{}", i)).collect(),
            category: ProjectCategory::Backend,
            github_url: None,
            live_url: None,
            highlights: (0..highlights).map(|i| format!("h{}", i)).collect(),
        }
    }

    #[test]
    fn end_date_present_sentinel() {
        let end: EndDate = serde_json::from_str("\"Present\"").unwrap();
        assert!(end.is_present());
        let end: EndDate = serde_json::from_str("\"2024\"").unwrap();
        assert_eq!(end, EndDate::Date("2024".to_string()));
        assert_eq!(serde_json::to_string(&EndDate::Present).unwrap(), "\"Present\"");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result: Result<ProjectCategory, _> = serde_json::from_str("\"mobile\"");
        assert!(result.is_err());
        let result: Result<Proficiency, _> = serde_json::from_str("\"novice\"");
        assert!(result.is_err());
    }

    #[test]
    fn variant_limits_technologies() {
        let p = project(10, 0);
        assert_eq!(p.visible_technologies(ProjectVariant::Featured).len(), 8);
        assert_eq!(p.hidden_technologies(ProjectVariant::Featured), 2);
        assert_eq!(p.visible_technologies(ProjectVariant::Compact).len(), 6);
        assert_eq!(p.hidden_technologies(ProjectVariant::Compact), 4);

        let small = project(3, 0);
        assert_eq!(small.hidden_technologies(ProjectVariant::Compact), 0);
    }

    #[test]
    fn variant_limits_highlights() {
        let p = project(0, 5);
        assert_eq!(p.visible_highlights(ProjectVariant::Featured).len(), 4);
        assert_eq!(p.visible_highlights(ProjectVariant::Compact).len(), 2);
        assert!(ProjectVariant::Featured.shows_long_description());
        assert!(!ProjectVariant::Compact.shows_long_description());
    }

    #[test]
    fn social_links_skip_missing() {
        let info = PersonalInfo {
            name: "A".to_string(),
            title: "T".to_string(),
            location: "L".to_string(),
            email: "a@example.com".to_string(),
            github: Some("https://github.com/a".to_string()),
            linkedin: None,
            bio: String::new(),
            resume_url: None,
        };
        assert_eq!(info.social_links(), vec![("GitHub", "https://github.com/a")]);
        assert_eq!(info.mailto(), "mailto:a@example.com");
    }

    #[test]
    fn skill_category_labels() {
        assert_eq!(SkillCategory::Tools.label(), "Tools & DevOps");
        assert_eq!(SkillCategory::Backend.label(), "Backend");
    }
}
