//! Site content: loading, validation and the views sections render from.
//!
//! Content is a single JSON document. The default document is compiled into
//! the binary; an override file with the same shape can be supplied at
//! startup. Either way it is validated once and never mutated afterwards.

mod tech;
mod timeline;
mod types;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::typing;

pub use tech::TechKind;
pub use timeline::{period, TimelineEntry};
pub use types::{
    Education, EndDate, Experience, Hero, PersonalInfo, Proficiency, Project, ProjectCategory,
    ProjectVariant, Skill, SkillCategory,
};

/// Content compiled into the binary
const BUILTIN_CONTENT: &str = include_str!("../../content/portfolio.json");

/// A navigation bar entry pointing at a section anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "about", label: "About" },
    NavLink { id: "projects", label: "Projects" },
    NavLink { id: "experience", label: "Experience" },
    NavLink { id: "contact", label: "Contact" },
];

/// Skills sharing a category, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup<'a> {
    pub category: SkillCategory,
    pub skills: Vec<&'a Skill>,
}

/// Everything the site displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub hero: Hero,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
}

impl Portfolio {
    /// Load the content compiled into the binary
    pub fn builtin() -> PortfolioResult<Self> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Parse and validate a JSON content document
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        portfolio.validate()?;
        tracing::debug!(
            projects = portfolio.projects.len(),
            experience = portfolio.experience.len(),
            education = portfolio.education.len(),
            skills = portfolio.skills.len(),
            "Content loaded"
        );
        Ok(portfolio)
    }

    /// Load an override content file
    pub fn from_path(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        tracing::info!("Loading content from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check collection invariants
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.projects.is_empty() {
            return Err(PortfolioError::EmptyCollection("projects"));
        }
        typing::check_phrases(&self.hero.phrases)?;
        unique_ids("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique_ids("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        unique_ids("education", self.education.iter().map(|e| e.id.as_str()))?;

        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !seen.insert(skill.name.as_str()) {
                return Err(PortfolioError::DuplicateSkill(skill.name.clone()));
            }
        }
        Ok(())
    }

    /// Replace the resume location, e.g. from the command line
    pub fn with_resume_url(mut self, url: impl Into<String>) -> Self {
        self.personal.resume_url = Some(url.into());
        self
    }

    /// First project is featured; the rest render compact, in order
    pub fn featured_split(&self) -> (Option<&Project>, &[Project]) {
        match self.projects.split_first() {
            Some((first, rest)) => (Some(first), rest),
            None => (None, &[]),
        }
    }

    /// Skills grouped by category, categories in first-seen order
    pub fn skills_by_category(&self) -> Vec<SkillGroup<'_>> {
        let mut groups: Vec<SkillGroup<'_>> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill),
                None => groups.push(SkillGroup {
                    category: skill.category,
                    skills: vec![skill],
                }),
            }
        }
        groups
    }

    pub fn experience_timeline(&self) -> Vec<TimelineEntry> {
        self.experience.iter().map(TimelineEntry::from).collect()
    }

    pub fn education_timeline(&self) -> Vec<TimelineEntry> {
        self.education.iter().map(TimelineEntry::from).collect()
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> PortfolioResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(PortfolioError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_valid() {
        let portfolio = Portfolio::builtin().unwrap();
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.hero.phrases.is_empty());
        // The bundled document is used unless content or CLI names another
        assert!(portfolio.personal.resume_url.is_none());
    }

    #[test]
    fn featured_split_preserves_order() {
        let portfolio = Portfolio::builtin().unwrap();
        let (featured, rest) = portfolio.featured_split();
        assert_eq!(featured.unwrap().id, portfolio.projects[0].id);
        let rest_ids: Vec<_> = rest.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<_> = portfolio.projects[1..].iter().map(|p| p.id.as_str()).collect();
        assert_eq!(rest_ids, expected);
    }

    #[test]
    fn duplicate_project_id_rejected() {
        let mut portfolio = Portfolio::builtin().unwrap();
        let dup = portfolio.projects[0].clone();
        portfolio.projects.push(dup);
        let err = portfolio.validate().unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateId { collection: "project", .. }));
    }

    #[test]
    fn duplicate_skill_rejected() {
        let mut portfolio = Portfolio::builtin().unwrap();
        let dup = portfolio.skills[0].clone();
        portfolio.skills.push(dup);
        assert!(matches!(
            portfolio.validate(),
            Err(PortfolioError::DuplicateSkill(_))
        ));
    }

    #[test]
    fn empty_phrases_rejected() {
        let mut portfolio = Portfolio::builtin().unwrap();
        portfolio.hero.phrases.clear();
        assert!(matches!(
            portfolio.validate(),
            Err(PortfolioError::Typing(crate::TypingError::NoPhrases))
        ));
    }

    #[test]
    fn skills_grouped_in_first_seen_order() {
        let portfolio = Portfolio::builtin().unwrap();
        let groups = portfolio.skills_by_category();
        let cats: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            cats,
            vec![
                SkillCategory::Backend,
                SkillCategory::Frontend,
                SkillCategory::Database,
                SkillCategory::Tools
            ]
        );
        let total: usize = groups.iter().map(|g| g.skills.len()).sum();
        assert_eq!(total, portfolio.skills.len());
    }

    #[test]
    fn resume_url_override() {
        let portfolio = Portfolio::builtin().unwrap().with_resume_url("/cv.pdf");
        assert_eq!(portfolio.personal.resume_url.as_deref(), Some("/cv.pdf"));
    }

    #[test]
    fn malformed_json_is_a_format_error() {
        assert!(matches!(
            Portfolio::from_json("{ \"personal\": 1 }"),
            Err(PortfolioError::Json(_))
        ));
    }
}
