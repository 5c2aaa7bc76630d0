//! Keyword classification of technology tags.
//!
//! Chips pick their icon from the kind. Checks run in a fixed order, so a tag
//! like "Spring Boot REST API" is backend, not api.

/// Icon family for a technology chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechKind {
    Backend,
    Frontend,
    Database,
    Api,
    Microservices,
    Tools,
}

const RULES: &[(TechKind, &[&str])] = &[
    (TechKind::Backend, &["java", "spring", "backend", "server"]),
    (
        TechKind::Frontend,
        &["react", "typescript", "javascript", "frontend", "html", "css"],
    ),
    (
        TechKind::Database,
        &["postgres", "mongo", "database", "sql", "db"],
    ),
    (TechKind::Api, &["api", "rest", "graphql", "endpoint"]),
    (
        TechKind::Microservices,
        &["microservice", "micro-service", "service mesh"],
    ),
    (
        TechKind::Tools,
        &["docker", "git", "linux", "devops", "tool"],
    ),
];

impl TechKind {
    /// Classify a tag by case-insensitive keyword match
    pub fn classify(tech: &str) -> Option<TechKind> {
        let lower = tech.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(kind, _)| *kind)
    }

    /// Glyph rendered before the chip label
    pub fn icon(&self) -> &'static str {
        match self {
            TechKind::Backend => "\u{2630}",       // ☰ server rack
            TechKind::Frontend => "</>",
            TechKind::Database => "\u{26C1}",      // ⛁
            TechKind::Api => "\u{21C4}",           // ⇄
            TechKind::Microservices => "\u{29C9}", // ⧉
            TechKind::Tools => "\u{2692}",         // ⚒
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_tags() {
        assert_eq!(TechKind::classify("Spring Boot"), Some(TechKind::Backend));
        assert_eq!(TechKind::classify("React"), Some(TechKind::Frontend));
        assert_eq!(TechKind::classify("PostgreSQL"), Some(TechKind::Database));
        assert_eq!(TechKind::classify("REST API"), Some(TechKind::Api));
        assert_eq!(TechKind::classify("Docker"), Some(TechKind::Tools));
        assert_eq!(TechKind::classify("FFmpeg"), None);
    }

    #[test]
    fn earlier_rules_win() {
        // "javascript" contains "java"
        assert_eq!(TechKind::classify("JavaScript"), Some(TechKind::Backend));
        // "microservices" contains "service" but no earlier keyword
        assert_eq!(
            TechKind::classify("Microservices"),
            Some(TechKind::Microservices)
        );
        // "mongodb" hits database before tools
        assert_eq!(TechKind::classify("MongoDB"), Some(TechKind::Database));
    }
}
