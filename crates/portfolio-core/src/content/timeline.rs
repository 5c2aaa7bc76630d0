//! Experience and education flattened into timeline rows.

use super::types::{Education, EndDate, Experience};

/// One node on a vertical timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub period: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

/// `"2024 — Present"`
pub fn period(start: &str, end: &EndDate) -> String {
    format!("{} \u{2014} {}", start, end)
}

impl From<&Experience> for TimelineEntry {
    fn from(exp: &Experience) -> Self {
        Self {
            id: exp.id.clone(),
            title: exp.position.clone(),
            subtitle: format!("{} \u{2022} {}", exp.company, exp.location),
            period: period(&exp.start_date, &exp.end_date),
            description: exp.description.clone(),
            technologies: exp.technologies.clone(),
        }
    }
}

impl From<&Education> for TimelineEntry {
    fn from(edu: &Education) -> Self {
        Self {
            id: edu.id.clone(),
            title: format!("{} in {}", edu.degree, edu.field),
            subtitle: format!("{} \u{2022} {}", edu.institution, edu.location),
            period: period(&edu.start_date, &edu.end_date),
            description: edu.description.clone(),
            technologies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_period_keeps_present() {
        let exp = Experience {
            id: "current".to_string(),
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            location: "Mumbai".to_string(),
            start_date: "2024".to_string(),
            end_date: EndDate::Present,
            description: vec!["Built APIs".to_string()],
            technologies: vec!["Rust".to_string()],
        };
        let entry = TimelineEntry::from(&exp);
        assert_eq!(entry.period, "2024 \u{2014} Present");
        assert_eq!(entry.title, "Engineer");
        assert_eq!(entry.subtitle, "Acme \u{2022} Mumbai");
        assert_eq!(entry.technologies, vec!["Rust".to_string()]);
    }

    #[test]
    fn education_title_joins_degree_and_field() {
        let edu = Education {
            id: "degree".to_string(),
            institution: "University".to_string(),
            degree: "B.Sc.".to_string(),
            field: "Computing".to_string(),
            location: "Pune".to_string(),
            start_date: "2020".to_string(),
            end_date: EndDate::Date("2024".to_string()),
            description: vec![],
        };
        let entry = TimelineEntry::from(&edu);
        assert_eq!(entry.title, "B.Sc. in Computing");
        assert_eq!(entry.period, "2020 \u{2014} 2024");
        assert!(entry.technologies.is_empty());
    }
}
