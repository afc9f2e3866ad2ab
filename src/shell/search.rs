//! Keyword search across projects and experience.
//!
//! Matching is plain case-insensitive substring containment over a fixed set of fields per
//! record shape (see [`Searchable`]). There is no ranking: matches keep the order of their
//! collection, and projects always come before experience in the report.

use super::cache::RecordCache;
use crate::models::{Experience, Project};

/// Record shapes that take part in keyword search
pub trait Searchable {
    /// Fields the keyword is matched against, unfolded
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.technologies.len());
        fields.push(self.title.as_str());
        fields.push(self.description.as_str());
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Experience {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.company.as_str(), self.summary.as_str(), self.category.key()]
    }
}

/// Matches for one keyword, grouped by record shape
#[derive(Debug, Clone)]
pub struct SearchReport<'a> {
    pub keyword: String,
    pub projects: Vec<&'a Project>,
    pub experiences: Vec<&'a Experience>,
}

impl SearchReport<'_> {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.experiences.is_empty()
    }

    pub fn total(&self) -> usize {
        self.projects.len() + self.experiences.len()
    }

    /// Format the report as one transcript block
    pub fn render(&self) -> String {
        if self.is_empty() {
            return format!("No results found for \"{}\"", self.keyword);
        }

        let mut lines: Vec<String> = Vec::new();

        if !self.projects.is_empty() {
            lines.push(format!("📁 Projects ({}):", self.projects.len()));
            for project in &self.projects {
                lines.push(format!("  • {}", project.title));
                lines.push(format!("    Description: {}", project.description));
                lines.push(format!("    Technologies: {}", project.technology_list()));
                if let Some(url) = &project.github_url {
                    lines.push(format!("    GitHub: {}", url));
                }
                if let Some(url) = &project.live_url {
                    lines.push(format!("    Live: {}", url));
                }
                lines.push(String::new());
            }
        }

        if !self.experiences.is_empty() {
            lines.push(format!("💼 Experience ({}):", self.experiences.len()));
            for exp in &self.experiences {
                lines.push(format!("  • {} at {}", exp.title, exp.company));
                lines.push(format!("    Category: {}", exp.category));
                lines.push(format!("    Summary: {}", exp.summary));
                lines.push(format!("    Duration: {}", exp.duration()));
                lines.push(String::new());
            }
        }

        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}

/// Find every project and experience containing `keyword`, ignoring case
pub fn search<'a>(cache: &'a RecordCache, keyword: &str) -> SearchReport<'a> {
    let needle = keyword.to_lowercase();

    SearchReport {
        keyword: keyword.to_string(),
        projects: cache
            .indexed_projects()
            .iter()
            .filter(|p| p.matches(&needle))
            .map(|p| &p.record)
            .collect(),
        experiences: cache
            .indexed_experiences()
            .iter()
            .filter(|e| e.matches(&needle))
            .map(|e| &e.record)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::api::FetchedRecords;
    use crate::models::ExperienceCategory;

    fn project(title: &str, description: &str, technologies: &[&str]) -> Project {
        Project {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            image_url: None,
            github_url: None,
            live_url: None,
            featured: false,
        }
    }

    fn experience(title: &str, company: &str, category: ExperienceCategory) -> Experience {
        Experience {
            id: title.to_lowercase(),
            title: title.to_string(),
            company: company.to_string(),
            location: None,
            start_date: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            end_date: None,
            category,
            summary: "Shipped things".to_string(),
            details: vec![],
            logo_url: None,
        }
    }

    fn sample_cache() -> RecordCache {
        let mut dashboard = project("Sales Dashboard", "Charts for sales", &["Python", "Pandas"]);
        dashboard.github_url = Some("https://github.com/example/dash".to_string());
        dashboard.live_url = Some("https://dash.example.com".to_string());

        RecordCache::with_records(FetchedRecords {
            projects: vec![
                project("Portfolio", "Personal site", &["React", "Next.js"]),
                dashboard,
                project("Chat Bot", "LLM assistant", &["Python", "PyTorch"]),
            ],
            experiences: vec![
                experience("Data Analyst", "Initech", ExperienceCategory::DataScience),
                experience("ML Intern", "Hooli", ExperienceCategory::AiMl),
            ],
        })
    }

    #[test]
    fn test_matches_technology_tag_case_insensitively() {
        let cache = sample_cache();
        let report = search(&cache, "react");

        assert_eq!(report.projects.len(), 1);
        assert_eq!(report.projects[0].title, "Portfolio");
        assert!(report.experiences.is_empty());
    }

    #[test]
    fn test_preserves_collection_order() {
        let cache = sample_cache();
        let report = search(&cache, "PYTHON");

        let titles: Vec<_> = report.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Sales Dashboard", "Chat Bot"]);
    }

    #[test]
    fn test_matches_experience_company_and_category_key() {
        let cache = sample_cache();

        let by_company = search(&cache, "hooli");
        assert_eq!(by_company.experiences.len(), 1);
        assert_eq!(by_company.experiences[0].title, "ML Intern");

        let by_category = search(&cache, "data-science");
        assert_eq!(by_category.experiences.len(), 1);
        assert_eq!(by_category.experiences[0].company, "Initech");
    }

    #[test]
    fn test_category_label_is_not_matched() {
        let cache = sample_cache();
        assert!(search(&cache, "Data Science / Analyst").is_empty());
    }

    #[test]
    fn test_experience_location_is_not_searched() {
        let mut exp = experience("Engineer", "Globex", ExperienceCategory::SoftwareEngineer);
        exp.location = Some("Springfield".to_string());
        let cache = RecordCache::with_records(FetchedRecords { projects: vec![], experiences: vec![exp] });

        assert!(search(&cache, "springfield").is_empty());
    }

    #[test]
    fn test_render_no_results() {
        let cache = sample_cache();
        assert_eq!(search(&cache, "Haskell").render(), "No results found for \"Haskell\"");
    }

    #[test]
    fn test_render_projects_only_omits_experience_group() {
        let cache = sample_cache();
        let rendered = search(&cache, "dashboard").render();

        assert!(rendered.starts_with("📁 Projects (1):"));
        assert!(rendered.contains("  • Sales Dashboard"));
        assert!(rendered.contains("    Technologies: Python, Pandas"));
        assert!(rendered.contains("    GitHub: https://github.com/example/dash"));
        assert!(rendered.contains("    Live: https://dash.example.com"));
        assert!(!rendered.contains("Experience ("));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_projects_before_experience() {
        let cache = RecordCache::with_records(FetchedRecords {
            projects: vec![project("Data Pipeline", "ETL", &["Airflow"])],
            experiences: vec![experience("Data Analyst", "Initech", ExperienceCategory::DataScience)],
        });
        let rendered = search(&cache, "data").render();

        let projects_at = rendered.find("Projects (1)").unwrap();
        let experience_at = rendered.find("Experience (1)").unwrap();
        assert!(projects_at < experience_at);
        assert!(rendered.contains("  • Data Analyst at Initech"));
        assert!(rendered.contains("    Category: data-science"));
        assert!(rendered.contains("    Duration: 6/1/2023 - Present"));
    }

    #[test]
    fn test_links_omitted_when_absent() {
        let cache = sample_cache();
        let rendered = search(&cache, "portfolio").render();
        assert!(!rendered.contains("GitHub:"));
        assert!(!rendered.contains("Live:"));
    }
}
