use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserializers::{deserialize_date, deserialize_optional_date};
use crate::utils::terminal::strip_ansi_codes;

/// Focus area an experience entry is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceCategory {
    DataScience,
    AiMl,
    SoftwareEngineer,
}

impl ExperienceCategory {
    pub const ALL: [ExperienceCategory; 3] =
        [Self::DataScience, Self::AiMl, Self::SoftwareEngineer];

    /// Wire key, also used for `?category=` filtering and keyword matching
    pub fn key(self) -> &'static str {
        match self {
            Self::DataScience => "data-science",
            Self::AiMl => "ai-ml",
            Self::SoftwareEngineer => "software-engineer",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::DataScience => "Data Science / Analyst",
            Self::AiMl => "AI / ML",
            Self::SoftwareEngineer => "Software Engineer / Web Development",
        }
    }
}

impl fmt::Display for ExperienceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub start_date: DateTime<Utc>,
    /// `None` while the position is ongoing
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<DateTime<Utc>>,
    pub category: ExperienceCategory,
    pub summary: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Experience {
    pub fn is_ongoing(&self) -> bool {
        self.end_date.is_none()
    }

    /// `M/D/YYYY - M/D/YYYY`, or `M/D/YYYY - Present` for an ongoing position
    pub fn duration(&self) -> String {
        let end = match &self.end_date {
            Some(end) => format_date(end),
            None => "Present".to_string(),
        };
        format!("{} - {}", format_date(&self.start_date), end)
    }

    /// Strip terminal control sequences from every displayed field
    pub fn sanitized(self) -> Self {
        Self {
            id: self.id,
            title: strip_ansi_codes(&self.title),
            company: strip_ansi_codes(&self.company),
            location: self.location.as_deref().map(strip_ansi_codes),
            start_date: self.start_date,
            end_date: self.end_date,
            category: self.category,
            summary: strip_ansi_codes(&self.summary),
            details: self.details.iter().map(|d| strip_ansi_codes(d)).collect(),
            logo_url: self.logo_url,
        }
    }
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
