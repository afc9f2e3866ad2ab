use serde::{Deserialize, Serialize};

use crate::utils::terminal::strip_ansi_codes;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Strip terminal control sequences from every displayed field
    pub fn sanitized(self) -> Self {
        Self {
            id: self.id,
            title: strip_ansi_codes(&self.title),
            description: strip_ansi_codes(&self.description),
            technologies: self.technologies.iter().map(|t| strip_ansi_codes(t)).collect(),
            image_url: self.image_url,
            github_url: self.github_url.as_deref().map(strip_ansi_codes),
            live_url: self.live_url.as_deref().map(strip_ansi_codes),
            featured: self.featured,
        }
    }

    /// Comma-separated technology list as shown by `ls` and `find`
    pub fn technology_list(&self) -> String {
        self.technologies.join(", ")
    }
}
