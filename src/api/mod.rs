//! Record API access.
//!
//! The shell is a read-only consumer of two endpoints:
//!
//! - `GET /projects` - every project, in display order
//! - `GET /experiences[?category=<key>]` - experience entries, optionally filtered
//!
//! [`RecordSource`] is the seam between the shell and the network. [`HttpRecordSource`] is
//! the production implementation; tests substitute in-memory sources.

mod client;
mod error;

use async_trait::async_trait;
pub use client::HttpRecordSource;
pub use error::FetchError;

use crate::models::{Experience, ExperienceCategory, Project};

/// Something that can produce the two record collections
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError>;

    async fn fetch_experiences(
        &self,
        category: Option<ExperienceCategory>,
    ) -> Result<Vec<Experience>, FetchError>;
}

/// Both collections from one successful refresh
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedRecords {
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
}

/// Fetch projects and the unfiltered experience set concurrently.
///
/// Fails if either request fails; callers keep their previous data in that case.
pub async fn fetch_all(source: &dyn RecordSource) -> Result<FetchedRecords, FetchError> {
    let (projects, experiences) =
        tokio::try_join!(source.fetch_projects(), source.fetch_experiences(None))?;

    Ok(FetchedRecords {
        projects: projects.into_iter().map(Project::sanitized).collect(),
        experiences: experiences.into_iter().map(Experience::sanitized).collect(),
    })
}
