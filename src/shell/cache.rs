//! In-memory mirror of the two record collections.
//!
//! Collections are immutable snapshots: a successful refresh swaps both in at once, a failed
//! one leaves the previous snapshot alone. Every refresh is tagged with a [`RefreshTicket`]
//! carrying a sequence number, and only the result of the most recently issued refresh is
//! ever applied, so a slow response from an earlier open cannot overwrite newer data.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::search::Searchable;
use crate::api::{FetchError, FetchedRecords};
use crate::models::{Experience, Project};

/// Proof that a refresh was issued. Consumed when its result is applied.
#[derive(Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    sequence: u64,
}

impl RefreshTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// Never refreshed
    Idle,
    Loading,
    Ready { at: DateTime<Utc> },
    /// Last refresh failed; data (if any) is from an earlier success
    Failed { at: DateTime<Utc> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    Failed,
    /// A newer refresh was issued after this one; result dropped
    Stale,
}

/// A record paired with its case-folded search fields
#[derive(Debug, Clone)]
pub struct Indexed<T> {
    pub record: T,
    folded: Box<[String]>,
}

impl<T: Searchable> Indexed<T> {
    fn new(record: T) -> Self {
        let folded = record.search_fields().iter().map(|f| f.to_lowercase()).collect();
        Self { record, folded }
    }

    /// `needle` must already be case-folded
    pub fn matches(&self, needle: &str) -> bool {
        self.folded.iter().any(|field| field.contains(needle))
    }
}

#[derive(Debug, Clone)]
pub struct RecordCache {
    projects: Arc<[Indexed<Project>]>,
    experiences: Arc<[Indexed<Experience>]>,
    status: FetchStatus,
    latest_issued: u64,
}

impl RecordCache {
    pub fn new() -> Self {
        Self {
            projects: Arc::from(Vec::new()),
            experiences: Arc::from(Vec::new()),
            status: FetchStatus::Idle,
            latest_issued: 0,
        }
    }

    /// Cache pre-loaded with a snapshot, as if one refresh had succeeded
    pub fn with_records(records: FetchedRecords) -> Self {
        let mut cache = Self::new();
        cache.replace(records);
        cache
    }

    /// Issue a new refresh. Any result from an earlier ticket becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_issued += 1;
        self.status = FetchStatus::Loading;
        debug!(sequence = self.latest_issued, "refresh issued");
        RefreshTicket { sequence: self.latest_issued }
    }

    /// Apply the result of a refresh issued by [`begin_refresh`](Self::begin_refresh)
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<FetchedRecords, FetchError>,
    ) -> RefreshOutcome {
        if ticket.sequence < self.latest_issued {
            debug!(
                sequence = ticket.sequence,
                latest = self.latest_issued,
                "dropping stale refresh result"
            );
            return RefreshOutcome::Stale;
        }

        match result {
            Ok(records) => {
                info!(
                    sequence = ticket.sequence,
                    projects = records.projects.len(),
                    experiences = records.experiences.len(),
                    "record snapshot loaded"
                );
                self.replace(records);
                RefreshOutcome::Applied
            }
            Err(e) => {
                warn!(sequence = ticket.sequence, error = %e, "refresh failed, keeping previous records");
                self.status = FetchStatus::Failed { at: Utc::now() };
                RefreshOutcome::Failed
            }
        }
    }

    fn replace(&mut self, records: FetchedRecords) {
        self.projects = records.projects.into_iter().map(Indexed::new).collect();
        self.experiences = records.experiences.into_iter().map(Indexed::new).collect();
        self.status = FetchStatus::Ready { at: Utc::now() };
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().map(|p| &p.record)
    }

    pub fn experiences(&self) -> impl Iterator<Item = &Experience> {
        self.experiences.iter().map(|e| &e.record)
    }

    pub fn indexed_projects(&self) -> &[Indexed<Project>] {
        &self.projects
    }

    pub fn indexed_experiences(&self) -> &[Indexed<Experience>] {
        &self.experiences
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn experience_count(&self) -> usize {
        self.experiences.len()
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::ExperienceCategory;

    fn project(title: &str) -> Project {
        Project {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: "A project".to_string(),
            technologies: vec!["Rust".to_string()],
            image_url: None,
            github_url: None,
            live_url: None,
            featured: false,
        }
    }

    fn experience(title: &str) -> Experience {
        Experience {
            id: title.to_lowercase(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: None,
            start_date: Utc.with_ymd_and_hms(2022, 3, 1, 0, 0, 0).unwrap(),
            end_date: None,
            category: ExperienceCategory::SoftwareEngineer,
            summary: "Work".to_string(),
            details: vec![],
            logo_url: None,
        }
    }

    fn records(projects: &[&str], experiences: &[&str]) -> FetchedRecords {
        FetchedRecords {
            projects: projects.iter().map(|t| project(t)).collect(),
            experiences: experiences.iter().map(|t| experience(t)).collect(),
        }
    }

    fn offline() -> FetchError {
        FetchError::InvalidBaseUrl("offline".to_string())
    }

    #[test]
    fn test_new_cache_is_empty_and_idle() {
        let cache = RecordCache::new();
        assert_eq!(cache.project_count(), 0);
        assert_eq!(cache.experience_count(), 0);
        assert_eq!(cache.status(), FetchStatus::Idle);
    }

    #[test]
    fn test_successful_refresh_replaces_both_collections() {
        let mut cache = RecordCache::with_records(records(&["Old"], &["Old role"]));

        let ticket = cache.begin_refresh();
        assert!(cache.is_loading());
        let outcome = cache.complete_refresh(ticket, Ok(records(&["New A", "New B"], &[])));

        assert_eq!(outcome, RefreshOutcome::Applied);
        let titles: Vec<_> = cache.projects().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["New A", "New B"]);
        assert_eq!(cache.experience_count(), 0);
        assert!(matches!(cache.status(), FetchStatus::Ready { .. }));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_snapshot() {
        let mut cache = RecordCache::with_records(records(&["Kept"], &["Kept role"]));

        let ticket = cache.begin_refresh();
        let outcome = cache.complete_refresh(ticket, Err(offline()));

        assert_eq!(outcome, RefreshOutcome::Failed);
        assert_eq!(cache.project_count(), 1);
        assert_eq!(cache.experience_count(), 1);
        assert!(matches!(cache.status(), FetchStatus::Failed { .. }));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut cache = RecordCache::new();

        let first = cache.begin_refresh();
        let second = cache.begin_refresh();
        assert!(second.sequence() > first.sequence());

        assert_eq!(cache.complete_refresh(second, Ok(records(&["Fresh"], &[]))), RefreshOutcome::Applied);
        assert_eq!(
            cache.complete_refresh(first, Ok(records(&["Stale"], &["Stale role"]))),
            RefreshOutcome::Stale
        );

        let titles: Vec<_> = cache.projects().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Fresh"]);
        assert_eq!(cache.experience_count(), 0);
    }

    #[test]
    fn test_stale_result_arriving_first_does_not_clear_loading() {
        let mut cache = RecordCache::new();

        let first = cache.begin_refresh();
        let second = cache.begin_refresh();

        assert_eq!(cache.complete_refresh(first, Err(offline())), RefreshOutcome::Stale);
        assert!(cache.is_loading());

        cache.complete_refresh(second, Ok(records(&["Fresh"], &[])));
        assert_eq!(cache.project_count(), 1);
    }

    #[test]
    fn test_indexed_matching_is_case_folded() {
        let cache = RecordCache::with_records(records(&["Terminal UI"], &[]));
        let indexed = &cache.indexed_projects()[0];

        assert!(indexed.matches("terminal"));
        assert!(indexed.matches("rust"));
        assert!(!indexed.matches("python"));
    }
}
