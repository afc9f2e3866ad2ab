use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{FetchError, RecordSource};
use crate::config::ApiConfig;
use crate::models::{Experience, ExperienceCategory, Project};

/// [`RecordSource`] backed by the portfolio's HTTP record API
#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    client: Client,
    base_url: String,
}

impl HttpRecordSource {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!(%url, ?query, "fetching records");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { url: url.clone(), source })?;
        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.get_json(self.endpoint("projects"), &[]).await
    }

    async fn fetch_experiences(
        &self,
        category: Option<ExperienceCategory>,
    ) -> Result<Vec<Experience>, FetchError> {
        let url = self.endpoint("experiences");
        match category {
            Some(category) => self.get_json(url, &[("category", category.key())]).await,
            None => self.get_json(url, &[]).await,
        }
    }
}
