//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use axum::Router;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};
use tokio::sync::oneshot;

/// Builder for project JSON objects as the record API returns them
pub struct ProjectBuilder {
    id: String,
    title: String,
    description: String,
    technologies: Vec<String>,
    github_url: Option<String>,
    live_url: Option<String>,
}

impl ProjectBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            id: format!("p-{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            description: format!("{} description", title),
            technologies: vec![],
            github_url: None,
            live_url: None,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn technologies(mut self, technologies: &[&str]) -> Self {
        self.technologies = technologies.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn github(mut self, url: &str) -> Self {
        self.github_url = Some(url.to_string());
        self
    }

    pub fn live(mut self, url: &str) -> Self {
        self.live_url = Some(url.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "_id": self.id,
            "title": self.title,
            "description": self.description,
            "technologies": self.technologies,
            "featured": false,
            "createdAt": "2024-01-01T00:00:00.000Z",
            "__v": 0
        });
        if let Some(url) = &self.github_url {
            value["githubUrl"] = json!(url);
        }
        if let Some(url) = &self.live_url {
            value["liveUrl"] = json!(url);
        }
        value
    }
}

/// Builder for experience JSON objects as the record API returns them
pub struct ExperienceBuilder {
    id: String,
    title: String,
    company: String,
    category: String,
    summary: String,
    start_date: String,
    end_date: Option<String>,
    details: Vec<String>,
}

impl ExperienceBuilder {
    pub fn new(title: &str, company: &str) -> Self {
        Self {
            id: format!("e-{}", title.to_lowercase().replace(' ', "-")),
            title: title.to_string(),
            company: company.to_string(),
            category: "software-engineer".to_string(),
            summary: format!("{} at {}", title, company),
            start_date: "2023-01-15T00:00:00.000Z".to_string(),
            end_date: None,
            details: vec!["Did the work".to_string()],
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn summary(mut self, summary: &str) -> Self {
        self.summary = summary.to_string();
        self
    }

    pub fn details(mut self, details: &[&str]) -> Self {
        self.details = details.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn dates(mut self, start: &str, end: Option<&str>) -> Self {
        self.start_date = start.to_string();
        self.end_date = end.map(|e| e.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "_id": self.id,
            "title": self.title,
            "company": self.company,
            "location": "Remote",
            "startDate": self.start_date,
            "endDate": self.end_date,
            "category": self.category,
            "summary": self.summary,
            "details": self.details,
        })
    }
}

/// What a stub endpoint answers with
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Malformed,
}

impl Reply {
    pub fn projects(projects: &[ProjectBuilder]) -> Self {
        Reply::Json(Value::Array(projects.iter().map(ProjectBuilder::to_json).collect()))
    }

    pub fn experiences(experiences: &[ExperienceBuilder]) -> Self {
        Reply::Json(Value::Array(experiences.iter().map(ExperienceBuilder::to_json).collect()))
    }
}

struct StubState {
    projects: Reply,
    experiences: Reply,
    experience_queries: Mutex<Vec<Option<String>>>,
}

/// Record API stub: an axum router on an ephemeral port, served from its own thread and
/// runtime so synchronous tests and spawned binaries can both reach it.
pub struct StubApi {
    addr: SocketAddr,
    state: Arc<StubState>,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl StubApi {
    pub fn start(projects: Reply, experiences: Reply) -> Self {
        let state = Arc::new(StubState {
            projects,
            experiences,
            experience_queries: Mutex::new(vec![]),
        });

        let listener =
            std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub listener");
        listener.set_nonblocking(true).expect("Failed to set nonblocking");
        let addr = listener.local_addr().expect("Failed to read stub address");

        let app = Router::new()
            .route("/projects", get(projects_handler))
            .route("/experiences", get(experiences_handler))
            .with_state(Arc::clone(&state));

        let (tx, rx) = oneshot::channel::<()>();
        let thread = thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build stub runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to adopt stub listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = rx.await;
                    })
                    .await
                    .expect("Stub server failed");
            });
        });

        Self { addr, state, shutdown: Some(tx), thread: Some(thread) }
    }

    pub fn with_records(projects: &[ProjectBuilder], experiences: &[ExperienceBuilder]) -> Self {
        Self::start(Reply::projects(projects), Reply::experiences(experiences))
    }

    /// Base URL to hand to the client, without trailing slash
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// `category` query values seen by `/experiences`, in request order
    pub fn experience_queries(&self) -> Vec<Option<String>> {
        self.state.experience_queries.lock().unwrap().clone()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

async fn projects_handler(State(state): State<Arc<StubState>>) -> Response {
    reply(&state.projects, None)
}

async fn experiences_handler(
    State(state): State<Arc<StubState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let category = params.get("category").cloned();
    state.experience_queries.lock().unwrap().push(category.clone());
    reply(&state.experiences, category.as_deref())
}

fn reply(reply: &Reply, category: Option<&str>) -> Response {
    match reply {
        Reply::Json(Value::Array(items)) if category.is_some() => {
            let filtered: Vec<Value> = items
                .iter()
                .filter(|item| item["category"].as_str() == category)
                .cloned()
                .collect();
            axum::Json(Value::Array(filtered)).into_response()
        }
        Reply::Json(value) => axum::Json(value.clone()).into_response(),
        Reply::Status(code) => {
            StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
        Reply::Malformed => {
            ([(header::CONTENT_TYPE, "application/json")], "[{\"_id\": ").into_response()
        }
    }
}

/// A small, realistic record set used across test files
pub fn sample_projects() -> Vec<ProjectBuilder> {
    vec![
        ProjectBuilder::new("Portfolio Site")
            .description("Personal site with a terminal overlay")
            .technologies(&["React", "Next.js", "TypeScript"])
            .github("https://github.com/example/portfolio"),
        ProjectBuilder::new("Churn Model")
            .description("Predicts subscription churn")
            .technologies(&["Python", "scikit-learn"])
            .live("https://churn.example.com"),
    ]
}

pub fn sample_experiences() -> Vec<ExperienceBuilder> {
    vec![
        ExperienceBuilder::new("Data Analyst", "Initech")
            .category("data-science")
            .summary("Built weekly reporting pipelines")
            .dates("2021-03-01T00:00:00.000Z", Some("2022-08-31T00:00:00.000Z")),
        ExperienceBuilder::new("ML Engineer", "Globex")
            .category("ai-ml")
            .summary("Trained and served ranking models")
            .dates("2022-09-01T00:00:00.000Z", None),
    ]
}
