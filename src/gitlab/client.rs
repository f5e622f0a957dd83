//! HTTP client for the GitLab REST API v4.

use super::source::ProjectSource;
use super::types::{ApiErrorBody, Discussion, Issue, Milestone, WikiPage};
use crate::utils::config::{
    ProjectId, DEFAULT_HTTP_TIMEOUT, NEXT_PAGE_HEADER, PAGE_SIZE, TOKEN_HEADER,
};
use crate::utils::error::GitLabError;
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

/// Blocking GitLab client scoped to one project
pub struct GitLabClient {
    client: Client,
    base_url: Url,
    project: String,
    token: String,
}

impl GitLabClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `server` - GitLab base URL, e.g. `https://gitlab.example.com`
    /// * `token` - Personal access token
    /// * `project` - Numeric id or `group/project` path
    pub fn new(
        server: &str,
        token: impl Into<String>,
        project: &ProjectId,
    ) -> Result<Self, GitLabError> {
        let base_url =
            Url::parse(server.trim()).map_err(|e| GitLabError::InvalidUrl(format!("{}: {}", server, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GitLabError::InvalidUrl(server.to_string()));
        }

        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(GitLabError::ClientBuildFailed)?;

        Ok(Self {
            client,
            base_url,
            project: project.to_string(),
            token: token.into(),
        })
    }

    /// Build `/api/v4/projects/:id/<segments...>`, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GitLabError> {
        project_endpoint(&self.base_url, &self.project, segments)
    }

    /// Fetch a single JSON document
    fn get_one<T: DeserializeOwned>(&self, segments: &[&str], entity: &str) -> Result<T, GitLabError> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .map_err(|source| GitLabError::RequestFailed {
                entity: entity.to_string(),
                source,
            })?;

        let response = check_status(response, entity)?;
        response.json().map_err(|source| GitLabError::RequestFailed {
            entity: entity.to_string(),
            source,
        })
    }

    /// Fetch every page of a listing endpoint
    fn get_all<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        entity: &str,
    ) -> Result<Vec<T>, GitLabError> {
        let url = self.endpoint(segments)?;
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            debug!("GET {} (page {})", url, page);

            let response = self
                .client
                .get(url.clone())
                .header(TOKEN_HEADER, &self.token)
                .query(&[("per_page", PAGE_SIZE), ("page", page)])
                .send()
                .map_err(|source| GitLabError::RequestFailed {
                    entity: entity.to_string(),
                    source,
                })?;

            let response = check_status(response, entity)?;
            let next = next_page(response.headers());

            let mut batch: Vec<T> = response.json().map_err(|source| GitLabError::RequestFailed {
                entity: entity.to_string(),
                source,
            })?;
            items.append(&mut batch);

            match next {
                Some(next) if next > page => page = next,
                _ => break,
            }
        }

        debug!("Fetched {} {}", items.len(), entity);
        Ok(items)
    }
}

impl ProjectSource for GitLabClient {
    fn milestones(&self) -> Result<Vec<Milestone>, GitLabError> {
        info!("Fetching milestones for project {}", self.project);
        self.get_all(&["milestones"], &format!("milestones of project {}", self.project))
    }

    fn milestone_issues(&self, milestone: &Milestone) -> Result<Vec<Issue>, GitLabError> {
        let id = milestone.id.to_string();
        self.get_all(
            &["milestones", &id, "issues"],
            &format!("issues of milestone '{}'", milestone.title),
        )
    }

    fn issue_discussions(&self, issue: &Issue) -> Result<Vec<Discussion>, GitLabError> {
        let iid = issue.iid.to_string();
        self.get_all(
            &["issues", &iid, "discussions"],
            &format!("discussions of issue #{}", issue.iid),
        )
    }

    fn wiki_page(&self, slug: &str) -> Result<WikiPage, GitLabError> {
        info!("Fetching wiki page: {}", slug);
        self.get_one(&["wikis", slug], &format!("wiki page '{}'", slug))
    }
}

/// Build a project-scoped API URL
fn project_endpoint(base: &Url, project: &str, segments: &[&str]) -> Result<Url, GitLabError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| GitLabError::InvalidUrl(base.to_string()))?;
        path.pop_if_empty();
        path.extend(["api", "v4", "projects", project]);
        path.extend(segments);
    }
    Ok(url)
}

/// Read the `x-next-page` header; empty or absent means last page
fn next_page(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(NEXT_PAGE_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Turn non-success HTTP statuses into errors
fn check_status(response: Response, entity: &str) -> Result<Response, GitLabError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(map_http_error(status, &body, entity))
}

/// Map an HTTP failure to our error type
fn map_http_error(status: StatusCode, body: &str, entity: &str) -> GitLabError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GitLabError::Unauthorized(entity.to_string())
        }
        StatusCode::NOT_FOUND => GitLabError::NotFound(entity.to_string()),
        _ => {
            let detail = serde_json::from_str::<ApiErrorBody>(body)
                .ok()
                .and_then(|parsed| parsed.describe())
                .unwrap_or_else(|| body.trim().to_string());
            GitLabError::InvalidResponse {
                entity: entity.to_string(),
                message: format!("HTTP {}: {}", status, detail),
            }
        }
    }
}
