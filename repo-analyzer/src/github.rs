//! GitHub REST v3 client.
//!
//! Endpoints used:
//! - GET /repos/{owner}/{repo}
//! - GET /repos/{owner}/{repo}/git/trees/HEAD?recursive=1
//! - GET /repos/{owner}/{repo}/contents/{path}
//!
//! Unauthenticated by default; when a token is configured it is sent as
//! `Authorization: token <PAT>`, which raises the API quota considerably.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use reqwest::{Client, header};
use serde::Deserialize;
use tracing::debug;

use crate::errors::{HostError, HostResult};
use crate::host::RepositoryHost;
use crate::locator::RepoRef;
use crate::types::{FileContent, RepoMetadata, TreeEntry, TreeEntryKind};

/// Runtime configuration for the GitHub client.
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// API base, e.g. "https://api.github.com".
    pub base_api: String,
    /// Optional personal access token.
    pub token: Option<String>,
}

impl GitHubConfig {
    /// Loads the client configuration from the environment.
    ///
    /// `GITHUB_API_BASE` defaults to the public API; `GITHUB_TOKEN` stays
    /// optional so the service degrades to the unauthenticated quota.
    pub fn from_env() -> Self {
        Self {
            base_api: std::env::var("GITHUB_API_BASE")
                .unwrap_or_else(|_| "https://api.github.com".into()),
            token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|t| !t.trim().is_empty()),
        }
    }
}

/// Thin client over the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_api: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Constructs a client with the standard JSON Accept header and a
    /// service User-Agent (GitHub rejects requests without one).
    pub fn new(cfg: GitHubConfig) -> HostResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = Client::builder()
            .user_agent("repo-review-backend/0.1")
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_api: cfg.base_api.trim_end_matches('/').to_string(),
            token: cfg.token,
        })
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        let req = self.http.get(url);
        match &self.token {
            Some(token) => req.header(header::AUTHORIZATION, format!("token {token}")),
            None => req,
        }
    }
}

impl RepositoryHost for GitHubClient {
    async fn metadata(&self, repo: &RepoRef) -> HostResult<RepoMetadata> {
        let url = format!("{}/repos/{}/{}", self.base_api, repo.owner, repo.name);
        debug!(%repo, "GET {url}");

        let resp: GhRepo = self
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(RepoMetadata {
            name: resp.name,
            description: resp.description,
            language: resp.language,
            stargazers: resp.stargazers_count,
            forks: resp.forks_count,
            size: resp.size,
            created_at: resp.created_at,
            updated_at: resp.updated_at,
            topics: resp.topics,
        })
    }

    async fn tree(&self, repo: &RepoRef) -> HostResult<Vec<TreeEntry>> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/HEAD?recursive=1",
            self.base_api, repo.owner, repo.name
        );
        debug!(%repo, "GET {url}");

        let resp: GhTree = self
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let entries = resp
            .tree
            .into_iter()
            .map(|e| TreeEntry {
                kind: match e.kind.as_str() {
                    "blob" => TreeEntryKind::File,
                    "tree" => TreeEntryKind::Directory,
                    _ => TreeEntryKind::Other,
                },
                path: e.path,
            })
            .collect();

        Ok(entries)
    }

    async fn file_content(&self, repo: &RepoRef, path: &str) -> HostResult<FileContent> {
        // Path segments are encoded individually so `/` separators survive.
        let encoded: Vec<String> = path
            .split('/')
            .map(|seg| urlencoding::encode(seg).into_owned())
            .collect();
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_api,
            repo.owner,
            repo.name,
            encoded.join("/")
        );
        debug!(%repo, %path, "GET {url}");

        let resp: GhContent = self
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if resp.kind != "file" {
            return Err(HostError::InvalidResponse(format!(
                "path is not a file: {path}"
            )));
        }

        let content = decode_content(&resp.content, resp.encoding.as_deref())?;

        Ok(FileContent {
            path: resp.path,
            content,
            size: resp.size,
        })
    }
}

/// Decodes the transport encoding reported by the contents endpoint.
///
/// GitHub wraps base64 payloads at 60 columns, so whitespace is stripped
/// before decoding.
fn decode_content(raw: &str, encoding: Option<&str>) -> HostResult<String> {
    match encoding {
        Some("base64") | None => {
            let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
            let bytes = BASE64
                .decode(compact.as_bytes())
                .map_err(|e| HostError::InvalidResponse(format!("bad base64 payload: {e}")))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        Some(other) => Err(HostError::InvalidResponse(format!(
            "unsupported content encoding: {other}"
        ))),
    }
}

// ===== Wire types =====

#[derive(Debug, Deserialize)]
struct GhRepo {
    name: String,
    description: Option<String>,
    language: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
    size: u64,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GhTree {
    #[serde(default)]
    tree: Vec<GhTreeEntry>,
}

#[derive(Debug, Deserialize)]
struct GhTreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct GhContent {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: String,
    encoding: Option<String>,
    size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wrapped_base64() {
        // "hello world" split across two 8-char lines, as GitHub does at 60 cols.
        let wrapped = "aGVsbG8g\nd29ybGQ=\n";
        let decoded = decode_content(wrapped, Some("base64")).unwrap();
        assert_eq!(decoded, "hello world");
    }

    #[test]
    fn rejects_unknown_encoding() {
        let err = decode_content("zzzz", Some("utf-16")).unwrap_err();
        assert!(matches!(err, HostError::InvalidResponse(_)));
    }

    #[test]
    fn tree_entry_kinds_map_from_wire_names() {
        let raw = r#"{"tree":[
            {"path":"src","type":"tree"},
            {"path":"src/app.js","type":"blob"},
            {"path":"vendor/lib","type":"commit"}
        ]}"#;
        let parsed: GhTree = serde_json::from_str(raw).unwrap();
        let kinds: Vec<&str> = parsed.tree.iter().map(|e| e.kind.as_str()).collect();
        assert_eq!(kinds, ["tree", "blob", "commit"]);
    }
}
