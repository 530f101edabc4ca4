//! Data model shared by the host client, analyzer and sampler.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository metadata as reported by the hosting API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    pub description: Option<String>,
    /// Primary language as computed by the host (not our extension table).
    pub language: Option<String>,
    pub stargazers: u64,
    pub forks: u64,
    /// Repository size in kilobytes.
    pub size: u64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub topics: Vec<String>,
}

/// One entry of the recursive tree listing, taken verbatim from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    pub kind: TreeEntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeEntryKind {
    File,
    Directory,
    /// Submodule pointers and other non-blob, non-tree objects.
    Other,
}

/// Structural counts over the full tree listing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RepoStructure {
    /// Every tree entry, including directories and submodule pointers.
    pub total_files: u64,
    pub directories: u64,
    pub files: u64,
}

/// Paths of files recorded for their conventional significance.
///
/// Each slot holds at most one path; when several entries qualify, the last
/// one in traversal order wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkerFiles {
    pub readme: Option<String>,
    pub package_json: Option<String>,
    pub dockerfile: Option<String>,
    pub gitignore: Option<String>,
}

/// Aggregate produced by the analyzer from metadata + tree.
#[derive(Debug, Clone)]
pub struct RepositoryAnalysis {
    pub repository: RepoMetadata,
    pub structure: RepoStructure,
    /// Recognized-language name → number of matching files.
    pub languages: BTreeMap<String, u64>,
    pub marker_files: MarkerFiles,
    /// Candidate code files in tree traversal order.
    pub code_files: Vec<String>,
}

/// Decoded file content fetched from the host.
#[derive(Debug, Clone)]
pub struct FileContent {
    pub path: String,
    /// UTF-8 text after decoding the host's transport encoding.
    pub content: String,
    /// Size in bytes as reported by the host (pre-truncation).
    pub size: u64,
}

/// One successfully sampled code file, content capped for prompting.
#[derive(Debug, Clone, Serialize)]
pub struct CodeSample {
    pub path: String,
    pub content: String,
    pub size: u64,
}
