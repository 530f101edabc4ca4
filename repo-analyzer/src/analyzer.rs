//! Structural analysis of a repository from metadata + tree listing.
//!
//! The two host fetches run concurrently and are joined before any
//! classification happens; either failure fails the whole operation. The
//! classification itself is pure and unit-tested without a network.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::errors::HostResult;
use crate::host::RepositoryHost;
use crate::locator::RepoRef;
use crate::types::{
    MarkerFiles, RepoMetadata, RepoStructure, RepositoryAnalysis, TreeEntry, TreeEntryKind,
};

/// File extension → recognized language name.
fn language_for_extension(ext: &str) -> Option<&'static str> {
    match ext {
        "js" => Some("JavaScript"),
        "ts" => Some("TypeScript"),
        "py" => Some("Python"),
        "java" => Some("Java"),
        "cpp" => Some("C++"),
        "c" => Some("C"),
        "cs" => Some("C#"),
        "php" => Some("PHP"),
        "rb" => Some("Ruby"),
        "go" => Some("Go"),
        "rs" => Some("Rust"),
        "swift" => Some("Swift"),
        "kt" => Some("Kotlin"),
        _ => None,
    }
}

/// Fetches metadata and the recursive tree concurrently, then classifies
/// every entry into structural counts, language counts, marker files and
/// the ordered candidate code-file list.
#[instrument(skip(host), fields(repo = %repo))]
pub async fn analyze<H: RepositoryHost>(host: &H, repo: &RepoRef) -> HostResult<RepositoryAnalysis> {
    let (metadata, tree) = tokio::try_join!(host.metadata(repo), host.tree(repo))?;
    debug!(entries = tree.len(), "tree fetched, classifying");
    Ok(build_analysis(metadata, &tree))
}

/// Pure classification over a fetched tree.
pub fn build_analysis(repository: RepoMetadata, tree: &[TreeEntry]) -> RepositoryAnalysis {
    let structure = RepoStructure {
        total_files: tree.len() as u64,
        directories: tree
            .iter()
            .filter(|e| e.kind == TreeEntryKind::Directory)
            .count() as u64,
        files: tree.iter().filter(|e| e.kind == TreeEntryKind::File).count() as u64,
    };

    let mut languages: BTreeMap<String, u64> = BTreeMap::new();
    let mut marker_files = MarkerFiles::default();
    let mut code_files = Vec::new();

    for entry in tree {
        if entry.kind != TreeEntryKind::File {
            continue;
        }

        if let Some(language) = entry
            .path
            .rsplit_once('.')
            .and_then(|(_, ext)| language_for_extension(ext))
        {
            *languages.entry(language.to_string()).or_insert(0) += 1;
            code_files.push(entry.path.clone());
        }

        // Marker slots: readme matches as a substring anywhere in the path,
        // the rest on the exact (lowercased) path. Last match wins.
        let lowered = entry.path.to_lowercase();
        if lowered.contains("readme") {
            marker_files.readme = Some(entry.path.clone());
        } else if lowered == "package.json" {
            marker_files.package_json = Some(entry.path.clone());
        } else if lowered == "dockerfile" {
            marker_files.dockerfile = Some(entry.path.clone());
        } else if lowered == ".gitignore" {
            marker_files.gitignore = Some(entry.path.clone());
        }
    }

    RepositoryAnalysis {
        repository,
        structure,
        languages,
        marker_files,
        code_files,
    }
}
