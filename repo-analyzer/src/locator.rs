//! URL classification for supported code hosts.
//!
//! Supported hosts: github.com, gitlab.com, bitbucket.org. The classifier is
//! a pure function: no I/O, deterministic, and total — every string resolves
//! to one of the four [`UrlClassification`] variants.

use lazy_static::lazy_static;
use regex::Regex;

/// Owner + name pair identifying one remote repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Result of classifying an input URL.
///
/// Exactly one variant holds; downstream branching must handle all four.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlClassification {
    /// Direct link to a single repository.
    Repository(RepoRef),
    /// Organization landing/listing page, not a repository.
    OrganizationPage,
    /// User profile page, not a repository.
    UserProfilePage,
    /// Anything that does not look like a supported host URL.
    Invalid,
}

lazy_static! {
    /// `{host}/{owner}/{name}` with the name terminated by `/`, `?` or `#`.
    static ref REPO_RE: Regex =
        Regex::new(r"(?:github\.com|gitlab\.com|bitbucket\.org)/([^/]+)/([^/?#]+)").unwrap();
    /// Explicit organization listing: `github.com/orgs/{org}`.
    static ref ORG_RE: Regex = Regex::new(r"github\.com/orgs/([^/?#]+)").unwrap();
    /// Single path segment only: `{host}/{owner}` with optional trailing slash.
    static ref PROFILE_RE: Regex =
        Regex::new(r"(?:github\.com|gitlab\.com|bitbucket\.org)/([^/?#]+)/?$").unwrap();
}

/// Path segments that mark an owner-level repository listing, not a repo.
const LISTING_SEGMENTS: [&str; 2] = ["repositories", "repos"];

/// Classifies `url` into one of the four supported shapes.
///
/// The repository match wins first; a second segment equal to a listing
/// segment (`repositories`/`repos`) or an `orgs/` owner downgrades the match
/// to [`UrlClassification::OrganizationPage`]. A trailing `.git` suffix is
/// stripped from the repository name.
pub fn classify(url: &str) -> UrlClassification {
    if let Some(caps) = REPO_RE.captures(url) {
        let owner = &caps[1];
        let name = caps[2].trim_end_matches(".git");

        if owner == "orgs" || LISTING_SEGMENTS.contains(&name) {
            return UrlClassification::OrganizationPage;
        }

        return UrlClassification::Repository(RepoRef {
            owner: owner.to_string(),
            name: name.to_string(),
        });
    }

    if ORG_RE.is_match(url) {
        return UrlClassification::OrganizationPage;
    }

    if PROFILE_RE.is_match(url) {
        return UrlClassification::UserProfilePage;
    }

    UrlClassification::Invalid
}
