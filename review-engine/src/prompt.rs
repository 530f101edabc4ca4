//! Prompt assembly for the report generator.
//!
//! Two prompts per review: a depth-sensitive long-form report prompt built
//! from the analysis bundle, and a fixed short-form summary prompt whose
//! input is the previously generated report text.

use std::fmt::Write as _;

use repo_analyzer::types::{CodeSample, RepositoryAnalysis};
use review_store::AnalysisDepth;

/// Token budget for the full report call.
pub const REPORT_MAX_TOKENS: u32 = 4000;
/// Token budget for the summary call.
pub const SUMMARY_MAX_TOKENS: u32 = 200;
/// Shared sampling temperature for both calls.
pub const REPORT_TEMPERATURE: f32 = 0.3;

/// System instructions for the report call.
pub const REVIEW_SYSTEM_PROMPT: &str = "You are an experienced senior developer and code reviewer. \
Analyze the given repository and write a detailed code review report that hackathon judges can \
rely on. Distinguish genuinely implemented functionality from parts that merely look \
LLM-generated, and back every claim with concrete code references.";

/// Builds the long-form report prompt from the analysis bundle.
pub fn build_report_prompt(
    analysis: &RepositoryAnalysis,
    samples: &[CodeSample],
    depth: AnalysisDepth,
) -> String {
    let repo = &analysis.repository;
    let mut p = String::new();

    let _ = writeln!(p, "Write a code review report for the following repository:");
    let _ = writeln!(p);
    let _ = writeln!(p, "## Repository");
    let _ = writeln!(p, "- Name: {}", repo.name);
    let _ = writeln!(
        p,
        "- Description: {}",
        repo.description.as_deref().unwrap_or("none")
    );
    let _ = writeln!(
        p,
        "- Primary language: {}",
        repo.language.as_deref().unwrap_or("unknown")
    );
    let _ = writeln!(p, "- Stars: {}", repo.stargazers);
    let _ = writeln!(p, "- Forks: {}", repo.forks);
    if let Some(created) = repo.created_at {
        let _ = writeln!(p, "- Created: {created}");
    }
    if let Some(updated) = repo.updated_at {
        let _ = writeln!(p, "- Last updated: {updated}");
    }
    let _ = writeln!(
        p,
        "- Topics: {}",
        if repo.topics.is_empty() {
            "none".to_string()
        } else {
            repo.topics.join(", ")
        }
    );

    let _ = writeln!(p);
    let _ = writeln!(p, "## Project structure");
    let _ = writeln!(p, "- Total tree entries: {}", analysis.structure.total_files);
    let _ = writeln!(p, "- Directories: {}", analysis.structure.directories);
    let _ = writeln!(p, "- Files: {}", analysis.structure.files);

    let _ = writeln!(p);
    let _ = writeln!(p, "## Languages");
    if analysis.languages.is_empty() {
        let _ = writeln!(p, "- none recognized");
    }
    for (language, count) in &analysis.languages {
        let _ = writeln!(p, "- {language}: {count} file(s)");
    }

    let _ = writeln!(p);
    let _ = writeln!(p, "## Key files");
    let markers = &analysis.marker_files;
    let _ = writeln!(p, "- README: {}", markers.readme.as_deref().unwrap_or("none"));
    let _ = writeln!(
        p,
        "- package.json: {}",
        markers.package_json.as_deref().unwrap_or("none")
    );
    let _ = writeln!(
        p,
        "- Dockerfile: {}",
        markers.dockerfile.as_deref().unwrap_or("none")
    );
    let _ = writeln!(
        p,
        "- .gitignore: {}",
        markers.gitignore.as_deref().unwrap_or("none")
    );

    let _ = writeln!(p);
    let _ = writeln!(p, "## Code samples");
    for sample in samples {
        let _ = writeln!(p);
        let _ = writeln!(p, "### {} ({} bytes)", sample.path, sample.size);
        let _ = writeln!(p, "```");
        let _ = writeln!(p, "{}", sample.content);
        let _ = writeln!(p, "```");
    }

    let _ = writeln!(p);
    let _ = writeln!(p, "## Instructions");
    let _ = writeln!(p, "Analysis depth: {depth}");
    let _ = writeln!(p);
    let _ = writeln!(p, "Cover the following sections:");
    let _ = writeln!(p, "1. Project overview and purpose");
    let _ = writeln!(p, "2. Technology stack analysis");
    let _ = writeln!(p, "3. Architecture and code organization");
    let _ = writeln!(
        p,
        "4. Code quality (style consistency, error handling, security, performance)"
    );
    let _ = writeln!(
        p,
        "5. Genuine implementation vs. likely LLM-generated code, with evidence"
    );
    let _ = writeln!(p, "6. Testing and documentation level");
    let _ = writeln!(p, "7. Deployment and operational readiness");
    let _ = writeln!(p, "8. Suggested improvements");
    let _ = writeln!(
        p,
        "9. Hackathon judging: technical completeness, creativity, practicality and code quality, each scored 1-10"
    );
    let _ = writeln!(p, "10. Conclusion");
    let _ = writeln!(p);
    let _ = writeln!(p, "Support each section with concrete code examples.");

    p
}

/// Builds the fixed short-form summary prompt from the full report text.
pub fn build_summary_prompt(full_report: &str) -> String {
    format!("Summarize the following code review report in 2-3 sentences.\n\n{full_report}")
}
