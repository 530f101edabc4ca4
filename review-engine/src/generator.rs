//! Seam between the orchestrator and the text-completion backend.

use std::future::Future;

use ai_report_service::{AiServiceError, CompletionRequest, CompletionService};

/// Text-completion collaborator: one request/response contract, called twice
/// per review (full report, then summary).
pub trait ReportGenerator {
    fn complete(
        &self,
        req: &CompletionRequest,
    ) -> impl Future<Output = Result<String, AiServiceError>> + Send;
}

impl ReportGenerator for CompletionService {
    async fn complete(&self, req: &CompletionRequest) -> Result<String, AiServiceError> {
        CompletionService::complete(self, req).await
    }
}
