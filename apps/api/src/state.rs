use std::sync::Arc;

use crate::chat::classifier::JobDedup;
use crate::knowledge::KnowledgeBase;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup, read-only afterwards.
    pub knowledge: Arc<KnowledgeBase>,
    /// `None` runs the service in rule-based mode.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub job_dedup: JobDedup,
}
