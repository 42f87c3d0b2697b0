//! Backend API client for the generation services.
//!
//! Everything the wizard needs from the backend goes through the
//! [`StudioBackend`] trait; [`HttpBackend`] is the JSON-over-HTTP
//! implementation. Responses are parsed tolerantly: a missing or
//! malformed field degrades to its default instead of failing the call.

mod http;

pub use http::HttpBackend;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BackendError;
use crate::script::{Scene, Script};
use crate::storyboard::Shot;

/// Endpoint paths, relative to the backend base URL.
pub mod endpoints {
    pub const ANALYZE_URL: &str = "/api/analyze-url";
    pub const BRAND_STRATEGY: &str = "/api/brand-strategy";
    pub const CREATIVE_CONCEPTS: &str = "/api/creative-concepts";
    pub const REGENERATE_CONCEPTS: &str = "/api/regenerate-concepts";
    pub const SELECT_CONCEPT: &str = "/api/select-concept";
    pub const GENERATE_SCRIPT: &str = "/api/generate-script";
    pub const UPDATE_SCRIPT: &str = "/api/update-script";
    pub const GENERATE_STORYBOARD: &str = "/api/generate-storyboard";
    pub const GENERATE_VIDEO: &str = "/api/generate-video";
}

/// Result of the analyze-url call.
#[derive(Debug, Clone, Default)]
pub struct UrlAnalysis {
    /// Domain the backend resolved for the submitted URL.
    pub domain: String,
    /// Arbitrarily-shaped company metadata scraped from the site.
    pub company_info: Value,
}

/// One generated concept, as raw backend text.
#[derive(Debug, Clone, Default)]
pub struct ConceptBlock {
    pub content: String,
}

/// The backend generation services, one method per endpoint.
///
/// Every call POSTs a JSON object and reads a JSON object back. Any
/// non-success status or transport error surfaces as a [`BackendError`].
#[async_trait]
pub trait StudioBackend: Send + Sync {
    async fn analyze_url(&self, url: &str) -> Result<UrlAnalysis, BackendError>;
    async fn brand_strategy(&self) -> Result<String, BackendError>;
    async fn creative_concepts(&self) -> Result<Vec<ConceptBlock>, BackendError>;
    async fn regenerate_concepts(&self, feedback: &str) -> Result<Vec<ConceptBlock>, BackendError>;
    async fn select_concept(&self, concept_id: usize, content: &str) -> Result<(), BackendError>;
    async fn generate_script(&self) -> Result<Script, BackendError>;
    async fn update_script(&self, script: &Script) -> Result<(), BackendError>;
    async fn generate_storyboard(&self) -> Result<Vec<Shot>, BackendError>;
    async fn generate_video(&self) -> Result<String, BackendError>;
}

/// Pull `concepts: [{content}]` out of a response, dropping nothing:
/// entries without a usable `content` become empty blocks.
pub(crate) fn concept_blocks(value: &Value) -> Vec<ConceptBlock> {
    value
        .get("concepts")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|entry| ConceptBlock {
                    content: entry
                        .get("content")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Parse the `script: {script: [Scene]}` envelope, scene by scene.
pub(crate) fn parse_script(value: &Value) -> Script {
    let scenes = value
        .get("script")
        .and_then(|envelope| envelope.get("script"))
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|scene| {
                    serde_json::from_value::<Scene>(scene.clone()).unwrap_or_else(|e| {
                        tracing::warn!("Malformed scene in script payload: {e}");
                        Scene::default()
                    })
                })
                .collect()
        })
        .unwrap_or_default();
    Script { scenes }
}

/// Parse the `storyboard: [Shot]` list, shot by shot.
pub(crate) fn parse_shots(value: &Value) -> Vec<Shot> {
    value
        .get("storyboard")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .map(|shot| {
                    serde_json::from_value::<Shot>(shot.clone()).unwrap_or_else(|e| {
                        tracing::warn!("Malformed shot in storyboard payload: {e}");
                        Shot::default()
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
