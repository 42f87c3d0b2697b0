//! JSON-over-HTTP implementation of the backend trait.

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::StudioConfig;
use crate::error::{BackendError, ConfigError};
use crate::script::Script;
use crate::storyboard::Shot;

use super::endpoints;
use super::{ConceptBlock, StudioBackend, UrlAnalysis, concept_blocks, parse_script, parse_shots};

/// Backend client over `reqwest`.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Build a client from configuration. The request timeout is only set
    /// when configured; otherwise the transport default applies.
    pub fn new(config: &StudioConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and parse the JSON response. All failure modes
    /// collapse into [`BackendError`].
    async fn post(&self, path: &str, body: Value) -> Result<Value, BackendError> {
        let response = self
            .client
            .post(self.endpoint_url(path))
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Request {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::InvalidJson {
                endpoint: path.to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl StudioBackend for HttpBackend {
    async fn analyze_url(&self, url: &str) -> Result<UrlAnalysis, BackendError> {
        let value = self.post(endpoints::ANALYZE_URL, json!({"url": url})).await?;
        Ok(UrlAnalysis {
            domain: value
                .get("domain")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            company_info: value.get("company_info").cloned().unwrap_or(Value::Null),
        })
    }

    async fn brand_strategy(&self) -> Result<String, BackendError> {
        let value = self.post(endpoints::BRAND_STRATEGY, json!({})).await?;
        Ok(value
            .get("strategy")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    async fn creative_concepts(&self) -> Result<Vec<ConceptBlock>, BackendError> {
        let value = self.post(endpoints::CREATIVE_CONCEPTS, json!({})).await?;
        Ok(concept_blocks(&value))
    }

    async fn regenerate_concepts(&self, feedback: &str) -> Result<Vec<ConceptBlock>, BackendError> {
        let value = self
            .post(endpoints::REGENERATE_CONCEPTS, json!({"feedback": feedback}))
            .await?;
        Ok(concept_blocks(&value))
    }

    async fn select_concept(&self, concept_id: usize, content: &str) -> Result<(), BackendError> {
        self.post(
            endpoints::SELECT_CONCEPT,
            json!({"concept_id": concept_id, "content": content}),
        )
        .await?;
        Ok(())
    }

    async fn generate_script(&self) -> Result<Script, BackendError> {
        let value = self.post(endpoints::GENERATE_SCRIPT, json!({})).await?;
        Ok(parse_script(&value))
    }

    async fn update_script(&self, script: &Script) -> Result<(), BackendError> {
        self.post(endpoints::UPDATE_SCRIPT, json!({"script": script}))
            .await?;
        Ok(())
    }

    async fn generate_storyboard(&self) -> Result<Vec<Shot>, BackendError> {
        let value = self.post(endpoints::GENERATE_STORYBOARD, json!({})).await?;
        Ok(parse_shots(&value))
    }

    async fn generate_video(&self) -> Result<String, BackendError> {
        let value = self.post(endpoints::GENERATE_VIDEO, json!({})).await?;
        Ok(value
            .get("video_url")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let config = StudioConfig {
            backend_url: "http://localhost:5000/".to_string(),
            ..StudioConfig::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(
            backend.endpoint_url(endpoints::ANALYZE_URL),
            "http://localhost:5000/api/analyze-url"
        );
    }
}
