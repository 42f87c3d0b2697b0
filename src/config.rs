//! Configuration types.

use std::time::Duration;

/// Studio client configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Base URL of the generation backend (no trailing slash).
    pub backend_url: String,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub request_timeout: Option<Duration>,
    /// Storyboard placeholder fallback.
    pub placeholder: PlaceholderConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:5000".to_string(),
            request_timeout: None,
            placeholder: PlaceholderConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Build a configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    ///
    /// * `FRAME_STUDIO_BACKEND_URL` — backend base URL.
    /// * `FRAME_STUDIO_TIMEOUT_SECS` — request timeout in seconds.
    /// * `FRAME_STUDIO_PLACEHOLDER_COUNT` — placeholder storyboard size.
    /// * `FRAME_STUDIO_PLACEHOLDER_TEMPLATE` — placeholder image path
    ///   template; `{n}` is replaced with the 1-based shot number.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let backend_url = std::env::var("FRAME_STUDIO_BACKEND_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.backend_url);

        let request_timeout = std::env::var("FRAME_STUDIO_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs);

        let count = std::env::var("FRAME_STUDIO_PLACEHOLDER_COUNT")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.placeholder.count);

        let image_template = std::env::var("FRAME_STUDIO_PLACEHOLDER_TEMPLATE")
            .unwrap_or(defaults.placeholder.image_template);

        Self {
            backend_url,
            request_timeout,
            placeholder: PlaceholderConfig {
                count,
                image_template,
            },
        }
    }
}

/// Placeholder shots used when the backend returns an empty storyboard.
#[derive(Debug, Clone)]
pub struct PlaceholderConfig {
    /// Number of placeholder shots.
    pub count: usize,
    /// Image path template; `{n}` is replaced with the 1-based shot number.
    pub image_template: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            count: 6,
            image_template: "/static/img/storyboard-placeholder-{n}.png".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = StudioConfig::default();
        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
        assert!(config.request_timeout.is_none());
        assert_eq!(config.placeholder.count, 6);
        assert!(config.placeholder.image_template.contains("{n}"));
    }
}
