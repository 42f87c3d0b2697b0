//! The normalized brand identity record.

use serde::{Deserialize, Serialize};

/// Normalized identity record derived from a scanned website.
///
/// Created once per URL submission by the extractor. The strategy fields
/// (`mission`, `audience`, `differentiator`, `promise`) start empty and are
/// refined in place by the brand-strategy step. Held for the lifetime of
/// the session; reset on restart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Domain of the scanned site (e.g. `acme.com`).
    #[serde(default)]
    pub domain: String,
    /// Resolved company/brand name.
    #[serde(default)]
    pub name: String,
    /// Mission statement, from the strategy's core section.
    #[serde(default)]
    pub mission: String,
    /// Target audience, from the strategy's audience section.
    #[serde(default)]
    pub audience: String,
    /// What sets the brand apart, from the strategy's differentiator section.
    #[serde(default)]
    pub differentiator: String,
    /// One-sentence brand promise, from the strategy's core section.
    #[serde(default)]
    pub promise: String,
    /// Up to six short value labels, in match order.
    #[serde(default)]
    pub values: Vec<String>,
    /// Best-scoring logo source URL, if any.
    #[serde(default)]
    pub logo_url: String,
    /// Primary font family, if the site metadata names one.
    #[serde(default)]
    pub typography: String,
    /// Up to six normalized `#rrggbb` colors, de-duplicated, source order.
    #[serde(default)]
    pub colors: Vec<String>,
    /// One-sentence product description.
    #[serde(default)]
    pub product: String,
    /// Comma-joined tone labels (at most three).
    #[serde(default)]
    pub tone: String,
    /// Page title, when it reads as a tagline rather than the name itself.
    #[serde(default)]
    pub tagline: String,
}
