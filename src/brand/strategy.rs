//! Parsing and application of the brand-strategy response.
//!
//! The backend returns free text in numbered-point form. Splitting on the
//! numbered-list pattern is a best-effort parse; sections that cannot be
//! located stay empty and leave the profile untouched.

use std::sync::LazyLock;

use regex::Regex;

use super::extract::first_sentence;
use super::profile::BrandProfile;

static NUMBERED_POINT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n?\s*\d+\.\s+").unwrap());

/// Label prefixes stripped from the head of a section (matched
/// case-insensitively, only when followed by a separator).
const LABEL_PREFIXES: &[&str] = &[
    "brand core",
    "core",
    "mission",
    "positioning",
    "differentiator",
    "what sets us apart",
    "target audience",
    "audience",
];

/// The up-to-three ordered sections of a strategy response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrategySections {
    /// Brand core / mission text.
    pub core: String,
    /// What sets the brand apart.
    pub differentiator: String,
    /// Who the brand needs to reach.
    pub audience: String,
}

impl StrategySections {
    /// Overwrite the profile's strategy fields in place. Empty sections
    /// leave the prior value untouched. The promise is the first sentence
    /// of the core section.
    pub fn apply_to(&self, profile: &mut BrandProfile) {
        if !self.core.is_empty() {
            profile.mission = self.core.clone();
            profile.promise = first_sentence(&self.core);
        }
        if !self.differentiator.is_empty() {
            profile.differentiator = self.differentiator.clone();
        }
        if !self.audience.is_empty() {
            profile.audience = self.audience.clone();
        }
    }
}

/// Split a strategy text on its numbered points into core, differentiator,
/// and audience sections, stripping label prefixes from each.
///
/// Text before the first numbered point is preamble and dropped. Text with
/// no numbered points at all is treated as a single core section.
pub fn parse_strategy(text: &str) -> StrategySections {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return StrategySections::default();
    }

    let mut pieces: Vec<String> = Vec::new();
    if NUMBERED_POINT.is_match(trimmed) {
        for piece in NUMBERED_POINT.split(trimmed).skip(1) {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            pieces.push(strip_label(piece));
            if pieces.len() == 3 {
                break;
            }
        }
    } else {
        pieces.push(strip_label(trimmed));
    }

    let mut pieces = pieces.into_iter();
    StrategySections {
        core: pieces.next().unwrap_or_default(),
        differentiator: pieces.next().unwrap_or_default(),
        audience: pieces.next().unwrap_or_default(),
    }
}

/// Strip one leading label prefix ("Brand Core:", "Target Audience —", …)
/// from a section, tolerating bold markers around the label.
fn strip_label(section: &str) -> String {
    let cleaned = section.trim().trim_start_matches("**").trim_start();
    for label in LABEL_PREFIXES {
        if !cleaned.is_char_boundary(label.len()) || cleaned.len() < label.len() {
            continue;
        }
        if !cleaned[..label.len()].eq_ignore_ascii_case(label) {
            continue;
        }
        let rest = cleaned[label.len()..].trim_start_matches("**").trim_start();
        if let Some(stripped) = rest
            .strip_prefix(':')
            .or_else(|| rest.strip_prefix('-'))
            .or_else(|| rest.strip_prefix('—'))
        {
            return stripped.trim_start_matches("**").trim().to_string();
        }
    }
    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Here is the strategy for your brand:\n\
        1. Brand Core: Acme exists to make city logistics humane. Every robot earns trust street by street.\n\
        2. Differentiator: Acme is the only fleet trained on real sidewalks.\n\
        3. Target Audience: Operations leads at mid-size retailers.";

    #[test]
    fn splits_numbered_points_and_strips_labels() {
        let sections = parse_strategy(SAMPLE);
        assert!(sections.core.starts_with("Acme exists to make city logistics humane."));
        assert_eq!(
            sections.differentiator,
            "Acme is the only fleet trained on real sidewalks."
        );
        assert_eq!(sections.audience, "Operations leads at mid-size retailers.");
    }

    #[test]
    fn preamble_is_dropped() {
        let sections = parse_strategy(SAMPLE);
        assert!(!sections.core.contains("Here is the strategy"));
    }

    #[test]
    fn unnumbered_text_becomes_core_only() {
        let sections = parse_strategy("Mission: One paragraph, no numbers.");
        assert_eq!(sections.core, "One paragraph, no numbers.");
        assert!(sections.differentiator.is_empty());
        assert!(sections.audience.is_empty());
    }

    #[test]
    fn label_without_separator_is_kept() {
        // "Core values matter" starts with a label word but has no colon,
        // so nothing is stripped.
        let sections = parse_strategy("Core values matter most here");
        assert_eq!(sections.core, "Core values matter most here");
    }

    #[test]
    fn bold_labels_are_stripped() {
        let sections = parse_strategy("1. **Brand Core:** Be useful.\n2. **Differentiator:** Speed.");
        assert_eq!(sections.core, "Be useful.");
        assert_eq!(sections.differentiator, "Speed.");
    }

    #[test]
    fn empty_input_yields_empty_sections() {
        assert_eq!(parse_strategy(""), StrategySections::default());
        assert_eq!(parse_strategy("   \n  "), StrategySections::default());
    }

    #[test]
    fn apply_fills_profile_fields_in_place() {
        let mut profile = BrandProfile {
            mission: "old mission".to_string(),
            ..BrandProfile::default()
        };
        parse_strategy(SAMPLE).apply_to(&mut profile);
        assert!(profile.mission.starts_with("Acme exists"));
        assert_eq!(profile.promise, "Acme exists to make city logistics humane.");
        assert_eq!(profile.audience, "Operations leads at mid-size retailers.");
        assert!(!profile.differentiator.is_empty());
    }

    #[test]
    fn apply_with_empty_sections_leaves_profile_untouched() {
        let mut profile = BrandProfile {
            mission: "keep me".to_string(),
            audience: "and me".to_string(),
            ..BrandProfile::default()
        };
        StrategySections::default().apply_to(&mut profile);
        assert_eq!(profile.mission, "keep me");
        assert_eq!(profile.audience, "and me");
    }
}
