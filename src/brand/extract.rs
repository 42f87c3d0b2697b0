//! Heuristic brand-signal extraction from company metadata.
//!
//! [`derive_brand_profile`] is pure and total: any JSON-like input yields a
//! complete [`BrandProfile`], with missing or malformed fields degrading to
//! empty strings or fixed defaults. The input shape is whatever the
//! analyze-url endpoint scraped, so every lookup tolerates several paths.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::profile::BrandProfile;

/// Characters that separate name candidates in titles ("Acme | Home").
const NAME_DELIMITERS: [char; 6] = ['|', '—', '–', '-', '·', '\\'];

/// Segments that can never be a brand name.
const REJECTED_SEGMENTS: [&str; 2] = ["home", "welcome"];

/// Ordered keyword → tone label table. Matches are collected in table
/// order, capped at three.
const TONE_TABLE: &[(&str, &str)] = &[
    ("trustworth", "trustworthy"),
    ("innovat", "innovative"),
    ("transparen", "transparent"),
    ("friendly", "friendly"),
    ("playful", "playful"),
    ("bold", "bold"),
    ("professional", "professional"),
    ("reliab", "reliable"),
    ("luxur", "premium"),
    ("sustainab", "conscious"),
];

/// Tone returned when no keyword matches.
const DEFAULT_TONE: &str = "modern, approachable";

/// Ordered keyword → value label table, capped at six matches.
const VALUES_TABLE: &[(&str, &str)] = &[
    ("innovat", "Innovation"),
    ("quality", "Quality"),
    ("customer", "Customer focus"),
    ("sustainab", "Sustainability"),
    ("safet", "Safety"),
    ("secur", "Security"),
    ("transparen", "Transparency"),
    ("communit", "Community"),
    ("accessib", "Accessibility"),
    ("research", "Research"),
];

/// Values returned when no keyword matches.
const DEFAULT_VALUES: [&str; 3] = ["Innovation", "Quality", "Customer focus"];

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").unwrap());
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s").unwrap());

/// Derive a normalized brand profile from the analyze-url payload.
///
/// `fallback_domain` backs the profile's `domain` field (and the name
/// fallback chain) when the payload carries no usable `domain` of its own.
pub fn derive_brand_profile(company_info: &Value, fallback_domain: &str) -> BrandProfile {
    let domain = lookup_str(company_info, "domain")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(fallback_domain)
        .to_string();

    let title = ["title", "meta.title", "page_title"]
        .iter()
        .find_map(|path| lookup_str(company_info, path))
        .unwrap_or("")
        .trim()
        .to_string();

    let description = description_text(company_info);
    let name = resolve_name(company_info, &title, &domain);

    BrandProfile {
        tagline: derive_tagline(&title, &name),
        values: derive_values(&description),
        logo_url: select_logo(company_info),
        typography: extract_typography(company_info),
        colors: extract_palette(company_info),
        product: first_sentence(&description),
        tone: derive_tone(&description),
        domain,
        name,
        ..BrandProfile::default()
    }
}

/// Ordered name fallback chain: explicit name field, then page title, then
/// the capitalized root label of the domain.
fn resolve_name(info: &Value, title: &str, domain: &str) -> String {
    let root = domain_root(domain);
    let root_lower = root.to_lowercase();

    let explicit = ["name", "company.name", "brand.name"]
        .iter()
        .find_map(|path| lookup_str(info, path));
    if let Some(name) = explicit {
        if let Some(best) = best_segment(name, &root_lower) {
            return best;
        }
    }

    if let Some(best) = best_segment(title, &root_lower) {
        return best;
    }

    capitalize(&root)
}

/// Split `text` on the delimiter set and return the highest-scoring
/// segment. Scoring: +2 for two or more words, +3 if the segment contains
/// the domain root token, +1 for a leading capital. "Home"/"Welcome"
/// segments are rejected outright. Ties go to the first occurrence.
fn best_segment(text: &str, root: &str) -> Option<String> {
    let mut best: Option<(i32, String)> = None;
    for segment in text.split(NAME_DELIMITERS) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if REJECTED_SEGMENTS
            .iter()
            .any(|rejected| segment.eq_ignore_ascii_case(rejected))
        {
            continue;
        }

        let mut score = 0;
        if segment.split_whitespace().count() >= 2 {
            score += 2;
        }
        if !root.is_empty() && segment.to_lowercase().contains(root) {
            score += 3;
        }
        if segment.chars().next().is_some_and(char::is_uppercase) {
            score += 1;
        }

        let better = match &best {
            None => true,
            Some((best_score, _)) => score > *best_score,
        };
        if better {
            best = Some((score, segment.to_string()));
        }
    }
    best.map(|(_, segment)| segment)
}

/// Root token of a domain: strip a leading `www.`, take up to the first dot.
fn domain_root(domain: &str) -> String {
    let stripped = domain.trim().trim_start_matches("www.");
    stripped.split('.').next().unwrap_or("").to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Concatenate every descriptive text field the payload carries.
fn description_text(info: &Value) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for path in [
        "description",
        "longDescription",
        "meta.description",
        "company.description",
    ] {
        if let Some(text) = lookup_str(info, path) {
            let text = text.trim();
            if !text.is_empty() {
                parts.push(text);
            }
        }
    }
    parts.join(" ")
}

/// Scan the nested color list: keep 6-hex-digit values, normalize to a
/// leading `#`, de-duplicate (case-insensitively, first spelling wins),
/// cap at six, preserve source order.
fn extract_palette(info: &Value) -> Vec<String> {
    let Some(list) = ["colors", "brand.colors", "palette"]
        .iter()
        .find_map(|path| lookup_array(info, path))
    else {
        return Vec::new();
    };

    let mut seen: Vec<String> = Vec::new();
    let mut palette = Vec::new();
    for entry in list {
        let raw = entry.as_str().or_else(|| {
            ["hex", "value", "color"]
                .iter()
                .find_map(|key| entry.get(key).and_then(Value::as_str))
        });
        let Some(raw) = raw.map(str::trim) else {
            continue;
        };
        if !HEX_COLOR.is_match(raw) {
            continue;
        }
        let normalized = if raw.starts_with('#') {
            raw.to_string()
        } else {
            format!("#{raw}")
        };
        let key = normalized.to_ascii_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        palette.push(normalized);
        if palette.len() == 6 {
            break;
        }
    }
    palette
}

/// Flatten the nested logo list to (source, score) pairs and pick the
/// maximum. Score: type logo=3 / symbol=1, theme light=+2 / dark=+1,
/// format png/webp=+2 / svg=+1. Ties go to the first occurrence.
fn select_logo(info: &Value) -> String {
    let Some(list) = ["logos", "brand.logos"]
        .iter()
        .find_map(|path| lookup_array(info, path))
    else {
        return String::new();
    };

    fn consider(src: &str, score: i32, best: &mut Option<(i32, String)>) {
        let src = src.trim();
        if src.is_empty() {
            return;
        }
        let better = match best {
            None => true,
            Some((best_score, _)) => score > *best_score,
        };
        if better {
            *best = Some((score, src.to_string()));
        }
    }

    let mut best: Option<(i32, String)> = None;

    for logo in list {
        let base = match logo.get("type").and_then(Value::as_str) {
            Some("logo") => 3,
            Some("symbol") => 1,
            _ => 0,
        } + match logo.get("theme").and_then(Value::as_str) {
            Some("light") => 2,
            Some("dark") => 1,
            _ => 0,
        };

        if let Some(formats) = logo.get("formats").and_then(Value::as_array) {
            for format in formats {
                let Some(src) = format.get("src").and_then(Value::as_str) else {
                    continue;
                };
                let ext = format.get("format").and_then(Value::as_str).unwrap_or("");
                consider(src, base + format_score(ext), &mut best);
            }
        } else if let Some(src) = logo.get("src").and_then(Value::as_str) {
            let ext = logo.get("format").and_then(Value::as_str).unwrap_or("");
            consider(src, base + format_score(ext), &mut best);
        }
    }

    best.map(|(_, src)| src).unwrap_or_default()
}

fn format_score(format: &str) -> i32 {
    match format.to_ascii_lowercase().as_str() {
        "png" | "webp" => 2,
        "svg" => 1,
        _ => 0,
    }
}

/// Substring-match the tone table against the descriptive text, in table
/// order, capped at three labels.
fn derive_tone(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut labels: Vec<&str> = Vec::new();
    for (keyword, label) in TONE_TABLE {
        if lower.contains(keyword) {
            labels.push(label);
            if labels.len() == 3 {
                break;
            }
        }
    }
    if labels.is_empty() {
        DEFAULT_TONE.to_string()
    } else {
        labels.join(", ")
    }
}

/// Substring-match the values table, in table order, capped at six labels.
fn derive_values(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut values: Vec<String> = Vec::new();
    for (keyword, label) in VALUES_TABLE {
        if lower.contains(keyword) {
            values.push((*label).to_string());
            if values.len() == 6 {
                break;
            }
        }
    }
    if values.is_empty() {
        DEFAULT_VALUES.iter().map(|v| (*v).to_string()).collect()
    } else {
        values
    }
}

/// The page title reads as a tagline only when it differs from the
/// resolved name and stays within 60 characters.
fn derive_tagline(title: &str, name: &str) -> String {
    let title = title.trim();
    if title.is_empty() || title.eq_ignore_ascii_case(name) || title.chars().count() > 60 {
        String::new()
    } else {
        title.to_string()
    }
}

fn extract_typography(info: &Value) -> String {
    let Some(list) = ["fonts", "brand.fonts"]
        .iter()
        .find_map(|path| lookup_array(info, path))
    else {
        return String::new();
    };

    for font in list {
        if let Some(name) = font.as_str() {
            if !name.trim().is_empty() {
                return name.trim().to_string();
            }
        }
        for key in ["name", "family"] {
            if let Some(name) = font.get(key).and_then(Value::as_str) {
                if !name.trim().is_empty() {
                    return name.trim().to_string();
                }
            }
        }
    }
    String::new()
}

/// First sentence of a text: everything up to (and including) the first
/// sentence-ending punctuation followed by whitespace.
pub(crate) fn first_sentence(text: &str) -> String {
    let trimmed = text.trim();
    match SENTENCE_END.find(trimmed) {
        Some(end) => trimmed[..end.start() + 1].to_string(),
        None => trimmed.to_string(),
    }
}

/// Walk a dotted path of object keys to a string leaf.
fn lookup_str<'a>(value: &'a Value, path: &str) -> Option<&'a str> {
    let mut current = value;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    current.as_str()
}

/// Walk a dotted path of object keys to an array leaf.
fn lookup_array<'a>(value: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
    let mut current = value;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    current.as_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_on_arbitrary_inputs() {
        let inputs = [
            Value::Null,
            json!(42),
            json!("just a string"),
            json!([1, 2, 3]),
            json!({"colors": "not-a-list", "logos": {"nested": true}, "name": 7}),
        ];
        for input in inputs {
            let profile = derive_brand_profile(&input, "acme.com");
            assert_eq!(profile.name, "Acme", "fell back to domain root for {input}");
            assert_eq!(profile.domain, "acme.com");
            assert!(profile.colors.is_empty());
            assert!(profile.logo_url.is_empty());
            assert_eq!(profile.tone, DEFAULT_TONE);
            assert_eq!(profile.values.len(), 3);
        }
    }

    #[test]
    fn name_excludes_home_segment() {
        let info = json!({"title": "Acme Robotics | Home"});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.name, "Acme Robotics");
    }

    #[test]
    fn name_prefers_explicit_field_over_title() {
        let info = json!({
            "name": "Acme Robotics",
            "title": "Welcome | Something Else Entirely"
        });
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.name, "Acme Robotics");
    }

    #[test]
    fn name_ties_break_on_first_occurrence() {
        // Both segments score identically (2 words + leading capital).
        assert_eq!(
            best_segment("First Thing | Other Thing", "unrelated"),
            Some("First Thing".to_string())
        );
    }

    #[test]
    fn name_falls_back_to_capitalized_domain_root() {
        let profile = derive_brand_profile(&json!({}), "www.acme.com");
        assert_eq!(profile.name, "Acme");
    }

    #[test]
    fn palette_normalizes_dedupes_and_drops_invalid() {
        let info = json!({"colors": ["#ABC123", "not-a-color", "def456", "#ABC123"]});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.colors, vec!["#ABC123", "#def456"]);
    }

    #[test]
    fn palette_caps_at_six_and_reads_object_entries() {
        let info = json!({
            "brand": {"colors": [
                {"hex": "#111111"}, {"hex": "#222222"}, {"hex": "#333333"},
                {"hex": "#444444"}, {"hex": "#555555"}, {"hex": "#666666"},
                {"hex": "#777777"}
            ]}
        });
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.colors.len(), 6);
        assert_eq!(profile.colors[0], "#111111");
        assert!(!profile.colors.contains(&"#777777".to_string()));
    }

    #[test]
    fn logo_scoring_prefers_light_png_logo() {
        let info = json!({"logos": [
            {"type": "symbol", "theme": "dark",
             "formats": [{"src": "symbol.svg", "format": "svg"}]},
            {"type": "logo", "theme": "light",
             "formats": [{"src": "logo.png", "format": "png"}]}
        ]});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.logo_url, "logo.png");
    }

    #[test]
    fn logo_ties_break_on_first_occurrence() {
        let info = json!({"logos": [
            {"type": "logo", "theme": "light",
             "formats": [{"src": "first.png", "format": "png"}]},
            {"type": "logo", "theme": "light",
             "formats": [{"src": "second.png", "format": "png"}]}
        ]});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.logo_url, "first.png");
    }

    #[test]
    fn tone_collects_in_table_order() {
        let info = json!({"description": "We are trustworthy and innovative, transparent too."});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.tone, "trustworthy, innovative, transparent");
    }

    #[test]
    fn tone_caps_at_three_matches() {
        let info = json!({
            "description": "trustworthy innovative transparent friendly playful"
        });
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.tone, "trustworthy, innovative, transparent");
    }

    #[test]
    fn tone_defaults_when_nothing_matches() {
        let info = json!({"description": "Words without any matching signal."});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.tone, DEFAULT_TONE);
    }

    #[test]
    fn values_match_and_default() {
        let matched = derive_brand_profile(
            &json!({"description": "Quality research for our community."}),
            "acme.com",
        );
        assert_eq!(matched.values, vec!["Quality", "Community", "Research"]);

        let defaulted = derive_brand_profile(&json!({"description": "Nothing."}), "acme.com");
        assert_eq!(
            defaulted.values,
            vec!["Innovation", "Quality", "Customer focus"]
        );
    }

    #[test]
    fn product_is_first_sentence() {
        let info = json!({
            "description": "We build delivery robots. Founded in 2019, we ship worldwide."
        });
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.product, "We build delivery robots.");
    }

    #[test]
    fn tagline_rules() {
        // Title equal to the name (case-insensitively) → blank.
        let same = derive_brand_profile(&json!({"title": "ACME"}), "acme.com");
        assert_eq!(same.tagline, "");

        // Distinct short title → kept.
        let info = json!({"name": "Acme Robotics", "title": "Robots that deliver"});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.tagline, "Robots that deliver");

        // Over 60 characters → blank.
        let long_title = "x".repeat(61);
        let long = derive_brand_profile(&json!({"name": "Acme Inc", "title": long_title}), "acme.com");
        assert_eq!(long.tagline, "");
    }

    #[test]
    fn typography_reads_nested_font_list() {
        let info = json!({"fonts": [{"name": "Inter", "type": "title"}]});
        let profile = derive_brand_profile(&info, "acme.com");
        assert_eq!(profile.typography, "Inter");
    }

    #[test]
    fn full_payload_extraction() {
        let info = json!({
            "domain": "acme.com",
            "name": "Acme Robotics | Home",
            "title": "Robots that deliver",
            "description": "Trustworthy delivery robots with innovative navigation. Built for cities.",
            "longDescription": "Safety is our first value, quality our second.",
            "colors": [{"hex": "#FF8800"}, {"hex": "1A2B3C"}],
            "logos": [{"type": "logo", "theme": "light",
                       "formats": [{"src": "https://cdn/acme.png", "format": "png"}]}],
            "fonts": ["Space Grotesk"]
        });
        let profile = derive_brand_profile(&info, "fallback.net");
        assert_eq!(profile.domain, "acme.com");
        assert_eq!(profile.name, "Acme Robotics");
        assert_eq!(profile.tagline, "Robots that deliver");
        assert_eq!(profile.colors, vec!["#FF8800", "#1A2B3C"]);
        assert_eq!(profile.logo_url, "https://cdn/acme.png");
        assert_eq!(profile.typography, "Space Grotesk");
        assert_eq!(profile.product, "Trustworthy delivery robots with innovative navigation.");
        assert_eq!(profile.tone, "trustworthy, innovative");
        assert_eq!(profile.values, vec!["Innovation", "Quality", "Safety"]);
        // Strategy fields are untouched until the strategy step runs.
        assert!(profile.mission.is_empty());
        assert!(profile.promise.is_empty());
    }
}
