//! Creative concepts ("ideas") parsed from backend free text.
//!
//! The backend returns each concept as a loosely-formatted text block. The
//! parser is best-effort: it locates an "Idea N" header and the labeled
//! Storyline/Characters/Location blocks, and always keeps the original
//! text in `raw` so nothing is lost when a block cannot be found.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static IDEA_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*(?:\*\*)?\s*idea\s+\d+[ \t]*(?:\*\*)?[:\-–—]?[ \t]*(.*)$").unwrap()
});
static STORYLINE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*(?:\*\*)?storyline[ \t]*(?:\*\*)?:?[ \t]*(?:\*\*)?\s*").unwrap()
});
static CHARACTERS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*(?:\*\*)?characters[ \t]*(?:\*\*)?:?[ \t]*(?:\*\*)?\s*").unwrap()
});
static LOCATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*(?:\*\*)?location[ \t]*(?:\*\*)?:?[ \t]*(?:\*\*)?\s*").unwrap()
});
/// A capitalized header line ("Storyline:", "**Characters:**", …) bounds
/// the block that precedes it.
static NEXT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(?:\*\*)?[A-Z][A-Za-z ]{0,40}(?:\*\*)?\s*:").unwrap());
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:\d+[.)]|[-*•])\s*").unwrap());

/// A candidate creative idea for the generated video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Title from the "Idea N" header line.
    pub title: String,
    /// Storyline block, free text.
    pub storyline: String,
    /// Character names, one per line in the source, markers stripped.
    pub characters: Vec<String>,
    /// Location block, free text.
    pub location: String,
    /// The original unparsed text.
    pub raw: String,
}

impl Concept {
    /// Parse one backend text block. Blocks that cannot be located degrade
    /// to empty fields; `raw` always carries the input.
    pub fn parse(text: &str) -> Self {
        let title = IDEA_HEADER
            .captures(text)
            .map(|caps| {
                let rest = clean_inline(caps.get(1).map_or("", |m| m.as_str()));
                if rest.is_empty() {
                    clean_inline(caps.get(0).map_or("", |m| m.as_str()))
                } else {
                    rest
                }
            })
            .unwrap_or_default();

        let storyline = labeled_block(text, &STORYLINE_LABEL).unwrap_or_default();
        let location = labeled_block(text, &LOCATION_LABEL).unwrap_or_default();
        let characters = labeled_block(text, &CHARACTERS_LABEL)
            .map(|block| {
                block
                    .lines()
                    .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
                    .filter(|line| !line.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            title,
            storyline,
            characters,
            location,
            raw: text.to_string(),
        }
    }

    /// Pre-filled edit form for this concept. Pure — building the draft
    /// (any number of times) changes nothing.
    pub fn draft(&self) -> ConceptDraft {
        ConceptDraft {
            title: self.title.clone(),
            storyline: self.storyline.clone(),
            characters: self.characters.join("\n"),
            location: self.location.clone(),
        }
    }

    /// Overwrite this concept's fields from a confirmed draft. `raw` is
    /// left as the original backend text.
    pub fn apply_draft(&mut self, draft: &ConceptDraft) {
        self.title = draft.title.trim().to_string();
        self.storyline = draft.storyline.trim().to_string();
        self.characters = draft
            .characters
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        self.location = draft.location.trim().to_string();
    }
}

/// Editable form state for one concept, pre-filled from the selected entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptDraft {
    pub title: String,
    pub storyline: String,
    /// One character per line.
    pub characters: String,
    pub location: String,
}

/// Text of the block following `label`, bounded by the next capitalized
/// header line or end of text.
fn labeled_block(text: &str, label: &Regex) -> Option<String> {
    let found = label.find(text)?;
    let rest = &text[found.end()..];
    let end = NEXT_HEADER.find(rest).map_or(rest.len(), |m| m.start());
    let block = rest[..end].trim();
    if block.is_empty() {
        None
    } else {
        Some(block.to_string())
    }
}

fn clean_inline(text: &str) -> String {
    text.replace("**", "")
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "Idea 2: The Midnight Delivery\n\
        Storyline: A tired baker orders flour at 2am.\n\
        An Acme robot weaves through empty streets to deliver it.\n\
        Characters:\n\
        1. Maya, the baker\n\
        2. Unit 7, the delivery robot\n\
        Location: A rain-slicked downtown at night";

    #[test]
    fn parses_all_blocks() {
        let concept = Concept::parse(BLOCK);
        assert_eq!(concept.title, "The Midnight Delivery");
        assert!(concept.storyline.starts_with("A tired baker orders flour at 2am."));
        assert!(concept.storyline.contains("empty streets"));
        assert_eq!(
            concept.characters,
            vec!["Maya, the baker", "Unit 7, the delivery robot"]
        );
        assert_eq!(concept.location, "A rain-slicked downtown at night");
        assert_eq!(concept.raw, BLOCK);
    }

    #[test]
    fn storyline_stops_at_next_header() {
        let concept = Concept::parse(BLOCK);
        assert!(!concept.storyline.contains("Characters"));
        assert!(!concept.storyline.contains("Maya"));
    }

    #[test]
    fn bold_headers_and_bullets() {
        let text = "**Idea 1:** Launch Day\n\
            **Storyline:** Doors open.\n\
            **Characters:**\n\
            - The founder\n\
            * The first customer\n\
            **Location:** A garage";
        let concept = Concept::parse(text);
        assert_eq!(concept.title, "Launch Day");
        assert_eq!(concept.storyline, "Doors open.");
        assert_eq!(concept.characters, vec!["The founder", "The first customer"]);
        assert_eq!(concept.location, "A garage");
    }

    #[test]
    fn unparseable_text_degrades_to_raw_only() {
        let text = "a stream of consciousness with no structure at all";
        let concept = Concept::parse(text);
        assert!(concept.title.is_empty());
        assert!(concept.storyline.is_empty());
        assert!(concept.characters.is_empty());
        assert!(concept.location.is_empty());
        assert_eq!(concept.raw, text);
    }

    #[test]
    fn header_without_subtitle_keeps_idea_label() {
        let concept = Concept::parse("Idea 3\nStoryline: Something happens.");
        assert_eq!(concept.title, "Idea 3");
        assert_eq!(concept.storyline, "Something happens.");
    }

    #[test]
    fn draft_round_trip_is_lossless() {
        let concept = Concept::parse(BLOCK);
        let mut edited = concept.clone();
        edited.apply_draft(&concept.draft());
        assert_eq!(edited, concept);
    }

    #[test]
    fn apply_draft_overwrites_fields_in_place() {
        let mut concept = Concept::parse(BLOCK);
        let mut draft = concept.draft();
        draft.title = "The Dawn Delivery".to_string();
        draft.characters = "Maya\n\nUnit 8\n".to_string();
        concept.apply_draft(&draft);
        assert_eq!(concept.title, "The Dawn Delivery");
        assert_eq!(concept.characters, vec!["Maya", "Unit 8"]);
        // Raw text is untouched by edits.
        assert_eq!(concept.raw, BLOCK);
    }
}
