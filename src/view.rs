//! Pure projection of wizard state into renderable view models.
//!
//! Nothing here touches the terminal or the network, so the extractor and
//! parsers can be exercised end to end without a rendering environment.

use std::sync::LazyLock;

use regex::Regex;

use crate::wizard::{WizardState, WizardStep};

static NUMBERED_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Notification severity, mirroring the front end's toast levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Renderable projection of one wizard step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub title: String,
    pub lines: Vec<String>,
}

/// Project the session's current step into a view model. Empty fields and
/// lists render as placeholder text or are skipped, never as errors.
pub fn step_view(state: &WizardState) -> StepView {
    let step = state.step;
    let lines = match step {
        WizardStep::Intake => vec!["Enter a website URL to begin.".to_string()],
        WizardStep::Brand => brand_lines(state),
        WizardStep::Concepts => concept_lines(state),
        WizardStep::Script => script_lines(state),
        WizardStep::Storyboard => storyboard_lines(state),
        WizardStep::Video => video_lines(state),
    };
    StepView {
        title: format!("Step {} — {}", step.index() + 1, step.title()),
        lines,
    }
}

fn labeled(label: &str, value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(format!("{label}: {}", strip_emphasis(value)))
    }
}

fn brand_lines(state: &WizardState) -> Vec<String> {
    let profile = &state.profile;
    if profile.name.is_empty() && profile.domain.is_empty() {
        return vec!["No brand profile yet — submit a URL first.".to_string()];
    }

    let mut lines = Vec::new();
    lines.extend(labeled("Name", &profile.name));
    lines.extend(labeled("Domain", &profile.domain));
    lines.extend(labeled("Tagline", &profile.tagline));
    lines.extend(labeled("Product", &profile.product));
    lines.extend(labeled("Tone", &profile.tone));
    if !profile.values.is_empty() {
        lines.push(format!("Values: {}", profile.values.join(", ")));
    }
    if !profile.colors.is_empty() {
        lines.push(format!("Palette: {}", profile.colors.join(" ")));
    }
    lines.extend(labeled("Typography", &profile.typography));
    lines.extend(labeled("Logo", &profile.logo_url));
    lines.extend(labeled("Mission", &profile.mission));
    lines.extend(labeled("Audience", &profile.audience));
    lines.extend(labeled("Differentiator", &profile.differentiator));
    lines.extend(labeled("Promise", &profile.promise));
    lines
}

fn concept_lines(state: &WizardState) -> Vec<String> {
    if state.concepts.is_empty() {
        return vec!["No concepts generated yet.".to_string()];
    }

    let mut lines = Vec::new();
    for (index, concept) in state.concepts.iter().enumerate() {
        let marker = if state.selected_concept == Some(index) {
            "▸"
        } else {
            " "
        };
        let title = if concept.title.is_empty() {
            format!("Concept {}", index + 1)
        } else {
            concept.title.clone()
        };
        lines.push(format!("{marker} {}. {title}", index + 1));
        if !concept.storyline.is_empty() {
            lines.push(format!("     {}", strip_emphasis(&concept.storyline)));
        }
        if !concept.characters.is_empty() {
            lines.push(format!("     Characters: {}", concept.characters.join(", ")));
        }
        if !concept.location.is_empty() {
            lines.push(format!("     Location: {}", concept.location));
        }
    }
    lines
}

fn script_lines(state: &WizardState) -> Vec<String> {
    if state.script.is_empty() {
        return vec!["No script generated yet.".to_string()];
    }

    let mut lines = Vec::new();
    for scene in &state.script.scenes {
        lines.push(format!(
            "Scene {} [{} - {}] {}",
            scene.scene_number, scene.timestamp_start, scene.timestamp_end, scene.setting
        ));
        if !scene.visual_description.is_empty() {
            lines.push(format!("   Visual: {}", scene.visual_description));
        }
        if !scene.text_on_screen.is_empty() {
            lines.push(format!("   On screen: {}", scene.text_on_screen));
        }
        if !scene.audio_cue.is_empty() {
            lines.push(format!("   Audio: {}", scene.audio_cue));
        }
    }
    lines
}

fn storyboard_lines(state: &WizardState) -> Vec<String> {
    if state.storyboard.is_empty() {
        return vec!["No storyboard generated yet.".to_string()];
    }

    state
        .storyboard
        .shots
        .iter()
        .map(|shot| {
            let mut line = format!("Shot {}", shot.scene_number);
            if !shot.timestamp.is_empty() {
                line.push_str(&format!(" [{}]", shot.timestamp));
            }
            if !shot.visual_description.is_empty() {
                line.push_str(&format!(" {}", shot.visual_description));
            }
            if !shot.image_url.is_empty() {
                line.push_str(&format!(" → {}", shot.image_url));
            }
            line
        })
        .collect()
}

fn video_lines(state: &WizardState) -> Vec<String> {
    if state.video_url.is_empty() {
        vec!["No video generated yet.".to_string()]
    } else {
        vec![format!("Your video is ready: {}", state.video_url)]
    }
}

/// Strip inline `**bold**` / `*emphasis*` markers for terminal display.
pub fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

/// Items of a numbered list embedded in free text: lines starting with
/// `N.` with the marker stripped. Non-list lines are ignored.
pub fn numbered_list_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| NUMBERED_LINE.is_match(line))
        .map(|line| NUMBERED_LINE.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}
