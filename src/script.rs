//! The generated video script and user edits to it.

use serde::{Deserialize, Serialize};

/// One row of the generated script.
///
/// Every field tolerates absence in the backend payload; a missing field
/// renders as empty rather than failing the parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub scene_number: u32,
    #[serde(default)]
    pub timestamp_start: String,
    #[serde(default)]
    pub timestamp_end: String,
    #[serde(default)]
    pub setting: String,
    #[serde(default)]
    pub visual_description: String,
    #[serde(default)]
    pub text_on_screen: String,
    #[serde(default)]
    pub audio_cue: String,
}

/// The full script, replaced wholesale by each generation call.
///
/// Serializes as `{"script": [...]}` to match the backend's envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(rename = "script", default)]
    pub scenes: Vec<Scene>,
}

impl Script {
    /// Whether any scenes have been generated.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

/// A user edit to one scene. `None` fields keep the current value.
#[derive(Debug, Clone, Default)]
pub struct SceneEdit {
    pub setting: Option<String>,
    pub visual_description: Option<String>,
    pub text_on_screen: Option<String>,
    pub audio_cue: Option<String>,
}

impl Scene {
    /// Apply a user edit in place.
    pub fn apply_edit(&mut self, edit: &SceneEdit) {
        if let Some(setting) = &edit.setting {
            self.setting = setting.clone();
        }
        if let Some(visual) = &edit.visual_description {
            self.visual_description = visual.clone();
        }
        if let Some(text) = &edit.text_on_screen {
            self.text_on_screen = text.clone();
        }
        if let Some(audio) = &edit.audio_cue {
            self.audio_cue = audio.clone();
        }
    }
}
