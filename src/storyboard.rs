//! The generated storyboard and its placeholder fallback.

use serde::{Deserialize, Serialize};

use crate::config::PlaceholderConfig;

/// One storyboard entry visualizing a scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    #[serde(default)]
    pub scene_number: u32,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub visual_description: String,
    #[serde(default)]
    pub image_prompt: String,
    #[serde(default)]
    pub image_url: String,
}

/// The full storyboard, replaced wholesale by each generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Storyboard {
    #[serde(default)]
    pub shots: Vec<Shot>,
}

impl Storyboard {
    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Deterministic placeholder storyboard used when the backend returns
    /// no shots. Size and image paths come from configuration.
    pub fn placeholder(config: &PlaceholderConfig) -> Self {
        let shots = (1..=config.count)
            .map(|n| Shot {
                scene_number: n as u32,
                timestamp: String::new(),
                visual_description: format!("Storyboard frame {n}"),
                image_prompt: String::new(),
                image_url: config.image_template.replace("{n}", &n.to_string()),
            })
            .collect();
        Self { shots }
    }
}
