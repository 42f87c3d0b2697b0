//! Wizard steps — the linear navigation state machine.

use serde::{Deserialize, Serialize};

/// The six steps of the wizard.
///
/// Progresses linearly: Intake → Brand → Concepts → Script → Storyboard →
/// Video. Transitions move forward or backward by exactly one step;
/// out-of-range targets are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Intake,
    Brand,
    Concepts,
    Script,
    Storyboard,
    Video,
}

/// Status phrases shown while a forward action is in flight, indexed by
/// the target step.
const STATUS_PHRASES: [&str; 6] = [
    "Warming up the studio",
    "Analyzing your website",
    "Brainstorming creative concepts",
    "Writing your script",
    "Sketching the storyboard",
    "Rendering your video",
];

impl WizardStep {
    /// Zero-based position in the flow.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        use WizardStep::*;
        [Intake, Brand, Concepts, Script, Storyboard, Video]
            .get(index)
            .copied()
    }

    /// The next step in the linear progression, if any.
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_index(self.index() + 1)
    }

    /// The previous step, if any.
    pub fn prev(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Whether this step is the end of the flow.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Video)
    }

    /// Display title for the step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Intake => "Website",
            Self::Brand => "Brand profile",
            Self::Concepts => "Creative concepts",
            Self::Script => "Script",
            Self::Storyboard => "Storyboard",
            Self::Video => "Video",
        }
    }
}

/// Status phrase for an in-flight action targeting the given step index.
/// Indices past the table clamp to its last entry.
pub fn status_phrase(target_index: usize) -> &'static str {
    STATUS_PHRASES[target_index.min(STATUS_PHRASES.len() - 1)]
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Intake
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Intake => "intake",
            Self::Brand => "brand",
            Self::Concepts => "concepts",
            Self::Script => "script",
            Self::Storyboard => "storyboard",
            Self::Video => "video",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_all_steps() {
        use WizardStep::*;
        let expected = [Brand, Concepts, Script, Storyboard, Video];
        let mut current = Intake;
        for expected_next in expected {
            let next = current.next().unwrap();
            assert_eq!(next, expected_next);
            assert_eq!(next.index(), current.index() + 1);
            current = next;
        }
        assert!(current.next().is_none());
    }

    #[test]
    fn prev_walks_back_to_intake() {
        use WizardStep::*;
        assert_eq!(Video.prev(), Some(Storyboard));
        assert_eq!(Brand.prev(), Some(Intake));
        assert!(Intake.prev().is_none());
    }

    #[test]
    fn from_index_round_trips() {
        for index in 0..6 {
            let step = WizardStep::from_index(index).unwrap();
            assert_eq!(step.index(), index);
        }
        assert!(WizardStep::from_index(6).is_none());
    }

    #[test]
    fn is_terminal_only_at_video() {
        assert!(WizardStep::Video.is_terminal());
        assert!(!WizardStep::Storyboard.is_terminal());
        assert!(!WizardStep::Intake.is_terminal());
    }

    #[test]
    fn status_phrase_clamps_out_of_range_targets() {
        assert_eq!(status_phrase(1), "Analyzing your website");
        assert_eq!(status_phrase(5), "Rendering your video");
        assert_eq!(status_phrase(6), "Rendering your video");
        assert_eq!(status_phrase(100), "Rendering your video");
    }

    #[test]
    fn display_matches_serde() {
        use WizardStep::*;
        for step in [Intake, Brand, Concepts, Script, Storyboard, Video] {
            let display = format!("{step}");
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(format!("\"{display}\""), json);
        }
    }
}
