//! Wizard session state.

use serde::{Deserialize, Serialize};

use crate::brand::BrandProfile;
use crate::concept::Concept;
use crate::script::Script;
use crate::storyboard::Storyboard;

use super::step::WizardStep;

/// Everything one wizard session holds.
///
/// A single instance lives for the session, owned and mutated only by the
/// controller; never persisted across runs. Invariant: whenever `concepts`
/// is non-empty, exactly one of them is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: WizardStep,
    pub profile: BrandProfile,
    pub concepts: Vec<Concept>,
    pub selected_concept: Option<usize>,
    pub script: Script,
    pub storyboard: Storyboard,
    pub video_url: String,
}

impl WizardState {
    /// Replace the concepts list wholesale, resetting the selection to the
    /// first entry (or to none when the new list is empty).
    pub fn replace_concepts(&mut self, concepts: Vec<Concept>) {
        self.selected_concept = if concepts.is_empty() { None } else { Some(0) };
        self.concepts = concepts;
    }

    /// The currently selected concept, if any.
    pub fn selected(&self) -> Option<&Concept> {
        self.selected_concept
            .and_then(|index| self.concepts.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(title: &str) -> Concept {
        Concept {
            title: title.to_string(),
            ..Concept::default()
        }
    }

    #[test]
    fn replacement_resets_selection_to_first() {
        let mut state = WizardState::default();
        state.replace_concepts(vec![concept("a"), concept("b")]);
        state.selected_concept = Some(1);

        state.replace_concepts(vec![concept("c")]);
        assert_eq!(state.selected_concept, Some(0));
        assert_eq!(state.selected().unwrap().title, "c");
    }

    #[test]
    fn empty_replacement_clears_selection() {
        let mut state = WizardState::default();
        state.replace_concepts(vec![concept("a")]);
        assert_eq!(state.selected_concept, Some(0));

        state.replace_concepts(Vec::new());
        assert_eq!(state.selected_concept, None);
        assert!(state.selected().is_none());
    }

    #[test]
    fn default_state_is_empty_at_intake() {
        let state = WizardState::default();
        assert_eq!(state.step, WizardStep::Intake);
        assert!(state.concepts.is_empty());
        assert!(state.selected_concept.is_none());
        assert!(state.script.is_empty());
        assert!(state.storyboard.is_empty());
        assert!(state.video_url.is_empty());
    }
}
