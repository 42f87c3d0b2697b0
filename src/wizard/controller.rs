//! The wizard controller — owns the session state and orchestrates one
//! backend call sequence per forward transition.
//!
//! Single-writer discipline: all mutation happens synchronously inside a
//! controller method, after the backend call(s) for that action have
//! succeeded. A failed action leaves the state exactly as it was.

use std::sync::Arc;

use crate::backend::StudioBackend;
use crate::brand::{BrandProfile, derive_brand_profile, parse_strategy};
use crate::concept::{Concept, ConceptDraft};
use crate::config::StudioConfig;
use crate::error::BackendError;
use crate::script::{SceneEdit, Script};
use crate::storyboard::Storyboard;

use super::state::WizardState;
use super::step::{WizardStep, status_phrase};

/// Receives loading-indicator signals around every in-flight action.
///
/// `finished` is guaranteed on both the success and the failure path of
/// the action that called `started`.
pub trait ProgressSink: Send + Sync {
    fn started(&self, phrase: &str);
    fn finished(&self);
}

/// Sink that ignores all signals.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn started(&self, _phrase: &str) {}
    fn finished(&self) {}
}

/// Outcome of a URL submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// The URL was blank — rejected locally, no network call made. The
    /// view should return focus to the input.
    EmptyUrl,
    /// Analysis completed and the wizard advanced to the brand step.
    Analyzed,
}

/// State change produced by a successful step-exit action, applied only
/// after every backend call for the action has succeeded.
enum StepUpdate {
    None,
    Concepts(Vec<Concept>),
    Script(Script),
    Storyboard(Storyboard),
    Video(String),
}

/// Owns the session state and the backend seam.
pub struct WizardController {
    backend: Arc<dyn StudioBackend>,
    progress: Arc<dyn ProgressSink>,
    config: StudioConfig,
    state: WizardState,
}

impl WizardController {
    pub fn new(backend: Arc<dyn StudioBackend>, config: StudioConfig) -> Self {
        Self {
            backend,
            progress: Arc::new(NullProgress),
            config,
            state: WizardState::default(),
        }
    }

    /// Attach a progress sink for loading-indicator signals.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Read-only snapshot of the session state.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Intake action: analyze the URL, derive the brand profile, refine it
    /// with the brand strategy, then advance to the brand step.
    ///
    /// A blank URL is rejected locally — no network call, not an error.
    pub async fn submit_url(&mut self, url: &str) -> Result<IntakeOutcome, BackendError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(IntakeOutcome::EmptyUrl);
        }

        self.progress
            .started(status_phrase(WizardStep::Brand.index()));
        let result = self.run_intake(url).await;
        self.progress.finished();

        match result {
            Ok(profile) => {
                self.state.profile = profile;
                self.state.step = WizardStep::Brand;
                tracing::info!(domain = %self.state.profile.domain, "Intake complete");
                Ok(IntakeOutcome::Analyzed)
            }
            Err(e) => {
                tracing::warn!(endpoint = e.endpoint(), "Intake abandoned: {e}");
                Err(e)
            }
        }
    }

    async fn run_intake(&self, url: &str) -> Result<BrandProfile, BackendError> {
        let analysis = self.backend.analyze_url(url).await?;
        let fallback_domain = if analysis.domain.trim().is_empty() {
            host_of(url)
        } else {
            analysis.domain.clone()
        };

        let mut profile = derive_brand_profile(&analysis.company_info, &fallback_domain);
        let strategy_text = self.backend.brand_strategy().await?;
        parse_strategy(&strategy_text).apply_to(&mut profile);
        Ok(profile)
    }

    /// Forward transition: perform the exit action for the current step,
    /// then move forward one. A retry of a failed transition repeats the
    /// same action. No-op at Intake (the intake action is the distinct
    /// entry point) and at Video (out of range).
    pub async fn advance(&mut self) -> Result<(), BackendError> {
        let from = self.state.step;
        let Some(target) = from.next() else {
            return Ok(());
        };
        if from == WizardStep::Intake {
            return Ok(());
        }

        self.progress.started(status_phrase(target.index()));
        let result = self.step_exit_action(from).await;
        self.progress.finished();

        match result {
            Ok(update) => {
                self.apply(update);
                self.state.step = target;
                tracing::info!(step = %target, "Advanced");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    step = %from,
                    endpoint = e.endpoint(),
                    "Forward transition abandoned: {e}"
                );
                Err(e)
            }
        }
    }

    async fn step_exit_action(&self, from: WizardStep) -> Result<StepUpdate, BackendError> {
        match from {
            WizardStep::Brand => {
                let blocks = self.backend.creative_concepts().await?;
                Ok(StepUpdate::Concepts(
                    blocks.iter().map(|b| Concept::parse(&b.content)).collect(),
                ))
            }
            WizardStep::Concepts => {
                if let (Some(index), Some(concept)) =
                    (self.state.selected_concept, self.state.selected())
                {
                    // Concept ids on the wire are 1-based.
                    self.backend.select_concept(index + 1, &concept.raw).await?;
                }
                let script = self.backend.generate_script().await?;
                Ok(StepUpdate::Script(script))
            }
            WizardStep::Script => {
                if !self.state.script.is_empty() {
                    self.backend.update_script(&self.state.script).await?;
                }
                let shots = self.backend.generate_storyboard().await?;
                let storyboard = if shots.is_empty() {
                    Storyboard::placeholder(&self.config.placeholder)
                } else {
                    Storyboard { shots }
                };
                Ok(StepUpdate::Storyboard(storyboard))
            }
            WizardStep::Storyboard => {
                let video_url = self.backend.generate_video().await?;
                Ok(StepUpdate::Video(video_url))
            }
            WizardStep::Intake | WizardStep::Video => Ok(StepUpdate::None),
        }
    }

    fn apply(&mut self, update: StepUpdate) {
        match update {
            StepUpdate::None => {}
            StepUpdate::Concepts(concepts) => self.state.replace_concepts(concepts),
            StepUpdate::Script(script) => self.state.script = script,
            StepUpdate::Storyboard(storyboard) => self.state.storyboard = storyboard,
            StepUpdate::Video(url) => self.state.video_url = url,
        }
    }

    /// Backward transition: move one step back. Never touches the network
    /// and never discards loaded data. No-op at Intake.
    pub fn back(&mut self) {
        if let Some(prev) = self.state.step.prev() {
            self.state.step = prev;
        }
    }

    /// Select a concept by index. Out-of-range indices are ignored.
    pub fn select_concept(&mut self, index: usize) {
        if index < self.state.concepts.len() {
            self.state.selected_concept = Some(index);
        }
    }

    /// Pre-filled edit form for the selected concept, if any. Pure —
    /// re-opening the form without applying changes nothing.
    pub fn edit_form(&self) -> Option<ConceptDraft> {
        self.state.selected().map(Concept::draft)
    }

    /// Overwrite the selected concept's fields from a confirmed edit
    /// form. No network call.
    pub fn apply_edit(&mut self, draft: &ConceptDraft) {
        if let Some(index) = self.state.selected_concept {
            if let Some(concept) = self.state.concepts.get_mut(index) {
                concept.apply_draft(draft);
            }
        }
    }

    /// Regenerate the concepts from optional free-text feedback: replaces
    /// the whole list and resets the selection, exactly like the initial
    /// fetch — even when the new list comes back empty.
    pub async fn regenerate(&mut self, feedback: &str) -> Result<(), BackendError> {
        self.progress
            .started(status_phrase(WizardStep::Concepts.index()));
        let result = self.backend.regenerate_concepts(feedback).await;
        self.progress.finished();

        match result {
            Ok(blocks) => {
                self.state.replace_concepts(
                    blocks.iter().map(|b| Concept::parse(&b.content)).collect(),
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(endpoint = e.endpoint(), "Concept regeneration abandoned: {e}");
                Err(e)
            }
        }
    }

    /// Apply a user edit to one scene of the held script; persisted on the
    /// next forward transition. Out-of-range indices are ignored.
    pub fn update_scene(&mut self, index: usize, edit: &SceneEdit) {
        if let Some(scene) = self.state.script.scenes.get_mut(index) {
            scene.apply_edit(edit);
        }
    }

    /// Restart: back to intake with empty state.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
    }
}

/// Host portion of a raw URL, tolerating a missing scheme.
fn host_of(raw: &str) -> String {
    if let Ok(parsed) = url::Url::parse(raw) {
        if let Some(host) = parsed.host_str() {
            return host.to_string();
        }
    }
    raw.trim()
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .split('/')
        .next()
        .unwrap_or("")
        .to_string()
}
