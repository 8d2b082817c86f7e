//! Session controller.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

use designforge_protocols::{AnalysisResult, Design, DesignProvider, ImageData, ProviderError};

use super::credentials::Credentials;
use super::state::{Phase, SelectedModels, SessionState};
use crate::prompts::expansion_request;
use crate::registry::ProviderRegistry;
use crate::resolver::ProviderResolver;

/// Designs produced per generate call.
pub const DEFAULT_DESIGN_COUNT: usize = 3;

const ANALYZE_PRECONDITION: &str = "Please select an image and a model for analysis";
const GENERATE_PRECONDITION: &str = "Please complete analysis and select a generation model";

/// Drives one design session through its transitions.
///
/// The state lock is never held across an `.await`; the per-phase in-flight
/// flags serialize transitions of the same phase.
pub struct SessionController {
    state: RwLock<SessionState>,
    registry: Arc<ProviderRegistry>,
    resolver: ProviderResolver,
    credentials: RwLock<Credentials>,
    design_count: usize,
    /// Bumped by `reset`; results from an older epoch are discarded.
    epoch: AtomicU64,
}

impl SessionController {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            registry,
            resolver: ProviderResolver::default(),
            credentials: RwLock::new(Credentials::default()),
            design_count: DEFAULT_DESIGN_COUNT,
            epoch: AtomicU64::new(0),
        }
    }

    pub fn with_resolver(mut self, resolver: ProviderResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_credentials(self, credentials: Credentials) -> Self {
        *self.credentials.write() = credentials;
        self
    }

    pub fn with_design_count(mut self, count: usize) -> Self {
        self.design_count = count;
        self
    }

    pub fn design_count(&self) -> usize {
        self.design_count
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.read().clone()
    }

    pub fn set_credentials(&self, credentials: Credentials) {
        *self.credentials.write() = credentials;
    }

    pub fn set_image(&self, image: ImageData) {
        self.state.write().original_image = Some(image);
    }

    pub fn set_prompt(&self, prompt: impl Into<String>) {
        self.state.write().current_prompt = prompt.into();
    }

    pub fn select_model(&self, phase: Phase, model_id: &str) {
        self.state.write().selected_models.set(phase, model_id);
    }

    /// Seed model selections from configured defaults.
    pub fn apply_default_models(&self, defaults: &SelectedModels) {
        let mut state = self.state.write();
        if let Some(model) = &defaults.analysis {
            state.selected_models.set(Phase::Analysis, model);
        }
        if let Some(model) = &defaults.generation {
            state.selected_models.set(Phase::Generation, model);
        }
    }

    /// Return to the state of a freshly constructed session.
    pub fn reset(&self) {
        let mut state = self.state.write();
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *state = SessionState::default();
        info!("Session reset");
    }

    /// Describe the current image with the selected analysis model.
    ///
    /// On success the analysis is replaced; on failure it is left as it was.
    pub async fn analyze(&self) -> Result<AnalysisResult, ProviderError> {
        let (image, model_id, guard) = {
            let mut state = self.state.write();
            let guard = self.begin(&mut state, Phase::Analysis)?;
            let ready = state
                .original_image
                .clone()
                .zip(state.selected_models.analysis.clone());
            drop(state);
            match ready {
                Some((image, model)) => (image, model, guard),
                None => return Err(self.precondition(guard, ANALYZE_PRECONDITION)),
            }
        };

        info!(model = %model_id, "Analyzing image");
        let outcome = match self.dispatch(&model_id) {
            Ok((provider, api_key)) => provider.analyze(&image, &model_id, &api_key).await,
            Err(e) => Err(e),
        };

        self.commit(guard, outcome, "Failed to analyze image", |state, analysis| {
            state.analysis_result = Some(analysis.clone());
        })
    }

    /// Generate a fresh batch of designs from the current analysis and prompt.
    ///
    /// On success the designs list is replaced; on failure it is left as it was.
    pub async fn generate(&self) -> Result<Vec<Design>, ProviderError> {
        let (analysis, model_id, prompt, guard) = {
            let mut state = self.state.write();
            let guard = self.begin(&mut state, Phase::Generation)?;
            let ready = state
                .analysis_result
                .clone()
                .zip(state.selected_models.generation.clone());
            let prompt = state.current_prompt.clone();
            drop(state);
            match ready {
                Some((analysis, model)) => (analysis, model, prompt, guard),
                None => return Err(self.precondition(guard, GENERATE_PRECONDITION)),
            }
        };

        info!(model = %model_id, count = self.design_count, "Generating designs");
        let outcome = match self.dispatch(&model_id) {
            Ok((provider, api_key)) => {
                provider
                    .generate(&analysis, &prompt, self.design_count, &model_id, &api_key)
                    .await
            }
            Err(e) => Err(e),
        };

        self.commit(guard, outcome, "Failed to generate designs", |state, designs| {
            state.generated_designs = designs.clone();
        })
    }

    /// Generate one new design building on an existing one and append it.
    pub async fn expand(&self, design_id: Uuid, directions: &str) -> Result<Design, ProviderError> {
        let (analysis, model_id, request, guard) = {
            let mut state = self.state.write();
            let guard = self.begin(&mut state, Phase::Generation)?;
            let ready = state
                .analysis_result
                .clone()
                .zip(state.selected_models.generation.clone());
            let source = state.design(design_id).cloned();
            drop(state);
            match (ready, source) {
                (Some((analysis, model)), Some(source)) => {
                    (analysis, model, expansion_request(&source, directions), guard)
                }
                (Some(_), None) => {
                    let message = format!("Design not found: {}", design_id);
                    return Err(self.precondition(guard, &message));
                }
                (None, _) => return Err(self.precondition(guard, GENERATE_PRECONDITION)),
            }
        };

        info!(model = %model_id, design = %design_id, "Expanding design");
        let outcome = match self.dispatch(&model_id) {
            Ok((provider, api_key)) => provider
                .generate(&analysis, &request, 1, &model_id, &api_key)
                .await
                .and_then(|designs| {
                    designs.into_iter().next().ok_or_else(|| {
                        ProviderError::InvalidRequest("Provider returned no design".to_string())
                    })
                }),
            Err(e) => Err(e),
        };

        self.commit(guard, outcome, "Failed to expand design", |state, design| {
            state.generated_designs.push(design.clone());
        })
    }

    /// Resolve the provider for a model and fetch its credential.
    ///
    /// Fails before any network call when either is missing.
    fn dispatch(&self, model_id: &str) -> Result<(Arc<dyn DesignProvider>, String), ProviderError> {
        let provider_id = self.resolver.resolve(model_id)?;
        let api_key = self
            .credentials
            .read()
            .get(provider_id)
            .map(String::from)
            .ok_or(ProviderError::MissingCredential(provider_id))?;
        let provider = self.registry.require(provider_id)?;
        Ok((provider, api_key))
    }

    /// Claim a phase: reject if in flight, otherwise clear the error and set the flag.
    fn begin(&self, state: &mut SessionState, phase: Phase) -> Result<PhaseGuard<'_>, ProviderError> {
        if state.in_flight(phase) {
            debug!(%phase, "Transition rejected, phase in flight");
            return Err(ProviderError::InFlight(phase.to_string()));
        }
        state.error = None;
        state.set_in_flight(phase, true);
        Ok(PhaseGuard {
            controller: self,
            phase,
            epoch: self.epoch.load(Ordering::SeqCst),
        })
    }

    /// Record an unmet precondition. Stored without a phase prefix.
    fn precondition(&self, guard: PhaseGuard<'_>, message: &str) -> ProviderError {
        let mut state = self.state.write();
        if guard.is_current() {
            state.error = Some(message.to_string());
        }
        drop(state);
        drop(guard);
        ProviderError::InvalidRequest(message.to_string())
    }

    /// Apply the outcome of a transition, unless a reset happened meanwhile.
    fn commit<T>(
        &self,
        guard: PhaseGuard<'_>,
        outcome: Result<T, ProviderError>,
        prefix: &str,
        apply: impl FnOnce(&mut SessionState, &T),
    ) -> Result<T, ProviderError> {
        {
            let mut state = self.state.write();
            if !guard.is_current() {
                debug!(phase = %guard.phase, "Discarding result from before reset");
            } else {
                match &outcome {
                    Ok(value) => apply(&mut state, value),
                    Err(e) => {
                        warn!(phase = %guard.phase, kind = ?e.kind(), "{}: {}", prefix, e);
                        state.error = Some(format!("{}: {}", prefix, e));
                    }
                }
            }
        }
        drop(guard);
        outcome
    }
}

/// Clears a phase's in-flight flag when the transition ends, however it ends.
struct PhaseGuard<'a> {
    controller: &'a SessionController,
    phase: Phase,
    epoch: u64,
}

impl PhaseGuard<'_> {
    fn is_current(&self) -> bool {
        self.controller.epoch.load(Ordering::SeqCst) == self.epoch
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.controller.state.write();
        if self.is_current() {
            state.set_in_flight(self.phase, false);
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
