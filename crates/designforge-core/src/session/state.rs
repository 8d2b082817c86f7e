//! Session state.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use designforge_protocols::{AnalysisResult, Design, ImageData};

/// Workflow phase. Each phase has its own in-flight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Analysis,
    Generation,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Analysis => f.write_str("Analysis"),
            Self::Generation => f.write_str("Generation"),
        }
    }
}

/// Model chosen for each phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedModels {
    pub analysis: Option<String>,
    pub generation: Option<String>,
}

impl SelectedModels {
    pub fn get(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Analysis => self.analysis.as_deref(),
            Phase::Generation => self.generation.as_deref(),
        }
    }

    /// Set the model for `phase`; an empty id clears it.
    pub fn set(&mut self, phase: Phase, model_id: &str) {
        let value = (!model_id.is_empty()).then(|| model_id.to_string());
        match phase {
            Phase::Analysis => self.analysis = value,
            Phase::Generation => self.generation = value,
        }
    }
}

/// Everything one design session knows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub original_image: Option<ImageData>,
    pub analysis_result: Option<AnalysisResult>,
    pub generated_designs: Vec<Design>,
    pub current_prompt: String,
    pub selected_models: SelectedModels,
    pub is_analyzing: bool,
    pub is_generating: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn design(&self, id: Uuid) -> Option<&Design> {
        self.generated_designs.iter().find(|d| d.id == id)
    }

    pub fn in_flight(&self, phase: Phase) -> bool {
        match phase {
            Phase::Analysis => self.is_analyzing,
            Phase::Generation => self.is_generating,
        }
    }

    pub(crate) fn set_in_flight(&mut self, phase: Phase, value: bool) {
        match phase {
            Phase::Analysis => self.is_analyzing = value,
            Phase::Generation => self.is_generating = value,
        }
    }
}
