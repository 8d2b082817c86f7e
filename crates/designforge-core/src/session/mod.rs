//! Analyze → generate → expand workflow.
//!
//! A [`SessionController`] owns one [`SessionState`]. Callers read snapshots
//! and drive the workflow through named transitions; every transition reports
//! its outcome both as a return value and in the state's `error` field.

mod controller;
mod credentials;
mod state;

pub use controller::SessionController;
pub use credentials::Credentials;
pub use state::{Phase, SelectedModels, SessionState};
