//! Error types for the DesignForge protocol layer.

mod provider;

pub use provider::*;
