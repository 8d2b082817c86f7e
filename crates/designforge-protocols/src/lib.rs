//! # DesignForge Protocols
//!
//! Core protocol definitions for DesignForge.
//! Contains the shared data model and interface definitions - no vendor code.
//!
//! ## Core Traits
//!
//! - [`DesignProvider`] - Trait implemented by every AI vendor adapter
//!
//! ## Data Model
//!
//! - [`AnalysisResult`] / [`Element`] - Output of the analyze phase
//! - [`Design`] - One generated HTML/CSS variation
//! - [`ImageData`] - Uploaded design image
//! - [`ProviderId`] / [`ModelDescriptor`] - Vendor identity and model catalog

pub mod error;
pub mod provider;
pub mod types;

pub use error::{ErrorKind, ProviderError};
pub use provider::{DesignProvider, ModelDescriptor, ProviderId};
pub use types::*;
