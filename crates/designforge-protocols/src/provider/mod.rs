//! Design provider protocol definitions.
//!
//! Providers connect to AI vendor APIs (Google, Anthropic, OpenAI) and expose
//! the analyze and generate capabilities.

mod traits;
mod model;

pub use traits::*;
pub use model::*;
