//! Depo Domain Layer
//!
//! This crate contains the data model shared by every other layer: the
//! structured findings extracted from a deposition transcript, and the trait
//! seam through which the extraction service is reached.
//!
//! ## Key Concepts
//!
//! - **KeyFact**: a statement or admission tied to a witness
//! - **Exhibit**: a referenced exhibit label and description
//! - **Objection**: an objection with a closed-set [`Ruling`]
//! - **AnalysisResult**: the three ordered sequences above, owned as one value
//! - **pageLine**: an opaque locator string, never parsed
//!
//! ## Architecture
//!
//! - Pure data plus serialization derives
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod model;
pub mod traits;

// Re-exports for convenience
pub use model::{AnalysisResult, Exhibit, KeyFact, Objection, Ruling};
pub use traits::{GenerationRequest, LlmProvider, DEFAULT_TEMPERATURE};
