//! Depo Extractor
//!
//! Turns deposition transcript text into a validated [`AnalysisResult`] by way
//! of a structured-generation service.
//!
//! # Architecture
//!
//! ```text
//! InputDocument → TextExtractor → text → AnalysisClient → LLM → JSON
//!                                                            │
//!                               AnalysisResult ← schema check ┘
//! ```
//!
//! The response schema declared in [`schema`] is both sent with the request
//! and enforced on the reply; anything that does not conform is rejected as
//! [`AnalysisError::InvalidResponse`].
//!
//! # Example Usage
//!
//! ```no_run
//! use depo_extractor::{AnalysisClient, AnalyzerConfig, Session};
//! use depo_ingest::{InputDocument, MediaType};
//! use depo_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AnalysisClient::new(MockProvider::default(), AnalyzerConfig::default())?;
//! let mut session = Session::new(client);
//!
//! let document = InputDocument::new("Q. State your name.\nA. Jane Roe.", MediaType::PlainText);
//! let result = session.analyze_document(document).await?;
//!
//! println!("Key facts: {}", result.key_facts_and_admissions().len());
//! println!("Exhibits: {}", result.exhibits_referenced().len());
//! println!("Objections: {}", result.objections_log().len());
//! # Ok(())
//! # }
//! ```
//!
//! [`AnalysisResult`]: depo_domain::AnalysisResult

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;
pub mod schema;
mod session;


pub use analyzer::AnalysisClient;
pub use config::{AnalyzerConfig, MAX_TEMPERATURE};
pub use error::AnalysisError;
pub use parser::parse_response;
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
pub use session::Session;
