//! Prompt construction for transcript analysis

use crate::schema::response_schema;
use depo_domain::GenerationRequest;

/// System-level framing sent with every analysis request
pub const SYSTEM_INSTRUCTION: &str = "You are an expert litigation paralegal specializing in \
e-Discovery and deposition review. You read legal transcripts carefully and extract structured \
data with high accuracy. Always cite the exact page and line for every item you extract.";

const ANALYSIS_INSTRUCTIONS: &str = "Analyze the deposition transcript below and return the \
key information in the structure defined by the response schema. Identify the key facts and \
admissions, every exhibit referenced, and a log of all objections.";

/// Builds the analysis prompt around a transcript
pub struct PromptBuilder<'a> {
    transcript: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(transcript: &'a str) -> Self {
        Self { transcript }
    }

    /// Build the task prompt; the transcript is embedded verbatim
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(ANALYSIS_INSTRUCTIONS.len() + self.transcript.len() + 32);
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\nTRANSCRIPT:\n---\n");
        prompt.push_str(self.transcript);
        prompt
    }

    /// Build the full structured-generation request
    pub fn request(&self, temperature: f32) -> GenerationRequest {
        GenerationRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            prompt: self.build(),
            response_schema: response_schema().clone(),
            temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_transcript() {
        let transcript = "Q. Where were you?\n  A. At home.  \n";
        let prompt = PromptBuilder::new(transcript).build();
        assert!(prompt.ends_with(transcript));
        assert!(prompt.contains("TRANSCRIPT:\n---\n"));
    }

    #[test]
    fn test_prompt_names_all_sections() {
        let prompt = PromptBuilder::new("text").build();
        assert!(prompt.contains("key facts and admissions"));
        assert!(prompt.contains("exhibit"));
        assert!(prompt.contains("objections"));
    }

    #[test]
    fn test_request_carries_schema_and_temperature() {
        let request = PromptBuilder::new("Q. Name?").request(0.2);
        assert_eq!(request.temperature, 0.2);
        assert_eq!(&request.response_schema, response_schema());
        assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
        assert!(request.system_instruction.contains("page and line"));
    }
}
