//! Prompt construction for roadmap generation.
//!
//! The completion provider has no enforced output schema, so the prompt spells
//! out the exact JSON shape and every cardinality the validator will check.
//! The output is a pure function of its inputs.

use crate::completion::CompletionRequest;
use crate::roadmap::{
    SkillLevel, MAX_RESOURCES_PER_TOPIC, MIN_RESOURCES_PER_TOPIC, STAGE_COUNT, TOPICS_PER_STAGE,
};

/// Sampling temperature. Kept low to favour structural compliance.
pub const GENERATION_TEMPERATURE: f32 = 0.5;

/// Token cap sized to fit a full 5x3 roadmap with resources.
pub const GENERATION_MAX_TOKENS: u32 = 2500;

const SYSTEM_PROMPT: &str = "You are an expert curriculum designer who builds structured \
learning roadmaps. Produce a detailed, progressive, step-by-step plan for the requested \
topic, tailored to the learner's goal and current skill level. Answer with JSON only.";

/// Example of one stage, embedded verbatim in the prompt.
const STAGE_EXAMPLE: &str = r#"{
      "stage": "Stage 1: Fundamentals",
      "topics": [
        {
          "name": "Topic name",
          "description": "What to learn in this topic and why it matters",
          "resources": [
            { "name": "Resource name", "url": "https://example.com" },
            { "name": "Another resource", "url": "https://example.org" }
          ]
        }
      ]
    }"#;

/// Build the completion request for a roadmap.
///
/// Inputs are expected to be validated already; they are interpolated as-is.
pub fn build_roadmap_prompt(topic: &str, description: &str, level: SkillLevel) -> CompletionRequest {
    let user = format!(
        "Create a learning roadmap for the topic: \"{topic}\".\n\
         Learner's goal: {description}\n\
         Current skill level: {level}\n\
         \n\
         Rules:\n\
         1. The roadmap must contain exactly {STAGE_COUNT} stages.\n\
         2. Every stage must contain exactly {TOPICS_PER_STAGE} topics.\n\
         3. Every topic must have a name, a detailed description, and \
         {MIN_RESOURCES_PER_TOPIC} to {MAX_RESOURCES_PER_TOPIC} high-quality online resources, \
         each with a name and a URL.\n\
         4. Progress from the learner's current skill level towards their goal.\n\
         5. Use clear, concise language.\n\
         6. Reply with the JSON object only: no prose, no markdown, no code fences.\n\
         \n\
         The reply must follow this structure exactly:\n\
         {{\n  \
           \"goal\": \"A concise statement of the overall learning goal\",\n  \
           \"skill_level\": \"{level}\",\n  \
           \"roadmap\": [\n    {STAGE_EXAMPLE}\n  ]\n\
         }}\n\
         \n\
         The \"roadmap\" array must hold exactly {STAGE_COUNT} stage objects, each with \
         exactly {TOPICS_PER_STAGE} topic objects."
    );

    CompletionRequest {
        system: SYSTEM_PROMPT.to_string(),
        user,
        temperature: GENERATION_TEMPERATURE,
        max_tokens: GENERATION_MAX_TOKENS,
    }
}
