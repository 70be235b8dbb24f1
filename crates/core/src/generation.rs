//! The roadmap generation pipeline.
//!
//! 1. Reject blank `topic`, `description` or `level`.
//! 2. Build the prompt ([`build_roadmap_prompt`]).
//! 3. Call the completion provider once.
//! 4. Parse the reply as JSON. No repair, no retry.
//! 5. Walk it with [`validate_structure`].
//!
//! Every failure terminates the attempt; the caller resubmits.

use serde::Deserialize;

use crate::completion::{CompletionError, CompletionService};
use crate::roadmap::{validate_structure, RoadmapDraft, SkillLevel};
use crate::roadmap_prompt::build_roadmap_prompt;

/// A user's request for a new roadmap. Transient, never persisted.
///
/// Absent, `null` and blank fields are all reported as missing input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

/// Why a generation attempt failed.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// A required input was absent or blank.
    #[error("Missing required parameter: {0}")]
    MissingInput(&'static str),

    /// `level` was present but not a known skill level.
    #[error("{0}")]
    InvalidLevel(String),

    /// No completion provider is configured on this server.
    #[error("Completion service is not configured")]
    NotConfigured,

    /// The provider call itself failed.
    #[error("Completion service failed: {0}")]
    Upstream(#[from] CompletionError),

    /// The provider replied with text that is not JSON.
    #[error("Failed to parse the generated roadmap: {reason}")]
    MalformedOutput { reason: String, output_len: usize },

    /// The reply was JSON but broke the roadmap contract.
    #[error("Invalid roadmap structure at {path}: {reason}")]
    InvalidStructure { path: String, reason: String },
}

/// Validated generation inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationInput<'a> {
    pub topic: &'a str,
    pub description: &'a str,
    pub level: SkillLevel,
}

impl RoadmapRequest {
    /// Check that every field is present and that `level` is recognised.
    pub fn validate(&self) -> Result<GenerationInput<'_>, GenerationError> {
        let topic = non_blank(&self.topic, "topic")?;
        let description = non_blank(&self.description, "description")?;
        let level = non_blank(&self.level, "level")?
            .parse::<SkillLevel>()
            .map_err(GenerationError::InvalidLevel)?;

        Ok(GenerationInput {
            topic,
            description,
            level,
        })
    }
}

fn non_blank<'a>(
    value: &'a Option<String>,
    field: &'static str,
) -> Result<&'a str, GenerationError> {
    let trimmed = value.as_deref().unwrap_or_default().trim();
    if trimmed.is_empty() {
        Err(GenerationError::MissingInput(field))
    } else {
        Ok(trimmed)
    }
}

/// Generate a roadmap draft for `request` using `service`.
///
/// The returned draft always satisfies the roadmap structural contract. Its
/// `skill_level` is the requested level, whatever casing the model used.
pub async fn generate(
    service: &dyn CompletionService,
    request: &RoadmapRequest,
) -> Result<RoadmapDraft, GenerationError> {
    let input = request.validate()?;
    let prompt = build_roadmap_prompt(input.topic, input.description, input.level);

    let raw = service.complete(&prompt).await?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| GenerationError::MalformedOutput {
            reason: e.to_string(),
            output_len: raw.len(),
        })?;

    let mut draft =
        validate_structure(&value).map_err(|v| GenerationError::InvalidStructure {
            path: v.path,
            reason: v.reason,
        })?;
    draft.skill_level = input.level.to_string();

    Ok(draft)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::completion::CompletionRequest;
    use crate::roadmap::roadmap_json;

    /// Replays a fixed reply and records the prompts it saw.
    struct CannedCompletion {
        reply: Result<String, u16>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl CannedCompletion {
        fn ok(reply: impl Into<String>) -> Self {
            Self {
                reply: Ok(reply.into()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionService for CannedCompletion {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(CompletionError::Api {
                    status: *status,
                    body: "boom".into(),
                }),
            }
        }
    }

    fn request(topic: &str, description: &str, level: &str) -> RoadmapRequest {
        RoadmapRequest {
            topic: Some(topic.into()),
            description: Some(description.into()),
            level: Some(level.into()),
        }
    }

    #[tokio::test]
    async fn valid_reply_yields_five_by_three_draft() {
        let service = CannedCompletion::ok(roadmap_json(5, 3, 2).to_string());
        let draft = generate(&service, &request("Rust", "backend systems", "beginner"))
            .await
            .unwrap();

        assert_eq!(draft.roadmap.len(), 5);
        assert!(draft.roadmap.iter().all(|s| s.topics.len() == 3));
        assert!(draft
            .roadmap
            .iter()
            .flat_map(|s| &s.topics)
            .all(|t| t.resources.len() >= 2));
        assert_eq!(draft.skill_level, "beginner");
    }

    #[tokio::test]
    async fn prompt_reaches_the_service() {
        let service = CannedCompletion::ok(roadmap_json(5, 3, 2).to_string());
        generate(&service, &request("Rust", "backend systems", "Beginner"))
            .await
            .unwrap();

        let seen = service.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].user.contains("\"Rust\""));
        assert!(seen[0].user.contains("Current skill level: beginner"));
    }

    #[tokio::test]
    async fn skill_level_normalised_to_request() {
        let mut reply = roadmap_json(5, 3, 2);
        reply["skill_level"] = "Intermediate learner".into();
        let service = CannedCompletion::ok(reply.to_string());

        let draft = generate(&service, &request("Rust", "systems", "intermediate"))
            .await
            .unwrap();
        assert_eq!(draft.skill_level, "intermediate");
    }

    #[tokio::test]
    async fn blank_input_rejected_before_calling_service() {
        let service = CannedCompletion::ok("{}");

        let err = generate(&service, &request("Rust", "  ", "beginner"))
            .await
            .unwrap_err();
        assert_matches!(err, GenerationError::MissingInput("description"));

        let err = generate(&service, &request("", "x", "beginner"))
            .await
            .unwrap_err();
        assert_matches!(err, GenerationError::MissingInput("topic"));

        let err = generate(&service, &RoadmapRequest::default()).await.unwrap_err();
        assert_matches!(err, GenerationError::MissingInput("topic"));

        assert_eq!(service.calls(), 0);
    }

    #[test]
    fn null_fields_are_missing_input() {
        let request: RoadmapRequest =
            serde_json::from_str(r#"{"topic": "Rust", "description": "x", "level": null}"#)
                .unwrap();
        assert_matches!(request.validate(), Err(GenerationError::MissingInput("level")));

        let request: RoadmapRequest = serde_json::from_str(r#"{"topic": null}"#).unwrap();
        assert_matches!(request.validate(), Err(GenerationError::MissingInput("topic")));
    }

    #[tokio::test]
    async fn unknown_level_rejected() {
        let service = CannedCompletion::ok("{}");
        let err = generate(&service, &request("Rust", "systems", "wizard"))
            .await
            .unwrap_err();
        assert_matches!(err, GenerationError::InvalidLevel(_));
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn non_json_reply_is_malformed_output() {
        let service = CannedCompletion::ok("Sure! Here is your roadmap:");
        let err = generate(&service, &request("Rust", "systems", "beginner"))
            .await
            .unwrap_err();
        assert_matches!(err, GenerationError::MalformedOutput { output_len, .. } => {
            assert_eq!(output_len, "Sure! Here is your roadmap:".len());
        });
    }

    #[tokio::test]
    async fn fenced_json_is_not_repaired() {
        let reply = format!("```json\n{}\n```", roadmap_json(5, 3, 2));
        let service = CannedCompletion::ok(reply);
        let err = generate(&service, &request("Rust", "systems", "beginner"))
            .await
            .unwrap_err();
        assert_matches!(err, GenerationError::MalformedOutput { .. });
    }

    #[tokio::test]
    async fn four_stages_is_invalid_structure() {
        let service = CannedCompletion::ok(roadmap_json(4, 3, 2).to_string());
        let err = generate(&service, &request("Rust", "systems", "beginner"))
            .await
            .unwrap_err();
        assert_matches!(err, GenerationError::InvalidStructure { path, reason } => {
            assert_eq!(path, "roadmap");
            assert!(reason.contains("found 4"));
        });
    }

    #[tokio::test]
    async fn provider_failure_is_upstream() {
        let service = CannedCompletion::failing(503);
        let err = generate(&service, &request("Rust", "systems", "beginner"))
            .await
            .unwrap_err();
        assert_matches!(
            err,
            GenerationError::Upstream(CompletionError::Api { status: 503, .. })
        );
        assert_eq!(service.calls(), 1);
    }
}
