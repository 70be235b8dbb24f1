//! Roadmap domain types and the structural validator.
//!
//! A roadmap is always exactly [`STAGE_COUNT`] stages of exactly
//! [`TOPICS_PER_STAGE`] topics, each topic carrying at least
//! [`MIN_RESOURCES_PER_TOPIC`] resources. Anything else is rejected whole;
//! downstream code (stage icon rotation, detail views) indexes by position
//! and relies on these counts.
//!
//! [`validate_structure`] walks an untyped [`serde_json::Value`] top-down and
//! stops at the first violation, reporting its path
//! (e.g. `roadmap[2].topics[0].resources`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of stages in every roadmap.
pub const STAGE_COUNT: usize = 5;

/// Number of topics in every stage.
pub const TOPICS_PER_STAGE: usize = 3;

/// Minimum number of resources per topic.
pub const MIN_RESOURCES_PER_TOPIC: usize = 2;

/// Number of resources the prompt asks for at most.
pub const MAX_RESOURCES_PER_TOPIC: usize = 3;

// ---------------------------------------------------------------------------
// Skill level
// ---------------------------------------------------------------------------

/// The learner's starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!(
                "Invalid level '{s}'. Must be one of: beginner, intermediate, advanced"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Roadmap shape
// ---------------------------------------------------------------------------

/// An external learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

/// One topic within a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub description: String,
    pub resources: Vec<Resource>,
}

/// One ordered phase of a roadmap. Serialized with the key `stage` for its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(rename = "stage")]
    pub name: String,
    pub topics: Vec<Topic>,
}

/// A structurally validated roadmap that has not been persisted yet.
///
/// Ownership and identifiers are attached only when the user saves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapDraft {
    pub goal: String,
    pub skill_level: String,
    pub roadmap: Vec<Stage>,
}

// ---------------------------------------------------------------------------
// Structural validation
// ---------------------------------------------------------------------------

/// The first structural rule a candidate roadmap broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {reason}")]
pub struct StructureViolation {
    /// Location of the offending element, e.g. `roadmap[1].topics`.
    pub path: String,
    pub reason: String,
}

impl StructureViolation {
    fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Validate an untyped value against the roadmap contract and convert it.
///
/// Fails fast: only the first violation is reported. Unknown extra keys are
/// ignored.
pub fn validate_structure(value: &Value) -> Result<RoadmapDraft, StructureViolation> {
    let root = value
        .as_object()
        .ok_or_else(|| StructureViolation::new("$", "expected a JSON object"))?;

    let goal = required_text(root, "goal", "goal")?;
    let skill_level = required_text(root, "skill_level", "skill_level")?;

    let raw_stages = required_array(root, "roadmap", "roadmap")?;
    if raw_stages.len() != STAGE_COUNT {
        return Err(StructureViolation::new(
            "roadmap",
            format!(
                "expected exactly {STAGE_COUNT} stages, found {}",
                raw_stages.len()
            ),
        ));
    }

    let roadmap = raw_stages
        .iter()
        .enumerate()
        .map(|(i, stage)| validate_stage(stage, &format!("roadmap[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RoadmapDraft {
        goal,
        skill_level,
        roadmap,
    })
}

/// Re-check an already typed stage list, e.g. one submitted for saving.
pub fn validate_stages(stages: &[Stage]) -> Result<(), StructureViolation> {
    let value = serde_json::to_value(stages)
        .map_err(|e| StructureViolation::new("roadmap", e.to_string()))?;
    let root = serde_json::json!({
        "goal": "-",
        "skill_level": "-",
        "roadmap": value,
    });
    validate_structure(&root).map(|_| ())
}

fn validate_stage(value: &Value, path: &str) -> Result<Stage, StructureViolation> {
    let obj = value
        .as_object()
        .ok_or_else(|| StructureViolation::new(path, "expected a stage object"))?;

    let name = required_text(obj, "stage", &format!("{path}.stage"))?;

    let topics_path = format!("{path}.topics");
    let raw_topics = required_array(obj, "topics", &topics_path)?;
    if raw_topics.len() != TOPICS_PER_STAGE {
        return Err(StructureViolation::new(
            topics_path,
            format!(
                "expected exactly {TOPICS_PER_STAGE} topics, found {}",
                raw_topics.len()
            ),
        ));
    }

    let topics = raw_topics
        .iter()
        .enumerate()
        .map(|(i, topic)| validate_topic(topic, &format!("{topics_path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Stage { name, topics })
}

fn validate_topic(value: &Value, path: &str) -> Result<Topic, StructureViolation> {
    let obj = value
        .as_object()
        .ok_or_else(|| StructureViolation::new(path, "expected a topic object"))?;

    let name = required_text(obj, "name", &format!("{path}.name"))?;
    let description = required_text(obj, "description", &format!("{path}.description"))?;

    let resources_path = format!("{path}.resources");
    let raw_resources = required_array(obj, "resources", &resources_path)?;
    if raw_resources.len() < MIN_RESOURCES_PER_TOPIC {
        return Err(StructureViolation::new(
            resources_path,
            format!(
                "expected at least {MIN_RESOURCES_PER_TOPIC} resources, found {}",
                raw_resources.len()
            ),
        ));
    }

    let resources = raw_resources
        .iter()
        .enumerate()
        .map(|(i, resource)| validate_resource(resource, &format!("{resources_path}[{i}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Topic {
        name,
        description,
        resources,
    })
}

fn validate_resource(value: &Value, path: &str) -> Result<Resource, StructureViolation> {
    let obj = value
        .as_object()
        .ok_or_else(|| StructureViolation::new(path, "expected a resource object"))?;

    Ok(Resource {
        name: required_text(obj, "name", &format!("{path}.name"))?,
        url: required_text(obj, "url", &format!("{path}.url"))?,
    })
}

/// A present, non-blank string field.
fn required_text(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<String, StructureViolation> {
    match obj.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(StructureViolation::new(path, "must not be empty")),
        Some(_) => Err(StructureViolation::new(path, "expected a string")),
        None => Err(StructureViolation::new(path, "is missing")),
    }
}

fn required_array<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<Value>, StructureViolation> {
    match obj.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(StructureViolation::new(path, "expected an array")),
        None => Err(StructureViolation::new(path, "is missing")),
    }
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------

/// Build a roadmap JSON value with the given arity at every level.
#[cfg(test)]
pub(crate) fn roadmap_json(stages: usize, topics: usize, resources: usize) -> Value {
    let stages: Vec<Value> = (1..=stages)
        .map(|s| {
            let topics: Vec<Value> = (1..=topics)
                .map(|t| {
                    let resources: Vec<Value> = (1..=resources)
                        .map(|r| {
                            serde_json::json!({
                                "name": format!("Resource {s}.{t}.{r}"),
                                "url": format!("https://example.com/{s}/{t}/{r}"),
                            })
                        })
                        .collect();
                    serde_json::json!({
                        "name": format!("Topic {s}.{t}"),
                        "description": format!("What to learn in topic {s}.{t}"),
                        "resources": resources,
                    })
                })
                .collect();
            serde_json::json!({
                "stage": format!("Stage {s}"),
                "topics": topics,
            })
        })
        .collect();

    serde_json::json!({
        "goal": "Build backend systems in Rust",
        "skill_level": "beginner",
        "roadmap": stages,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
