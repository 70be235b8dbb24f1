//! Q&A forum constants and validation functions.
//!
//! Covers questions, answers, comments and answer voting. Handlers call these
//! before touching the database and map the `Err(String)` to a 400.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a question title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of a comment in characters.
pub const MAX_COMMENT_LENGTH: usize = 1_000;

/// Display name recorded when the author has none.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a question title: 1 to [`MAX_TITLE_LENGTH`] characters, not blank.
pub fn validate_question_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Question title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Question title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate question body content: at least one non-whitespace character.
pub fn validate_question_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Question content cannot be empty".to_string());
    }
    Ok(())
}

/// Validate answer content: at least one non-whitespace character.
pub fn validate_answer_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Answer content cannot be empty".to_string());
    }
    Ok(())
}

/// Validate comment content: non-blank and at most [`MAX_COMMENT_LENGTH`] characters.
pub fn validate_comment_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Comment content cannot be empty".to_string());
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Comment parents
// ---------------------------------------------------------------------------

/// What a comment is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentParent {
    Question,
    Answer,
}

impl CommentParent {
    /// Value stored in `comments.parent_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

impl fmt::Display for CommentParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentParent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "question" => Ok(Self::Question),
            "answer" => Ok(Self::Answer),
            other => Err(format!(
                "Invalid parent type '{other}'. Must be one of: question, answer"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Voting
// ---------------------------------------------------------------------------

/// Direction of an answer vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Upvote,
    Downvote,
}

impl VoteType {
    /// Amount added to the answer's `votes` counter.
    pub fn delta(self) -> i64 {
        match self {
            Self::Upvote => 1,
            Self::Downvote => -1,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
