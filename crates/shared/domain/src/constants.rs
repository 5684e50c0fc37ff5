//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Quiz lifecycle status tags
// =============================================================================

/// Initial status of a newly created quiz
pub const QUIZ_STATUS_DRAFT: &str = "DRAFT";

/// Status of a quiz visible to participants
pub const QUIZ_STATUS_PUBLISHED: &str = "PUBLISHED";

/// Terminal status; archived quizzes are never served again
pub const QUIZ_STATUS_ARCHIVED: &str = "ARCHIVED";

// =============================================================================
// Validation bounds
// =============================================================================

/// Minimum quiz time limit in minutes
pub const MIN_TIME_LIMIT: i32 = 1;

/// Maximum quiz time limit in minutes
pub const MAX_TIME_LIMIT: i32 = 180;

/// Minimum passing score (percentage)
pub const MIN_PASSING_SCORE: i32 = 0;

/// Maximum passing score (percentage)
pub const MAX_PASSING_SCORE: i32 = 100;

/// Minimum points a question can award
pub const MIN_QUESTION_POINTS: i32 = 1;
