//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Owner-scoped mutations filter
//! on `id` and `user_id` in a single statement; a miss means "absent or not
//! yours" and the two cases are never distinguished.

pub mod answer_repo;
pub mod comment_repo;
pub mod question_repo;
pub mod roadmap_repo;
pub mod session_repo;
pub mod user_repo;

pub use answer_repo::AnswerRepo;
pub use comment_repo::CommentRepo;
pub use question_repo::QuestionRepo;
pub use roadmap_repo::RoadmapRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
