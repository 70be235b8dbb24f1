pub mod answer;
pub mod auth;
pub mod comment;
pub mod question;
pub mod roadmap;
