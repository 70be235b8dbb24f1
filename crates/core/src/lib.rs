//! Domain types, validation rules, and the roadmap generation pipeline.
//!
//! This crate performs no I/O of its own: persistence lives in
//! `studyhub-db`, the HTTP surface in `studyhub-api`, and the language-model
//! transport in `studyhub-completion` behind the [`completion::CompletionService`]
//! trait.

pub mod accounts;
pub mod completion;
pub mod error;
pub mod forum;
pub mod generation;
pub mod roadmap;
pub mod roadmap_prompt;
pub mod search;
pub mod types;
