//! Persona prompt catalog and prompt assembly.

pub mod builder;
pub mod catalog;

pub use builder::PromptBuilder;
