//! Prompt construction for council agents.

pub mod template;

pub use template::PromptTemplate;
