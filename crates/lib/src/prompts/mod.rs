//! # Prompt Template Modules
//!
//! This module organizes the prompt templates used to instruct the generation
//! model. Every template is a `&'static str` so the assembled prompt is fully
//! deterministic for a given input.

pub mod emojify;

pub use emojify::{build_prompt, build_prompt_for};
