//! Interactive prompts

pub mod interactive;
