//! Form view adapters

pub mod console;
