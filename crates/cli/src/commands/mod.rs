//! CLI command implementations.

pub mod cart;
pub mod catalog;
mod render;
