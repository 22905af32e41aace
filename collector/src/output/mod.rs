//! Report generation

pub mod folded;
pub mod json;
