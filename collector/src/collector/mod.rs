//! Sample collectors

pub mod stack;

pub use stack::StackCollector;
