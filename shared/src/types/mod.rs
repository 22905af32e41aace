//! Data types exchanged between the collector, the filter and the outputs

pub mod events;
pub mod profile;
