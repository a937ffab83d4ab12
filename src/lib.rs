pub mod categorize;
pub mod classify;
pub mod geo;
pub mod pipeline;
pub mod report;
pub mod stats;
