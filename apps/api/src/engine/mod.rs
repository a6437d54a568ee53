// Recommendation engine core.
// Pure functions over the immutable KnowledgeBase plus an injected rng;
// no I/O, no shared mutable state, safe to call from any number of tasks.
// Entry points: analyze_story, generate_designs, compose_narratives.

pub mod analyzer;
pub mod generator;
pub mod knowledge;
pub mod narrative;
pub mod pricing;
pub mod selector;

pub use analyzer::analyze_story;
pub use generator::generate_designs;
pub use narrative::compose_narratives;
