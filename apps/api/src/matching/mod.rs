// Keyword matching engine.
// Implements: keyword extraction from annotated text, CV/JD overlap scoring.
// All linguistic analysis goes through the annotate layer — no raw-text
// heuristics here.

pub mod handlers;
pub mod keywords;
pub mod scorer;
