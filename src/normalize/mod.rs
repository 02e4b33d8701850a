/// Bounding box normalization and the auto-scale heuristic.
pub mod bounds;
/// Per-timeline cache of normalized effects.
pub mod cache;
