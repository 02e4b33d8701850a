/// Display effect records supplied by the upstream pipeline.
pub mod model;
/// Timeline document: frame plus effects.
pub mod timeline;
