/// Engine configuration.
pub mod opts;
/// Tick-driven preview engine.
pub mod preview;
