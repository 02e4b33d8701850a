/// Frame, box and window primitives.
pub mod core;
/// Error taxonomy.
pub mod error;
