/// Anchor-preserving zoom transforms.
pub mod zoom;
