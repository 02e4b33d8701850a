/// Batch envelope for renderer submissions.
pub mod batch;
/// Wire-level zoom instruction and its generator.
pub mod instruction;
/// Generate-validate-check pipeline guarding the renderer boundary.
pub mod pipeline;
