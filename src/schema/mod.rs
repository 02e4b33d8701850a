//! Field-level validation shared by the timeline loader and the export boundary.
//!
//! Findings carry a JSON path (`$.boundingBox.x`) so callers can point at the offending field.

pub(crate) mod path;
pub(crate) mod purity;
pub(crate) mod validate;
