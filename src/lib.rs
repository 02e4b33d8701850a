//! zoomfx previews declarative zoom effects on a video and exports them as minimal,
//! backend-authoritative instructions.
//!
//! Two paths share one effect timeline:
//!
//! 1. **Preview**: `Timeline -> NormalizedEffects` once, then per playback tick
//!    `select -> progress -> synthesize` yields a [`ZoomTransform`] for the host to apply.
//! 2. **Export**: `Timeline -> ZoomInstruction[]` from the original effects, validated and
//!    purity-checked before anything reaches the external renderer.
//!
//! Preview geometry ([`NormalizedBounds`]) is derived and ephemeral; it never appears in an
//! exported [`ZoomInstruction`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod export;
mod foundation;
mod normalize;
mod scene;
mod schema;
mod session;
mod transform;

pub use animation::ease::{Ease, ease_in_out_cubic};
pub use animation::progress::{Ramp, progress};
pub use eval::select::{Timed, TieBreak, active_effects, resolve, select_active};
pub use export::batch::{BatchEffect, ZoomBatch};
pub use export::instruction::{EffectKind, ExportCandidate, ZoomInstruction, generate};
pub use export::pipeline::{ExportReport, RejectedEffect, prepare_export};
pub use foundation::core::{Affine, BoundingBox, EffectWindow, Frame, Point, Rect, Vec2};
pub use foundation::error::{ZoomfxError, ZoomfxResult};
pub use normalize::bounds::{MAX_SCALE, MIN_SCALE, NormalizedBounds, auto_scale, normalize};
pub use normalize::cache::{NormalizedEffect, NormalizedEffects, SkippedEffect};
pub use scene::model::{DisplayEffect, Style, Target, ZoomStyle};
pub use scene::timeline::Timeline;
pub use schema::path::FieldError;
pub use schema::purity::{PurityReport, check_instruction_purity, check_purity};
pub use schema::validate::{ValidationReport, validate, validate_json};
pub use session::opts::EngineOpts;
pub use session::preview::{OnTick, PreviewEngine, Tick};
pub use transform::zoom::{ZoomTransform, synthesize};
