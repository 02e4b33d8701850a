use crate::foundation::core::Frame;
use crate::foundation::error::{ZoomfxError, ZoomfxResult};
use crate::scene::model::DisplayEffect;
use crate::schema::path::join_errors;
use crate::schema::validate::{ValidationReport, validate_timeline};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Effects of one recording together with the frame their boxes were captured in.
///
/// This is the JSON-facing input handed over by the session pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Authoritative recording resolution.
    pub frame: Frame,
    /// Effects in declaration order.
    #[serde(default)]
    pub effects: Vec<DisplayEffect>,
}

impl Timeline {
    /// Parse a timeline from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ZoomfxResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ZoomfxError::serde(format!("parse timeline JSON: {e}")))
    }

    /// Parse a timeline from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ZoomfxResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ZoomfxError::input(format!("open timeline JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Field-level report of everything wrong with this timeline.
    pub fn report(&self) -> ValidationReport {
        validate_timeline(self)
    }

    /// Validate the timeline, failing with every finding joined into one message.
    pub fn validate(&self) -> ZoomfxResult<()> {
        let report = self.report();
        if report.valid {
            return Ok(());
        }
        Err(ZoomfxError::validation(format!(
            "timeline validation failed: {}",
            join_errors(&report.errors)
        )))
    }
}
