//! cq-bridge: Editing and analyzer glue for ContourEQ
//!
//! Sits between user gestures, the render-side math in cq-viz, and the
//! external DSP engine:
//! - Band registry: owns the band list, clamps edits, writes the flat
//!   parameter protocol
//! - Interaction controller: hover / tap-to-create / drag / wheel gestures
//! - Analyzer feed: pulls the raw spectrum each tick and publishes the
//!   smoothed render frame
//!
//! Everything runs on one logical event stream; only the published render
//! frame is shared with the renderer.

mod analyzer;
mod interaction;
mod registry;

pub use analyzer::{AnalyzerFeed, RenderOutput, SpectrumSource};
pub use interaction::{EqEditor, InteractionState, HIT_THRESHOLD_PX};
pub use registry::{BandRegistry, BandUpdate};
