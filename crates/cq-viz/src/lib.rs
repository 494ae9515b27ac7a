//! cq-viz: Visualization math for ContourEQ
//!
//! Provides the render-side math for the EQ editor:
//! - Log-frequency / linear-gain pixel mapping
//! - Per-band analytic response and composite curve (Pro-Q style)
//! - Spectrum analyzer ballistics and spatial smoothing
//! - Catmull-Rom spline paths emitted as cubic Beziers
//!
//! Everything here produces data for an external renderer; no painting
//! happens in this crate, and the response curve is a visual approximation,
//! not the engine's transfer function.

pub mod mapping;
pub mod path;
pub mod response;
pub mod spectrum;

pub use mapping::{freq_to_x, gain_to_y, x_to_freq, y_to_gain};
pub use path::{spectrum_path, spline_path, PathSegment};
pub use response::{band_response, composite_curve};
pub use spectrum::{SpectrumFrame, SpectrumSmoother, SPECTRUM_CEIL_DB, SPECTRUM_FLOOR_DB};
