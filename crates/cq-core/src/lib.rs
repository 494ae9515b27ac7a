//! cq-core: Shared types for ContourEQ
//!
//! This crate provides the foundational types used across all ContourEQ
//! crates:
//! - Band model (shapes, stereo placement, slopes, dynamic-EQ fields)
//! - Flat parameter index protocol for the external DSP engine
//! - Core error type

mod band;
mod error;
mod params;

pub use band::*;
pub use error::*;
pub use params::*;
