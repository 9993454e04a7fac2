//! Hand landmark tracking and gesture recognition core.
//!
//! This crate starts where a hand pose estimation model ends: it consumes the per-frame stream of
//! 21-point landmark detections the model produces and turns it into a stable left/right hand
//! assignment, a coarse gesture label, and render-ready point sets. Camera acquisition, model
//! inference and rasterization are the host's concern.
//!
//! # Coordinates
//!
//! Landmark positions are in the source video's pixel space: X points to the right, Y points
//! *down*. A finger that is visually higher in the image therefore has a *smaller* Y coordinate.
//!
//! # Frame loop
//!
//! The crate never schedules itself. A host-owned loop (animation callback, timer, or test
//! harness) calls [`FrameProcessor::advance`] once per frame and renders whatever it returns; all
//! tracking state lives inside the processor's [`TrackingSession`].
//!
//! [`FrameProcessor::advance`]: frame::FrameProcessor::advance
//! [`TrackingSession`]: tracking::TrackingSession

use log::LevelFilter;

pub mod draw;
pub mod frame;
pub mod gesture;
pub mod landmark;
pub mod resolution;
pub mod side;
pub mod tracking;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this library will log at *trace*
/// level. Otherwise, they will log at *debug* level.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
