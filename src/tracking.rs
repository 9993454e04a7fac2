//! Temporal per-side hand tracking.

use crate::landmark::Landmarks;
use crate::side::{PerSide, Side};

/// Tracks one side's hand across frames, bridging momentary detection dropouts.
///
/// The tracker starts out empty. Once a hand has been seen, the most recent landmark set is
/// retained and emitted again on frames where the detector reports nothing for this side, so a
/// single-frame dropout does not make the rendered hand flicker.
///
/// By default the last known set is retained indefinitely; see
/// [`SideTracker::set_max_stale_frames`] for bounding how long a lost hand keeps rendering.
#[derive(Debug, Clone)]
pub struct SideTracker {
    side: Side,
    last_known: Option<Landmarks>,
    stale_frames: u32,
    max_stale_frames: Option<u32>,
}

impl SideTracker {
    /// The default staleness bound: none, a lost hand keeps rendering at its last seen position.
    pub const DEFAULT_MAX_STALE_FRAMES: Option<u32> = None;

    /// Creates an empty tracker for `side`.
    pub fn new(side: Side) -> Self {
        Self {
            side,
            last_known: None,
            stale_frames: 0,
            max_stale_frames: Self::DEFAULT_MAX_STALE_FRAMES,
        }
    }

    /// Sets the number of consecutive undetected frames after which the last known landmark set
    /// is dropped.
    ///
    /// While at most `max` consecutive frames went by without a detection, [`SideTracker::update`]
    /// keeps emitting the last known set. One absent frame later the tracker returns to its empty
    /// state and emits nothing until the hand is detected again.
    ///
    /// `None` disables expiry, which matches the default behavior.
    pub fn set_max_stale_frames(&mut self, max: Option<u32>) {
        self.max_stale_frames = max;
    }

    /// Feeds one frame's detection result for this side and returns the landmark set to render.
    ///
    /// - Detection present: it replaces the last known set and is emitted.
    /// - Detection absent while tracking: the last known set is emitted unchanged (fallback),
    ///   unless the staleness bound has been exceeded.
    /// - Detection absent while empty: nothing to emit.
    pub fn update(&mut self, detection: Option<Landmarks>) -> Option<&Landmarks> {
        match detection {
            Some(landmarks) => {
                self.stale_frames = 0;
                self.last_known = Some(landmarks);
            }
            None => {
                if self.last_known.is_some() {
                    self.stale_frames += 1;
                    if let Some(max) = self.max_stale_frames {
                        if self.stale_frames > max {
                            log::trace!(
                                "{:?} hand undetected for {} frames, dropping last known set",
                                self.side,
                                self.stale_frames,
                            );
                            self.last_known = None;
                        }
                    }
                }
            }
        }
        self.last_known.as_ref()
    }

    /// Returns the landmark set emitted for the most recent frame, without advancing the tracker.
    pub fn last_known(&self) -> Option<&Landmarks> {
        self.last_known.as_ref()
    }

    /// The side of the frame this tracker is responsible for.
    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}

/// Tracking state for both sides of the frame.
///
/// A session is an explicit object rather than module-level state, so independent sessions can
/// coexist (one per video source, one per test) without shared fixtures. It lives for as long as
/// the host keeps feeding frames; nothing expires between frames unless a staleness bound is set.
#[derive(Debug, Clone)]
pub struct TrackingSession {
    trackers: PerSide<SideTracker>,
}

impl TrackingSession {
    /// Creates a session with both side trackers empty.
    pub fn new() -> Self {
        Self {
            trackers: PerSide {
                left: SideTracker::new(Side::Left),
                right: SideTracker::new(Side::Right),
            },
        }
    }

    /// Applies the same staleness bound to both side trackers.
    pub fn set_max_stale_frames(&mut self, max: Option<u32>) {
        self.trackers.left.set_max_stale_frames(max);
        self.trackers.right.set_max_stale_frames(max);
    }

    /// Returns a mutable reference to one side's tracker.
    pub fn tracker_mut(&mut self, side: Side) -> &mut SideTracker {
        &mut self.trackers[side]
    }

    /// Advances both trackers by one frame and returns the stable per-side landmark sets.
    pub fn advance(
        &mut self,
        detections: PerSide<Option<Landmarks>>,
    ) -> PerSide<Option<&Landmarks>> {
        PerSide {
            left: self.trackers.left.update(detections.left),
            right: self.trackers.right.update(detections.right),
        }
    }
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new()
    }
}
