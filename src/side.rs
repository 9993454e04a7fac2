//! Left/right assignment of detected hands.

use std::ops::{Index, IndexMut};

use crate::landmark::Landmarks;

/// The side of the video frame a hand was detected on.
///
/// This is a per-frame classification relative to the frame midline, not the anatomical
/// handedness of the depicted hand. It is recomputed every frame and never stored on the
/// [`Landmarks`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];
}

/// A pair of values, one per [`Side`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerSide<T> {
    pub left: T,
    pub right: T,
}

impl<T> PerSide<T> {
    /// Converts from `&PerSide<T>` to `PerSide<&T>`.
    pub fn as_ref(&self) -> PerSide<&T> {
        PerSide {
            left: &self.left,
            right: &self.right,
        }
    }

    /// Applies `f` to both sides' values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerSide<U> {
        PerSide {
            left: f(self.left),
            right: f(self.right),
        }
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Assigns each detected hand to the side of the frame its centroid falls on.
///
/// A centroid left of the frame midline (`centroid_x < frame_width / 2`) classifies as
/// [`Side::Left`], everything else as [`Side::Right`]. When several detections classify to the
/// same side, the last one in iteration order wins; pose estimators report at most two hands, so
/// this path is a documented policy rather than an error.
///
/// Zero detections leave both slots empty. That is the normal "no hand visible" case, handled
/// downstream by the tracker's fallback.
pub fn assign_sides<I>(detections: I, frame_width: u32) -> PerSide<Option<Landmarks>>
where
    I: IntoIterator<Item = Landmarks>,
{
    let midline = frame_width as f32 / 2.0;
    let mut sides = PerSide::default();
    for landmarks in detections {
        let side = if landmarks.centroid_x() < midline {
            Side::Left
        } else {
            Side::Right
        };
        sides[side] = Some(landmarks);
    }
    sides
}
