//! Render instructions for landmark overlays.
//!
//! Rasterization is the host's concern; this module only maps landmark sets from video-pixel
//! space into a target canvas's pixel space and pairs them with a color, yielding one filled
//! circle per landmark.

use crate::landmark::Landmarks;
use crate::resolution::Resolution;

/// Radius of a landmark marker, in canvas pixels.
///
/// The radius is fixed; it does not scale with the canvas.
pub const MARKER_RADIUS: f32 = 5.0;

/// An 8-bit RGBA color.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Color([u8; 4]);

impl Color {
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const RED: Self = Self([255, 0, 0, 255]);
    pub const GREEN: Self = Self([0, 255, 0, 255]);
    pub const BLUE: Self = Self([0, 0, 255, 255]);

    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    #[inline]
    pub fn r(&self) -> u8 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> u8 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> u8 {
        self.0[2]
    }

    #[inline]
    pub fn a(&self) -> u8 {
        self.0[3]
    }
}

/// Conventional overlay color for the left hand.
pub const LEFT_HAND_COLOR: Color = Color::BLUE;

/// Conventional overlay color for the right hand.
pub const RIGHT_HAND_COLOR: Color = Color::RED;

/// A filled circle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Maps each landmark of a hand into `canvas` coordinates.
///
/// Each axis is scaled by `canvas dimension / video dimension`, so the overlay lines up with the
/// video content regardless of the canvas size. Yields 21 circles of [`MARKER_RADIUS`].
pub fn markers(
    landmarks: &Landmarks,
    video: Resolution,
    canvas: Resolution,
    color: Color,
) -> impl Iterator<Item = Circle> + '_ {
    let scale_x = canvas.width() as f32 / video.width() as f32;
    let scale_y = canvas.height() as f32 / video.height() as f32;
    landmarks.positions().iter().map(move |&[x, y, _]| Circle {
        x: x * scale_x,
        y: y * scale_y,
        radius: MARKER_RADIUS,
        color,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::landmark::LANDMARK_COUNT;

    use super::*;

    #[test]
    fn markers_scale_into_canvas_space() {
        let hand =
            Landmarks::from_positions(&vec![[100.0, 50.0, 0.0]; LANDMARK_COUNT]).unwrap();
        let circles: Vec<_> = markers(
            &hand,
            Resolution::new(320, 240),
            Resolution::new(640, 480),
            Color::BLUE,
        )
        .collect();

        assert_eq!(circles.len(), LANDMARK_COUNT);
        assert_relative_eq!(circles[0].x, 200.0);
        assert_relative_eq!(circles[0].y, 100.0);
        assert_eq!(circles[0].radius, MARKER_RADIUS);
        assert_eq!(circles[0].color, Color::BLUE);
    }

    #[test]
    fn identical_resolutions_leave_coordinates_unchanged() {
        let hand =
            Landmarks::from_positions(&vec![[12.0, 34.0, 0.0]; LANDMARK_COUNT]).unwrap();
        let res = Resolution::new(320, 240);
        for circle in markers(&hand, res, res, RIGHT_HAND_COLOR) {
            assert_relative_eq!(circle.x, 12.0);
            assert_relative_eq!(circle.y, 34.0);
        }
    }
}
