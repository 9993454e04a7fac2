//! Hand landmark storage and named accessors.

use std::ops::Index;

use thiserror::Error;

/// Number of landmarks produced per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// A landmark position in source-video pixel space.
///
/// `x` and `y` are pixel coordinates (`y` grows downward); `z` is whatever depth value the pose
/// estimator reports, or `0.0` for 2D detections.
pub type Position = [f32; 3];

/// Contract violations caught at landmark construction or access time.
///
/// An *absent* detection is never an error; these only fire when a detection is malformed or a
/// landmark index is misused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LandmarkError {
    /// A detection did not contain exactly 21 points.
    #[error("detection contains {got} landmarks, expected 21")]
    InvalidLandmarkCount { got: usize },

    /// A landmark index outside of `0..21` was accessed.
    #[error("landmark index {index} is out of range 0..21")]
    IndexOutOfRange { index: usize },
}

/// The 21 landmark positions of one detected hand.
///
/// Indices follow the usual hand pose convention (see [`LandmarkIdx`]): the thumb tip is index 4,
/// the index finger tip 8, the middle finger tip 12. Values of this type are immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks {
    positions: [Position; LANDMARK_COUNT],
}

impl Landmarks {
    /// Creates a [`Landmarks`] collection from raw detector output.
    ///
    /// Returns [`LandmarkError::InvalidLandmarkCount`] unless `positions` contains exactly 21
    /// entries.
    pub fn from_positions(positions: &[Position]) -> Result<Self, LandmarkError> {
        match <[Position; LANDMARK_COUNT]>::try_from(positions) {
            Ok(positions) => Ok(Self { positions }),
            Err(_) => Err(LandmarkError::InvalidLandmarkCount {
                got: positions.len(),
            }),
        }
    }

    /// Returns a landmark's position in the source video's coordinate system.
    ///
    /// Returns [`LandmarkError::IndexOutOfRange`] if `index` is not a valid landmark index.
    pub fn position(&self, index: usize) -> Result<Position, LandmarkError> {
        self.positions
            .get(index)
            .copied()
            .ok_or(LandmarkError::IndexOutOfRange { index })
    }

    /// Returns all landmark positions in the source video's coordinate system.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Computes the mean x coordinate of all landmarks.
    ///
    /// Side classification compares this against the frame midline.
    pub fn centroid_x(&self) -> f32 {
        let sum: f32 = self.positions.iter().map(|pos| pos[0]).sum();
        sum / LANDMARK_COUNT as f32
    }
}

impl Index<LandmarkIdx> for Landmarks {
    type Output = Position;

    fn index(&self, index: LandmarkIdx) -> &Self::Output {
        &self.positions[index as usize]
    }
}

/// Names for the hand pose landmarks.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}
