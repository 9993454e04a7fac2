//! Coarse gesture classification from relative finger tip heights.

use crate::landmark::{LandmarkIdx, Landmarks};

/// A coarse hand pose derived from the thumb, index and middle finger tip positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// No hand in view, or no recognized pose.
    None,
    /// The thumb tip sits visually above both finger tips.
    Peace,
    /// The thumb tip sits visually below both finger tips.
    HighFive,
}

/// Classifies the pose of a hand, or of no hand at all.
///
/// An absent hand always classifies as [`Gesture::None`]. Otherwise the y coordinates of the
/// thumb tip, index finger tip and middle finger tip are compared (y grows downward, so a smaller
/// value is visually higher):
///
/// - thumb tip above both finger tips → [`Gesture::Peace`]
/// - thumb tip below both finger tips → [`Gesture::HighFive`]
/// - anything else → [`Gesture::None`]
///
/// This is a geometric heuristic, not a learned classifier. The two recognized poses are mutually
/// exclusive and non-exhaustive, so ambiguous geometry (the thumb between the two finger tips, or
/// exactly level with one of them) falls through to [`Gesture::None`] without a dedicated tie
/// branch.
pub fn classify(landmarks: Option<&Landmarks>) -> Gesture {
    let landmarks = match landmarks {
        Some(landmarks) => landmarks,
        None => return Gesture::None,
    };

    let thumb_y = landmarks[LandmarkIdx::ThumbTip][1];
    let index_y = landmarks[LandmarkIdx::IndexFingerTip][1];
    let middle_y = landmarks[LandmarkIdx::MiddleFingerTip][1];

    if thumb_y < index_y && thumb_y < middle_y {
        Gesture::Peace
    } else if thumb_y > index_y && thumb_y > middle_y {
        Gesture::HighFive
    } else {
        Gesture::None
    }
}

#[cfg(test)]
mod tests {
    use crate::landmark::LANDMARK_COUNT;

    use super::*;

    fn hand_with_tips(thumb_y: f32, index_y: f32, middle_y: f32) -> Landmarks {
        let mut positions = vec![[0.0, 100.0, 0.0]; LANDMARK_COUNT];
        positions[LandmarkIdx::ThumbTip as usize] = [0.0, thumb_y, 0.0];
        positions[LandmarkIdx::IndexFingerTip as usize] = [0.0, index_y, 0.0];
        positions[LandmarkIdx::MiddleFingerTip as usize] = [0.0, middle_y, 0.0];
        Landmarks::from_positions(&positions).unwrap()
    }

    #[test]
    fn thumb_above_both_fingers_is_peace() {
        let hand = hand_with_tips(10.0, 50.0, 60.0);
        assert_eq!(classify(Some(&hand)), Gesture::Peace);
    }

    #[test]
    fn thumb_below_both_fingers_is_high_five() {
        let hand = hand_with_tips(80.0, 20.0, 30.0);
        assert_eq!(classify(Some(&hand)), Gesture::HighFive);
    }

    #[test]
    fn thumb_between_fingers_is_none() {
        let hand = hand_with_tips(50.0, 20.0, 80.0);
        assert_eq!(classify(Some(&hand)), Gesture::None);
    }

    #[test]
    fn thumb_level_with_a_finger_is_none() {
        let hand = hand_with_tips(50.0, 50.0, 80.0);
        assert_eq!(classify(Some(&hand)), Gesture::None);
    }

    #[test]
    fn absent_hand_is_none() {
        assert_eq!(classify(None), Gesture::None);
    }
}
