//! Per-frame orchestration of side assignment, tracking and gesture classification.

use crate::gesture::{self, Gesture};
use crate::landmark::{LandmarkError, Landmarks, Position};
use crate::resolution::Resolution;
use crate::side::{self, PerSide};
use crate::tracking::TrackingSession;

/// Everything the host needs to react to one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// The landmark set to render per side, if any.
    ///
    /// These are the trackers' stable outputs: a side whose detection dropped out this frame
    /// still carries its last known set.
    pub hands: PerSide<Option<Landmarks>>,
    /// Pose of the active hand, preferring the left one when both are present.
    ///
    /// Only [`Gesture::HighFive`] has a downstream effect in the reference UI; [`Gesture::Peace`]
    /// is classified all the same and free for hosts to react to.
    pub gesture: Gesture,
}

/// Turns raw per-frame detections into render-ready tracking output.
///
/// The processor owns a [`TrackingSession`] and is otherwise pure: identical detections on
/// identical tracker state produce identical output, with no hidden frame counters.
#[derive(Debug, Clone, Default)]
pub struct FrameProcessor {
    session: TrackingSession,
}

impl FrameProcessor {
    /// Creates a processor with a fresh, empty [`TrackingSession`].
    pub fn new() -> Self {
        Self::with_session(TrackingSession::new())
    }

    /// Creates a processor around an existing [`TrackingSession`].
    pub fn with_session(session: TrackingSession) -> Self {
        Self { session }
    }

    /// Returns the processor's tracking session, e.g. to configure staleness bounds.
    pub fn session_mut(&mut self) -> &mut TrackingSession {
        &mut self.session
    }

    /// Processes one frame's worth of detector output.
    ///
    /// `detections` holds the raw landmark arrays reported by the pose estimator for this frame,
    /// in frame-pixel coordinates of a `video`-sized frame. The host calls this once per frame
    /// and renders the returned [`FrameOutput`].
    ///
    /// A malformed detection fails the frame with [`LandmarkError::InvalidLandmarkCount`]
    /// *before* any tracker state is touched; the host may log the error, skip rendering for
    /// this frame and call `advance` again on the next one.
    ///
    /// The gesture is evaluated on the stable tracker output, so a side that is currently
    /// rendering its fallback set keeps yielding that set's gesture.
    pub fn advance(
        &mut self,
        detections: &[Vec<Position>],
        video: Resolution,
    ) -> Result<FrameOutput, LandmarkError> {
        let mut validated = Vec::with_capacity(detections.len());
        for raw in detections {
            validated.push(Landmarks::from_positions(raw)?);
        }

        let assigned = side::assign_sides(validated, video.width());
        let stable = self.session.advance(assigned);
        let gesture = gesture::classify(stable.left.or(stable.right));

        Ok(FrameOutput {
            hands: stable.map(Option::<&Landmarks>::cloned),
            gesture,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::landmark::{LandmarkIdx, LANDMARK_COUNT};

    use super::*;

    const VIDEO: Resolution = Resolution::new(320, 240);

    fn raw_hand(center_x: f32, thumb_y: f32, index_y: f32, middle_y: f32) -> Vec<Position> {
        let mut positions = vec![[center_x, 100.0, 0.0]; LANDMARK_COUNT];
        positions[LandmarkIdx::ThumbTip as usize] = [center_x, thumb_y, 0.0];
        positions[LandmarkIdx::IndexFingerTip as usize] = [center_x, index_y, 0.0];
        positions[LandmarkIdx::MiddleFingerTip as usize] = [center_x, middle_y, 0.0];
        positions
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let mut processor = FrameProcessor::new();
        let detections = vec![
            raw_hand(50.0, 10.0, 50.0, 60.0),
            raw_hand(250.0, 80.0, 20.0, 30.0),
        ];

        let first = processor.advance(&detections, VIDEO).unwrap();
        let second = processor.advance(&detections, VIDEO).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn gesture_prefers_left_hand() {
        let mut processor = FrameProcessor::new();
        let detections = vec![
            raw_hand(50.0, 10.0, 50.0, 60.0),   // peace on the left
            raw_hand(250.0, 80.0, 20.0, 30.0),  // high five on the right
        ];

        let output = processor.advance(&detections, VIDEO).unwrap();
        assert_eq!(output.gesture, Gesture::Peace);
    }

    #[test]
    fn right_hand_classifies_when_left_is_absent() {
        let mut processor = FrameProcessor::new();
        let detections = vec![raw_hand(250.0, 80.0, 20.0, 30.0)];

        let output = processor.advance(&detections, VIDEO).unwrap();
        assert!(output.hands.left.is_none());
        assert_eq!(output.gesture, Gesture::HighFive);
    }

    #[test]
    fn malformed_detection_fails_frame_without_touching_state() {
        let mut processor = FrameProcessor::new();
        processor
            .advance(&[raw_hand(50.0, 80.0, 20.0, 30.0)], VIDEO)
            .unwrap();

        let err = processor
            .advance(&[vec![[0.0; 3]; 5]], VIDEO)
            .unwrap_err();
        assert_eq!(err, LandmarkError::InvalidLandmarkCount { got: 5 });

        // The failed frame did not advance the trackers; the next frame resumes with the
        // fallback from frame 1 intact.
        let output = processor.advance(&[], VIDEO).unwrap();
        assert!(output.hands.left.is_some());
        assert_eq!(output.gesture, Gesture::HighFive);
    }

    #[test]
    fn no_hands_and_no_history_yields_empty_output() {
        let mut processor = FrameProcessor::new();
        let output = processor.advance(&[], VIDEO).unwrap();
        assert_eq!(output.hands, PerSide { left: None, right: None });
        assert_eq!(output.gesture, Gesture::None);
    }
}
