//! Runs the frame pipeline on a scripted detection sequence and prints what a renderer would
//! draw. Stands in for a host that owns a camera, a pose estimation model and a canvas.

use handwave::draw::{self, LEFT_HAND_COLOR, RIGHT_HAND_COLOR};
use handwave::frame::FrameProcessor;
use handwave::landmark::{LandmarkIdx, Position, LANDMARK_COUNT};
use handwave::resolution::Resolution;
use handwave::side::Side;

fn synthetic_hand(center_x: f32, thumb_y: f32, index_y: f32, middle_y: f32) -> Vec<Position> {
    let mut positions = vec![[center_x, 120.0, 0.0]; LANDMARK_COUNT];
    positions[LandmarkIdx::ThumbTip as usize] = [center_x, thumb_y, 0.0];
    positions[LandmarkIdx::IndexFingerTip as usize] = [center_x, index_y, 0.0];
    positions[LandmarkIdx::MiddleFingerTip as usize] = [center_x, middle_y, 0.0];
    positions
}

fn main() -> anyhow::Result<()> {
    handwave::init_logger!();

    let video = Resolution::new(320, 240);
    let canvas = Resolution::new(640, 480);

    let frames = [
        vec![synthetic_hand(60.0, 80.0, 20.0, 30.0)], // high five, left of midline
        vec![],                                       // dropout, fallback keeps the hand visible
        vec![synthetic_hand(250.0, 10.0, 50.0, 60.0)], // peace, right of midline
    ];

    let mut processor = FrameProcessor::new();
    for (number, detections) in frames.iter().enumerate() {
        let output = processor.advance(detections, video)?;
        println!("frame {number}: gesture {:?}", output.gesture);
        for (side, color) in [(Side::Left, LEFT_HAND_COLOR), (Side::Right, RIGHT_HAND_COLOR)] {
            if let Some(hand) = &output.hands[side] {
                let count = draw::markers(hand, video, canvas, color).count();
                println!(
                    "  {side:?}: {count} markers around canvas x = {:.0}",
                    hand.centroid_x() * canvas.width() as f32 / video.width() as f32,
                );
            }
        }
    }

    Ok(())
}
