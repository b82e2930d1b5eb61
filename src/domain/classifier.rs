// Gesture classification from a single hand's landmarks.

use super::gesture::Gesture;
use super::landmarks::{HandLandmark, LandmarkSet};

/// Open/closed reading for each finger of one hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerStates {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    /// Open fingers among index, middle, ring and pinky.
    pub fn open_count(&self) -> usize {
        [self.index, self.middle, self.ring, self.pinky]
            .into_iter()
            .filter(|open| *open)
            .count()
    }
}

/// Reads each finger as open or closed.
///
/// Non-thumb fingers are open when the tip sits above the second joint (smaller y).
/// The thumb extends sideways, so it is read on the x axis against its MCP joint.
pub fn finger_states(landmarks: &LandmarkSet) -> FingerStates {
    let extended = |tip: HandLandmark, joint: HandLandmark| {
        landmarks.point(tip).y < landmarks.point(joint).y
    };

    FingerStates {
        thumb: landmarks.point(HandLandmark::ThumbTip).x
            < landmarks.point(HandLandmark::ThumbMcp).x,
        index: extended(HandLandmark::IndexTip, HandLandmark::IndexPip),
        middle: extended(HandLandmark::MiddleTip, HandLandmark::MiddlePip),
        ring: extended(HandLandmark::RingTip, HandLandmark::RingPip),
        pinky: extended(HandLandmark::PinkyTip, HandLandmark::PinkyPip),
    }
}

/// Maps a landmark set to a gesture label.
///
/// The thumb only matters for Scissors; Rock and Paper ignore it.
pub fn classify(landmarks: &LandmarkSet) -> Gesture {
    classify_fingers(finger_states(landmarks))
}

pub fn classify_fingers(fingers: FingerStates) -> Gesture {
    match fingers.open_count() {
        0 => Gesture::Rock,
        4 => Gesture::Paper,
        2 if fingers.index && fingers.middle && !fingers.thumb => Gesture::Scissors,
        _ => Gesture::Unknown,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::landmarks::{HandLandmark, LANDMARK_COUNT, LandmarkSet, Point};

    /// Builds a hand with the given fingers extended.
    ///
    /// Extended fingers put the tip above the PIP joint; curled fingers fold it below.
    /// An open thumb points its tip toward smaller x than its MCP joint.
    pub(crate) fn hand(thumb: bool, index: bool, middle: bool, ring: bool, pinky: bool) -> LandmarkSet {
        let mut points = [Point::new(0.5, 0.8); LANDMARK_COUNT];

        points[HandLandmark::ThumbMcp.index()] = Point::new(0.40, 0.70);
        points[HandLandmark::ThumbTip.index()] = if thumb {
            Point::new(0.30, 0.65)
        } else {
            Point::new(0.48, 0.65)
        };

        let fingers = [
            (HandLandmark::IndexPip, HandLandmark::IndexTip, 0.45, index),
            (HandLandmark::MiddlePip, HandLandmark::MiddleTip, 0.50, middle),
            (HandLandmark::RingPip, HandLandmark::RingTip, 0.55, ring),
            (HandLandmark::PinkyPip, HandLandmark::PinkyTip, 0.60, pinky),
        ];
        for (pip, tip, x, open) in fingers {
            points[pip.index()] = Point::new(x, 0.50);
            points[tip.index()] = Point::new(x, if open { 0.30 } else { 0.60 });
        }

        LandmarkSet::new(points)
    }
}
