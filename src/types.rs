use std::collections::HashMap;
use std::time::Instant;

use crate::geometry::Point3;

/// Tracker confidence for a single joint, ordered from untracked to fully
/// tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceLevel {
    None,
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::None => "none",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        }
    }
}

/// The skeletal landmarks the classifiers consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JointId {
    Pelvis,
    Neck,
    Head,
    ShoulderLeft,
    ElbowLeft,
    WristLeft,
    HandLeft,
    HipLeft,
    KneeLeft,
    AnkleLeft,
    ShoulderRight,
    ElbowRight,
    WristRight,
    HandRight,
    HipRight,
    KneeRight,
    AnkleRight,
}

/// Joint pose as reported by the tracker. Classification only reads the
/// origin; the orientation quaternion is carried through untouched.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    pub origin: Point3,
    pub orientation: [f32; 4],
}

#[derive(Clone, Copy, Debug)]
pub struct Joint {
    pub pose: Pose,
    pub confidence: ConfidenceLevel,
}

impl Joint {
    /// Joint at `origin` with identity orientation.
    pub fn at(origin: Point3, confidence: ConfidenceLevel) -> Self {
        Self {
            pose: Pose {
                origin,
                orientation: [0.0, 0.0, 0.0, 1.0],
            },
            confidence,
        }
    }
}

/// One tracked person within a frame. The tracking id is stable across
/// frames for the same physical person.
#[derive(Clone, Debug)]
pub struct Body {
    pub tracking_id: u32,
    pub joints: HashMap<JointId, Joint>,
}

impl Body {
    pub fn new(tracking_id: u32) -> Self {
        Self {
            tracking_id,
            joints: HashMap::new(),
        }
    }

    pub fn with_joint(mut self, id: JointId, joint: Joint) -> Self {
        self.joints.insert(id, joint);
        self
    }

    /// Trackers may omit occluded joints, so lookups stay optional.
    pub fn joint(&self, id: JointId) -> Option<&Joint> {
        self.joints.get(&id)
    }
}

/// One timestamped snapshot of every tracked body.
#[derive(Clone, Debug)]
pub struct Frame {
    pub timestamp: Instant,
    pub bodies: Vec<Body>,
}

impl Frame {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            timestamp: Instant::now(),
            bodies,
        }
    }
}

/// Semantic body-pose labels. Several may fire at once for one body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Posture {
    Standing,
    Sitting,
    PointingLeft,
    PointingRight,
    ArmsCrossed,
}

impl Posture {
    pub fn label(&self) -> &'static str {
        match self {
            Posture::Standing => "standing",
            Posture::Sitting => "sitting",
            Posture::PointingLeft => "pointing-left",
            Posture::PointingRight => "pointing-right",
            Posture::ArmsCrossed => "arms-crossed",
        }
    }
}

/// Which hand of the first body is close to which hand of the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandsProximity {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

impl HandsProximity {
    pub fn label(&self) -> &'static str {
        match self {
            HandsProximity::LeftLeft => "left-left",
            HandsProximity::LeftRight => "left-right",
            HandsProximity::RightLeft => "right-left",
            HandsProximity::RightRight => "right-right",
        }
    }
}
