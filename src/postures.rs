//! Per-body posture classification: arms-crossed, pointing, sitting and
//! standing, each an independent confidence-gated geometric check.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::confidence::confident_origin;
use crate::geometry::Line3;
use crate::types::{Body, ConfidenceLevel, Frame, JointId, Posture};

#[derive(Clone, Copy, Debug)]
pub struct BodyPosturesConfig {
    /// Every joint used by a check must be tracked strictly above this.
    pub minimum_confidence_level: ConfidenceLevel,
    /// Meters. Also serves as the coincidence tolerance in the
    /// arms-crossed test.
    pub minimum_distance_threshold: f32,
    /// Spine-to-thigh angle beyond which both legs count as bent.
    pub minimum_sitting_degrees: f32,
    /// Spine-to-leg angle below which both legs count as straight.
    pub maximum_standing_degrees: f32,
    /// Arm-to-forearm angle below which the arm counts as extended.
    pub maximum_pointing_degrees: f32,
}

impl Default for BodyPosturesConfig {
    fn default() -> Self {
        Self {
            minimum_confidence_level: ConfidenceLevel::Low,
            minimum_distance_threshold: 0.1,
            minimum_sitting_degrees: 45.0,
            maximum_standing_degrees: 20.0,
            maximum_pointing_degrees: 15.0,
        }
    }
}

/// Stateless classifier; every frame is judged on its own.
pub struct BodyPosturesDetector {
    config: BodyPosturesConfig,
}

impl BodyPosturesDetector {
    pub fn new(config: BodyPosturesConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BodyPosturesConfig {
        &self.config
    }

    /// Classifies every body in the frame. Bodies with no fired posture
    /// are left out of the result.
    pub fn classify(&self, frame: &Frame) -> HashMap<u32, Vec<Posture>> {
        frame
            .bodies
            .par_iter()
            .filter_map(|body| {
                let postures = self.classify_body(body);
                if postures.is_empty() {
                    None
                } else {
                    Some((body.tracking_id, postures))
                }
            })
            .collect()
    }

    fn classify_body(&self, body: &Body) -> Vec<Posture> {
        let mut postures = Vec::new();

        if self.check_arms_crossed(body) {
            postures.push(Posture::ArmsCrossed);
        }
        if self.check_pointing(body, JointId::WristLeft, JointId::ElbowLeft, JointId::ShoulderLeft)
        {
            postures.push(Posture::PointingLeft);
        }
        if self.check_pointing(
            body,
            JointId::WristRight,
            JointId::ElbowRight,
            JointId::ShoulderRight,
        ) {
            postures.push(Posture::PointingRight);
        }

        // Sitting and standing both measure against the spine; without a
        // confident spine they are skipped, keeping any arm results.
        let Some(spine) = self.limb_line(body, JointId::Pelvis, JointId::Neck) else {
            return postures;
        };

        if self.check_sitting(body, &spine) {
            postures.push(Posture::Sitting);
        }
        if self.check_standing(body, &spine) {
            postures.push(Posture::Standing);
        }

        postures
    }

    /// Line from one confident joint origin to another. `None` when either
    /// joint is missing, under-tracked, or the two origins coincide.
    fn limb_line(&self, body: &Body, from: JointId, to: JointId) -> Option<Line3> {
        let minimum = self.config.minimum_confidence_level;
        let start = confident_origin(body, from, minimum)?;
        let end = confident_origin(body, to, minimum)?;
        Line3::between(start, end)
    }

    /// The forearms cross when the closest approach of their infinite
    /// lines falls inside both segments: the unconstrained and the
    /// segment-clamped closest points must coincide within tolerance.
    fn check_arms_crossed(&self, body: &Body) -> bool {
        let (Some(left), Some(right)) = (
            self.limb_line(body, JointId::WristLeft, JointId::ElbowLeft),
            self.limb_line(body, JointId::WristRight, JointId::ElbowRight),
        ) else {
            return false;
        };

        let (on_line_left, on_line_right) = left.closest_points(&right, false);
        let (on_seg_left, on_seg_right) = left.closest_points(&right, true);

        let tolerance = self.config.minimum_distance_threshold;
        on_line_left.coincides_with(on_seg_left, tolerance)
            && on_line_right.coincides_with(on_seg_right, tolerance)
    }

    /// A small angle between the full arm and the forearm means the arm
    /// is extended straight rather than bent.
    fn check_pointing(&self, body: &Body, wrist: JointId, elbow: JointId, shoulder: JointId) -> bool {
        let (Some(forearm), Some(arm)) = (
            self.limb_line(body, wrist, elbow),
            self.limb_line(body, wrist, shoulder),
        ) else {
            return false;
        };
        arm.angle_to_degrees(&forearm) < self.config.maximum_pointing_degrees
    }

    /// Both thighs must be bent away from the spine; a one-legged partial
    /// bend does not count.
    fn check_sitting(&self, body: &Body, spine: &Line3) -> bool {
        let (Some(left), Some(right)) = (
            self.limb_line(body, JointId::KneeLeft, JointId::HipLeft),
            self.limb_line(body, JointId::KneeRight, JointId::HipRight),
        ) else {
            return false;
        };
        spine.angle_to_degrees(&left) > self.config.minimum_sitting_degrees
            && spine.angle_to_degrees(&right) > self.config.minimum_sitting_degrees
    }

    /// Both legs must line up with the spine.
    fn check_standing(&self, body: &Body, spine: &Line3) -> bool {
        let (Some(left), Some(right)) = (
            self.limb_line(body, JointId::AnkleLeft, JointId::HipLeft),
            self.limb_line(body, JointId::AnkleRight, JointId::HipRight),
        ) else {
            return false;
        };
        spine.angle_to_degrees(&left) < self.config.maximum_standing_degrees
            && spine.angle_to_degrees(&right) < self.config.maximum_standing_degrees
    }
}
