//! Pairwise hand-proximity classification between tracked bodies,
//! including a body's own two hands.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::confidence::confident_origin;
use crate::geometry::Point3;
use crate::types::{Body, ConfidenceLevel, Frame, HandsProximity, JointId};

#[derive(Clone, Copy, Debug)]
pub struct HandsProximityConfig {
    /// Both hands of both bodies must be tracked strictly above this.
    pub minimum_confidence_level: ConfidenceLevel,
    /// Meters. Two hands at or under this distance are proximate.
    pub minimum_distance_threshold: f32,
    /// When set, the caller supplies candidate id pairs instead of the
    /// full body-by-body product; the worker layer keys off this.
    pub pair_candidates_enabled: bool,
}

impl Default for HandsProximityConfig {
    fn default() -> Self {
        Self {
            minimum_confidence_level: ConfidenceLevel::Low,
            minimum_distance_threshold: 0.1,
            pair_candidates_enabled: false,
        }
    }
}

/// Stateless classifier over ordered body pairs.
pub struct HandsProximityDetector {
    config: HandsProximityConfig,
}

impl HandsProximityDetector {
    pub fn new(config: HandsProximityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HandsProximityConfig {
        &self.config
    }

    /// Classifies the full ordered product of the frame's bodies,
    /// self-pairs included. Pairs with no fired relation are left out.
    pub fn classify(&self, frame: &Frame) -> HashMap<(u32, u32), Vec<HandsProximity>> {
        let pairs: Vec<(&Body, &Body)> = frame
            .bodies
            .iter()
            .flat_map(|body1| frame.bodies.iter().map(move |body2| (body1, body2)))
            .collect();
        self.classify_body_pairs(&pairs)
    }

    /// Classifies only the supplied candidate id pairs. Pairs naming an
    /// id absent from the frame are skipped silently.
    pub fn classify_pairs(
        &self,
        frame: &Frame,
        candidates: &[(u32, u32)],
    ) -> HashMap<(u32, u32), Vec<HandsProximity>> {
        let by_id: HashMap<u32, &Body> = frame
            .bodies
            .iter()
            .map(|body| (body.tracking_id, body))
            .collect();
        let pairs: Vec<(&Body, &Body)> = candidates
            .iter()
            .filter_map(|(id1, id2)| Some((*by_id.get(id1)?, *by_id.get(id2)?)))
            .collect();
        self.classify_body_pairs(&pairs)
    }

    fn classify_body_pairs(
        &self,
        pairs: &[(&Body, &Body)],
    ) -> HashMap<(u32, u32), Vec<HandsProximity>> {
        pairs
            .par_iter()
            .filter_map(|(body1, body2)| {
                let relations = self.relations_between(body1, body2)?;
                if relations.is_empty() {
                    None
                } else {
                    Some(((body1.tracking_id, body2.tracking_id), relations))
                }
            })
            .collect()
    }

    /// `None` when either body fails the hand gate; a half-gated body
    /// contributes no labels at all.
    fn relations_between(&self, body1: &Body, body2: &Body) -> Option<Vec<HandsProximity>> {
        let (left1, right1) = self.hands(body1)?;
        let (left2, right2) = self.hands(body2)?;

        let mut relations = Vec::new();
        if self.within_threshold(left1, right2) {
            relations.push(HandsProximity::LeftRight);
        }

        // Same-side comparisons on a self-pair would trivially match a
        // hand against itself, so they only run across distinct bodies.
        if body1.tracking_id != body2.tracking_id {
            if self.within_threshold(left1, left2) {
                relations.push(HandsProximity::LeftLeft);
            }
            if self.within_threshold(right1, left2) {
                relations.push(HandsProximity::RightLeft);
            }
            if self.within_threshold(right1, right2) {
                relations.push(HandsProximity::RightRight);
            }
        }

        Some(relations)
    }

    fn hands(&self, body: &Body) -> Option<(Point3, Point3)> {
        let minimum = self.config.minimum_confidence_level;
        let left = confident_origin(body, JointId::HandLeft, minimum)?;
        let right = confident_origin(body, JointId::HandRight, minimum)?;
        Some((left, right))
    }

    fn within_threshold(&self, a: Point3, b: Point3) -> bool {
        a.distance_to(b) <= self.config.minimum_distance_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Joint;

    fn hands_at(id: u32, left: (f32, f32, f32), right: (f32, f32, f32)) -> Body {
        Body::new(id)
            .with_joint(
                JointId::HandLeft,
                Joint::at(Point3::new(left.0, left.1, left.2), ConfidenceLevel::High),
            )
            .with_joint(
                JointId::HandRight,
                Joint::at(
                    Point3::new(right.0, right.1, right.2),
                    ConfidenceLevel::High,
                ),
            )
    }

    fn detector() -> HandsProximityDetector {
        HandsProximityDetector::new(HandsProximityConfig::default())
    }

    #[test]
    fn empty_frame_classifies_to_empty_map() {
        assert!(detector().classify(&Frame::new(Vec::new())).is_empty());
    }

    #[test]
    fn clasped_hands_on_one_body_fire_only_left_right() {
        let body = hands_at(1, (0.0, 1.0, 2.0), (0.05, 1.0, 2.0));
        let result = detector().classify(&Frame::new(vec![body]));
        assert_eq!(result.get(&(1, 1)), Some(&vec![HandsProximity::LeftRight]));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn separated_hands_on_one_body_fire_nothing() {
        let body = hands_at(1, (0.0, 1.0, 2.0), (0.5, 1.0, 2.0));
        assert!(detector().classify(&Frame::new(vec![body])).is_empty());
    }

    #[test]
    fn directional_labels_are_not_symmetric() {
        // Only A's left hand touches B's right hand.
        let a = hands_at(1, (0.0, 0.0, 0.0), (5.0, 0.0, 0.0));
        let b = hands_at(2, (10.0, 0.0, 0.0), (0.05, 0.0, 0.0));
        let result = detector().classify(&Frame::new(vec![a, b]));

        assert_eq!(result.get(&(1, 2)), Some(&vec![HandsProximity::LeftRight]));
        assert_eq!(result.get(&(2, 1)), Some(&vec![HandsProximity::RightLeft]));
    }

    #[test]
    fn all_four_relations_fire_when_all_hands_meet() {
        let a = hands_at(1, (0.0, 0.0, 0.0), (0.05, 0.0, 0.0));
        let b = hands_at(2, (0.0, 0.05, 0.0), (0.05, 0.05, 0.0));
        let result = detector().classify(&Frame::new(vec![a, b]));
        assert_eq!(
            result.get(&(1, 2)),
            Some(&vec![
                HandsProximity::LeftRight,
                HandsProximity::LeftLeft,
                HandsProximity::RightLeft,
                HandsProximity::RightRight,
            ])
        );
    }

    #[test]
    fn half_gated_body_contributes_no_labels() {
        let a = hands_at(1, (0.0, 0.0, 0.0), (0.05, 0.0, 0.0));
        let mut b = hands_at(2, (0.0, 0.05, 0.0), (0.05, 0.05, 0.0));
        b.joints.get_mut(&JointId::HandRight).unwrap().confidence = ConfidenceLevel::Low;

        let result = detector().classify(&Frame::new(vec![a, b]));
        // Every pair involving body 2 is gone, including close left hands.
        assert_eq!(result.len(), 1);
        assert_eq!(result.get(&(1, 1)), Some(&vec![HandsProximity::LeftRight]));
    }

    #[test]
    fn candidate_pairs_restrict_the_result_keys() {
        let spot = (0.0, 0.0, 0.0);
        let frame = Frame::new(vec![
            hands_at(1, spot, spot),
            hands_at(2, spot, spot),
            hands_at(3, spot, spot),
        ]);
        let result = detector().classify_pairs(&frame, &[(1, 2)]);
        assert_eq!(result.len(), 1);
        assert!(result.contains_key(&(1, 2)));
    }

    #[test]
    fn candidate_pairs_with_absent_ids_are_skipped() {
        let spot = (0.0, 0.0, 0.0);
        let frame = Frame::new(vec![hands_at(1, spot, spot)]);
        let result = detector().classify_pairs(&frame, &[(1, 4), (4, 1), (4, 4)]);
        assert!(result.is_empty());
    }

    #[test]
    fn no_pair_ever_maps_to_an_empty_relation_list() {
        let frame = Frame::new(vec![
            hands_at(1, (0.0, 0.0, 0.0), (0.05, 0.0, 0.0)),
            hands_at(2, (3.0, 0.0, 0.0), (4.0, 0.0, 0.0)),
        ]);
        let result = detector().classify(&frame);
        for relations in result.values() {
            assert!(!relations.is_empty());
        }
    }
}
