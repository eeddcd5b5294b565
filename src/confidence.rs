//! Confidence gating: a geometric check only runs when every joint it
//! depends on is tracked strictly above the configured minimum.

use crate::geometry::Point3;
use crate::types::{Body, ConfidenceLevel, JointId};

/// True only if every level is strictly greater than `minimum`.
pub fn meets_minimum(levels: &[ConfidenceLevel], minimum: ConfidenceLevel) -> bool {
    levels.iter().all(|level| *level > minimum)
}

/// Origin of the joint when it is present and tracked above `minimum`.
/// A missing joint counts as untracked, never as an error.
pub fn confident_origin(body: &Body, id: JointId, minimum: ConfidenceLevel) -> Option<Point3> {
    let joint = body.joint(id)?;
    if joint.confidence > minimum {
        Some(joint.pose.origin)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Joint;

    #[test]
    fn gate_requires_strictly_greater_levels() {
        let minimum = ConfidenceLevel::Low;
        assert!(meets_minimum(
            &[ConfidenceLevel::Medium, ConfidenceLevel::High],
            minimum
        ));
        assert!(!meets_minimum(
            &[ConfidenceLevel::Medium, ConfidenceLevel::Low],
            minimum
        ));
        assert!(!meets_minimum(&[ConfidenceLevel::None], minimum));
    }

    #[test]
    fn gate_accepts_empty_joint_list() {
        assert!(meets_minimum(&[], ConfidenceLevel::High));
    }

    #[test]
    fn missing_joint_yields_no_origin() {
        let body = Body::new(1);
        assert!(confident_origin(&body, JointId::Neck, ConfidenceLevel::Low).is_none());
    }

    #[test]
    fn tracked_joint_yields_origin() {
        let origin = Point3::new(0.5, 1.0, 2.0);
        let body = Body::new(1).with_joint(JointId::Neck, Joint::at(origin, ConfidenceLevel::High));
        assert_eq!(
            confident_origin(&body, JointId::Neck, ConfidenceLevel::Low),
            Some(origin)
        );
        assert!(confident_origin(&body, JointId::Neck, ConfidenceLevel::High).is_none());
    }
}
