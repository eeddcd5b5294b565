use anyhow::Result;
use skeleton_postures::{
    Body, BodyPosturesConfig, BodyPosturesDetector, ConfidenceLevel, Frame, Joint, JointId, Point3,
};

fn joint(x: f32, y: f32, z: f32) -> Joint {
    Joint::at(Point3::new(x, y, z), ConfidenceLevel::High)
}

/// Upright body with straight legs and the left arm extended sideways.
fn standing_pointer(id: u32) -> Body {
    Body::new(id)
        .with_joint(JointId::Pelvis, joint(0.0, 1.0, 2.0))
        .with_joint(JointId::Neck, joint(0.0, 1.6, 2.0))
        .with_joint(JointId::HipLeft, joint(-0.1, 1.0, 2.0))
        .with_joint(JointId::HipRight, joint(0.1, 1.0, 2.0))
        .with_joint(JointId::AnkleLeft, joint(-0.1, 0.1, 2.0))
        .with_joint(JointId::AnkleRight, joint(0.1, 0.1, 2.0))
        .with_joint(JointId::ShoulderLeft, joint(-0.2, 1.4, 2.0))
        .with_joint(JointId::ElbowLeft, joint(-0.5, 1.4, 2.0))
        .with_joint(JointId::WristLeft, joint(-0.8, 1.4, 2.0))
}

/// Seated body: upright spine, both thighs pitched forward.
fn seated(id: u32) -> Body {
    Body::new(id)
        .with_joint(JointId::Pelvis, joint(1.0, 0.6, 2.0))
        .with_joint(JointId::Neck, joint(1.0, 1.2, 2.0))
        .with_joint(JointId::HipLeft, joint(0.9, 0.6, 2.0))
        .with_joint(JointId::HipRight, joint(1.1, 0.6, 2.0))
        .with_joint(JointId::KneeLeft, joint(0.9, 0.55, 1.5))
        .with_joint(JointId::KneeRight, joint(1.1, 0.55, 1.5))
}

/// Forearms crossing in front of the chest.
fn arms_folded(id: u32) -> Body {
    Body::new(id)
        .with_joint(JointId::WristLeft, joint(1.8, 1.0, 2.0))
        .with_joint(JointId::ElbowLeft, joint(2.2, 1.2, 2.0))
        .with_joint(JointId::WristRight, joint(2.2, 1.0, 2.0))
        .with_joint(JointId::ElbowRight, joint(1.8, 1.2, 2.0))
}

fn main() -> Result<()> {
    env_logger::init();

    let frame = Frame::new(vec![standing_pointer(1), seated(2), arms_folded(3)]);
    let detector = BodyPosturesDetector::new(BodyPosturesConfig::default());

    let report = detector.classify(&frame);
    let mut ids: Vec<_> = report.keys().copied().collect();
    ids.sort_unstable();

    for id in ids {
        for posture in &report[&id] {
            println!("{id} - {}", posture.label());
        }
    }

    Ok(())
}
