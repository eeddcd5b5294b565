use anyhow::Result;
use crossbeam_channel::bounded;
use skeleton_postures::{
    Body, ConfidenceLevel, Frame, HandsProximityConfig, Joint, JointId, Point3,
    start_proximity_worker,
};
use std::time::Duration;

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

fn main() -> Result<()> {
    env_logger::init();

    let (frame_tx, frame_rx) = bounded(1);
    let report_rx = start_proximity_worker(HandsProximityConfig::default(), frame_rx, None);

    // Body 1 clasps its own hands; body 2 reaches over to body 1's right
    // hand with its left.
    let frame = Frame::new(vec![
        hands_at(1, (0.00, 1.00, 2.0), (0.06, 1.00, 2.0)),
        hands_at(2, (0.10, 1.02, 2.0), (0.80, 1.00, 2.0)),
    ]);
    frame_tx.send(frame)?;

    let report = report_rx.recv_timeout(Duration::from_secs(2))?;
    let mut pairs: Vec<_> = report.relations.keys().copied().collect();
    pairs.sort_unstable();

    for (id1, id2) in pairs {
        for relation in &report.relations[&(id1, id2)] {
            println!("({id1}, {id2}) - {}", relation.label());
        }
    }

    Ok(())
}
