//! Channel-based worker threads that run the detectors over a live frame
//! stream. Each worker keeps only the newest pending frame, so a slow
//! consumer sees fresh results instead of a growing backlog.

use std::collections::HashMap;
use std::thread;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender, bounded};

use crate::postures::{BodyPosturesConfig, BodyPosturesDetector};
use crate::proximity::{HandsProximityConfig, HandsProximityDetector};
use crate::types::{Frame, HandsProximity, Posture};

#[derive(Clone, Debug)]
pub struct PostureReport {
    pub timestamp: Instant,
    pub postures: HashMap<u32, Vec<Posture>>,
}

#[derive(Clone, Debug)]
pub struct ProximityReport {
    pub timestamp: Instant,
    pub relations: HashMap<(u32, u32), Vec<HandsProximity>>,
}

/// Spawns a posture worker over `frame_rx`. The worker exits when every
/// frame sender is dropped.
pub fn start_postures_worker(
    config: BodyPosturesConfig,
    frame_rx: Receiver<Frame>,
) -> Receiver<PostureReport> {
    let (report_tx, report_rx) = bounded(1);
    thread::spawn(move || {
        let detector = BodyPosturesDetector::new(config);
        while let Some(frame) = recv_latest(&frame_rx) {
            let postures = detector.classify(&frame);
            if postures.is_empty() {
                continue;
            }
            let report = PostureReport {
                timestamp: frame.timestamp,
                postures,
            };
            if !post(&report_tx, report) {
                return;
            }
        }
    });
    report_rx
}

/// Spawns a hand-proximity worker over `frame_rx`. When the configuration
/// enables candidate pairs, `pair_rx` supplies the id pairs to check and
/// the worker holds on to the most recent list; frames arriving before
/// any candidate list are skipped.
pub fn start_proximity_worker(
    config: HandsProximityConfig,
    frame_rx: Receiver<Frame>,
    pair_rx: Option<Receiver<Vec<(u32, u32)>>>,
) -> Receiver<ProximityReport> {
    if config.pair_candidates_enabled && pair_rx.is_none() {
        log::warn!("candidate pairs enabled but no pair channel given, checking all body pairs");
    }

    let (report_tx, report_rx) = bounded(1);
    thread::spawn(move || {
        let detector = HandsProximityDetector::new(config);
        let pair_rx = pair_rx.filter(|_| config.pair_candidates_enabled);
        let mut candidates: Option<Vec<(u32, u32)>> = None;

        while let Some(frame) = recv_latest(&frame_rx) {
            if let Some(rx) = &pair_rx {
                while let Ok(newer) = rx.try_recv() {
                    candidates = Some(newer);
                }
            }

            let relations = match (&pair_rx, &candidates) {
                (Some(_), Some(pairs)) => detector.classify_pairs(&frame, pairs),
                (Some(_), None) => continue,
                (None, _) => detector.classify(&frame),
            };
            if relations.is_empty() {
                continue;
            }
            let report = ProximityReport {
                timestamp: frame.timestamp,
                relations,
            };
            if !post(&report_tx, report) {
                return;
            }
        }
    });
    report_rx
}

/// Blocks for the next value, then drains anything newer already queued.
fn recv_latest<T>(rx: &Receiver<T>) -> Option<T> {
    let mut value = rx.recv().ok()?;
    while let Ok(newer) = rx.try_recv() {
        value = newer;
    }
    Some(value)
}

/// False once the report receiver is gone; a full channel just drops the
/// report, matching the latest-message delivery the frame side uses.
fn post<T>(tx: &Sender<T>, report: T) -> bool {
    match tx.try_send(report) {
        Ok(()) => true,
        Err(err) if err.is_disconnected() => false,
        Err(_) => {
            log::debug!("report dropped, consumer lagging");
            true
        }
    }
}
