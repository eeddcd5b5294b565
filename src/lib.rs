pub mod confidence;
pub mod geometry;
pub mod pipeline;
pub mod postures;
pub mod proximity;
pub mod types;

// Re-exports for convenience
pub use geometry::{Line3, Point3};
pub use pipeline::{PostureReport, ProximityReport, start_postures_worker, start_proximity_worker};
pub use postures::{BodyPosturesConfig, BodyPosturesDetector};
pub use proximity::{HandsProximityConfig, HandsProximityDetector};
pub use types::{Body, ConfidenceLevel, Frame, HandsProximity, Joint, JointId, Pose, Posture};
